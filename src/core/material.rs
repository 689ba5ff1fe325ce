use super::{Color, EPSILON};
use crate::error::Error;
use crate::ray_intersection::{Intersection, Ray};
use crate::utils::{random_unit_vector, reflect, refract};
use log::{trace, warn};
use num_traits::identities::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of scattering a ray at a surface hit.
///
/// `success == false` means the path should be terminated: the returned ray is
/// still filled in but carries no light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scatter {
    pub attenuation: Color,
    pub ray: Ray,
    pub success: bool,
}

pub trait Scatterer {
    fn scatter<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        intersection: &Intersection,
        rng: &mut R,
    ) -> Scatter;
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lambertian {
    pub albedo: Color,
}

impl Default for Lambertian {
    fn default() -> Self {
        Self {
            albedo: Color::zero(),
        }
    }
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Scatterer for Lambertian {
    fn scatter<R: Rng + ?Sized>(
        &self,
        _ray: &Ray,
        intersection: &Intersection,
        rng: &mut R,
    ) -> Scatter {
        let normal = intersection.normal.into_inner();
        let direction = normal + random_unit_vector(rng);

        Scatter {
            attenuation: self.albedo,
            ray: Ray::new(intersection.hit_point + normal * EPSILON, direction),
            success: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reflective {
    albedo: Color,
    fuzziness: f64,
}

impl Default for Reflective {
    fn default() -> Self {
        Self {
            albedo: Color::zero(),
            fuzziness: 0.0,
        }
    }
}

impl Reflective {
    pub fn new(albedo: Color, fuzziness: f64) -> Self {
        assert!(fuzziness >= 0.0, "fuzziness must not be negative");

        Self { albedo, fuzziness }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzziness(&self) -> f64 {
        self.fuzziness
    }
}

impl Scatterer for Reflective {
    fn scatter<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        intersection: &Intersection,
        rng: &mut R,
    ) -> Scatter {
        let normal = intersection.normal.into_inner();
        let reflected = reflect(&ray.direction.normalize(), &normal);
        let direction = reflected + random_unit_vector(rng) * self.fuzziness;

        let success = direction.dot(&normal) > 0.0;
        if !success {
            trace!("reflective scatter absorbed at {}", intersection.hit_point);
        }

        Scatter {
            attenuation: self.albedo,
            ray: Ray::new(intersection.hit_point + normal * EPSILON, direction),
            success,
        }
    }
}

/// Dielectric with no absorption.
///
/// `scatter` expects a unit length ray direction; the refraction angle is
/// computed from the raw direction and comes out wrong for longer vectors.
/// Deserialized values skip the constructor check, so run
/// [`Material::validate`] before scattering with them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Transparent {
    ior: f64,
}

impl Default for Transparent {
    fn default() -> Self {
        Self { ior: 1.0 }
    }
}

impl Transparent {
    pub fn new(ior: f64) -> Self {
        assert!(ior > 0.0, "refractive index must be positive");

        Self { ior }
    }

    pub fn ior(&self) -> f64 {
        self.ior
    }
}

impl Scatterer for Transparent {
    fn scatter<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        intersection: &Intersection,
        _rng: &mut R,
    ) -> Scatter {
        let attenuation = Color::repeat(1.0);
        let outward_normal = intersection.normal.into_inner();
        let reflected = reflect(&ray.direction, &outward_normal);

        // eta is incident index over transmitted index
        let (normal, eta) = if ray.direction.dot(&outward_normal) > 0.0 {
            (-outward_normal, self.ior)
        } else {
            (outward_normal, 1.0 / self.ior)
        };

        match refract(&ray.direction, &normal, eta) {
            Some(refracted) => Scatter {
                attenuation,
                ray: Ray::new(intersection.hit_point - normal * EPSILON, refracted),
                success: true,
            },
            None => {
                trace!("total internal reflection at {}", intersection.hit_point);

                Scatter {
                    attenuation,
                    ray: Ray::new(intersection.hit_point, reflected),
                    success: false,
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Material {
    Lambertian(Lambertian),
    Reflective(Reflective),
    Transparent(Transparent),
}

impl Default for Material {
    fn default() -> Self {
        Material::Lambertian(Lambertian::default())
    }
}

impl Material {
    /// Checks the parameters `Reflective::new` and `Transparent::new` assert.
    /// Needed for materials that come from a scene description.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Material::Lambertian(_) => Ok(()),
            Material::Reflective(material) => {
                if material.fuzziness < 0.0 || material.fuzziness.is_nan() {
                    return Err(Error::NegativeFuzziness(material.fuzziness));
                }

                Ok(())
            }
            Material::Transparent(material) => {
                if material.ior <= 0.0 || material.ior.is_nan() {
                    return Err(Error::NonPositiveRefractiveIndex(material.ior));
                }
                if material.ior < 1.0 {
                    warn!(
                        "transparent material with ior {} is less dense than vacuum",
                        material.ior
                    );
                }

                Ok(())
            }
        }
    }
}

impl Scatterer for Material {
    fn scatter<R: Rng + ?Sized>(
        &self,
        ray: &Ray,
        intersection: &Intersection,
        rng: &mut R,
    ) -> Scatter {
        match self {
            Material::Lambertian(material) => material.scatter(ray, intersection, rng),
            Material::Reflective(material) => material.scatter(ray, intersection, rng),
            Material::Transparent(material) => material.scatter(ray, intersection, rng),
        }
    }
}
