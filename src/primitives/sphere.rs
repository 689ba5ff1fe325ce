use crate::core::Material;
use crate::error::Error;
use crate::ray_intersection::{Intersectable, Intersection, Ray};
use crate::utils::quadratic;
use log::debug;
use nalgebra::{Point3, Unit};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereDescription {
    pub center: Point3<f64>,
    pub radius: f64,
    pub material: Arc<Material>,
}

impl Default for SphereDescription {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
            material: Arc::new(Material::default()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "SphereDescription")]
pub struct Sphere {
    center: Point3<f64>,
    radius: f64,
    material: Arc<Material>,
}

impl Default for Sphere {
    fn default() -> Self {
        let SphereDescription {
            center,
            radius,
            material,
        } = SphereDescription::default();

        Self::new(center, radius, material)
    }
}

impl TryFrom<SphereDescription> for Sphere {
    type Error = Error;

    fn try_from(description: SphereDescription) -> Result<Self, Self::Error> {
        let SphereDescription {
            center,
            radius,
            material,
        } = description;

        if radius <= 0.0 || radius.is_nan() {
            debug!("rejecting sphere at {} with radius {}", center, radius);
            return Err(Error::NonPositiveRadius(radius));
        }
        material.validate()?;

        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64, material: Arc<Material>) -> Self {
        assert!(radius > 0.0, "sphere radius must be positive");

        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Intersection> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let (t0, t1) = quadratic(a, b, c)?;
        let distance = [t0, t1].into_iter().find(|&t| t_min < t && t < t_max)?;

        let hit_point = ray.point_at(distance);
        // Always points away from the center, even for rays starting inside
        let normal = Unit::new_unchecked((hit_point - self.center) / self.radius);

        Some(Intersection::new(
            distance,
            hit_point,
            normal,
            self.material.as_ref(),
        ))
    }
}
