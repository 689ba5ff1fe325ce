use crate::core::Material;
use nalgebra::{Point3, Unit, Vector3};

pub trait Intersectable {
    /// Returns the nearest hit whose distance lies strictly inside `(t_min, t_max)`.
    fn intersect(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Intersection>;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

#[derive(Debug)]
pub struct Intersection<'a> {
    pub distance: f64,
    pub hit_point: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
    pub material: &'a Material,
}

impl<'a> Intersection<'a> {
    pub fn new(
        distance: f64,
        hit_point: Point3<f64>,
        normal: Unit<Vector3<f64>>,
        material: &'a Material,
    ) -> Self {
        Self {
            distance,
            hit_point,
            normal,
            material,
        }
    }
}
