#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::wildcard_imports
)]

mod core;
mod error;
mod primitives;
mod ray_intersection;
mod utils;

pub use crate::core::{
    Color, Lambertian, Material, Reflective, Scatter, Scatterer, Transparent, EPSILON,
};
pub use crate::error::Error;
pub use crate::primitives::{Sphere, SphereDescription};
pub use crate::ray_intersection::{Intersectable, Intersection, Ray};
pub use crate::utils::{path_rng, quadratic, random_unit_vector, reflect, refract};
