mod rays;
mod sampling;

pub use rays::{reflect, refract};
pub use sampling::{path_rng, random_unit_vector};

/// Real roots of `a·t² + b·t + c = 0`, smaller root first for `a > 0`.
///
/// A zero discriminant (tangent ray) yields no roots at all.
pub fn quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let r0 = (-b - sqrt_discriminant) / (2.0 * a);
    let r1 = (-b + sqrt_discriminant) / (2.0 * a);
    Some((r0, r1))
}
