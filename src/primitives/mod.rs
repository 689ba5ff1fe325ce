mod sphere;

pub use sphere::*;
