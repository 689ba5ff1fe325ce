use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

// Uniform on the unit sphere: uniform azimuth, uniform cosine of the polar angle
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    let theta = TAU * rng.gen::<f64>();
    let cos_phi = 2.0 * rng.gen::<f64>() - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();

    Vector3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Independent generator for one ray path.
///
/// `seed` keys the generator and `path_index` selects one of its 2^64 streams,
/// so distinct `(seed, path_index)` pairs never share a stream. The same pair
/// always yields the same sequence, whatever order or thread the paths are
/// traced on.
pub fn path_rng(seed: u64, path_index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(path_index);
    rng
}
