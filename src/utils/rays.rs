use nalgebra::Vector3;

/// Mirror `incident` about `normal`. Neither input nor output is normalized here.
pub fn reflect(incident: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Snell refraction of `incident` through a surface facing `normal`, where `eta`
/// is the ratio of the incident index over the transmitted index.
///
/// The caller picks the side: `normal` must face against `incident`. Returns
/// `None` on total internal reflection. `incident` is expected to be unit length;
/// a longer vector skews the computed angle.
pub fn refract(incident: &Vector3<f64>, normal: &Vector3<f64>, eta: f64) -> Option<Vector3<f64>> {
    let cos_i = -incident.dot(normal);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);

    if k < 0.0 {
        None
    } else {
        Some(incident * eta + normal * (eta * cos_i - k.sqrt()))
    }
}
