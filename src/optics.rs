//! Specular geometry and Fresnel terms in the local shading frame,
//! where the normal is the z-axis.

use crate::aliases::{Spectrum, Vec3};

/// Mirror reflection about the local normal.
pub fn reflect(dir: &Vec3) -> Vec3 {
    Vec3::new(-dir.x, -dir.y, dir.z)
}

/// Reflection of `dir` about an arbitrary unit axis `n` (e.g. a half vector).
/// * `n` - must be normalized
pub fn reflect_about(dir: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    2.0 * dir.dot(n) * n - dir
}

/// Bends `out_dir` through the interface following Snell's law.
///
/// `eta` is the ratio such that `sin(transmitted) = eta * sin(out_dir)`.
/// The result lies in the hemisphere opposite to `out_dir`.
/// Returns `None` on total internal reflection.
pub fn refract(out_dir: &Vec3, eta: f32) -> Option<Vec3> {
    let cos_out = out_dir.z;
    let d = 1.0 - eta * eta * (1.0 - cos_out * cos_out);
    if d < 0.0 {
        return None;
    }
    let cos_t = d.sqrt().copysign(-cos_out);
    Some(Vec3::new(-eta * out_dir.x, -eta * out_dir.y, cos_t).normalize())
}

/// Fraction of light reflected at a dielectric interface (unpolarized).
///
/// * `cos_out` - cosine between the direction and the normal.
/// * `eta` - same ratio as in `refract`.
pub fn fresnel_dielectric(cos_out: f32, eta: f32) -> f32 {
    let cos_i = cos_out.abs().min(1.0);
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i).max(0.0);
    if sin2_t >= 1.0 {
        return 1.0;
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    let r_parl = (cos_i - eta * cos_t) / (cos_i + eta * cos_t);
    let r_perp = (eta * cos_i - cos_t) / (eta * cos_i + cos_t);
    0.5 * (r_parl * r_parl + r_perp * r_perp)
}

/// Schlick's approximation with a colored reflectance at normal incidence.
pub fn fresnel_schlick(f0: &Spectrum, cos_theta: f32) -> Spectrum {
    let one_minus = (1.0 - cos_theta.max(0.0).min(1.0)).powi(5);
    f0 + (Spectrum::repeat(1.0) - f0) * one_minus
}

/// The index ratio seen by a path leaving along `out_dir` through a medium
/// of relative index `ior`.
pub fn relative_eta(out_dir: &Vec3, ior: f32) -> f32 {
    if out_dir.z > 0.0 {
        1.0 / ior
    } else {
        ior
    }
}
