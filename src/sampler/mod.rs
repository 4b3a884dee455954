pub mod cosine_power;
pub mod half_vector;
pub mod hemisphere;

use crate::aliases::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Probability distribution function on directions.
///
/// Implementations hold no mutable state: the random source is passed per
/// call, so one sampler can be shared by any number of threads.
pub trait DirectionSampler {
    /// Probability density (per solid angle) at a direction.
    /// dir is not required to be normalized
    fn density(&self, dir: &Vec3) -> f32;
    /// Generates a random unit direction following this pdf.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3;
}

/// Calculates a random point on a unit hemisphere (x^2+y^2+z^2=1, z>=0)
/// such that pdf(d)/sin(t) ~= cos(t) where t is angle between d and n=(0,0,1)
pub fn random_cosine_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r0 = rng.gen::<f32>();
    let rr0 = r0.sqrt();
    let r1 = rng.gen::<f32>();
    let angle = 2.0 * PI * r1;
    let z = (1.0 - r0).sqrt();
    let x = angle.cos() * rr0;
    let y = angle.sin() * rr0;
    Vec3::new(x, y, z)
}

/// Generate uniformly a random (normalized) direction vector in a cone
/// around n=(0,0,1). `cos_half_angle` of 0 gives the hemisphere, -1 the sphere.
pub fn random_in_cone<R: Rng + ?Sized>(cos_half_angle: f32, rng: &mut R) -> Vec3 {
    let r1 = rng.gen::<f32>();
    let r2 = rng.gen::<f32>();
    let z = 1.0 + r1 * (cos_half_angle - 1.0);
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r2;
    let x = phi.cos() * sine;
    let y = phi.sin() * sine;
    Vec3::new(x, y, z)
}

/// Random direction around n=(0,0,1) with pdf(d) = (e+1)/(2PI) * cos(t)^e.
pub fn random_cosine_power_direction<R: Rng + ?Sized>(exponent: f32, rng: &mut R) -> Vec3 {
    // (0, 1] keeps z off the horizon, where the density would vanish
    let r1 = 1.0 - rng.gen::<f32>();
    let r2 = rng.gen::<f32>();
    let z = r1.powf(1.0 / (exponent + 1.0));
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r2;
    Vec3::new(phi.cos() * sine, phi.sin() * sine, z)
}
