use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{mc_weight, warn_if_gains_energy, ScatteringModel, COS_EPSILON};
use crate::bsdf_sample::BsdfSample;
use crate::sampler::hemisphere::UniformHemisphere;
use crate::sampler::DirectionSampler;
use rand::Rng;
use std::f32::consts::PI;

/// Ideal diffuse reflection, albedo / PI on both sides of the surface.
#[derive(Debug)]
pub struct Lambertian {
    pub albedo: Spectrum,
    sampler: UniformHemisphere,
}

impl Lambertian {
    pub fn new(albedo: Spectrum) -> Self {
        warn_if_gains_energy("Lambertian", &albedo);
        Lambertian {
            albedo,
            sampler: UniformHemisphere,
        }
    }
}

/// Draws from `sampler` in the hemisphere of `out_dir`.
/// Returns the direction and its density.
pub(crate) fn sample_same_side<S, R>(sampler: &S, out_dir: &Vec3, rng: &mut R) -> (Vec3, f32)
where
    S: DirectionSampler,
    R: Rng + ?Sized,
{
    let upper = sampler.generate(rng);
    let pdf = sampler.density(&upper);
    if out_dir.z < 0.0 {
        (Vec3::new(upper.x, upper.y, -upper.z), pdf)
    } else {
        (upper, pdf)
    }
}

impl ScatteringModel for Lambertian {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        let (direction, pdf) = sample_same_side(&self.sampler, out_dir, rng);
        let attenuation = mc_weight(self.evaluate(out_dir, &direction), direction.z, pdf);
        BsdfSample::continuous(direction, attenuation, pdf)
    }
    fn evaluate(&self, out_dir: &Vec3, in_dir: &Vec3) -> Spectrum {
        if out_dir.z.abs() <= COS_EPSILON
            || in_dir.z.abs() <= COS_EPSILON
            || out_dir.z * in_dir.z < 0.0
        {
            return Spectrum::zeros();
        }
        self.albedo / PI
    }
    fn is_discrete(&self) -> bool {
        false
    }
    fn is_sided(&self) -> bool {
        false
    }
}
