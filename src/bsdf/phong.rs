use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{
    front_facing, mc_weight, warn_if_gains_energy, warn_if_not_positive, ScatteringModel,
};
use crate::bsdf_sample::BsdfSample;
use crate::optics::reflect;
use crate::sampler::cosine_power::CosinePowerLobe;
use crate::sampler::DirectionSampler;
use rand::Rng;
use std::f32::consts::PI;

/// Energy-normalized Phong reflection model.
///
/// The lobe is centered on the mirror direction of `out_dir`:
/// f = albedo * (n+2)/(2PI) * cos(a)^n, with a the angle to that direction.
#[derive(Debug)]
pub struct Phong {
    pub albedo: Spectrum,
    pub glossiness: f32,
    normalizer: f32,
}

impl Phong {
    pub fn new(albedo: Spectrum, glossiness: f32) -> Self {
        warn_if_not_positive("Phong", "glossiness", glossiness);
        warn_if_gains_energy("Phong", &albedo);
        Self {
            albedo,
            glossiness,
            normalizer: (glossiness + 2.0) / (2.0 * PI),
        }
    }
    fn lobe(&self, out_dir: &Vec3) -> CosinePowerLobe {
        CosinePowerLobe::new(&reflect(out_dir), self.glossiness)
    }
}

impl ScatteringModel for Phong {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        let lobe = self.lobe(out_dir);
        let direction = lobe.generate(rng);
        let pdf = lobe.density(&direction);
        let attenuation = mc_weight(self.evaluate(out_dir, &direction), direction.z, pdf);
        BsdfSample::continuous(direction, attenuation, pdf)
    }
    fn evaluate(&self, out_dir: &Vec3, in_dir: &Vec3) -> Spectrum {
        if !front_facing(out_dir, in_dir) {
            return Spectrum::zeros();
        }
        let cosine = reflect(out_dir).dot(in_dir);
        if cosine <= 0.0 {
            return Spectrum::zeros();
        }
        self.albedo * (self.normalizer * cosine.powf(self.glossiness))
    }
    fn is_discrete(&self) -> bool {
        true
    }
    fn is_sided(&self) -> bool {
        true
    }
}
