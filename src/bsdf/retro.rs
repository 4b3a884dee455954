use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{
    front_facing, mc_weight, warn_if_gains_energy, warn_if_not_positive, ScatteringModel,
};
use crate::bsdf_sample::BsdfSample;
use crate::sampler::cosine_power::CosinePowerLobe;
use crate::sampler::DirectionSampler;
use rand::Rng;
use std::f32::consts::PI;

/// Retro-reflection: a glossy lobe sending light back toward `out_dir`.
#[derive(Debug)]
pub struct Retro {
    pub reflectance: Spectrum,
    pub glossiness: f32,
    normalizer: f32,
}

impl Retro {
    pub fn new(reflectance: Spectrum, glossiness: f32) -> Self {
        warn_if_not_positive("Retro", "glossiness", glossiness);
        warn_if_gains_energy("Retro", &reflectance);
        Self {
            reflectance,
            glossiness,
            normalizer: (glossiness + 2.0) / (2.0 * PI),
        }
    }
}

impl ScatteringModel for Retro {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        let lobe = CosinePowerLobe::new(out_dir, self.glossiness);
        let direction = lobe.generate(rng);
        let pdf = lobe.density(&direction);
        let attenuation = mc_weight(self.evaluate(out_dir, &direction), direction.z, pdf);
        BsdfSample::continuous(direction, attenuation, pdf)
    }
    fn evaluate(&self, out_dir: &Vec3, in_dir: &Vec3) -> Spectrum {
        if !front_facing(out_dir, in_dir) {
            return Spectrum::zeros();
        }
        let cosine = out_dir.dot(in_dir);
        if cosine <= 0.0 {
            return Spectrum::zeros();
        }
        self.reflectance * (self.normalizer * cosine.powf(self.glossiness))
    }
    fn is_discrete(&self) -> bool {
        true
    }
    fn is_sided(&self) -> bool {
        true
    }
}
