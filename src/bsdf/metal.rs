use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{
    front_facing, mc_weight, warn_if_gains_energy, warn_if_not_positive, ScatteringModel,
};
use crate::bsdf_sample::BsdfSample;
use crate::optics::{fresnel_schlick, reflect};
use crate::sampler::cosine_power::CosinePowerLobe;
use crate::sampler::DirectionSampler;
use rand::Rng;
use std::f32::consts::PI;

/// Glossy conductor: a Phong lobe tinted by Schlick's Fresnel term,
/// so the color of `reflectance` washes out toward white at grazing angles.
#[derive(Debug)]
pub struct Metal {
    pub reflectance: Spectrum,
    pub glossiness: f32,
    normalizer: f32,
}

impl Metal {
    pub fn new(reflectance: Spectrum, glossiness: f32) -> Self {
        warn_if_not_positive("Metal", "glossiness", glossiness);
        warn_if_gains_energy("Metal", &reflectance);
        Self {
            reflectance,
            glossiness,
            normalizer: (glossiness + 2.0) / (2.0 * PI),
        }
    }
}

impl ScatteringModel for Metal {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        let lobe = CosinePowerLobe::new(&reflect(out_dir), self.glossiness);
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
        let half_vec = (out_dir + in_dir).normalize();
        let fresnel = fresnel_schlick(&self.reflectance, out_dir.dot(&half_vec));
        fresnel * (self.normalizer * cosine.powf(self.glossiness))
    }
    fn is_discrete(&self) -> bool {
        true
    }
    fn is_sided(&self) -> bool {
        true
    }
}
