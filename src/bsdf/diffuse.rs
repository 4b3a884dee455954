use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::lambertian::sample_same_side;
use crate::bsdf::ScatteringModel;
use crate::bsdf_sample::BsdfSample;
use crate::sampler::hemisphere::UniformHemisphere;
use log::warn;
use rand::Rng;

/// An area light surface: emits `radiance` and scatters nothing.
#[derive(Debug)]
pub struct Diffuse {
    pub radiance: Spectrum,
    sampler: UniformHemisphere,
}

impl Diffuse {
    pub fn new(radiance: Spectrum) -> Self {
        if radiance.min() < 0.0 {
            warn!("Diffuse emitter built with negative radiance {:?}", radiance);
        }
        Diffuse {
            radiance,
            sampler: UniformHemisphere,
        }
    }
}

impl ScatteringModel for Diffuse {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        let (direction, pdf) = sample_same_side(&self.sampler, out_dir, rng);
        BsdfSample::continuous(direction, Spectrum::zeros(), pdf).with_emissive(self.radiance)
    }
    fn evaluate(&self, _out_dir: &Vec3, _in_dir: &Vec3) -> Spectrum {
        Spectrum::zeros()
    }
    fn is_discrete(&self) -> bool {
        false
    }
    fn is_sided(&self) -> bool {
        false
    }
}
