use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{is_grazing, warn_if_gains_energy, ScatteringModel};
use crate::bsdf_sample::BsdfSample;
use crate::optics::reflect;
use rand::Rng;

/// Perfect specular reflection.
#[derive(Debug)]
pub struct Mirror {
    pub reflectance: Spectrum,
}

impl Mirror {
    pub fn new(reflectance: Spectrum) -> Self {
        warn_if_gains_energy("Mirror", &reflectance);
        Mirror { reflectance }
    }
}

impl ScatteringModel for Mirror {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, _rng: &mut R) -> BsdfSample {
        if is_grazing(out_dir) {
            return BsdfSample::discrete(reflect(out_dir), Spectrum::zeros());
        }
        BsdfSample::discrete(reflect(out_dir), self.reflectance)
    }
    fn evaluate(&self, _out_dir: &Vec3, _in_dir: &Vec3) -> Spectrum {
        // an arbitrary in_dir hits the reflected direction with probability zero
        Spectrum::zeros()
    }
    fn is_discrete(&self) -> bool {
        true
    }
    fn is_sided(&self) -> bool {
        false
    }
}
