use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{is_grazing, warn_if_not_positive, ScatteringModel};
use crate::bsdf_sample::BsdfSample;
use crate::optics::{reflect, refract, relative_eta};
use rand::Rng;

/// Perfect specular transmission; reflects only on total internal reflection.
#[derive(Debug)]
pub struct Refract {
    pub transmittance: Spectrum,
    pub index_of_refraction: f32,
}

impl Refract {
    pub fn new(transmittance: Spectrum, ior: f32) -> Self {
        warn_if_not_positive("Refract", "index of refraction", ior);
        Refract {
            transmittance,
            index_of_refraction: ior,
        }
    }
}

impl ScatteringModel for Refract {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, _rng: &mut R) -> BsdfSample {
        if is_grazing(out_dir) {
            return BsdfSample::discrete(reflect(out_dir), Spectrum::zeros());
        }
        let eta = relative_eta(out_dir, self.index_of_refraction);
        match refract(out_dir, eta) {
            // radiance is compressed or expanded by the squared index ratio
            Some(direction) => BsdfSample::discrete(direction, self.transmittance * (eta * eta)),
            None => BsdfSample::discrete(reflect(out_dir), self.transmittance),
        }
    }
    fn evaluate(&self, _out_dir: &Vec3, _in_dir: &Vec3) -> Spectrum {
        Spectrum::zeros()
    }
    fn is_discrete(&self) -> bool {
        true
    }
    fn is_sided(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Spectrum, Vec3};
    use crate::bsdf::refract::Refract;
    use crate::bsdf::ScatteringModel;
    use crate::optics::reflect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn entering_scales_by_inverse_squared_ior() {
        let mut rng = StdRng::seed_from_u64(51);
        let bsdf = Refract::new(Spectrum::repeat(0.9), 1.5);
        let s = bsdf.sample(&Vec3::new(0.0, 0.0, 1.0), &mut rng);
        assert!((s.direction - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
        assert!((s.attenuation - Spectrum::repeat(0.9 / (1.5 * 1.5))).norm() < 1e-6);
        assert_eq!(s.pdf, 1.0);
    }

    #[test]
    fn leaving_the_medium_bends_away_from_normal() {
        let mut rng = StdRng::seed_from_u64(52);
        let bsdf = Refract::new(Spectrum::repeat(1.0), 1.5);
        let inside = Vec3::new(0.3, 0.0, -(1.0f32 - 0.09).sqrt());
        let s = bsdf.sample(&inside, &mut rng);
        assert!(s.direction.z > 0.0);
        assert!((s.direction.x + 0.45).abs() < 1e-5);
        assert!((s.attenuation - Spectrum::repeat(2.25)).norm() < 1e-5);
    }

    #[test]
    fn total_internal_reflection_falls_back_to_mirror() {
        let mut rng = StdRng::seed_from_u64(53);
        let transmittance = Spectrum::new(0.9, 0.5, 0.1);
        let bsdf = Refract::new(transmittance, 1.5);
        let t = 60f32.to_radians();
        let inside = Vec3::new(t.sin(), 0.0, -t.cos());
        let s = bsdf.sample(&inside, &mut rng);
        assert_eq!(s.direction, reflect(&inside));
        assert_eq!(s.attenuation, transmittance);
    }
}
