use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{is_grazing, warn_if_not_positive, ScatteringModel};
use crate::bsdf_sample::BsdfSample;
use crate::optics::{fresnel_dielectric, reflect, refract, relative_eta};
use rand::Rng;

/// Smooth dielectric: reflects or transmits with the Fresnel probability.
#[derive(Debug)]
pub struct Glass {
    pub transmittance: Spectrum,
    pub reflectance: Spectrum,
    pub index_of_refraction: f32,
}

impl Glass {
    pub fn new(transmittance: Spectrum, reflectance: Spectrum, ior: f32) -> Self {
        warn_if_not_positive("Glass", "index of refraction", ior);
        Glass {
            transmittance,
            reflectance,
            index_of_refraction: ior,
        }
    }

    /// Probability of choosing the reflection branch for `out_dir`.
    pub fn reflection_probability(&self, out_dir: &Vec3) -> f32 {
        fresnel_dielectric(out_dir.z, relative_eta(out_dir, self.index_of_refraction))
    }
}

impl ScatteringModel for Glass {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        if is_grazing(out_dir) {
            return BsdfSample::discrete(reflect(out_dir), Spectrum::zeros());
        }
        // The Fresnel weight cancels against the branch probability,
        // leaving the lobe's own spectrum as the attenuation.
        let reflected = BsdfSample::discrete(reflect(out_dir), self.reflectance);
        if rng.gen::<f32>() < self.reflection_probability(out_dir) {
            return reflected;
        }
        let eta = relative_eta(out_dir, self.index_of_refraction);
        match refract(out_dir, eta) {
            Some(direction) => BsdfSample::discrete(direction, self.transmittance * (eta * eta)),
            None => reflected,
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
    use crate::bsdf::glass::Glass;
    use crate::bsdf::ScatteringModel;
    use crate::optics::reflect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fresnel_at_normal_incidence() {
        let bsdf = Glass::new(Spectrum::repeat(1.0), Spectrum::repeat(1.0), 1.5);
        let expected = ((1.0f32 - 1.5) / (1.0 + 1.5)).powi(2);
        let up = Vec3::new(0.0, 0.0, 1.0);
        assert!((bsdf.reflection_probability(&up) - expected).abs() < 1e-5);
        assert!((bsdf.reflection_probability(&-up) - expected).abs() < 1e-5);
    }

    #[test]
    fn branch_frequencies_follow_fresnel() {
        const SAMPLE_CNT: usize = 200000;
        let mut rng = StdRng::seed_from_u64(61);
        let reflectance = Spectrum::new(1.0, 0.9, 0.8);
        let transmittance = Spectrum::new(0.7, 0.8, 0.9);
        let bsdf = Glass::new(transmittance, reflectance, 1.5);
        let out_dir = Vec3::new(0.0, 0.0, 1.0);
        let mut reflected = 0;
        for _ in 0..SAMPLE_CNT {
            let s = bsdf.sample(&out_dir, &mut rng);
            assert_eq!(s.pdf, 1.0);
            if s.direction.z > 0.0 {
                reflected += 1;
                assert_eq!(s.direction, reflect(&out_dir));
                assert_eq!(s.attenuation, reflectance);
            } else {
                assert!((s.attenuation - transmittance / 2.25).norm() < 1e-6);
            }
        }
        let freq = reflected as f32 / SAMPLE_CNT as f32;
        println!("[branch_frequencies_follow_fresnel] reflected: {}", freq);
        assert!((freq - 0.04).abs() < 0.005);
    }

    #[test]
    fn beyond_critical_angle_always_reflects() {
        let mut rng = StdRng::seed_from_u64(62);
        let reflectance = Spectrum::repeat(0.95);
        let bsdf = Glass::new(Spectrum::repeat(1.0), reflectance, 1.5);
        let t = 50f32.to_radians();
        let inside = Vec3::new(0.0, t.sin(), -t.cos());
        assert_eq!(bsdf.reflection_probability(&inside), 1.0);
        for _ in 0..100 {
            let s = bsdf.sample(&inside, &mut rng);
            assert_eq!(s.direction, reflect(&inside));
            assert_eq!(s.attenuation, reflectance);
        }
    }
}
