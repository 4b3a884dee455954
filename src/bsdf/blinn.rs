use crate::aliases::{Spectrum, Vec3};
use crate::bsdf::{
    front_facing, mc_weight, warn_if_gains_energy, warn_if_not_positive, ScatteringModel,
};
use crate::bsdf_sample::BsdfSample;
use crate::sampler::half_vector::HalfVectorLobe;
use rand::Rng;
use std::f32::consts::PI;

/// Blinn-Phong reflection model, a cosine power of the half vector.
#[derive(Debug)]
pub struct Blinn {
    pub albedo: Spectrum,
    pub glossiness: f32,
    normalizer: f32,
}

impl Blinn {
    pub fn new(albedo: Spectrum, glossiness: f32) -> Self {
        warn_if_not_positive("Blinn", "glossiness", glossiness);
        warn_if_gains_energy("Blinn", &albedo);
        let n = glossiness;
        let normalizer = (n + 2.0) * (n + 4.0) / (8.0 * PI * (2.0f32.powf(-0.5 * n) + n));
        Self {
            albedo,
            glossiness,
            normalizer,
        }
    }
}

impl ScatteringModel for Blinn {
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        let lobe = HalfVectorLobe::new(self.glossiness, out_dir);
        let (direction, pdf) = lobe.generate_with_density(rng);
        let attenuation = mc_weight(self.evaluate(out_dir, &direction), direction.z, pdf);
        BsdfSample::continuous(direction, attenuation, pdf)
    }
    fn evaluate(&self, out_dir: &Vec3, in_dir: &Vec3) -> Spectrum {
        if !front_facing(out_dir, in_dir) {
            return Spectrum::zeros();
        }
        let half_vec = (out_dir + in_dir).normalize();
        self.albedo * (self.normalizer * half_vec.z.powf(self.glossiness))
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
    use crate::bsdf::blinn::Blinn;
    use crate::bsdf::ScatteringModel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn normal_incidence_albedo_is_bounded() {
        const SAMPLE_CNT: usize = 100000;
        let mut rng = StdRng::seed_from_u64(81);
        let bsdf = Blinn::new(Spectrum::new(1.0, 1.0, 1.0), 20.0);
        let out_dir = Vec3::new(0.0, 0.0, 1.0);
        let mut sum = Spectrum::zeros();
        for _ in 0..SAMPLE_CNT {
            sum += bsdf.sample(&out_dir, &mut rng).attenuation;
        }
        sum /= SAMPLE_CNT as f32;
        println!("[blinn normal_incidence_albedo] {:?}", sum);
        assert!(sum[0] < 1.03);
        assert!(sum[0] > 0.9);
    }

    #[test]
    fn attenuation_matches_evaluate_over_pdf() {
        let mut rng = StdRng::seed_from_u64(82);
        let bsdf = Blinn::new(Spectrum::new(0.8, 0.5, 0.2), 40.0);
        let out_dir = Vec3::new(-0.3, 0.2, 0.9).normalize();
        for _ in 0..1000 {
            let s = bsdf.sample(&out_dir, &mut rng);
            assert!(s.pdf > 0.0);
            let expected = bsdf.evaluate(&out_dir, &s.direction) * s.direction.z.abs() / s.pdf;
            assert!((s.attenuation - expected).norm() < 1e-4);
        }
    }

    #[test]
    fn wide_lobe_never_reports_zero_pdf() {
        let mut rng = StdRng::seed_from_u64(83);
        let bsdf = Blinn::new(Spectrum::repeat(1.0), 1.0);
        let t = 45f32.to_radians();
        let out_dir = Vec3::new(t.sin(), 0.0, t.cos());
        for _ in 0..400000 {
            let s = bsdf.sample(&out_dir, &mut rng);
            assert!(s.pdf > 0.0 && s.pdf.is_finite(), "{:?}", s.direction);
            assert!(s.attenuation.iter().all(|c| c.is_finite()));
        }
    }
}
