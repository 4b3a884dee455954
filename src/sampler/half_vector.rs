use crate::aliases::Vec3;
use crate::optics::reflect_about;
use crate::sampler::cosine_power::CosinePowerLobe;
use crate::sampler::DirectionSampler;
use rand::Rng;

/// A pdf used for sampling an incoming direction in the Blinn model:
/// a half vector is drawn around the normal, then `out_dir` is mirrored about it.
#[derive(Debug, Clone, Copy)]
pub struct HalfVectorLobe {
    out_dir: Vec3, // normalized
    cosn_pdf: CosinePowerLobe,
}

impl HalfVectorLobe {
    /// * `out_dir` - need not be normalized.
    pub fn new(exponent: f32, out_dir: &Vec3) -> Self {
        Self {
            out_dir: out_dir.normalize(),
            cosn_pdf: CosinePowerLobe::new(&Vec3::new(0.0, 0.0, 1.0), exponent),
        }
    }

    /// Like `generate`, but the density is taken from the half vector that was
    /// drawn instead of being rebuilt from `out_dir + dir`, which cancels badly
    /// when `dir` lands near `-out_dir`.
    pub fn generate_with_density<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec3, f32) {
        let half_vec = self.cosn_pdf.generate(rng);
        let dir = reflect_about(&self.out_dir, &half_vec);
        let o_dot_h = self.out_dir.dot(&half_vec).abs().max(f32::MIN_POSITIVE);
        let pdf = self.cosn_pdf.density_at_cos(half_vec.z) / (4.0 * o_dot_h);
        (dir, pdf)
    }
}

impl DirectionSampler for HalfVectorLobe {
    fn density(&self, dir: &Vec3) -> f32 {
        let half_vec = self.out_dir + dir.normalize();
        if half_vec.norm_squared() <= 0.0 {
            return 0.0;
        }
        let half_vec = half_vec.normalize();
        let o_dot_h = self.out_dir.dot(&half_vec).abs();
        if o_dot_h <= 0.0 {
            return 0.0;
        }
        // h and -h mirror out_dir onto the same direction; generate only draws h.z > 0
        self.cosn_pdf.density_at_cos(half_vec.z.abs()) / (4.0 * o_dot_h) // Jacobian
    }
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let half_vec = self.cosn_pdf.generate(rng);
        let ret = reflect_about(&self.out_dir, &half_vec);
        debug_assert!(ret.norm().is_finite() && ret.norm() > 0.0);
        ret
    }
}
