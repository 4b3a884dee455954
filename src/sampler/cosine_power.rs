use crate::aliases::Vec3;
use crate::onb::Onb;
use crate::sampler::{random_cosine_power_direction, DirectionSampler};
use rand::Rng;
use std::f32::consts::PI;

/// Pdf proportional to max(cos(t), 0)^exponent where t is the angle
/// from a preferred axis. This is the lobe of Phong-type reflection models.
#[derive(Debug, Clone, Copy)]
pub struct CosinePowerLobe {
    pub basis: Onb,
    exponent: f32,
}

impl CosinePowerLobe {
    /// * `axis` - need not be normalized.
    pub fn new(axis: &Vec3, exponent: f32) -> Self {
        debug_assert!(exponent >= 0.0);
        Self {
            basis: Onb::build_from_w(axis),
            exponent,
        }
    }
    pub fn exponent(&self) -> f32 {
        self.exponent
    }
    /// Density for a cosine already measured against the axis.
    pub fn density_at_cos(&self, cosine: f32) -> f32 {
        if cosine <= 0.0 {
            return 0.0;
        }
        (self.exponent + 1.0) / (2.0 * PI) * cosine.powf(self.exponent)
    }
}

impl DirectionSampler for CosinePowerLobe {
    fn density(&self, dir: &Vec3) -> f32 {
        self.density_at_cos(self.basis.to_local(&dir.normalize()).z)
    }
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let local = random_cosine_power_direction(self.exponent, rng);
        self.basis.to_world(&local)
    }
}
