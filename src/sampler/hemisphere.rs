use crate::aliases::Vec3;
use crate::sampler::{random_cosine_direction, random_in_cone, DirectionSampler};
use rand::Rng;
use std::f32::consts::PI;

/// Uniform pdf on the upper hemisphere (z >= 0).
#[derive(Debug, Default)]
pub struct UniformHemisphere;

impl DirectionSampler for UniformHemisphere {
    fn density(&self, dir: &Vec3) -> f32 {
        if dir.z >= 0.0 {
            1.0 / (2.0 * PI)
        } else {
            0.0
        }
    }
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        random_in_cone(0.0, rng)
    }
}

/// Pdf such that pdf(d)/sin(t) ~= max(cos(t), 0) with t measured from z.
#[derive(Debug, Default)]
pub struct CosineHemisphere;

impl DirectionSampler for CosineHemisphere {
    fn density(&self, dir: &Vec3) -> f32 {
        let cosine = dir.normalize().z;
        (cosine / PI).max(0.0) // since integral of cos(theta) on a unit hemisphere = pi.
    }
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        random_cosine_direction(rng)
    }
}
