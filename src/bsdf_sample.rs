use crate::aliases::{Mat4, Spectrum, Vec3};

/// Informations to continue a path after scattering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsdfSample {
    /// Radiance emitted at the point, independent of scattering.
    pub emissive: Spectrum,
    /// Scattering contribution already divided by `pdf`.
    pub attenuation: Spectrum,
    /// The sampled incoming direction, in the local shading frame until `transform` is applied.
    pub direction: Vec3,
    /// Density of `direction`; 1 for discrete distributions.
    pub pdf: f32,
}

impl BsdfSample {
    /// A sample from a delta distribution. `attenuation` is the full weight.
    pub fn discrete(direction: Vec3, attenuation: Spectrum) -> Self {
        BsdfSample {
            emissive: Spectrum::zeros(),
            attenuation,
            direction,
            pdf: 1.0,
        }
    }
    pub fn continuous(direction: Vec3, attenuation: Spectrum, pdf: f32) -> Self {
        debug_assert!(pdf >= 0.0);
        BsdfSample {
            emissive: Spectrum::zeros(),
            attenuation,
            direction,
            pdf,
        }
    }
    pub fn with_emissive(mut self, emissive: Spectrum) -> Self {
        self.emissive = emissive;
        self
    }
    /// Rotates `direction` by `t`. Translation, `pdf` and `attenuation` are untouched.
    pub fn transform(&mut self, t: &Mat4) {
        self.direction = t.transform_vector(&self.direction);
    }
}
