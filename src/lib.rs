//! Surface scattering models for a Monte-Carlo path tracer.
//!
//! An integrator holds one [`Bsdf`] per shaded point and either draws a
//! continuation direction with [`Bsdf::sample`] or queries the density of a
//! light connection with [`Bsdf::evaluate`]. All directions are expressed in
//! the local shading frame whose z-axis is the surface normal.

pub mod aliases;
pub mod bsdf;
pub mod bsdf_sample;
pub mod onb;
pub mod optics;
pub mod sampler;

pub use crate::bsdf::{Bsdf, ScatteringModel};
pub use crate::bsdf_sample::BsdfSample;
