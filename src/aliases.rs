use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Mat4 = na::Matrix4<f32>;
/// Radiometric RGB value. Channels are combined with `component_mul`.
pub type Spectrum = na::Vector3<f32>;
