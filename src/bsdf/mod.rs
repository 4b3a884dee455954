pub mod blinn;
pub mod diffuse;
pub mod glass;
pub mod lambertian;
pub mod metal;
pub mod mirror;
pub mod phong;
pub mod refract;
pub mod retro;

pub use self::blinn::Blinn;
pub use self::diffuse::Diffuse;
pub use self::glass::Glass;
pub use self::lambertian::Lambertian;
pub use self::metal::Metal;
pub use self::mirror::Mirror;
pub use self::phong::Phong;
pub use self::refract::Refract;
pub use self::retro::Retro;

use crate::aliases::{Spectrum, Vec3};
use crate::bsdf_sample::BsdfSample;
use log::{debug, warn};
use rand::Rng;

/// Cosines at or below this are treated as grazing and scatter nothing.
pub const COS_EPSILON: f32 = 1e-6;

/// A surface scattering model. All directions are unit vectors in the local
/// shading frame and point away from the surface.
pub trait ScatteringModel: Send + Sync {
    /// Draws an incoming direction for `out_dir` together with its Monte-Carlo weight.
    fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample;
    /// Scattering density for a pair of directions. Zero for delta distributions.
    fn evaluate(&self, out_dir: &Vec3, in_dir: &Vec3) -> Spectrum;
    /// True when `evaluate` must not be combined with explicit light sampling.
    fn is_discrete(&self) -> bool;
    /// True when the front and back hemispheres are treated differently.
    fn is_sided(&self) -> bool;
}

/// `value * |cosine| / pdf`, black when the cosine is grazing or the pdf vanishes.
pub(crate) fn mc_weight(value: Spectrum, cosine: f32, pdf: f32) -> Spectrum {
    if pdf <= 0.0 || cosine.abs() <= COS_EPSILON {
        return Spectrum::zeros();
    }
    value * (cosine.abs() / pdf)
}

/// `dir` lies in the tangent plane, up to `COS_EPSILON`.
pub(crate) fn is_grazing(dir: &Vec3) -> bool {
    dir.z.abs() <= COS_EPSILON
}

/// Both directions above the surface, neither grazing.
pub(crate) fn front_facing(out_dir: &Vec3, in_dir: &Vec3) -> bool {
    out_dir.z > COS_EPSILON && in_dir.z > COS_EPSILON
}

pub(crate) fn warn_if_gains_energy(model: &str, spectrum: &Spectrum) {
    if spectrum.max() > 1.0 {
        warn!(
            "{} built with a spectrum above 1 ({:?}); it will reflect more than it receives",
            model, spectrum
        );
    }
}

pub(crate) fn warn_if_not_positive(model: &str, parameter: &str, value: f32) {
    if value.is_nan() || value <= 0.0 {
        warn!("{} built with {} = {}; it must be positive", model, parameter, value);
    }
}

/// The closed set of scattering models an integrator can shade with.
///
/// Owns exactly one model; neither `Clone` nor `Copy`.
#[derive(Debug)]
pub enum Bsdf {
    Lambertian(Lambertian),
    Mirror(Mirror),
    Glass(Glass),
    Diffuse(Diffuse),
    Refract(Refract),
    Phong(Phong),
    Blinn(Blinn),
    Retro(Retro),
    Metal(Metal),
}

macro_rules! dispatch {
    ($self:ident, $b:ident => $e:expr) => {
        match $self {
            Bsdf::Lambertian($b) => $e,
            Bsdf::Mirror($b) => $e,
            Bsdf::Glass($b) => $e,
            Bsdf::Diffuse($b) => $e,
            Bsdf::Refract($b) => $e,
            Bsdf::Phong($b) => $e,
            Bsdf::Blinn($b) => $e,
            Bsdf::Retro($b) => $e,
            Bsdf::Metal($b) => $e,
        }
    };
}

impl Bsdf {
    pub fn sample<R: Rng + ?Sized>(&self, out_dir: &Vec3, rng: &mut R) -> BsdfSample {
        dispatch!(self, b => b.sample(out_dir, rng))
    }
    pub fn evaluate(&self, out_dir: &Vec3, in_dir: &Vec3) -> Spectrum {
        dispatch!(self, b => b.evaluate(out_dir, in_dir))
    }
    pub fn is_discrete(&self) -> bool {
        dispatch!(self, b => b.is_discrete())
    }
    pub fn is_sided(&self) -> bool {
        dispatch!(self, b => b.is_sided())
    }
    pub fn name(&self) -> &'static str {
        match self {
            Bsdf::Lambertian(_) => "lambertian",
            Bsdf::Mirror(_) => "mirror",
            Bsdf::Glass(_) => "glass",
            Bsdf::Diffuse(_) => "diffuse",
            Bsdf::Refract(_) => "refract",
            Bsdf::Phong(_) => "phong",
            Bsdf::Blinn(_) => "blinn",
            Bsdf::Retro(_) => "retro",
            Bsdf::Metal(_) => "metal",
        }
    }
}

macro_rules! impl_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Bsdf {
                fn from(b: $model) -> Self {
                    debug!("built {:?}", b);
                    Bsdf::$model(b)
                }
            }
        )*
    };
}

impl_from_model!(Lambertian, Mirror, Glass, Diffuse, Refract, Phong, Blinn, Retro, Metal);
