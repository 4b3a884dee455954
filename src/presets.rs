use crate::app::{ModelType, Options};
use scatter::aliases::Spectrum;
use scatter::bsdf::{Blinn, Diffuse, Glass, Lambertian, Metal, Mirror, Phong, Refract, Retro};
use scatter::Bsdf;

fn spectrum(rgb: &[f32]) -> Spectrum {
    Spectrum::new(rgb[0], rgb[1], rgb[2])
}

/// Builds the model named on the command line from the shared parameters.
pub fn get(model_type: ModelType, options: &Options) -> Bsdf {
    let color = spectrum(&options.color);
    let n = options.glossiness;
    let ior = options.ior;
    match model_type {
        ModelType::Lambertian => Lambertian::new(color).into(),
        ModelType::Mirror => Mirror::new(color).into(),
        ModelType::Refract => Refract::new(color, ior).into(),
        ModelType::Glass => Glass::new(color, Spectrum::repeat(1.0), ior).into(),
        ModelType::Diffuse => Diffuse::new(spectrum(&options.radiance)).into(),
        ModelType::Phong => Phong::new(color, n).into(),
        ModelType::Blinn => Blinn::new(color, n).into(),
        ModelType::Retro => Retro::new(color, n).into(),
        ModelType::Metal => Metal::new(color, n).into(),
    }
}
