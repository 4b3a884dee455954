//! Command line options of the `scatter` tool.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Scattering models selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelType {
    Lambertian,
    Mirror,
    Refract,
    Glass,
    Diffuse,
    Phong,
    Blinn,
    Retro,
    Metal,
}

/// Estimates directional albedo and plots lobes of surface scattering models.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Models to inspect.
    #[arg(
        long = "model",
        short = 'm',
        value_enum,
        num_args = 1..,
        default_values_t = [ModelType::Lambertian, ModelType::Phong, ModelType::Blinn, ModelType::Glass]
    )]
    pub models: Vec<ModelType>,

    /// Number of worker threads sharing each model.
    #[arg(long = "nthreads", short = 't', value_name = "NUM", default_value_t = 4)]
    pub n_threads: usize,

    /// Samples per thread for the furnace estimate.
    #[arg(long, short = 's', value_name = "NUM", default_value_t = 100_000)]
    pub samples: usize,

    /// Base seed; thread i uses seed + i.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Angle in degrees between the viewing direction and the normal.
    #[arg(long, value_name = "DEGREES", default_value_t = 30.0)]
    pub incidence: f32,

    /// Albedo, reflectance or transmittance, as r g b.
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = [0.8, 0.8, 0.8])]
    pub color: Vec<f32>,

    /// Radiance of the diffuse emitter, as r g b.
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = [1.0, 1.0, 1.0])]
    pub radiance: Vec<f32>,

    /// Cosine-power exponent of the glossy lobes.
    #[arg(long, default_value_t = 32.0)]
    pub glossiness: f32,

    /// Index of refraction of the dielectric models.
    #[arg(long, default_value_t = 1.5)]
    pub ior: f32,

    /// Width and height of each lobe image in pixels.
    #[arg(long, value_name = "PIXELS", default_value_t = 256)]
    pub resolution: u32,

    /// Directory the lobe images are written to. No images when absent.
    #[arg(long = "outdir", short = 'o', value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl Options {
    /// Validates parameter ranges the models rely on.
    pub fn check(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.n_threads > 0, "--nthreads must be positive");
        anyhow::ensure!(self.samples > 0, "--samples must be positive");
        anyhow::ensure!(self.glossiness > 0.0, "--glossiness must be positive");
        anyhow::ensure!(self.ior > 0.0, "--ior must be positive");
        anyhow::ensure!(self.resolution > 0, "--resolution must be positive");
        anyhow::ensure!(
            (0.0..90.0).contains(&self.incidence),
            "--incidence must be in [0, 90) degrees"
        );
        Ok(())
    }
}
