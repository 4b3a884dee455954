mod app;
mod furnace;
mod lobe_image;
mod presets;

use crate::app::Options;
use anyhow::Context;
use clap::Parser;
use log::{error, info};
use scatter::aliases::Vec3;
use std::fs;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    options.check()?;
    let start_time = Instant::now();
    if let Some(dir) = &options.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    }
    let t = options.incidence.to_radians();
    let out_dir = Vec3::new(t.sin(), 0.0, t.cos());
    info!(
        "incidence: {} deg, threads: {}, samples per thread: {}",
        options.incidence, options.n_threads, options.samples
    );

    for &model_type in &options.models {
        let bsdf = presets::get(model_type, options);
        let sum = furnace::estimate(&bsdf, &out_dir, options)?;
        info!(
            "{:>10} | discrete: {:5} | sided: {:5} | albedo (sample): {:.4?} | albedo (evaluate): {:.4?} | emissive: {:.4?} | zero pdf: {}",
            bsdf.name(),
            bsdf.is_discrete(),
            bsdf.is_sided(),
            sum.sampled_mean().as_slice(),
            sum.evaluated_mean().as_slice(),
            sum.emissive_mean().as_slice(),
            sum.zero_pdf,
        );
        if let Some(dir) = &options.out_dir {
            let path = dir.join(format!("{}_{}deg.png", bsdf.name(), options.incidence.round()));
            let peak = lobe_image::save_png(&bsdf, &out_dir, options.resolution, &path)
                .with_context(|| format!("cannot write {}", path.display()))?;
            if peak > 0.0 {
                info!("wrote {} (peak {:.4})", path.display(), peak);
            } else {
                info!("wrote {} (black: evaluate is zero everywhere)", path.display());
            }
        }
    }

    info!(
        "Completed. ({:.3} secs elapsed)",
        start_time.elapsed().as_secs_f32()
    );
    Ok(())
}
