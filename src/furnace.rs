//! White-furnace estimate: how much of a unit incoming radiance a model
//! sends back toward a fixed viewing direction.

use crate::app::Options;
use anyhow::anyhow;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter::aliases::{Spectrum, Vec3};
use scatter::sampler::hemisphere::CosineHemisphere;
use scatter::sampler::DirectionSampler;
use scatter::Bsdf;

/// Sums accumulated by one worker, and their merge.
#[derive(Debug, Clone)]
pub struct FurnaceSum {
    pub count: usize,
    /// Sum of `sample().attenuation`.
    pub sampled: Spectrum,
    /// Sum of `evaluate * cos / pdf` under cosine-weighted sampling.
    pub evaluated: Spectrum,
    pub emissive: Spectrum,
    /// Samples whose pdf was zero.
    pub zero_pdf: usize,
}

impl FurnaceSum {
    pub fn zero() -> Self {
        FurnaceSum {
            count: 0,
            sampled: Spectrum::zeros(),
            evaluated: Spectrum::zeros(),
            emissive: Spectrum::zeros(),
            zero_pdf: 0,
        }
    }
    pub fn add(&mut self, rhs: FurnaceSum) {
        self.count += rhs.count;
        self.sampled += rhs.sampled;
        self.evaluated += rhs.evaluated;
        self.emissive += rhs.emissive;
        self.zero_pdf += rhs.zero_pdf;
    }
    /// Directional albedo seen through `sample`.
    pub fn sampled_mean(&self) -> Spectrum {
        self.sampled / self.count.max(1) as f32
    }
    /// Directional albedo seen through `evaluate`.
    pub fn evaluated_mean(&self) -> Spectrum {
        self.evaluated / self.count.max(1) as f32
    }
    pub fn emissive_mean(&self) -> Spectrum {
        self.emissive / self.count.max(1) as f32
    }
}

fn trace_samples(bsdf: &Bsdf, out_dir: &Vec3, samples: usize, seed: u64) -> FurnaceSum {
    let mut rng = StdRng::seed_from_u64(seed);
    let sampler = CosineHemisphere;
    let mut sum = FurnaceSum::zero();
    for _ in 0..samples {
        let s = bsdf.sample(out_dir, &mut rng);
        if s.pdf <= 0.0 {
            sum.zero_pdf += 1;
        }
        sum.sampled += s.attenuation;
        sum.emissive += s.emissive;

        let mut in_dir = sampler.generate(&mut rng);
        let pdf = sampler.density(&in_dir);
        if out_dir.z < 0.0 {
            in_dir.z = -in_dir.z;
        }
        if pdf > 0.0 {
            sum.evaluated += bsdf.evaluate(out_dir, &in_dir) * (in_dir.z.abs() / pdf);
        }
        sum.count += 1;
    }
    sum
}

/// Runs `options.n_threads` workers against the same `bsdf`.
pub fn estimate(bsdf: &Bsdf, out_dir: &Vec3, options: &Options) -> anyhow::Result<FurnaceSum> {
    crossbeam::scope(|scope| {
        let threads: Vec<_> = (0..options.n_threads)
            .map(|i| {
                let seed = options.seed.wrapping_add(i as u64);
                scope.spawn(move |_| trace_samples(bsdf, out_dir, options.samples, seed))
            })
            .collect();
        let mut total = FurnaceSum::zero();
        for th in threads {
            let sum = th.join().map_err(|_| anyhow!("furnace worker panicked"))?;
            debug!("{}: worker done, {} samples", bsdf.name(), sum.count);
            total.add(sum);
        }
        Ok(total)
    })
    .map_err(|_| anyhow!("furnace scope panicked"))?
}

#[cfg(test)]
mod tests {
    use super::trace_samples;
    use scatter::aliases::{Spectrum, Vec3};
    use scatter::bsdf::{Diffuse, Lambertian, Mirror};
    use scatter::Bsdf;

    #[test]
    fn lambertian_furnace_agrees_both_ways() {
        let bsdf: Bsdf = Lambertian::new(Spectrum::repeat(0.5)).into();
        let sum = trace_samples(&bsdf, &Vec3::new(0.0, 0.0, 1.0), 50000, 3);
        assert_eq!(sum.count, 50000);
        assert_eq!(sum.zero_pdf, 0);
        // cosine sampling cancels the integrand exactly
        assert!((sum.evaluated_mean()[0] - 0.5).abs() < 1e-4);
        assert!((sum.sampled_mean()[0] - 0.5).abs() < 0.01);
    }

    #[test]
    fn delta_and_emitter_sums() {
        let mirror: Bsdf = Mirror::new(Spectrum::repeat(0.9)).into();
        let sum = trace_samples(&mirror, &Vec3::new(0.0, 0.0, 1.0), 100, 1);
        assert!((sum.sampled_mean() - Spectrum::repeat(0.9)).norm() < 1e-5);
        assert_eq!(sum.evaluated_mean(), Spectrum::zeros());

        let light: Bsdf = Diffuse::new(Spectrum::repeat(5.0)).into();
        let sum = trace_samples(&light, &Vec3::new(0.0, 0.0, -1.0), 100, 2);
        assert!((sum.emissive_mean() - Spectrum::repeat(5.0)).norm() < 1e-4);
        assert_eq!(sum.sampled_mean(), Spectrum::zeros());
    }
}
