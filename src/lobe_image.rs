use itertools::iproduct;
use scatter::aliases::{Spectrum, Vec3};
use scatter::Bsdf;
use std::path::Path;

/// `evaluate(out_dir, w) * cos(w)` over the upper hemisphere, projected
/// orthographically onto the unit disk seen from above. Row-major, top row first.
pub fn lobe_values(bsdf: &Bsdf, out_dir: &Vec3, resolution: u32) -> Vec<Spectrum> {
    let res = resolution as usize;
    let mut values = vec![Spectrum::zeros(); res * res];
    for (j, i) in iproduct!(0..res, 0..res) {
        let x = 2.0 * (i as f32 + 0.5) / res as f32 - 1.0;
        let y = 1.0 - 2.0 * (j as f32 + 0.5) / res as f32;
        let r2 = x * x + y * y;
        if r2 >= 1.0 {
            continue;
        }
        let in_dir = Vec3::new(x, y, (1.0 - r2).sqrt());
        values[i + j * res] = bsdf.evaluate(out_dir, &in_dir) * in_dir.z;
    }
    values
}

/// Writes the lobe normalized to its peak, with a square-root tone curve.
pub fn save_png(bsdf: &Bsdf, out_dir: &Vec3, resolution: u32, path: &Path) -> anyhow::Result<f32> {
    let values = lobe_values(bsdf, out_dir, resolution);
    let peak = values.iter().map(|v| v.max()).fold(0.0f32, f32::max);
    let scale = if peak > 0.0 { 1.0 / peak } else { 0.0 };
    let mut buffer: Vec<u8> = Vec::with_capacity(values.len() * 4);
    for col in &values {
        for c in 0..3 {
            buffer.push((255.99 * (col[c] * scale).max(0.0).min(1.0).sqrt()) as u8);
        }
        buffer.push(255);
    }
    image::save_buffer(
        path,
        buffer.as_slice(),
        resolution,
        resolution,
        image::ColorType::Rgba8,
    )?;
    Ok(peak)
}

#[cfg(test)]
mod tests {
    use super::lobe_values;
    use scatter::aliases::{Spectrum, Vec3};
    use scatter::bsdf::{Lambertian, Phong};
    use scatter::Bsdf;
    use std::f32::consts::PI;

    #[test]
    fn lambertian_lobe_is_brightest_at_center() {
        let bsdf: Bsdf = Lambertian::new(Spectrum::repeat(1.0)).into();
        let values = lobe_values(&bsdf, &Vec3::new(0.0, 0.0, 1.0), 33);
        let center = values[16 + 16 * 33];
        assert!((center[0] - 1.0 / PI).abs() < 1e-3);
        assert_eq!(values[0], Spectrum::zeros()); // corner lies outside the disk
    }

    #[test]
    fn phong_lobe_peaks_on_the_mirror_side() {
        let bsdf: Bsdf = Phong::new(Spectrum::repeat(1.0), 50.0).into();
        let t = 45f32.to_radians();
        let values = lobe_values(&bsdf, &Vec3::new(t.sin(), 0.0, t.cos()), 64);
        let (argmax, _) = values
            .iter()
            .enumerate()
            .fold((0, 0.0f32), |(bi, bv), (i, v)| if v[0] > bv { (i, v[0]) } else { (bi, bv) });
        // the mirror direction has negative x, i.e. the left half of the image
        assert!(argmax % 64 < 32);
    }
}
