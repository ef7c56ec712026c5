//! Image decoding and tensor conversion for the classifier input.

use std::path::Path;

use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, IntoImageView, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;
use ndarray::Array4;

#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    pub height: u32,
    pub width: u32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        // Input resolution the classifier was trained at.
        Self {
            height: 180,
            width: 180,
        }
    }
}

#[derive(Debug)]
pub struct Processor {
    config: PreprocessConfig,
}

impl Processor {
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Decodes and preprocesses a single image file.
    pub fn preprocess_file(&self, path: &Path) -> Result<Array4<f32>> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;
        self.preprocess(&img)
    }

    /// Resizes to the fixed input resolution and converts to an NHWC batch
    /// of one. An alpha channel is flattened away before resizing. Pixel
    /// values stay in 0..255; the trained graph rescales internally.
    pub fn preprocess(&self, img: &DynamicImage) -> Result<Array4<f32>> {
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

        let mut dst = Image::new(
            self.config.width,
            self.config.height,
            rgb.pixel_type().context("unsupported pixel layout")?,
        );
        let mut resizer = Resizer::new();
        let options =
            ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom));
        resizer
            .resize(&rgb, &mut dst, Some(&options))
            .context("resize failed")?;
        let resized = image::RgbImage::from_raw(dst.width(), dst.height(), dst.buffer().to_vec())
            .context("resized buffer has unexpected size")?;

        let (h, w) = (self.config.height as usize, self.config.width as usize);
        let mut batch = Array4::<f32>::zeros((1, h, w, 3));
        for (x, y, pixel) in resized.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            batch[[0, y, x, 0]] = pixel[0] as f32;
            batch[[0, y, x, 1]] = pixel[1] as f32;
            batch[[0, y, x, 2]] = pixel[2] as f32;
        }
        Ok(batch)
    }
}
