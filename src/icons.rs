//! Icon Generator
//!
//! Composites a transparent logo over a gradient background at the four standard
//! web-app icon sizes. Maskable variants shrink the logo to keep it inside the
//! platform safe zone.

use crate::config::IconConfig;
use crate::error::KbError;
use crate::persist::ensure_dir;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Canvas size and safe-zone variant of one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub maskable: bool,
}

/// Icons written by [`IconGenerator::generate`], in output order
pub const STANDARD_ICONS: [IconSpec; 4] = [
    IconSpec { size: 192, maskable: false },
    IconSpec { size: 512, maskable: false },
    IconSpec { size: 192, maskable: true },
    IconSpec { size: 512, maskable: true },
];

impl IconSpec {
    /// `Icon-192.png`, `Icon-maskable-512.png`, ...
    pub fn file_name(&self) -> String {
        let suffix = if self.maskable { "-maskable" } else { "" };
        format!("Icon{}-{}.png", suffix, self.size)
    }

    /// Side of the box the logo must fit in, floored to whole pixels.
    pub fn logo_box(&self, standard_scale: f32, maskable_scale: f32) -> u32 {
        let scale = if self.maskable {
            maskable_scale
        } else {
            standard_scale
        };
        ((self.size as f32 * scale) as u32).max(1)
    }
}

/// Dimensions of a `width` x `height` image shrunk to fit a `max` square box,
/// keeping its aspect ratio. Images already inside the box keep their size.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let scaled = |minor: u32, major: u32| -> u32 {
        let minor = minor as u64;
        let major = major as u64;
        let max = max as u64;
        (((minor * max) + major / 2) / major).clamp(1, max) as u32
    };
    if width >= height {
        (max, scaled(height, width))
    } else {
        (scaled(width, height), max)
    }
}

/// Build one icon: background stretched to the canvas, logo fitted and
/// centered by integer offset, blended through the logo's alpha.
pub fn compose_icon(
    background: &RgbaImage,
    logo: &RgbaImage,
    spec: IconSpec,
    logo_box: u32,
) -> RgbaImage {
    let mut canvas = imageops::resize(background, spec.size, spec.size, FilterType::Lanczos3);

    let (logo_w, logo_h) = fit_within(logo.width(), logo.height(), logo_box);
    let fitted = if (logo_w, logo_h) == logo.dimensions() {
        logo.clone()
    } else {
        imageops::resize(logo, logo_w, logo_h, FilterType::Lanczos3)
    };

    let x = spec.size.saturating_sub(logo_w) / 2;
    let y = spec.size.saturating_sub(logo_h) / 2;
    imageops::overlay(&mut canvas, &fitted, x as i64, y as i64);
    canvas
}

/// Icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
}

/// Loads the source images and writes the standard icon set
pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    /// Paths in `config` are used as given; resolve them first.
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    pub fn generate(&self) -> Result<Vec<GeneratedIcon>, KbError> {
        ensure_dir(&self.config.output_dir)?;

        let background = load_rgba(&self.config.background)?;
        let logo = load_rgba(&self.config.logo)?;

        let mut generated = Vec::with_capacity(STANDARD_ICONS.len());
        for spec in STANDARD_ICONS {
            let logo_box = spec.logo_box(self.config.standard_scale, self.config.maskable_scale);
            let icon = compose_icon(&background, &logo, spec, logo_box);
            let path = self.config.output_dir.join(spec.file_name());
            save_png(&icon, &path)?;
            info!(
                status = "success",
                file = %spec.file_name(),
                size = spec.size,
                "Created icon"
            );
            generated.push(GeneratedIcon { spec, path });
        }

        Ok(generated)
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage, KbError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| KbError::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `img` as PNG with maximum compression and adaptive filtering.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), KbError> {
    let file = File::create(path).map_err(|e| KbError::io(path, e))?;
    let encoder =
        PngEncoder::new_with_quality(BufWriter::new(file), CompressionType::Best, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|source| KbError::Image {
            path: path.to_path_buf(),
            source,
        })
}
