//! Integration tests for icon generation

use framekb::config::IconConfig;
use framekb::error::KbError;
use framekb::icons::{save_png, IconGenerator};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 128, 255])
    })
}

fn logo(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let inside = (x as i64 - width as i64 / 2).abs() < width as i64 / 4
            && (y as i64 - height as i64 / 2).abs() < height as i64 / 4;
        if inside {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn icon_config(temp_dir: &TempDir) -> IconConfig {
    let background = temp_dir.path().join("gradient.png");
    let logo_path = temp_dir.path().join("logo.png");
    save_png(&gradient(1024, 1024), &background).unwrap();
    save_png(&logo(800, 400), &logo_path).unwrap();
    IconConfig {
        background,
        logo: logo_path,
        output_dir: temp_dir.path().join("web").join("icons"),
        ..IconConfig::default()
    }
}

#[test]
fn test_generates_four_icons() {
    let temp_dir = TempDir::new().unwrap();
    let config = icon_config(&temp_dir);
    let output_dir = config.output_dir.clone();

    let generated = IconGenerator::new(config).generate().unwrap();
    assert_eq!(generated.len(), 4);

    for (name, size) in [
        ("Icon-192.png", 192),
        ("Icon-512.png", 512),
        ("Icon-maskable-192.png", 192),
        ("Icon-maskable-512.png", 512),
    ] {
        let path = output_dir.join(name);
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (size, size), "{}", name);
    }
}

#[test]
fn test_maskable_logo_is_smaller() {
    let temp_dir = TempDir::new().unwrap();
    let config = icon_config(&temp_dir);
    let output_dir = config.output_dir.clone();
    IconGenerator::new(config).generate().unwrap();

    let white_span = |name: &str| -> usize {
        let img = image::open(output_dir.join(name)).unwrap().to_rgba8();
        (0..img.width())
            .filter(|&x| {
                let p = img.get_pixel(x, img.height() / 2);
                p[0] > 240 && p[1] > 240 && p[2] > 240
            })
            .count()
    };
    assert!(white_span("Icon-maskable-512.png") < white_span("Icon-512.png"));
}

#[test]
fn test_regeneration_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config = icon_config(&temp_dir);
    let generator = IconGenerator::new(config);
    generator.generate().unwrap();
    let generated = generator.generate().unwrap();
    assert!(generated.iter().all(|icon| icon.path.is_file()));
}

#[test]
fn test_missing_background_fails() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = icon_config(&temp_dir);
    config.background = temp_dir.path().join("missing.png");

    let err = IconGenerator::new(config).generate().unwrap_err();
    assert!(matches!(err, KbError::Image { .. }));
}
