use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use capture::{
    CaptureError, Config, ImageEffect, ImageProcessor, OpacityBlend, Region, RegionHighlight,
    BLEND_OPACITY,
};

// テスト用のエフェクト（統合テスト内で定義）
struct InvertEffect;

impl ImageEffect for InvertEffect {
    fn name(&self) -> &str {
        "invert"
    }

    fn apply(&self, img: &DynamicImage) -> capture::Result<DynamicImage> {
        let mut out = img.clone();
        out.invert();
        Ok(out)
    }
}

fn write_solid(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(path)
        .unwrap();
}

#[test]
fn test_run_blends_red_with_blue() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.png");
    let overlay = temp_dir.path().join("ghost.png");
    let output = temp_dir.path().join("out.png");
    write_solid(&input, 100, 100, [255, 0, 0]);
    write_solid(&overlay, 100, 100, [0, 0, 255]);

    capture::run(&Config::new(&input, &output, &overlay))?;

    let written = image::open(&output)?;
    assert_eq!(written.dimensions(), (100, 100));
    assert_eq!(written.get_pixel(0, 0), Rgba([128, 0, 128, 255]));
    assert_eq!(written.get_pixel(50, 50), Rgba([128, 0, 128, 255]));
    Ok(())
}

#[test]
fn test_self_blend_keeps_pixels() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.png");
    let output = temp_dir.path().join("out.png");
    let original = RgbImage::from_fn(32, 24, |x, y| Rgb([(x * 8) as u8, (y * 10) as u8, 77]));
    original.save(&input)?;

    capture::run(&Config::new(&input, &output, &input))?;

    assert_eq!(image::open(&output)?.to_rgb8(), original);
    Ok(())
}

#[test]
fn test_run_with_smaller_overlay_crops() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.png");
    let overlay = temp_dir.path().join("ghost.png");
    let output = temp_dir.path().join("out.png");
    write_solid(&input, 64, 48, [0, 0, 0]);
    write_solid(&overlay, 32, 100, [200, 100, 50]);

    capture::run(&Config::new(&input, &output, &overlay))?;

    let written = image::open(&output)?;
    assert_eq!(written.dimensions(), (32, 48));
    assert_eq!(written.get_pixel(31, 47), Rgba([100, 50, 25, 255]));
    Ok(())
}

#[test]
fn test_run_missing_input_creates_no_output() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let overlay = temp_dir.path().join("ghost.png");
    let output = temp_dir.path().join("out.png");
    write_solid(&overlay, 4, 4, [0, 0, 0]);

    let err = capture::run(&Config::new("/does/not/exist", &output, &overlay)).unwrap_err();

    assert!(matches!(err, CaptureError::NotFound { .. }));
    assert!(err.to_string().contains("/does/not/exist"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_processor_with_custom_effect() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.png");
    let output = temp_dir.path().join("out.png");
    write_solid(&input, 3, 3, [0, 255, 10]);

    ImageProcessor::new(InvertEffect).process(&input, &output)?;

    assert_eq!(image::open(&output)?.to_rgb8().get_pixel(1, 1), &Rgb([255, 0, 245]));
    Ok(())
}

#[test]
fn test_blend_then_highlight() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("out.png");
    let base = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 40, Rgb([200, 200, 200])));
    let ghost = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 40, Rgb([0, 0, 0])));

    let blended = OpacityBlend::new(ghost, BLEND_OPACITY).apply(&base)?;
    let highlight = RegionHighlight::new(vec![Region::new(5, 5, 30, 30)]);
    ImageProcessor::new(highlight).process_image(&blended, &output)?;

    let written = image::open(&output)?;
    assert_eq!(written.get_pixel(5, 5), RegionHighlight::DEFAULT_COLOR);
    assert_eq!(written.get_pixel(20, 20), Rgba([100, 100, 100, 255]));
    Ok(())
}

#[test]
fn test_output_is_png_even_with_other_extension() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("input.png");
    let output = temp_dir.path().join("out.jpg");
    write_solid(&input, 8, 8, [1, 2, 3]);

    capture::run(&Config::new(&input, &output, &input))?;

    assert_eq!(image::guess_format(&fs::read(&output)?)?, ImageFormat::Png);
    Ok(())
}
