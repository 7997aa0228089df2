mod common;

use common::synthetic_depth::raised_box;
use depth_structure::config::depth_mask::load_config;
use depth_structure::image::io::{
    load_color_image, load_depth_png, save_mask_png, save_mask_preview, write_json_file,
    MASK_PNG_OFFSET,
};
use depth_structure::image::Plane;
use depth_structure::{DepthProcessor, VisionSession};
use image::{DynamicImage, ImageBuffer, Luma, Rgb, RgbImage};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("depth_structure_{}_{name}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn sixteen_bit_depth_png_loads_unchanged() {
    let dir = scratch_dir("depth_png");
    let depth = raised_box(16, 12, 2500, 700, (4, 3, 10, 9));
    let path = dir.join("depth.png");
    let buffer: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(16, 12, depth.data.clone()).unwrap();
    DynamicImage::ImageLuma16(buffer).save(&path).unwrap();

    let loaded = load_depth_png(&path).unwrap();
    assert_eq!(loaded, depth);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn color_image_loads_as_rgb_and_feeds_the_latch() {
    let dir = scratch_dir("color_png");
    let path = dir.join("color.png");
    let img = RgbImage::from_fn(4, 2, |x, y| Rgb([x as u8 * 60, y as u8 * 100, 7]));
    img.save(&path).unwrap();

    let loaded = load_color_image(&path).unwrap();
    assert_eq!(loaded.dims(), (4, 2));
    assert_eq!(loaded.data[0], [0, 0, 7]);
    assert_eq!(loaded.data[7], [180, 100, 7]);

    let mut session = VisionSession::default();
    assert!(session.offer_color_frame(loaded.clone()));
    assert_eq!(session.color_frame(), Some(&loaded));
    assert!(load_color_image(&dir.join("missing.png")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mask_png_stores_offset_values() {
    let dir = scratch_dir("mask_png");
    let mask = Plane::from_vec(3, 1, vec![i16::MIN, 0, 1234]).unwrap();
    let path = dir.join("nested").join("mask.png");
    save_mask_png(&mask, &path).unwrap();

    let stored = image::open(&path).unwrap().into_luma16();
    let values: Vec<i32> = stored
        .into_raw()
        .into_iter()
        .map(|v| v as i32 - MASK_PNG_OFFSET)
        .collect();
    assert_eq!(values, vec![i16::MIN as i32, 0, 1234]);

    save_mask_preview(&mask, &dir.join("preview.png")).unwrap();
    let preview = image::open(dir.join("preview.png")).unwrap().into_luma8();
    assert_eq!(preview.into_raw(), vec![0, 246, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_files_produce_readable_errors() {
    let err = load_depth_png(&PathBuf::from("/nonexistent/depth.png")).unwrap_err();
    assert!(err.contains("/nonexistent/depth.png"));
    let err = load_config(&PathBuf::from("/nonexistent/config.json")).unwrap_err();
    assert!(err.starts_with("Failed to read config"));
}

#[test]
fn config_driven_run_writes_report() {
    let dir = scratch_dir("config_run");
    let depth_path = dir.join("depth.png");
    let depth = raised_box(20, 20, 1600, 1000, (6, 6, 14, 14));
    let buffer: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(20, 20, depth.data.clone()).unwrap();
    DynamicImage::ImageLuma16(buffer).save(&depth_path).unwrap();

    let config_path = dir.join("config.json");
    let config_json = serde_json::json!({
        "input": depth_path,
        "processor": { "gradientBorder": "replicate" },
        "output": {
            "mask_image": dir.join("mask.png"),
            "report_json": dir.join("report.json"),
        }
    });
    std::fs::write(&config_path, config_json.to_string()).unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.processor.gradient_bias, 0);
    let loaded = load_depth_png(&config.input).unwrap();
    let report = DepthProcessor::new(config.processor.clone())
        .process_with_diagnostics(&loaded)
        .unwrap();
    save_mask_png(&report.structure.mask, &config.output.mask_image).unwrap();
    write_json_file(&config.output.report_json, &report).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config.output.report_json).unwrap())
            .unwrap();
    assert_eq!(written["range"]["minDepth"], 1000);
    assert_eq!(written["range"]["maxDepth"], 1600);
    let _ = std::fs::remove_dir_all(&dir);
}
