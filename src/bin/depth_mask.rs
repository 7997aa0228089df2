use depth_structure::config::depth_mask::load_config;
use depth_structure::image::io::{load_depth_png, save_mask_png, save_mask_preview, write_json_file};
use depth_structure::DepthProcessor;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let depth = load_depth_png(&config.input)?;
    let processor = DepthProcessor::new(config.processor.clone());
    let report = processor
        .process_with_diagnostics(&depth)
        .map_err(|e| format!("{}: {e}", config.input.display()))?;

    save_mask_png(&report.structure.mask, &config.output.mask_image)?;
    if let Some(preview) = &config.output.preview_image {
        save_mask_preview(&report.structure.mask, preview)?;
    }
    write_json_file(&config.output.report_json, &report)?;

    if report.range.is_valid() {
        println!(
            "Depth range {}..{} mm over {} valid samples",
            report.range.min_depth, report.range.max_depth, report.trace.input.valid_samples
        );
    } else {
        println!("No valid depth samples in {}", config.input.display());
    }
    println!(
        "Saved {}x{} mask to {} ({:.3} ms)",
        report.trace.input.width,
        report.trace.input.height,
        config.output.mask_image.display(),
        report.trace.timing.total_ms
    );
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: depth_mask <config.json>".to_string()
}
