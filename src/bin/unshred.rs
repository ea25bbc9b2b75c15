use std::env;
use std::path::Path;
use std::time::Instant;
use strip_unshredder::config::unshred::load_config;
use strip_unshredder::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use strip_unshredder::Unshredder;

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

    let start = Instant::now();
    let img = load_rgb_image(&config.input)?;
    let unshredder = Unshredder::new(config.params);
    let outcome = unshredder
        .process_with_diagnostics(&img.as_view())
        .map_err(|e| format!("Failed to unshred {}: {e}", config.input.display()))?;
    save_rgb_image(&outcome.image, &config.output.image)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &outcome.report)?;
        println!("Saved report to {}", report_path.display());
    }

    let report = &outcome.report;
    println!(
        "Reordered {} strips of {}px: {:?}",
        report.input.strips, report.input.chunk_size, report.order
    );
    println!(
        "Mean seam match {:.1}% ({} fallback steps)",
        report.mean_seam_fraction() * 100.0,
        report.fallback_steps
    );
    println!(
        "Image unshredded in {:.0}ms -> {}",
        elapsed_ms,
        config.output.image.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: unshred <config.json>".to_string()
}
