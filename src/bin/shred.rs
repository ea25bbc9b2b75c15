use std::env;
use std::path::Path;
use strip_unshredder::compose::compose;
use strip_unshredder::config::shred::load_config;
use strip_unshredder::image::io::{load_rgb_image, save_rgb_image};
use strip_unshredder::types::StripLayout;

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

    let img = load_rgb_image(&config.input)?;
    let layout = StripLayout::new(img.width(), img.height(), config.chunk_size)
        .map_err(|e| e.to_string())?;
    let shredded = compose(&img, &layout, &config.order).map_err(|e| e.to_string())?;
    save_rgb_image(&shredded, &config.output)?;

    println!(
        "Shredded {} strips of {}px -> {}",
        layout.strips,
        layout.chunk_size,
        config.output.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: shred <config.json>".to_string()
}
