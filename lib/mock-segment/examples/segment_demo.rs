use anyhow::{Context, Result};
use mock_segment::{Category, Segmenter, side_by_side};
use std::{fs, path::PathBuf, time::Instant};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input_file = "data/test.png";
    let output_dir = PathBuf::from("tmp");
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir)?;
    }

    let img = image::open(input_file).with_context(|| input_file.to_string())?;
    log::info!("Image size: {}x{}, mode: {:?}", img.width(), img.height(), img.color());

    let rgb = img.to_rgb8();
    let segmenter = Segmenter::default();

    for category in Category::all() {
        let start = Instant::now();
        let result = segmenter.transform(&rgb, *category)?;
        log::info!("{} spent: {:?}", category.title(), start.elapsed());

        let output_path = output_dir.join(format!("segmentation_result_{}.png", category.slug()));
        result
            .save(&output_path)
            .with_context(|| output_path.to_string_lossy().to_string())?;

        let compare_path = output_dir.join(format!("comparison_{}.png", category.slug()));
        side_by_side(&rgb, &result, 16).save(&compare_path)?;

        log::info!("Saving result to: {:?}", output_path);
    }

    Ok(())
}
