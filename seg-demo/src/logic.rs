use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use image::{ColorType, DynamicImage};
use mock_segment::{Category, Segmenter, encode_png, side_by_side};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Instant,
};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// PNG or JPEG image to analyse
    #[arg(short, long)]
    pub input: PathBuf,

    /// One of SALIENT, CAMOUFLAGED, POLYP, BREAST_LESION
    #[arg(short, long)]
    pub category: String,

    /// Result file, overrides --out-dir
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for the result, defaults to the configured output dir
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Also write the original and the result next to each other
    #[arg(long)]
    pub side_by_side: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub mode: &'static str,
}

impl ImageInfo {
    pub fn from_image(img: &DynamicImage) -> Self {
        let mode = match img.color() {
            ColorType::L8 => "L",
            ColorType::La8 => "LA",
            ColorType::Rgb8 => "RGB",
            ColorType::Rgba8 => "RGBA",
            ColorType::L16 => "I;16",
            ColorType::La16 => "LA;16",
            ColorType::Rgb16 => "RGB;16",
            ColorType::Rgba16 => "RGBA;16",
            ColorType::Rgb32F => "RGB;F",
            ColorType::Rgba32F => "RGBA;F",
            _ => "unknown",
        };

        Self {
            width: img.width(),
            height: img.height(),
            mode,
        }
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size: {} × {} pixels, mode: {}",
            self.width, self.height, self.mode
        )
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub category: Category,
    pub info: ImageInfo,
    pub result_path: PathBuf,
    pub comparison_path: Option<PathBuf>,
}

pub fn result_file_name(category: Category) -> String {
    format!("segmentation_result_{}.png", category.slug())
}

pub fn comparison_file_name(category: Category) -> String {
    format!("comparison_{}.png", category.slug())
}

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("open image {} failed", path.display()))
}

pub fn categories() -> String {
    Category::all()
        .iter()
        .map(|c| {
            format!(
                "{:<14} {} ({})\n{:<14} {}",
                c.name(),
                c.title(),
                c.label(),
                "",
                c.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn info(path: &Path) -> Result<ImageInfo> {
    let img = load_image(path)?;
    Ok(ImageInfo::from_image(&img))
}

pub fn run(config: &Config, args: &RunArgs) -> Result<RunReport> {
    // reject the label before touching the file system
    let category = args.category.parse::<Category>()?;
    let segmenter = Segmenter::new(config.segment.clone())?;

    let img = load_image(&args.input)?;
    let info = ImageInfo::from_image(&img);
    log::info!("{}: {info}", args.input.display());

    let rgb = img.to_rgb8();
    let start = Instant::now();
    let result = segmenter.transform(&rgb, category)?;
    log::info!("{} finished in {:?}", category.title(), start.elapsed());

    let result_path = match (&args.output, &args.out_dir) {
        (Some(output), _) => output.clone(),
        (None, Some(dir)) => dir.join(result_file_name(category)),
        (None, None) => PathBuf::from(&config.output.dir).join(result_file_name(category)),
    };

    if let Some(dir) = result_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output dir {} failed", dir.display()))?;
        }
    }

    let png = encode_png(&result)?;
    fs::write(&result_path, png)
        .with_context(|| format!("write {} failed", result_path.display()))?;
    log::info!("Saving result to: {}", result_path.display());

    let comparison_path = if args.side_by_side || config.output.side_by_side {
        let path = result_path.with_file_name(comparison_file_name(category));
        let png = encode_png(&side_by_side(&rgb, &result, config.output.gap))?;
        fs::write(&path, png).with_context(|| format!("write {} failed", path.display()))?;
        log::info!("Saving comparison to: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(RunReport {
        category,
        info,
        result_path,
        comparison_path,
    })
}
