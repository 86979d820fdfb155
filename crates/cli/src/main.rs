use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use emojify_core::compositing::domain::emoji_sizing::HeightScaling;
use emojify_core::compositing::infrastructure::emoji_overlay_compositor::EmojiOverlayCompositor;
use emojify_core::config::EmojifyConfig;
use emojify_core::detection::infrastructure::json_face_analyzer::JsonFaceAnalyzer;
use emojify_core::emoji::domain::emoji_source::EmojiSource;
use emojify_core::emoji::infrastructure::emoji_asset_table::EmojiAssetTable;
use emojify_core::image_io::infrastructure::image_file_reader::ImageFileReader;
use emojify_core::image_io::infrastructure::image_file_writer::ImageFileWriter;
use emojify_core::pipeline::emojify_image_use_case::EmojifyImageUseCase;
use emojify_core::pipeline::notifier::LogNotifier;
use emojify_core::shared::constants::IMAGE_EXTENSIONS;

/// Overlay expression-matched emoji on the faces in a photo.
#[derive(Parser)]
#[command(name = "emojify")]
struct Cli {
    /// Input photo.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Face observations (JSON) exported by the face-analysis service.
    #[arg(long)]
    faces: PathBuf,

    /// Directory holding one PNG per emoji category (uses builtin emoji if omitted).
    #[arg(long)]
    emoji_dir: Option<PathBuf>,

    /// Edge length in pixels of the builtin emoji.
    #[arg(long)]
    emoji_size: Option<u32>,

    /// Smile probability above which a face counts as smiling.
    #[arg(long)]
    smile_threshold: Option<f32>,

    /// Eye-open probability below which an eye counts as closed.
    #[arg(long)]
    eye_open_threshold: Option<f32>,

    /// Emoji width relative to face width.
    #[arg(long)]
    scale_factor: Option<f64>,

    /// Scale emoji height once, keeping the emoji's aspect ratio exactly.
    #[arg(long)]
    preserve_aspect: bool,

    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = build_config(&cli)?;
    let emojis = build_emoji_source(&config)?;

    let mut use_case = EmojifyImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(JsonFaceAnalyzer::new(&cli.faces)),
        emojis,
        Box::new(EmojiOverlayCompositor::new(config.sizing())),
        config.classifier(),
        Box::new(LogNotifier),
    );
    let report = use_case.execute(&cli.input, &cli.output)?;

    for (i, category) in report.categories.iter().enumerate() {
        log::info!("Face {}: {category}", i + 1);
    }
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

/// File config first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<EmojifyConfig, Box<dyn std::error::Error>> {
    let mut config = EmojifyConfig::load(cli.config.as_deref())?;

    if let Some(dir) = &cli.emoji_dir {
        config.emoji_dir = Some(dir.clone());
    }
    if let Some(size) = cli.emoji_size {
        config.emoji_size = size;
    }
    if let Some(t) = cli.smile_threshold {
        config.smile_threshold = t;
    }
    if let Some(t) = cli.eye_open_threshold {
        config.eye_open_threshold = t;
    }
    if let Some(s) = cli.scale_factor {
        config.scale_factor = s;
    }
    if cli.preserve_aspect {
        config.height_scaling = HeightScaling::AspectPreserving;
    }

    config.validate()?;
    Ok(config)
}

fn build_emoji_source(
    config: &EmojifyConfig,
) -> Result<Box<dyn EmojiSource>, Box<dyn std::error::Error>> {
    match &config.emoji_dir {
        Some(dir) => {
            log::info!("Using emoji assets from {}", dir.display());
            Ok(Box::new(EmojiAssetTable::load_dir(dir)?))
        }
        None => {
            log::info!("Using builtin emoji ({0}x{0})", config.emoji_size);
            Ok(Box::new(EmojiAssetTable::builtin(config.emoji_size)))
        }
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !cli.faces.exists() {
        return Err(format!("Face observations not found: {}", cli.faces.display()).into());
    }
    if let Some(dir) = &cli.emoji_dir {
        if !dir.is_dir() {
            return Err(format!("Emoji directory not found: {}", dir.display()).into());
        }
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must have an image extension ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
