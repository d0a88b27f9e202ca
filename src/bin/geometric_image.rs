//! Geometric Test Image Generator
//!
//! Writes the reference scene (red rectangle, blue circle, green line on a
//! white background) as a raw frame.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin geometric_image -- --width 640 --height 480 --format i420
//! cargo run --bin geometric_image -- --width 640 --height 480 --all --output-dir frames
//! ```
//!
//! Frames land in `<output-dir>/<stem>.<ext>` with `ext` one of `rgb`,
//! `yuyv`, `uyvy`, `yvyu`, `i420`. The output directory defaults to the
//! system temp dir. Set `RUST_LOG=debug` for more detail.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use testcard::buffer::DEFAULT_STEM;
use testcard::{ChromaSiting, FileSink, Generator, ImageSink, PixelFormat};

#[derive(Debug, Parser)]
#[command(version, about = "Create a geometric test image in raw RGB or YUV formats.")]
struct Args {
    /// Width of the image in pixels
    #[arg(long)]
    width: u32,

    /// Height of the image in pixels
    #[arg(long)]
    height: u32,

    /// Output format: rgb24, yuyv, uyvy, yvyu or i420
    #[arg(long, default_value = "rgb24")]
    format: PixelFormat,

    /// Write every supported format instead of --format
    #[arg(long)]
    all: bool,

    /// Directory the frames are written to [default: system temp dir]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// File name without extension
    #[arg(long, default_value = DEFAULT_STEM)]
    stem: String,

    /// Chroma subsampling policy: reference, average or leading
    #[arg(long, default_value = "reference")]
    chroma: ChromaSiting,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let dir = args.output_dir.unwrap_or_else(std::env::temp_dir);
    let mut sink = FileSink::new(dir, args.stem);
    let generator = Generator::new().with_chroma_siting(args.chroma);

    let formats: Vec<PixelFormat> = if args.all {
        PixelFormat::ALL.to_vec()
    } else {
        vec![args.format]
    };

    for format in formats {
        let frame = generator
            .generate(args.width, args.height, format)
            .with_context(|| format!("failed to render {}x{} {}", args.width, args.height, format))?;
        let path = sink.path_for(format);
        sink.write_image(format, &frame)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            "Image saved as {} format: {}",
            format.name().to_uppercase(),
            path.display()
        );
    }

    Ok(())
}
