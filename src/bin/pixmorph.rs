use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "pixmorph", version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every pixel of an image as (r,g,b) triplets.
    Print(PrintArgs),
    /// Mirror an image and save the result.
    Flip(FlipArgs),
    /// Convert an image to grayscale and save the result.
    Gray(GrayArgs),
    /// Resize an image (nearest neighbor) and show input then output.
    Scale(ScaleArgs),
    /// Morph an image into another one (or into its grayscale version) in N steps.
    Morph(MorphArgs),
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Input image (.ppm text, or any format the image crate reads).
    input: PathBuf,
}

#[derive(Parser, Debug)]
struct FlipArgs {
    /// Input image.
    input: PathBuf,

    /// Mirror axis.
    #[arg(long, value_enum, default_value_t = Axis::Horizontal)]
    axis: Axis,

    /// Output image path; the extension picks the format.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GrayArgs {
    /// Input image.
    input: PathBuf,

    /// Output image path; the extension picks the format.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ScaleArgs {
    /// Input image.
    input: PathBuf,

    /// Output width in pixels.
    width: u32,

    /// Output height in pixels.
    height: u32,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct MorphArgs {
    /// Source image (first frame).
    source: PathBuf,

    /// Number of frames to render.
    steps: u32,

    /// Target image. Defaults to the grayscale version of the source.
    #[arg(long)]
    target: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Where frames go.
    #[arg(long, value_enum, default_value_t = RendererChoice::Text)]
    renderer: RendererChoice,

    /// Frame directory (png) or video file (mp4).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Playback settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Override the pause after each morph frame, in milliseconds.
    #[arg(long)]
    pause_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RendererChoice {
    /// Print pixel triplets to stdout.
    Text,
    /// Write numbered PNG frames into a directory.
    Png,
    /// Encode an MP4 with the system ffmpeg.
    Mp4,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Print(args) => cmd_print(args),
        Command::Flip(args) => cmd_flip(args),
        Command::Gray(args) => cmd_gray(args),
        Command::Scale(args) => cmd_scale(args),
        Command::Morph(args) => cmd_morph(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn load(path: &Path) -> anyhow::Result<pixmorph::Image> {
    pixmorph::load_image(path).with_context(|| format!("load image '{}'", path.display()))
}

fn save(path: &Path, img: &pixmorph::Image) -> anyhow::Result<()> {
    pixmorph::save_image(path, img)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let img = load(&args.input)?;
    let stdout = std::io::stdout();
    img.write_text(&mut stdout.lock())
        .context("write pixels to stdout")?;
    Ok(())
}

fn cmd_flip(args: FlipArgs) -> anyhow::Result<()> {
    let img = load(&args.input)?;
    let out = match args.axis {
        Axis::Horizontal => pixmorph::flip_horizontal(&img),
        Axis::Vertical => pixmorph::flip_vertical(&img),
    };
    save(&args.out, &out)
}

fn cmd_gray(args: GrayArgs) -> anyhow::Result<()> {
    let img = load(&args.input)?;
    save(&args.out, &pixmorph::grayscale(&img))
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    // An mp4 stream has one frame size; scale shows two.
    if matches!(args.output.renderer, RendererChoice::Mp4) {
        anyhow::bail!(
            "--renderer mp4 is not supported for scale: input and output sizes differ; use text or png"
        );
    }
    let img = load(&args.input)?;
    let settings = playback_settings(&args.output)?;
    let mut renderer = make_renderer(&args.output, &settings)?;
    let out = pixmorph::show_scaled(
        &img,
        args.width,
        args.height,
        renderer.as_mut(),
        &settings,
    )?;
    tracing::info!(width = out.width(), height = out.height(), "scaled");
    Ok(())
}

fn cmd_morph(args: MorphArgs) -> anyhow::Result<()> {
    let source = load(&args.source)?;
    let target = match &args.target {
        Some(path) => load(path)?,
        None => pixmorph::grayscale(&source),
    };
    let settings = playback_settings(&args.output)?;
    let mut renderer = make_renderer(&args.output, &settings)?;
    let frames = pixmorph::play_morph(
        &source,
        &target,
        args.steps,
        renderer.as_mut(),
        &settings,
    )?;
    if let Some(out) = &args.output.out {
        eprintln!("wrote {frames} frames to {}", out.display());
    }
    Ok(())
}

fn playback_settings(args: &OutputArgs) -> anyhow::Result<pixmorph::PlaybackSettings> {
    let mut settings = match &args.settings {
        Some(path) => pixmorph::PlaybackSettings::from_json_file(path)?,
        None => pixmorph::PlaybackSettings::default(),
    };
    if let Some(ms) = args.pause_ms {
        settings.frame_pause_ms = ms;
    }
    settings.validate()?;
    Ok(settings)
}

fn make_renderer(
    args: &OutputArgs,
    settings: &pixmorph::PlaybackSettings,
) -> anyhow::Result<Box<dyn pixmorph::Renderer>> {
    let out = || {
        args.out
            .clone()
            .with_context(|| format!("--renderer {:?} requires --out", args.renderer))
    };
    Ok(match args.renderer {
        RendererChoice::Text => Box::new(pixmorph::TextRenderer::new(std::io::stdout())),
        RendererChoice::Png => Box::new(pixmorph::PngSequenceRenderer::new(out()?)),
        RendererChoice::Mp4 => Box::new(pixmorph::FfmpegRenderer::new(
            pixmorph::FfmpegConfig::new(out()?, settings.frame_pause()),
        )?),
    })
}
