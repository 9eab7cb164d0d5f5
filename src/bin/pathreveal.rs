use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pathreveal", version)]
struct Cli {
    /// Reveal config JSON. Defaults to the built-in "hello" preset.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence covering one forward-and-back cycle.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print path statistics.
    Inspect,
    /// Print the effective configuration as JSON.
    DumpConfig,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Reveal progress in [0, 1].
    #[arg(long, conflicts_with = "frame")]
    progress: Option<f64>,

    /// Frame index on the ping-pong timeline (0-based).
    #[arg(long)]
    frame: Option<u64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames to write, starting at frame 0. Defaults to one full cycle.
    #[arg(long)]
    count: Option<u64>,

    /// File name prefix.
    #[arg(long, default_value = "frame_")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Number of forward-and-back cycles.
    #[arg(long, default_value_t = 1)]
    cycles: u64,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(config, args),
        Command::Frames(args) => cmd_frames(config, args),
        Command::Render(args) => cmd_render(config, args),
        Command::Inspect => cmd_inspect(config),
        Command::DumpConfig => cmd_dump_config(&config),
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<pathreveal::RevealConfig> {
    match path {
        Some(p) => pathreveal::RevealConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(pathreveal::RevealConfig::hello()),
    }
}

fn cmd_frame(config: pathreveal::RevealConfig, args: FrameArgs) -> anyhow::Result<()> {
    let mut sess = pathreveal::RevealSession::new(config)?;
    let frame = match (args.progress, args.frame) {
        (Some(p), _) => {
            anyhow::ensure!((0.0..=1.0).contains(&p), "--progress must be in [0, 1], got {p}");
            sess.render_progress(p)
        }
        (None, Some(f)) => sess.render_frame(pathreveal::FrameIndex(f)),
        (None, None) => sess.render_progress(1.0),
    };

    pathreveal::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(config: pathreveal::RevealConfig, args: FramesArgs) -> anyhow::Result<()> {
    let mut sess = pathreveal::RevealSession::new(config)?;
    let range = match args.count {
        Some(n) => pathreveal::FrameRange::new(pathreveal::FrameIndex(0), pathreveal::FrameIndex(n))?,
        None => sess.cycle_range(1),
    };

    let mut sink = pathreveal::PngSequenceSink::new(&args.out_dir).with_prefix(args.prefix);
    let stats = sess.render_range(range, &mut sink)?;
    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(config: pathreveal::RevealConfig, args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.cycles > 0, "--cycles must be > 0");
    let opts = pathreveal::FfmpegSinkOpts::new(&args.out)
        .with_overwrite(!args.no_overwrite)
        .with_background(config.background);
    let mut sink = pathreveal::FfmpegSink::new(opts);
    let mut sess = pathreveal::RevealSession::new(config)?;

    let range = sess.cycle_range(args.cycles);
    let stats = sess
        .render_range(range, &mut sink)
        .with_context(|| format!("render '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        stats.frames_rendered
    );
    Ok(())
}

fn cmd_inspect(config: pathreveal::RevealConfig) -> anyhow::Result<()> {
    let sess = pathreveal::RevealSession::new(config)?;
    let path = sess.path();
    let flat = sess.renderer().path();
    let b = path.bounds();

    println!("segments: {}", flat.len());
    println!("arc_length: {:.3}", path.total_length());
    println!("polyline_length: {:.3}", flat.polyline_length());
    println!(
        "bounds: x0={:.2} y0={:.2} x1={:.2} y1={:.2}",
        b.x0, b.y0, b.x1, b.y1
    );
    println!("cycle_frames: {}", sess.cycle_range(1).len_frames());
    Ok(())
}

fn cmd_dump_config(config: &pathreveal::RevealConfig) -> anyhow::Result<()> {
    println!("{}", config.to_json_pretty()?);
    Ok(())
}
