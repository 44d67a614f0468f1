use std::{
    io::Write as _,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "breathpace", version, about = "Looping breathing-pacer guide")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a sequence and list its steps.
    Check(CheckArgs),
    /// Print the share link for the resolved settings.
    Link(SourceArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render whole cycles as an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Run the pacer live in the terminal.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Sequence text, e.g. "in 4 hold 7 out 8".
    sequence: String,
}

/// Where pacer settings come from. Later sources win: config file, then link, then flags.
#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Share link (full URL or query string).
    #[arg(long)]
    link: Option<String>,

    /// Sequence text, e.g. "in 4 hold 7 out 8".
    #[arg(long)]
    sequence: Option<String>,

    /// Colour scheme.
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Show or hide the sequence footer.
    #[arg(long)]
    controls: Option<bool>,

    /// Show the completed-cycle counter.
    #[arg(long)]
    cycle_count: bool,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Time in seconds since playback started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Number of cycles to render.
    #[arg(long, default_value_t = 1.0)]
    cycles: f64,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Stop after this many cycles; runs until interrupted when omitted.
    #[arg(long)]
    cycles: Option<f64>,

    /// Redraw interval in milliseconds.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for breathpace::Theme {
    fn from(value: ThemeChoice) -> Self {
        match value {
            ThemeChoice::Dark => Self::Dark,
            ThemeChoice::Light => Self::Light,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Link(args) => cmd_link(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(src: &SourceArgs) -> anyhow::Result<breathpace::PacerConfig> {
    let mut cfg = match &src.config {
        Some(path) => breathpace::PacerConfig::load(path)?,
        None => breathpace::PacerConfig::default(),
    };
    if let Some(link) = &src.link {
        cfg.apply_link(&breathpace::ShareLink::parse(link));
    }
    if let Some(sequence) = &src.sequence {
        cfg.sequence = sequence.clone();
    }
    if let Some(theme) = src.theme {
        cfg.theme = theme.into();
    }
    if let Some(controls) = src.controls {
        cfg.show_controls = controls;
    }
    if src.cycle_count {
        cfg.show_cycle_count = true;
    }
    if let Some(width) = src.width {
        cfg.width = width;
    }
    if let Some(height) = src.height {
        cfg.height = height;
    }
    Ok(cfg)
}

fn parse_configured(cfg: &breathpace::PacerConfig) -> anyhow::Result<breathpace::Sequence> {
    breathpace::parse_sequence(&cfg.sequence)
        .with_context(|| format!("invalid sequence '{}'", cfg.sequence))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let seq = breathpace::parse_sequence(&args.sequence)
        .with_context(|| format!("invalid sequence '{}'", args.sequence))?;
    for (i, step) in seq.steps().iter().enumerate() {
        println!("{i:>3}  {:<7} {}s", step.kind.label(), step.duration);
    }
    println!("total {}s", seq.total_duration());
    Ok(())
}

fn cmd_link(args: SourceArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args)?;
    let seq = parse_configured(&cfg)?;
    println!("{}", cfg.to_link().with_sequence(&seq));
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.source)?;
    let seq = parse_configured(&cfg)?;
    let opts = cfg.scene_options()?;

    let rasterizer = breathpace::Rasterizer::new();
    let frame = breathpace::render_frame(&seq, args.time, &opts, &rasterizer)?;
    breathpace::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = resolve_config(&args.source)?;
    if let Some(fps) = args.fps {
        cfg.fps = fps;
    }
    let seq = parse_configured(&cfg)?;
    let opts = cfg.scene_options()?;
    let mp4 = breathpace::Mp4Opts {
        fps: cfg.fps()?,
        cycles: args.cycles,
        overwrite: true,
    };

    let rasterizer = breathpace::Rasterizer::new();
    let stats = breathpace::render_to_mp4(&seq, &args.out, &opts, &mp4, &rasterizer)?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames);
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.source)?;
    let mut pacer = breathpace::Pacer::new(cfg.to_link()).with_ease(cfg.ease);

    let clock = Instant::now();
    let link = pacer.start(0.0)?;
    eprintln!("share: {link}");

    let tick = Duration::from_millis(args.tick_ms.max(10));
    let mut out = std::io::stdout().lock();
    loop {
        let now = clock.elapsed().as_secs_f64();
        let Some(reading) = pacer.reading(now) else {
            break;
        };
        if let Some(limit) = args.cycles
            && now >= limit * reading.state.total_duration
        {
            pacer.stop();
            break;
        }

        write!(
            out,
            "\r{:<7} {:>3}s  {}  cycle {}",
            reading.kind.label(),
            reading.state.step_remaining().ceil() as u64,
            progress_bar(reading.state.cycle_progress(), 30),
            reading.cycle.saturating_add(1)
        )?;
        out.flush()?;
        std::thread::sleep(tick);
    }
    writeln!(out)?;
    Ok(())
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
