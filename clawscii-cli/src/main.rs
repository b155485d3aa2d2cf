use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "clawscii", version)]
struct Cli {
    /// Log per-frame detail.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every frame of an animation set into tier directories.
    Render(RenderArgs),
    /// Print a single frame to stdout.
    Frame(FrameArgs),
    /// Check a rendered stream for missing frames and compare tiers.
    Verify(VerifyArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Animation config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output root; frames land in `<out>/<name>/<tier>/`.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Animation config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    index: u32,
}

#[derive(Parser, Debug)]
struct VerifyArgs {
    /// Stream directory holding one subdirectory per tier.
    #[arg(long)]
    dir: PathBuf,

    /// Expected frame count per tier.
    #[arg(long)]
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Verify(args) => cmd_verify(args),
    }
}

fn config_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = clawscii::AnimationConfig::from_path(&args.config)?;
    let seq = cfg.build(config_dir(&args.config))?;

    let threading = clawscii::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let mut sink = clawscii::DirectorySink::new(&args.out);
    let report = seq.render_to_sink(&mut sink, &threading)?;

    for failure in &report.failures {
        eprintln!(
            "failed frame {} tier '{}': {}",
            failure.frame.number(),
            failure.tier,
            failure.error
        );
    }
    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} frame writes failed",
            report.failures.len(),
            report.failures.len() + report.writes_ok as usize
        );
    }

    eprintln!(
        "wrote {} frames x {} tiers to {}",
        report.frames_total,
        cfg.tiers.len(),
        args.out.join(&cfg.name).display()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = clawscii::AnimationConfig::from_path(&args.config)?;
    if args.index >= cfg.frames {
        anyhow::bail!(
            "frame index {} out of range (animation has {} frames)",
            args.index,
            cfg.frames
        );
    }
    let seq = cfg.build(config_dir(&args.config))?;
    let frame = seq.render_frame(clawscii::FrameIndex(args.index));
    println!("{frame}");
    Ok(())
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let mut tiers = Vec::new();
    for entry in std::fs::read_dir(&args.dir)
        .with_context(|| format!("read stream dir '{}'", args.dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            tiers.push(entry.path());
        }
    }
    tiers.sort();
    if tiers.is_empty() {
        anyhow::bail!("no tier directories under '{}'", args.dir.display());
    }

    let mut gaps = 0usize;
    let mut digests = Vec::with_capacity(tiers.len());
    for tier_dir in &tiers {
        let name = tier_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let missing = clawscii::missing_frames(tier_dir, args.frames)?;
        let digest = tier_digest(tier_dir, args.frames)?;

        eprintln!("tier {name}:");
        eprintln!("    missing:     {}", missing.len());
        if !missing.is_empty() {
            eprintln!("    frames:      {missing:?}");
        }
        eprintln!("    sha256:      {digest}");
        gaps += missing.len();
        digests.push(digest);
    }

    let identical = digests.windows(2).all(|w| w[0] == w[1]);
    eprintln!("tiers identical: {}", if identical { "yes" } else { "no" });

    if gaps > 0 {
        anyhow::bail!("{gaps} frame(s) missing across {} tier(s)", tiers.len());
    }
    Ok(())
}

/// Digest of all present frames in order; each frame is prefixed by its file name.
fn tier_digest(tier_dir: &Path, frames: u32) -> anyhow::Result<String> {
    let mut hasher = sha2::Sha256::new();
    for number in 1..=frames {
        let name = clawscii::frame_file_name(number);
        let path = tier_dir.join(&name);
        if !path.is_file() {
            continue;
        }
        let bytes =
            std::fs::read(&path).with_context(|| format!("read frame '{}'", path.display()))?;
        hasher.update(name.as_bytes());
        hasher.update(&bytes);
    }
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}
