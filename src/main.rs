//! `imagecraft` CLI - interactive per-pixel image editing.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imagecraft::image::ResizeFilter;
use imagecraft::{Session, SessionConfig};

/// Load an image and edit it interactively with single-letter commands
/// (enter `M` for the menu).
#[derive(Parser, Debug)]
#[command(name = "imagecraft")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to load before the first command.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JPEG quality used when saving (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Resampling filter used when scaling down.
    #[arg(long, value_enum, default_value_t = ResizeArg::CatmullRom)]
    resize_filter: ResizeArg,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResizeArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeArg> for ResizeFilter {
    fn from(arg: ResizeArg) -> Self {
        match arg {
            ResizeArg::Nearest => Self::Nearest,
            ResizeArg::Triangle => Self::Triangle,
            ResizeArg::CatmullRom => Self::CatmullRom,
            ResizeArg::Gaussian => Self::Gaussian,
            ResizeArg::Lanczos3 => Self::Lanczos3,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the prompts
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("imagecraft={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = SessionConfig {
        jpeg_quality: args.quality,
        resize_filter: args.resize_filter.into(),
    };

    let mut session = Session::new(config).context("Invalid configuration")?;

    if let Some(input) = &args.input {
        session
            .load(input)
            .with_context(|| format!("Failed to load {}", input.display()))?;
    }

    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Console I/O failed")?;

    Ok(())
}
