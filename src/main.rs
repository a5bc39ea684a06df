use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use glyphwrap::{DEFAULT_FONT_SIZE, DEFAULT_MAX_WIDTH, FontSource, GlyphWrapper, WrapOptions};
use tracing::{Level, debug, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wraps text from stdin according to its rendered font width.
#[derive(clap::Parser)]
#[command(name = "glyphwrap", version)]
struct Opts {
    /// The font size to use when calculating text width.
    #[arg(short = 's', long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: f32,
    /// The maximum line width, in the same unit as the font size.
    #[arg(short = 'w', long, default_value_t = DEFAULT_MAX_WIDTH)]
    width: f32,
    /// A font to use instead of the default, DejaVu Sans. TTF and OTF are supported.
    #[arg(long, value_name = "FILE")]
    ttf: Option<PathBuf>,
    /// Face to use when the font file is a collection.
    #[arg(long, default_value_t = 0)]
    face_index: u32,
}

fn setup_logging() {
    // stdout carries the wrapped text, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    setup_logging();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let source = match opts.ttf {
        Some(path) => FontSource::path(path).with_face_index(opts.face_index),
        None => FontSource::default(),
    };

    // Font loads while stdin is read.
    let pending = GlyphWrapper::new(source).load();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("when reading text from stdin")?;

    let wrapper = pending.wait().context("when loading the font")?;

    let options = WrapOptions::new(opts.font_size, opts.width);
    let lines = wrapper.wrap_with(&input, &options)?;
    if tracing::enabled!(Level::DEBUG) {
        let widths = wrapper.line_widths(&lines, options.font_size)?;
        debug!(lines = lines.len(), ?widths, "wrapped input");
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(lines.join("\n").as_bytes())
        .context("when writing to stdout")?;
    stdout.flush().context("when writing to stdout")?;
    Ok(())
}
