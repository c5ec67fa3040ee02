pub mod bundle;
pub mod cli;
pub mod config;
pub mod model;
pub mod options;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use model::{Artifact, Content, RenderedHeader};
pub use options::{Options, PartialOptions, resolve};
pub use processor::{generate, render_artifact};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> anyhow::Result<()> {
    run_with(cli::Cli::parse()).map(|_| ())
}

pub fn run_with(args: cli::Cli) -> anyhow::Result<processor::Summary> {
    init_logging(args.verbose);

    // 1. ── Options ────────────────────────────────────────────────────
    let from_file = match &args.config {
        Some(path) => config::load(path)?
            .into_partial()
            .with_context(|| format!("Applying {}", path.display()))?,
        None => PartialOptions::default(),
    };
    let options = resolve(from_file.merge(args.partial_options()?));

    // 2. ── Sources & sink ─────────────────────────────────────────────
    let mut source = bundle::FsSource::new(&args.input);
    let out_dir = args
        .output
        .clone()
        .unwrap_or_else(|| source.default_out_dir());
    if source.overlaps(&out_dir) {
        source = source.skipping(options.header_extension.clone());
    }
    let mut sink = bundle::FsSink::new(out_dir, args.dry_run);

    // 3. ── Generate ───────────────────────────────────────────────────
    processor::run(&options, &source, &mut sink)
        .with_context(|| format!("Embedding {}", args.input.display()))
}
