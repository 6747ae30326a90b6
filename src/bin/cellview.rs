use std::path::PathBuf;

use anyhow::Context as _;
use cellview::{MalformedLinePolicy, PngSink, Renderer, RendererConfig, Scheduler};
use clap::Parser;

/// Render cell locations from a CSV snapshot into a PNG, once per cycle.
#[derive(Parser, Debug)]
#[command(name = "cellview", version)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input CSV path.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Dot diameter in pixels.
    #[arg(long)]
    radius: Option<f64>,

    /// Cycles per second.
    #[arg(long)]
    rate: Option<f64>,

    /// Stop after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Skip malformed rows instead of failing the cycle.
    #[arg(long)]
    skip_malformed: bool,

    /// Run a single cycle and exit non-zero if it fails.
    #[arg(long, conflicts_with = "max_cycles")]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let once = cli.once;
    let cfg = build_config(cli)?;

    let mut renderer = Renderer::new(cfg).context("initialize renderer")?;
    let mut sink = PngSink::new(renderer.config().output_path.clone());

    if once {
        let stats = renderer
            .render_cycle(0, &mut sink)
            .context("render cycle")?;
        eprintln!("wrote {} ({} dots)", sink.path().display(), stats.drawn);
        return Ok(());
    }

    let scheduler = Scheduler::from_config(renderer.config());
    let stop = scheduler.stop_handle();
    ctrlc::set_handler(move || {
        tracing::info!("shutdown requested");
        stop.stop();
    })
    .context("install signal handler")?;

    tracing::info!(
        input = %renderer.config().input_path.display(),
        output = %sink.path().display(),
        rate = renderer.config().rate,
        "starting"
    );
    scheduler.run_renderer(&mut renderer, &mut sink);
    Ok(())
}

fn build_config(cli: Cli) -> anyhow::Result<RendererConfig> {
    let mut cfg = match &cli.config {
        Some(path) => RendererConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RendererConfig::default(),
    };

    if let Some(p) = cli.in_path {
        cfg.input_path = p;
    }
    if let Some(p) = cli.out {
        cfg.output_path = p;
    }
    if let Some(w) = cli.width {
        cfg.width = w;
    }
    if let Some(h) = cli.height {
        cfg.height = h;
    }
    if let Some(r) = cli.radius {
        cfg.radius = r;
    }
    if let Some(r) = cli.rate {
        cfg.rate = r;
    }
    if cli.max_cycles.is_some() {
        cfg.max_cycles = cli.max_cycles;
    }
    if cli.skip_malformed {
        cfg.on_malformed = MalformedLinePolicy::Skip;
    }

    cfg.validate().context("validate config")?;
    Ok(cfg)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cellview=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
