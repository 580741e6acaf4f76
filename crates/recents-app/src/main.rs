mod cli;
mod scene;

use recents_common::types::Size;
use recents_config::RecentsConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(directive: &str) -> EnvFilter {
    let fallback = RecentsConfig::default().logging.level.directive();
    let directive: Directive = directive
        .parse()
        .or_else(|_| fallback.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

/// Install the subscriber. The returned handle swaps the filter once the
/// config level is known.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn run(args: cli::Args, mut config: RecentsConfig) -> recents_common::Result<()> {
    if args.direct {
        config.tile.use_direct_allocation = true;
    }

    let windows = scene::load_windows(args.windows.as_deref())?;
    let snapshot = scene::render_tile(&config, &windows, Size::new(args.width, args.height))?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn fail(e: recents_common::RecentsError) -> ! {
    tracing::error!("{e}");
    eprintln!("recents: {e}");
    std::process::exit(1);
}

fn main() {
    let args = cli::parse();

    // Logging starts at the default level so config loader warnings are
    // seen; the config level replaces it afterwards.
    let default_level = RecentsConfig::default().logging.level.directive().to_string();
    let handle = init_logging(args.log_level.as_deref().unwrap_or(&default_level));

    tracing::info!("recents v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let config = match recents_config::load_config_from(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(e.into()),
    };
    if args.log_level.is_none() {
        if let Err(e) = handle.reload(env_filter(config.logging.level.directive())) {
            tracing::warn!("could not apply configured log level: {e}");
        }
    }

    if let Err(e) = run(args, config) {
        fail(e);
    }
}
