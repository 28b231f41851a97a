//! Subcommand implementations for the codex binary.

use std::io::Write;

use anyhow::{bail, Context};
use codex_core::config::Config;
use codex_core::{check_catalog, EntityKind, RecordLoader};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, ServeArgs};

/// Resolve configuration, install logging and dispatch the subcommand.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }

    init_tracing(cli.debug, &config.log.filter);
    tracing::debug!(?config, "resolved configuration");
    config.validate()?;

    match cli.command {
        None => serve(config, ServeArgs::default()).await,
        Some(Commands::Serve(args)) => serve(config, args).await,
        Some(Commands::Show(args)) => show(
            &config.loader(),
            args.kind.into(),
            args.id.as_deref(),
            &mut std::io::stdout().lock(),
        ),
        Some(Commands::Check) => check(&config.loader(), &mut std::io::stdout().lock()),
    }
}

/// Logs go to stderr so `show` output stays machine-readable.
fn init_tracing(debug: bool, filter: &str) {
    let default = if debug { "debug" } else { filter };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

async fn serve(mut config: Config, args: ServeArgs) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    codex_server::run(&config)
        .await
        .with_context(|| format!("serving on {}", config.server.bind_addr()))
}

/// Write one normalized record to `out` as pretty JSON.
pub fn show(
    loader: &RecordLoader,
    kind: EntityKind,
    id: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let value = loader.load(kind, id)?;
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

/// Load every indexed record and write a summary to `out`.
pub fn check(loader: &RecordLoader, out: &mut impl Write) -> anyhow::Result<()> {
    let report = check_catalog(loader);

    writeln!(out, "data dir: {}", loader.base_dir().display())?;
    writeln!(out, "loaded:   {}", report.loaded)?;
    for missing in &report.missing {
        writeln!(out, "missing:  {missing}")?;
    }
    for failure in &report.failures {
        writeln!(out, "error:    {failure}")?;
    }

    if !report.is_ok() {
        bail!("{} file(s) failed to load", report.failures.len());
    }
    Ok(())
}
