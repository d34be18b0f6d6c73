//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler, validates paths,
//! runs the sort and prints the summary.

use anyhow::{Context, Result, bail};
use tracing::{debug, error};

use file_sorter::cli::Args;
use file_sorter::config::{Config, ConfigLocation, load_config, resolve_config_location};
use file_sorter::output as out;
use file_sorter::{ConsoleReporter, RunSummary, ShutdownFlag, Sorter};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location(&args);
        return Ok(());
    }

    // Config file first (before logging init, so problems are printed plainly), then CLI overrides.
    let mut cfg = match load_config(args.config.as_deref()) {
        Ok(Some((_, cfg))) => cfg,
        Ok(None) => Config::default(),
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);

    // Held until the walk has drained; dropping it flushes the file log.
    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    let shutdown = ShutdownFlag::new();
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            shutdown.request();
            out::print_warn("Received interrupt; stopping the walk and in-flight copies...");
        })
        .context("failed to install signal handler")?;
    }

    debug!("Starting file_sorter: {:?}", args);

    let result = sort(&cfg, &shutdown);

    drop(guard);
    result
}

fn sort(cfg: &Config, shutdown: &ShutdownFlag) -> Result<()> {
    let paths = cfg.validate().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let reporter = ConsoleReporter;
    let mut sorter = Sorter::new(&reporter)
        .dry_run(cfg.dry_run)
        .shutdown_flag(shutdown.clone());
    if let Some(n) = cfg.workers {
        sorter = sorter.workers(n);
    }
    let summary = sorter.run(&paths.source, &paths.output)?;
    print_summary(&summary, cfg.dry_run);

    if shutdown.is_requested() {
        bail!("sort interrupted by user; output may be incomplete");
    }
    Ok(())
}

fn print_summary(s: &RunSummary, dry_run: bool) {
    let done = if dry_run {
        format!("{} file(s) would be copied", s.planned)
    } else {
        format!("{} file(s) copied", s.copied)
    };
    let line = format!(
        "{done}; {} copy failure(s), {} unreadable director(ies), {} skipped",
        s.copy_failures + s.interrupted,
        s.walk_failures,
        s.skipped
    );
    if s.failures() == 0 {
        out::print_success(&line);
    } else {
        out::print_warn(&line);
    }
}

fn print_config_location(args: &Args) {
    match resolve_config_location(args.config.as_deref()) {
        Some(loc) => {
            let origin = match &loc {
                ConfigLocation::Flag(_) => "--config",
                ConfigLocation::Env(_) => "FILE_SORTER_CONFIG",
                ConfigLocation::Default(_) => "default location",
            };
            out::print_info(&format!("Config file ({origin}):\n  {}", loc.path().display()));
            if loc.path().exists() {
                out::print_info("The file exists and will be read.");
            } else if loc.is_explicit() {
                out::print_warn("The file does not exist; running would fail.");
            } else {
                out::print_info("No file there yet; built-in defaults and CLI flags are used.");
            }
        }
        None => out::print_error("Could not determine a config file location."),
    }
}
