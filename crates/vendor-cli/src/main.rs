//! Vendor Panel CLI.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use vendor_cli::commands::{open_store, run_list, run_search, run_show, run_stats};
use vendor_cli::logging::{LogConfig, LogFormat, init_logging};
use vendor_cli::settings::{load_config, render_config, save_config, settings_path};
use vendor_model::Locale;

mod cli;
mod summary;

use crate::cli::{Cli, Command, ConfigArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_config, print_detail, print_listing, print_stats};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let loaded = load_config(cli.config.as_deref())?;
    let locale = Locale::from(cli.lang);
    match &cli.command {
        Command::List(args) => {
            let mut store = open_store(loaded.config, cli.data.as_deref())?;
            print_listing(&run_list(&mut store, usize::from(args.pages)), locale);
        }
        Command::Search(args) => {
            let mut store = open_store(loaded.config, cli.data.as_deref())?;
            let listing = run_search(&mut store, &args.term, usize::from(args.page.pages));
            print_listing(&listing, locale);
        }
        Command::Show(args) => {
            let mut store = open_store(loaded.config, cli.data.as_deref())?;
            let detail = run_show(&mut store, &args.id, args.from.into())?;
            print_detail(&detail, locale);
        }
        Command::Stats => {
            let store = open_store(loaded.config, cli.data.as_deref())?;
            print_stats(&run_stats(&store));
        }
        Command::Config(ConfigArgs { save }) => {
            let rendered = render_config(&loaded.config)?;
            print_config(&loaded, &rendered);
            if *save {
                let path = settings_path().context("no platform settings directory")?;
                save_config(&loaded.config, &path)?;
                println!("# Saved to {}", path.display());
            }
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
