//! CLI argument definitions for the vendor panel.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vendor_core::SelectionOrigin;
use vendor_model::Locale;

#[derive(Parser)]
#[command(
    name = "vendor-panel",
    version,
    about = "Vendor Panel - browse and search the vendor catalog",
    long_about = "Browse, search and inspect a bilingual (Persian/English) vendor catalog.\n\n\
                  Records come from a JSON file (--data) or the bundled sample set.\n\
                  Paging, search and selection follow the panel's list and map views."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow phone numbers and search terms in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// JSON file with the vendor records (default: bundled sample).
    #[arg(long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Display language for names and addresses.
    #[arg(long = "lang", value_enum, default_value = "fa", global = true)]
    pub lang: LangArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List records page by page.
    List(PageArgs),

    /// Search brand, owner, address, username and phone number.
    Search(SearchArgs),

    /// Select one record and show its details and map focus.
    Show(ShowArgs),

    /// Show catalog statistics.
    Stats,

    /// Show the effective settings and where they came from.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct PageArgs {
    /// Number of pages to reveal.
    #[arg(long = "pages", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub pages: u16,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Search term. Matching is case-insensitive and not trimmed.
    #[arg(value_name = "TERM")]
    pub term: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Vendor id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// View the selection is made from.
    #[arg(long = "from", value_enum, default_value = "list")]
    pub from: OriginArg,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the effective settings to the platform settings file.
    #[arg(long = "save")]
    pub save: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OriginArg {
    List,
    Map,
}

impl From<OriginArg> for SelectionOrigin {
    fn from(value: OriginArg) -> Self {
        match value {
            OriginArg::List => SelectionOrigin::List,
            OriginArg::Map => SelectionOrigin::Map,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LangArg {
    Fa,
    En,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Fa => Locale::Fa,
            LangArg::En => Locale::En,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
