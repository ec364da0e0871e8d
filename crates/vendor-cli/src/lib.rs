//! Library components of the Vendor Panel CLI.

pub mod commands;
pub mod logging;
pub mod settings;
