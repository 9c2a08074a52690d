use clap::Parser;

/// The dashboard takes no runtime configuration: the quote list and the
/// 25-minute session length are compile-time constants.
#[derive(Parser)]
#[command(name = "momentum")]
#[command(about = "A momentum dashboard for your terminal", long_about = None)]
#[command(version)]
pub struct Cli {}
