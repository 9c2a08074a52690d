use anyhow::Result;

use crate::args::Cli;
use crate::tui;

pub fn run(_cli: Cli) -> Result<()> {
    tui::run()
}
