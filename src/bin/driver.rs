//! Pipeline Driver Binary
//!
//! One parameterized entry point for the survey encode + cluster runs.
//!
//! Commands: run <config.json>, encode <v,v,...> [--widths w,w,...] [--reverse]

use surveybits::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::Driver::run()
}
