mod app;
mod cli;
mod config;
mod effects;
mod render;

use clap::Parser;

pub fn run_app() -> anyhow::Result<()> {
    app::run_app(cli::Cli::parse())
}
