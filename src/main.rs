use clap::Parser;

mod check;
mod cli;
mod command;
mod config;
mod event;
mod forge;
mod result;

use crate::{
    command::run_check::{self, Gate},
    forge::github::Github,
    result::Result,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("pr_gatekeeper")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let remote = cli_args.get_remote()?;
    let pr_number = cli_args.get_pr_number()?;
    let run_url = cli_args.get_run_url();
    let template_url = remote.pr_template_url();

    let forge = Github::new(remote)?;

    match run_check::execute(&forge, pr_number, &run_url, &template_url).await?
    {
        Gate::Proceed => Ok(()),
        Gate::Blocked => std::process::exit(1),
    }
}
