use clap::Parser;

use crate::{
    browser::SystemBrowser,
    cli::Cli,
    command::{Command, Session},
    resolver::Resolver,
};

mod autotest;
mod browser;
mod cli;
mod command;
mod fetch;
mod journal;
mod logging;
mod resolver;
mod scrape;
mod strategy;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let command = Command::parse(&args.words)?;
    let resolver = Resolver::default();
    let mut stdout = std::io::stdout().lock();
    Session {
        resolver: &resolver,
        browser: &SystemBrowser,
        open_browser: !args.no_browser,
        out: &mut stdout,
    }
    .run(command)
}
