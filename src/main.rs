use std::io::{self, Write};

use clap::Parser;

use feedplus::cli::Cli;
use feedplus::config::Config;
use feedplus::errors::FeedplusResult;
use feedplus::feed::FeedBuilder;
use feedplus::source::ActivitiesClient;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FeedplusResult<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli)?;

    let source = ActivitiesClient::new(config.user_id.clone());
    let channel = FeedBuilder::new(source).build(&config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(channel.to_string().as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
