use clap::Parser;
use pricedaily::cli::Cli;
use pricedaily::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    env_logger::Builder::new()
        .parse_filters(config.rust_log.as_deref().unwrap_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
