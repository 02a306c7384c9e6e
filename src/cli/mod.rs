//! CLI command handling

use clap::{Args, Parser, Subcommand};

use crate::handler::{self, Schema};
use crate::sources::{CoinrankingSource, PriceSource, SyntheticSource};

/// Daily price summaries from hourly price history
#[derive(Parser)]
#[command(name = "pricedaily")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily direction of change and running highs/lows
    Schema1(RunArgs),

    /// Daily average, variance and volatility alert
    Schema2(RunArgs),

    /// Both schemas (default)
    All(RunArgs),
}

#[derive(Args, Default)]
struct RunArgs {
    /// Use generated prices instead of fetching FETCH_URL
    #[arg(long)]
    synthetic: bool,

    /// Print the handler response object instead of the bare records
    #[arg(long)]
    response: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => run_schemas(&Schema::ALL, &RunArgs::default()),
            Some(Commands::All(args)) => run_schemas(&Schema::ALL, &args),
            Some(Commands::Schema1(args)) => run_schemas(&[Schema::Schema1], &args),
            Some(Commands::Schema2(args)) => run_schemas(&[Schema::Schema2], &args),
        }
    }
}

fn source(synthetic: bool) -> Box<dyn PriceSource> {
    if synthetic {
        Box::new(SyntheticSource::new())
    } else {
        Box::new(CoinrankingSource::new())
    }
}

/// Run each schema against a freshly fetched price history
fn run_schemas(schemas: &[Schema], args: &RunArgs) -> anyhow::Result<()> {
    let source = source(args.synthetic);

    for &schema in schemas {
        if args.response {
            let response = handler::handle(schema, source.as_ref());
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            let observations = source.observations()?;
            println!("{}", handler::render(schema, observations, true)?);
        }
    }
    Ok(())
}
