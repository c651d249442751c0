use std::path::PathBuf;

use clap::Parser;

use estatebook::config::{Config, DEFAULT_CONFIG_PATH};
use estatebook::{cli, logging};

#[derive(Debug, Parser)]
#[command(name = "estatebook")]
#[command(about = "Address book for buyers and sellers of real estate")]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address book data file (overrides the path in the preferences file)
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let config = match Config::load_or_init(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: could not write {}: {}", args.config.display(), e);
            Config::default()
        }
    };

    logging::init(&config.log_level, args.verbose);
    tracing::info!(config = %args.config.display(), "starting estatebook");
    if args.verbose {
        tracing::debug!("config: {:?}", config);
    }

    cli::run(&config, args.data);
}
