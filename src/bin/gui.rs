use std::path::PathBuf;

use cantor_explorer::{AppConfig, logging, run_gui};
use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "gui")]
#[command(about = "Interactive Cantor set construction viewer")]
struct Args {
    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            logging::init("info");
            error!(error = %err, "invalid configuration");
            return Err(err.into());
        }
    };

    logging::init(&config.log_level);

    run_gui(&config).inspect_err(|err| error!(error = %err, "viewer failed"))
}
