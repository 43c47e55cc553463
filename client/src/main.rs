mod cli;

use anyhow::Result;
use arena::{aggregate_with_progress, ArenaOptions};
use clap::Parser;
use cli::Cli;
use coinflip::FairCoin;
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

const CONFIG_SCOPE: &str = "arena";
const ENV_PREFIX: &str = "COINSIM";

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(config_path) => ConfigLoader::new(
            config_path.relative_to_cwd()?,
            CONFIG_SCOPE.to_string(),
            ENV_PREFIX.to_string(),
        )?,
        None => ConfigLoader::from_env(CONFIG_SCOPE.to_string(), ENV_PREFIX.to_string())?,
    };

    let options: ArenaOptions = cli.apply(config.load()?);

    info!("{:?}", options);

    let game_config = options.game_config()?;
    let mut coin = FairCoin::from_seed(options.seed);

    let stats = aggregate_with_progress(&game_config, &mut coin, options.progress_interval);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats);
    }

    Ok(())
}
