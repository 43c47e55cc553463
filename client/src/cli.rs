use arena::ArenaOptions;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version)]
#[clap(name = "coinsim")]
#[clap(about = "A simple coin flip simulator with a variable number of iterations", long_about = None)]
pub struct Cli {
    /// Sets the number of total games to play [default: 10000]
    #[clap(long)]
    pub runs: Option<u64>,

    /// The first player's name [default: John]
    #[clap(long = "p1name")]
    pub p1_name: Option<String>,

    /// The second player's name [default: Adam]
    #[clap(long = "p2name")]
    pub p2_name: Option<String>,

    /// An unspaced, comma-delimited list of the winning sequence for player 1 [default: heads,tails,heads]
    #[clap(long = "p1sequence")]
    pub p1_sequence: Option<String>,

    /// An unspaced, comma-delimited list of the winning sequence for player 2 [default: heads,tails,tails]
    #[clap(long = "p2sequence")]
    pub p2_sequence: Option<String>,

    /// Seeds the coins so that a simulation can be replayed
    #[clap(long)]
    pub seed: Option<u64>,

    /// Logs progress every N rounds, 0 disables progress logging
    #[clap(long)]
    pub progress_interval: Option<u64>,

    /// HOCON file with an `arena` block of options
    #[clap(short, long)]
    pub config: Option<String>,

    /// Prints the results as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

impl Cli {
    /// Overrides the loaded options with any flags given on the command line.
    pub fn apply(&self, options: ArenaOptions) -> ArenaOptions {
        ArenaOptions {
            runs: self.runs.unwrap_or(options.runs),
            p1_name: self.p1_name.clone().unwrap_or(options.p1_name),
            p2_name: self.p2_name.clone().unwrap_or(options.p2_name),
            p1_sequence: self.p1_sequence.clone().unwrap_or(options.p1_sequence),
            p2_sequence: self.p2_sequence.clone().unwrap_or(options.p2_sequence),
            seed: self.seed.or(options.seed),
            progress_interval: self.progress_interval.unwrap_or(options.progress_interval),
        }
    }
}
