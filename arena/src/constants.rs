pub const DEFAULT_RUNS: u64 = 10_000;
pub const DEFAULT_P1_NAME: &str = "John";
pub const DEFAULT_P2_NAME: &str = "Adam";
pub const DEFAULT_P1_SEQUENCE: &str = "heads,tails,heads";
pub const DEFAULT_P2_SEQUENCE: &str = "heads,tails,tails";
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;
