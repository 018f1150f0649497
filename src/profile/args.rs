use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    #[arg(value_name = "PLAN", help = "Path to the .jmx test plan to rewrite in place")]
    pub plan: PathBuf,

    #[arg(
        value_name = "VALUES",
        allow_negative_numbers = true,
        help = "initLoad,increment,rampUp,stepDuration,numSteps (comma or space separated)"
    )]
    pub values: Vec<String>,

    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Read the profile values from a toml/yaml/json file instead"
    )]
    pub config: Option<PathBuf>,
}

/// Flatten positional values into profile tokens.
///
/// Each value is split on `,`, so `10,10,60,180,3`, `10 10 60 180 3` and any
/// mix of the two yield the same five tokens.
pub fn split_values(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(|token| token.trim().to_string())
        .collect()
}
