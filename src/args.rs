use crate::output::args::OutputArgs;
use crate::profile::args::ProfileArgs;
use clap::Parser;

pub const USAGE: &str = "\
set next args: jmxPath, initLoad,increment,rampUp,stepDuration,numSteps
Args example: path/to/test.jmx 10,10,60,180,3
          or: path/to/test.jmx 10 10 60 180 3
initLoad,increment,rampUp,stepDuration,numSteps values must be gt 0";

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Regenerate the stepped load profile of a JMeter test plan",
    after_help = USAGE
)]
pub struct Args {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
