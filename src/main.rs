use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use loadstep::args::{Args, USAGE};
use loadstep::commands;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            println!("{}", e);
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match commands::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_usage() {
                println!("{}", USAGE);
                println!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
