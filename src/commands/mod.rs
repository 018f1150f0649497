pub mod patch;
pub mod stats;

pub use stats::PatchStats;

use crate::args::Args;
use crate::error::LoadStepError;
use crate::profile::LoadProfile;
use crate::profile::steps::WallClockNonce;
use crate::visuals;

/// Parse → generate → patch → write, then report.
pub fn run(args: &Args) -> Result<PatchStats, LoadStepError> {
    let profile = LoadProfile::from_args(&args.profile)?;
    log::info!(
        "Profile for {}: {:?}, total duration {}s",
        profile.target_path().display(),
        profile.values(),
        profile.total_duration_seconds()
    );

    let stats = patch::patch_plan(&profile, &args.output, &mut WallClockNonce::default())?;

    // stdout carries the document on a dry run
    if args.output.dry_run {
        return Ok(stats);
    }
    if args.output.stats {
        visuals::print_detailed(&stats);
    }
    if !args.output.quiet {
        visuals::print_summary(&stats);
    }

    Ok(stats)
}
