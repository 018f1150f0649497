use std::io::Write;
use std::time::Instant;

use super::stats::PatchStats;
use crate::error::LoadStepError;
use crate::output::args::OutputArgs;
use crate::plan::errors::PatchError;
use crate::plan::{PlanPatcher, read_plan};
use crate::profile::LoadProfile;
use crate::profile::steps::{Nonce, plan_steps, render_profile};
use crate::writer::write_atomic;

/// Regenerate the load profile of `profile.target_path()` and persist it.
pub fn patch_plan(
    profile: &LoadProfile,
    output: &OutputArgs,
    nonce: &mut impl Nonce,
) -> Result<PatchStats, LoadStepError> {
    let start = Instant::now();
    let path = profile.target_path();
    let source_name = path.display().to_string();

    log::debug!("Reading plan {}", source_name);
    let original = read_plan(path)?;

    let block = render_profile(profile, nonce);
    log::debug!(
        "Rendered {} steps ({} bytes)",
        profile.step_count(),
        block.len()
    );

    let patched = PlanPatcher::jmeter().patch(
        &source_name,
        &original,
        &block,
        profile.total_duration_seconds(),
    )?;

    let bytes_written = if output.dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(patched.content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| PatchError::FileWriteFailure {
                path: "<stdout>".to_string(),
                reason: e.to_string(),
            })?;
        0
    } else {
        write_atomic(path, &patched.content)?
    };

    Ok(PatchStats {
        plan: path.to_path_buf(),
        steps: plan_steps(profile),
        total_duration_seconds: profile.total_duration_seconds(),
        hold_fields: patched.hold_fields,
        bytes_written,
        dry_run: output.dry_run,
        elapsed: start.elapsed(),
    })
}
