pub mod errors;
pub mod locator;

use errors::PatchError;
use locator::{PatternLocator, RegionLocator};
use std::ops::Range;
use std::path::Path;

/// Result of patching a test plan in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedPlan {
    pub content: String,
    pub hold_fields: usize,
}

/// Replaces the load-profile region and the `Hold` fields of a test plan.
pub struct PlanPatcher<P = PatternLocator, H = PatternLocator> {
    profile_region: P,
    hold_field: H,
}

impl PlanPatcher {
    /// Patcher for JMeter plans using a throughput shaping timer.
    pub fn jmeter() -> Self {
        Self::new(PatternLocator::load_profile(), PatternLocator::hold_field())
    }
}

impl Default for PlanPatcher {
    fn default() -> Self {
        Self::jmeter()
    }
}

impl<P: RegionLocator, H: RegionLocator> PlanPatcher<P, H> {
    pub fn new(profile_region: P, hold_field: H) -> Self {
        Self {
            profile_region,
            hold_field,
        }
    }

    /// Splice `profile_block` over the load-profile region and write
    /// `total_duration` into every `Hold` field. Replacement text is inserted
    /// verbatim.
    pub fn patch(
        &self,
        source_name: &str,
        original: &str,
        profile_block: &str,
        total_duration: u64,
    ) -> Result<PatchedPlan, PatchError> {
        let region = self
            .profile_region
            .locate_first(original)
            .ok_or_else(|| PatchError::RegionNotFound(source_name.to_string()))?;

        let mut content = String::with_capacity(original.len() + profile_block.len());
        content.push_str(&original[..region.start]);
        content.push_str(profile_block);
        content.push_str(&original[region.end..]);

        let hold_ranges = self.hold_field.locate_all(&content);
        let hold_fields = hold_ranges.len();
        if hold_fields == 0 {
            log::warn!("No Hold duration field found in {}", source_name);
        } else {
            let field = format!("<stringProp name=\"Hold\">{}</stringProp>", total_duration);
            content = splice_all(&content, &hold_ranges, &field);
        }

        Ok(PatchedPlan {
            content,
            hold_fields,
        })
    }
}

/// Replace each of the ordered, non-overlapping `ranges` with `replacement`.
fn splice_all(text: &str, ranges: &[Range<usize>], replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * replacement.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

pub fn read_plan(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|e| PatchError::FileReadFailure {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
