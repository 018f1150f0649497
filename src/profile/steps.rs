use super::LoadProfile;
use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

/// Closes the `load_profile` container and restores the `</kg` prefix the
/// region pattern consumed.
pub const CLOSING_MARKER: &str = "          </collectionProp>\n      \t</kg";

/// One ramp-up followed by one hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStep {
    pub index: u64,
    pub from: u64,
    pub to: u64,
    pub ramp_up_seconds: u64,
    pub hold_seconds: u64,
}

impl LoadStep {
    /// Seconds from the start of the test until this step's hold ends.
    pub fn ends_at(&self) -> u64 {
        (self.index + 1) * (self.ramp_up_seconds + self.hold_seconds)
    }
}

/// Source of the synthetic `collectionProp` names.
pub trait Nonce {
    fn next_nonce(&mut self) -> u128;
}

/// Nanoseconds since the Unix epoch, bumped so consecutive values never repeat.
#[derive(Debug, Default)]
pub struct WallClockNonce {
    last: u128,
}

impl Nonce for WallClockNonce {
    fn next_nonce(&mut self) -> u128 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        self.last = now.max(self.last + 1);
        self.last
    }
}

/// Compute the arithmetic progression of load levels.
pub fn plan_steps(profile: &LoadProfile) -> Vec<LoadStep> {
    (0..profile.step_count())
        .map(|i| {
            let from = profile.initial_load() + profile.increment() * i;
            LoadStep {
                index: i,
                from,
                to: from + profile.increment(),
                ramp_up_seconds: profile.ramp_up_seconds(),
                hold_seconds: profile.hold_seconds(),
            }
        })
        .collect()
}

fn render_record(out: &mut String, nonce: u128, from: u64, to: u64, label: u64, seconds: u64) {
    let _ = write!(
        out,
        "            <collectionProp name=\"{nonce}\">\n\
         \t\t<stringProp name=\"{from}\">{from}</stringProp>\n\
         \t\t<stringProp name=\"{to}\">{to}</stringProp>\n\
         \t\t<stringProp name=\"{label}\">{seconds}</stringProp>\n\
         \t    </collectionProp>\n"
    );
}

/// Render the replacement for the load-profile region.
///
/// Records come out as ramp(0), hold(0), ramp(1), hold(1), ... followed by
/// [`CLOSING_MARKER`].
pub fn render_profile(profile: &LoadProfile, nonce: &mut impl Nonce) -> String {
    let steps = plan_steps(profile);
    let mut out = String::with_capacity(steps.len() * 2 * 192 + CLOSING_MARKER.len());

    for step in &steps {
        render_record(
            &mut out,
            nonce.next_nonce(),
            step.from,
            step.to,
            profile.ramp_up_label(),
            step.ramp_up_seconds,
        );
        render_record(
            &mut out,
            nonce.next_nonce(),
            step.to,
            step.to,
            profile.hold_label(),
            step.hold_seconds,
        );
    }
    out.push_str(CLOSING_MARKER);
    out
}
