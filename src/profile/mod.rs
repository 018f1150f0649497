pub mod args;
pub mod config;
pub mod errors;
pub mod steps;

use args::{ProfileArgs, split_values};
use errors::ProfileError;
use std::path::{Path, PathBuf};

/// Number of values a profile is made of.
pub const PROFILE_VALUE_COUNT: usize = 5;

/// Seconds added to the stepped duration so the thread group outlives the last hold.
pub const SAFETY_MARGIN_SECONDS: u64 = 5;

/// Upper bound on generated steps, keeping the rendered profile in the tens of megabytes.
pub const MAX_STEP_COUNT: u64 = 100_000;

/// Base of the synthetic `stringProp` names carrying the ramp and hold seconds.
pub const DEFAULT_LABEL_OFFSET: u64 = 0;

const FIELD_NAMES: [&str; PROFILE_VALUE_COUNT] =
    ["initLoad", "increment", "rampUp", "stepDuration", "numSteps"];

/// The five user supplied quantities, in command line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileValues {
    pub initial_load: u64,
    pub increment: u64,
    pub ramp_up: u64,
    pub hold: u64,
    pub steps: u64,
}

impl ProfileValues {
    /// Parse exactly five tokens of ASCII digits.
    pub fn from_tokens(tokens: &[String]) -> Result<Self, ProfileError> {
        if tokens.len() != PROFILE_VALUE_COUNT {
            return Err(ProfileError::InvalidArguments(format!(
                "invalid amount of profile values: {}, {} required",
                tokens.len(),
                PROFILE_VALUE_COUNT
            )));
        }

        let mut parsed = [0u64; PROFILE_VALUE_COUNT];
        for ((slot, token), name) in parsed.iter_mut().zip(tokens).zip(FIELD_NAMES) {
            *slot = parse_token(token, name)?;
        }

        Ok(Self {
            initial_load: parsed[0],
            increment: parsed[1],
            ramp_up: parsed[2],
            hold: parsed[3],
            steps: parsed[4],
        })
    }

    fn as_array(&self) -> [u64; PROFILE_VALUE_COUNT] {
        [
            self.initial_load,
            self.increment,
            self.ramp_up,
            self.hold,
            self.steps,
        ]
    }
}

fn parse_token(token: &str, name: &str) -> Result<u64, ProfileError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProfileError::InvalidArguments(format!(
            "{} must be a positive integer, got '{}'",
            name, token
        )));
    }
    token.parse::<u64>().map_err(|_| {
        ProfileError::InvalidArguments(format!("{} is out of range: '{}'", name, token))
    })
}

/// A validated load profile together with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadProfile {
    target_path: PathBuf,
    values: ProfileValues,
    ramp_up_label: u64,
    hold_label: u64,
    total_duration_seconds: u64,
}

impl LoadProfile {
    pub fn new(
        target_path: impl Into<PathBuf>,
        values: ProfileValues,
        label_offset: u64,
    ) -> Result<Self, ProfileError> {
        for (value, name) in values.as_array().into_iter().zip(FIELD_NAMES) {
            if value == 0 {
                return Err(ProfileError::InvalidArguments(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        if values.steps > MAX_STEP_COUNT {
            return Err(ProfileError::InvalidArguments(format!(
                "numSteps must not exceed {}, got {}",
                MAX_STEP_COUNT, values.steps
            )));
        }

        let overflow = |what: &str| {
            ProfileError::InvalidArguments(format!("{} does not fit in 64 bits", what))
        };

        let ramp_up_label = label_offset
            .checked_add(values.ramp_up)
            .ok_or_else(|| overflow("ramp-up label"))?;
        let hold_label = label_offset
            .checked_add(values.hold)
            .ok_or_else(|| overflow("hold label"))?;

        let total_duration_seconds = values
            .ramp_up
            .checked_add(values.hold)
            .and_then(|step| step.checked_mul(values.steps))
            .and_then(|total| total.checked_add(SAFETY_MARGIN_SECONDS))
            .ok_or_else(|| overflow("total duration"))?;

        // Highest level reached is initial + increment * steps.
        values
            .increment
            .checked_mul(values.steps)
            .and_then(|delta| delta.checked_add(values.initial_load))
            .ok_or_else(|| overflow("final load level"))?;

        Ok(Self {
            target_path: target_path.into(),
            values,
            ramp_up_label,
            hold_label,
            total_duration_seconds,
        })
    }

    /// Build the profile from parsed command line arguments.
    ///
    /// Positional values win over `--config`; no file is touched when the
    /// positional values are used.
    pub fn from_args(args: &ProfileArgs) -> Result<Self, ProfileError> {
        if !args.values.is_empty() {
            let tokens = split_values(&args.values);
            let values = ProfileValues::from_tokens(&tokens)?;
            return Self::new(&args.plan, values, DEFAULT_LABEL_OFFSET);
        }

        match &args.config {
            Some(path) => {
                let file = config::load_profile_file(path)?;
                log::debug!("Loaded profile values from {}", path.display());
                Self::new(&args.plan, file.values(), file.label_offset)
            }
            None => Err(ProfileError::InvalidArguments(format!(
                "no profile values given, {} required",
                PROFILE_VALUE_COUNT
            ))),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn values(&self) -> &ProfileValues {
        &self.values
    }

    pub fn initial_load(&self) -> u64 {
        self.values.initial_load
    }

    pub fn increment(&self) -> u64 {
        self.values.increment
    }

    pub fn ramp_up_seconds(&self) -> u64 {
        self.values.ramp_up
    }

    pub fn hold_seconds(&self) -> u64 {
        self.values.hold
    }

    pub fn step_count(&self) -> u64 {
        self.values.steps
    }

    pub fn ramp_up_label(&self) -> u64 {
        self.ramp_up_label
    }

    pub fn hold_label(&self) -> u64 {
        self.hold_label
    }

    pub fn total_duration_seconds(&self) -> u64 {
        self.total_duration_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> ProfileValues {
        ProfileValues {
            initial_load: 10,
            increment: 10,
            ramp_up: 60,
            hold: 180,
            steps: 3,
        }
    }

    #[test]
    fn derived_fields_follow_the_values() {
        let profile = LoadProfile::new("plan.jmx", sample(), DEFAULT_LABEL_OFFSET).unwrap();

        assert_eq!(profile.total_duration_seconds(), 3 * (60 + 180) + 5);
        assert_eq!(profile.total_duration_seconds(), 725);
        assert_eq!(profile.ramp_up_label(), 60);
        assert_eq!(profile.hold_label(), 180);
    }

    #[test]
    fn label_offset_shifts_both_labels() {
        let profile = LoadProfile::new("plan.jmx", sample(), 1000).unwrap();
        assert_eq!(profile.ramp_up_label(), 1060);
        assert_eq!(profile.hold_label(), 1180);
    }

    #[test]
    fn token_count_must_be_five() {
        let err = ProfileValues::from_tokens(&tokens(&["10", "10", "60", "180"])).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidArguments(msg) if msg.contains("4, 5")));
    }

    #[test]
    fn non_digit_tokens_are_rejected() {
        for bad in ["-5", "+5", "1.5", "", "ten", " "] {
            let t = tokens(&["10", bad, "60", "180", "3"]);
            assert!(
                ProfileValues::from_tokens(&t).is_err(),
                "token '{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn zero_values_are_rejected() {
        for idx in 0..PROFILE_VALUE_COUNT {
            let mut t = tokens(&["10", "10", "60", "180", "3"]);
            t[idx] = "0".to_string();
            let values = ProfileValues::from_tokens(&t).expect("zero still parses");
            let err = LoadProfile::new("plan.jmx", values, DEFAULT_LABEL_OFFSET).unwrap_err();
            assert!(matches!(err, ProfileError::InvalidArguments(msg) if msg.contains(FIELD_NAMES[idx])));
        }
    }

    #[test]
    fn step_count_is_capped() {
        let at_cap = ProfileValues {
            initial_load: 1,
            increment: 1,
            ramp_up: 1,
            hold: 1,
            steps: MAX_STEP_COUNT,
        };
        assert!(LoadProfile::new("plan.jmx", at_cap, DEFAULT_LABEL_OFFSET).is_ok());

        let huge = ProfileValues {
            steps: 10_000_000_000_000_000,
            ..at_cap
        };
        let err = LoadProfile::new("plan.jmx", huge, DEFAULT_LABEL_OFFSET).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidArguments(msg) if msg.contains("numSteps")));
    }

    #[test]
    fn duration_overflow_is_an_argument_error() {
        let values = ProfileValues {
            ramp_up: u64::MAX,
            ..sample()
        };
        assert!(matches!(
            LoadProfile::new("plan.jmx", values, DEFAULT_LABEL_OFFSET),
            Err(ProfileError::InvalidArguments(_))
        ));
    }

    #[test]
    fn positional_values_win_over_config() {
        let args = ProfileArgs {
            plan: PathBuf::from("plan.jmx"),
            values: tokens(&["1,2,3,4,5"]),
            config: Some(PathBuf::from("does/not/exist.toml")),
        };
        let profile = LoadProfile::from_args(&args).expect("config is never read");
        assert_eq!(profile.step_count(), 5);
    }

    #[test]
    fn missing_values_and_config_is_an_argument_error() {
        let args = ProfileArgs {
            plan: PathBuf::from("plan.jmx"),
            values: Vec::new(),
            config: None,
        };
        assert!(matches!(
            LoadProfile::from_args(&args),
            Err(ProfileError::InvalidArguments(_))
        ));
    }
}
