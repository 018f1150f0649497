use super::errors::ProfileError;
use super::ProfileValues;
use serde::Deserialize;
use std::path::Path;

/// Profile values stored next to a test plan instead of typed on the command line.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProfileFile {
    pub initial_load: u64,
    pub increment: u64,
    pub ramp_up: u64,
    #[serde(alias = "step_duration")]
    pub hold: u64,
    #[serde(alias = "num_steps")]
    pub steps: u64,
    #[serde(default = "default_label_offset")]
    pub label_offset: u64,
}

fn default_label_offset() -> u64 {
    super::DEFAULT_LABEL_OFFSET
}

impl ProfileFile {
    pub fn values(&self) -> ProfileValues {
        ProfileValues {
            initial_load: self.initial_load,
            increment: self.increment,
            ramp_up: self.ramp_up,
            hold: self.hold,
            steps: self.steps,
        }
    }
}

pub fn load_profile_file(path: &Path) -> Result<ProfileFile, ProfileError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ProfileError::ConfigError(format!("failed to read {}: {}", path.display(), e))
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let parsed = match ext.as_str() {
        "toml" => toml::from_str(&text).map_err(|e| e.to_string()),
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(&text).map_err(|e| e.to_string()),
        other => {
            return Err(ProfileError::ConfigError(format!(
                "unsupported profile file extension '{}'",
                other
            )));
        }
    };

    parsed.map_err(|e| {
        ProfileError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
    })
}
