use thiserror::Error;

use crate::plan::errors::PatchError;
use crate::profile::errors::ProfileError;

#[derive(Debug, Error)]
pub enum LoadStepError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Patch(#[from] PatchError),
}

impl LoadStepError {
    /// Whether the usage message should accompany this error.
    pub fn is_usage(&self) -> bool {
        matches!(self, LoadStepError::Profile(ProfileError::InvalidArguments(_)))
    }
}
