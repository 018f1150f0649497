use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Failed reading file [{path}]: {reason}.")]
    FileReadFailure { path: String, reason: String },

    #[error("Load profile region not found in {0}.")]
    RegionNotFound(String),

    #[error("Failed writing file [{path}]: {reason}.")]
    FileWriteFailure { path: String, reason: String },
}
