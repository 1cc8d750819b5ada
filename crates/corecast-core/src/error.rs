use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("core message cannot be empty")]
    EmptyCoreMessage,

    #[error("no valid platforms selected")]
    NoPlatformsSelected,
}
