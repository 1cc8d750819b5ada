pub mod attempt;
pub mod error;
pub mod message;
pub mod platform;
pub mod result_set;
pub mod selection;
pub mod verify;

pub use attempt::{AttemptContent, GenerationAttempt};
pub use error::CoreError;
pub use message::{CoreMessage, Tone};
pub use platform::{Platform, StyleGuide};
pub use result_set::ResultSet;
pub use selection::parse_selection;
pub use verify::verify;
