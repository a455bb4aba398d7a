mod machine;
mod position;

pub use machine::{NavOutcome, PlaybackMachine};
pub use position::PlaybackPosition;
