//! Actor system: the chat supervisor and the remote completion client it drives.

pub mod llm;
pub mod messages;
pub mod supervisor;
pub mod traits;
