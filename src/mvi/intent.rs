//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are produced by the runner after talking to the console and are
/// fed to a reducer. They carry no behaviour of their own.
pub trait Intent: Clone + std::fmt::Debug {}
