//! Base trait for state objects.

/// Marker trait for state objects.
///
/// States are plain values: cloned to move forward, compared in tests, with a
/// default that is the starting point of a run.
pub trait State: Clone + PartialEq + Default + std::fmt::Debug {}
