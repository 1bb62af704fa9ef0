//! Base trait for UI state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Cloneable snapshots
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
