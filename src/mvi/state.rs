//! Base trait for store state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable (snapshots cross threads behind an `Arc`)
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}
