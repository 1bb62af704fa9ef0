//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, submit, delete)
/// - Request results (carrying the ticket they were issued under)
/// - Focus changes (`Refresh` on entry, `Leave` on exit)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
