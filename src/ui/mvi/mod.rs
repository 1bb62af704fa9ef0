//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the screen layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ pending request ──→ ScreenHost ──→ API
//!    └───────────────────────────── result intent ──┘
//! ```
//!
//! - **State**: Self-contained representation of one screen
//! - **Intent**: User actions or completed requests
//! - **Reducer**: Pure function that transforms state based on intents
//! - **RequestSlot**: The one outstanding request a screen may have

mod intent;
mod reducer;
mod request;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use request::{RequestSlot, Ticket};
pub use state::UiState;
