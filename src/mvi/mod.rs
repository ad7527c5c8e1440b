//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow shared by every store in the crate.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer ──→ State ──→ subscribers
//!    ↑                                                     │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot handed out as `Arc<State>`
//! - **Action**: user commands or async completions
//! - **Reducer**: pure function `(State, Action) -> State`
//! - **Store**: owns the current state and notifies subscribers

mod action;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
pub use store::{Store, Subscription};
