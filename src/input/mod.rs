//! Input handling: platform-agnostic events, the per-frame snapshot, and
//! the processor that folds raw events into it.
//!
//! The controller never polls the windowing backend. Raw events go through
//! an [`InputProcessor`]; once per frame the processor is drained into an
//! immutable [`InputSnapshot`], which makes
//! [`PlayerController::update`](crate::player::PlayerController::update) a
//! deterministic, replayable function of its arguments.

/// Platform-agnostic input events and bindable actions.
pub mod event;
/// Folds raw events into per-frame snapshots and routes pointer actions.
pub mod processor;
/// Immutable per-frame input snapshot.
pub mod snapshot;

pub use event::{InputEvent, MouseButton, PlayerAction};
pub use processor::{InputProcessor, Interaction};
pub use snapshot::InputSnapshot;
