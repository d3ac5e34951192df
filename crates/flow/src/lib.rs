//! # Pattern Flow
//!
//! The guided narrowing engine: a fixed question sequence filters the
//! catalog down to the candidate subset consistent with every selection
//! made so far. Steps only move forward; `restart` is the single way back.

mod engine;
mod error;
mod state;

pub use engine::{AnswerOutcome, FilterEngine};
pub use error::{FlowError, Result};
pub use state::SelectionState;
