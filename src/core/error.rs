//! Structural-input errors.
//!
//! The engines distinguish two kinds of bad input:
//!
//! - **Gameplay-illegal** moves (wrong pit owner, empty pit, card that
//!   does not match, out-of-turn play). These are silent no-ops: the
//!   engine returns the state unchanged so UI races stay cheap to
//!   tolerate. Callers detect rejection by comparing states.
//! - **Structural garbage** (out-of-range indices, ids that exist in no
//!   zone, malformed calls). These can only come from a broken adapter
//!   and fail loudly with `InvalidInput`.

use thiserror::Error;

/// Error for input that cannot come from a well-formed client.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// An index exceeded its structural bound.
    #[error("{what} {value} out of range (limit {limit})")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// An id that exists nowhere in the game.
    #[error("unknown {what} id {id}")]
    UnknownId { what: &'static str, id: u64 },

    /// A move object that is internally inconsistent.
    #[error("malformed move: {0}")]
    Malformed(&'static str),

    /// A state that violates a construction invariant.
    #[error("corrupt state: {0}")]
    CorruptState(&'static str),
}

/// Result alias used by every engine operation.
pub type EngineResult<T> = Result<T, InvalidInput>;
