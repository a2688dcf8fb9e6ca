//! PMV Error Types
//!
//! Error conditions surfaced around boxed values. The box itself has no
//! recoverable failure path; these errors come from checked accessors,
//! literal parsing and the variable store.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PmvError {
    // Box access errors
    #[error("boxed value is empty")]
    EmptyBox,

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // Literal errors
    #[error("unknown literal kind: {0}")]
    UnknownKind(String),

    #[error("invalid {kind} literal: {input:?}")]
    InvalidLiteral { kind: &'static str, input: String },

    // Store errors
    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("variable store is full ({0} variables)")]
    StoreFull(usize),

    // IO boundary
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type PmvResult<T> = Result<T, PmvError>;
