use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

/// Caller-contract violations. Neither variant changes engine state; an
/// empty candidate subset is never an error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlowError {
    #[error("Out-of-order answer: current step filters on {expected:?}, got {got:?}")]
    OutOfOrderAnswer { expected: String, got: String },

    #[error("Question flow already complete; restart to answer again")]
    FlowComplete,
}
