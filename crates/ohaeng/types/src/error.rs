/// Errors raised at the input boundary. Pipeline computations are total
/// and never return these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OhaengError {
    #[error("invalid type code: {0:?} (expected one of E/I, N/S, T/F, J/P in order)")]
    InvalidTypeCode(String),
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
    #[error("invalid birth date {input:?}: {reason}")]
    InvalidBirthDate { input: String, reason: String },
    #[error("invalid year range {start}..={end}: start must not follow end and at most 200 years may be covered")]
    InvalidYearRange { start: i32, end: i32 },
}
