use thiserror::Error;

/// Codec and state-cache specific errors.
///
/// Unresolvable code identifiers are deliberately **not** an error: they stay
/// usable as opaque raw identifiers throughout the SDK. Everything that can
/// actually fail funnels into the three variants below.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErdError {
    /// A raw wire value could not be decoded (bad hex, short payload,
    /// unknown code point where no fallback variant exists).
    #[error("Decode error: {0}")]
    DecodeError(String),
    /// A typed value could not be encoded into its wire form.
    #[error("Encode error: {0}")]
    EncodeError(String),
    /// The code has no write path: no converter is registered for it, or the
    /// registered converter is read-only. Callers cannot tell the two apart
    /// without inspecting the registry; both mean "you cannot write this code".
    #[error("Code not supported for writing: {0}")]
    NotSupported(String),
}

pub type ErdResult<T> = Result<T, ErdError>;
