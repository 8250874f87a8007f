//! Converter functions, one `decode_*`/`encode_*` pair per wire format.
//!
//! All of them are pure and stateless; the registry wires them to their code
//! identifiers. Encoders check the value shape first and reject anything
//! other than the variant their format produces.

pub(crate) mod common;
pub(crate) mod dishwasher;
pub(crate) mod fridge;
pub(crate) mod oven;

use crate::value::ErdValue;
use hearth_sdk::{ErdError, ErdResult};

/// Slice a field out of the raw hex string, reporting a decode error with the
/// field name instead of panicking when the payload is short.
pub(crate) fn hex_field<'a>(raw: &'a str, range: std::ops::Range<usize>, what: &str) -> ErdResult<&'a str> {
    raw.get(range.clone()).ok_or_else(|| {
        ErdError::DecodeError(format!(
            "{what}: payload {raw:?} too short for bytes {}..{}",
            range.start / 2,
            range.end / 2
        ))
    })
}

/// Reject an encode call whose value has the wrong shape.
pub(crate) fn expected(what: &str, value: &ErdValue) -> ErdError {
    ErdError::EncodeError(format!("expected {what} value, got {value:?}"))
}
