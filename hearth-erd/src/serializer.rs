use crate::codes::ErdCodeId;
use crate::primitives;
use crate::registry::ConverterRegistry;
use crate::value::ErdValue;
use hearth_sdk::{ErdError, ErdResult};
use std::sync::Arc;

/// Decode/encode dispatch over the converter registry.
///
/// This is the single entry point the state cache and the outbound write
/// path go through. Unknown and unregistered codes never fail to decode:
/// unresolvable identifiers fall back to raw bytes, resolved codes without a
/// converter fall back to a plain integer.
#[derive(Clone)]
pub struct ErdSerializer {
    registry: Arc<ConverterRegistry>,
}

impl ErdSerializer {
    pub fn new(registry: Arc<ConverterRegistry>) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Decode a raw wire value for the given code.
    ///
    /// The empty string is the universal "no value" sentinel and decodes to
    /// `None` for every code, registered or not.
    pub fn decode_value(&self, code: &ErdCodeId, raw: &str) -> ErdResult<Option<ErdValue>> {
        if raw.is_empty() {
            return Ok(None);
        }

        match code.resolve() {
            ErdCodeId::Raw(_) => primitives::decode_bytes(raw).map(|b| Some(ErdValue::Bytes(b))),
            ErdCodeId::Known(code) => match self.registry.converter(code) {
                Some(converter) => converter.decode(raw).map(Some),
                None => primitives::decode_int(raw).map(|n| Some(ErdValue::Int(n))),
            },
        }
    }

    /// Encode a value for the given code.
    ///
    /// `None` encodes as the empty string for every code. Anything else
    /// requires a registered converter with a write path; unresolved codes,
    /// unregistered codes and read-only converters all fail with the same
    /// [`ErdError::NotSupported`].
    pub fn encode_value(&self, code: &ErdCodeId, value: Option<&ErdValue>) -> ErdResult<String> {
        let Some(value) = value else {
            return Ok(String::new());
        };

        match code.resolve() {
            ErdCodeId::Raw(raw) => Err(ErdError::NotSupported(raw.to_string())),
            ErdCodeId::Known(code) => match self.registry.converter(code) {
                Some(converter) => converter.encode(code, value),
                None => Err(ErdError::NotSupported(code.name().to_string())),
            },
        }
    }
}

impl Default for ErdSerializer {
    fn default() -> Self {
        Self::new(ConverterRegistry::shared())
    }
}
