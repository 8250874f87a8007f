use hearth_erd::types::ErdApplianceType;
use hearth_erd::{ErdCode, ErdCodeId, ErdResult, ErdSerializer, ErdValue};
use std::collections::HashMap;
use std::mem::discriminant;
use std::sync::Arc;

/// The codes whose decoded value changed in one update batch, with their new
/// values. A `None` value records a transition to "no value".
pub type ChangeSet = HashMap<ErdCodeId, Option<ErdValue>>;

/// An encoded outbound write, ready for the transport layer to wrap into its
/// wire envelope: the raw code key (`"0x5200"` style) and the hex payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErdWrite {
    pub code: String,
    pub value: String,
}

/// One appliance on the account: its identifier, availability flag, and the
/// cache of the most recently decoded value per code.
///
/// The cache has no internal locking; the transport layer serializes update
/// calls per appliance (single-writer discipline). Reads may be concurrent
/// only while no updates are in flight.
pub struct Appliance {
    id: Arc<str>,
    available: bool,
    serializer: ErdSerializer,
    cache: HashMap<ErdCodeId, Option<ErdValue>>,
}

impl Appliance {
    /// Create an appliance with an empty cache over the shared registry.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self::with_serializer(id, ErdSerializer::default())
    }

    /// Create an appliance over a custom serializer (injected registries are
    /// useful for tests and trimmed-down deployments).
    pub fn with_serializer(id: impl Into<Arc<str>>, serializer: ErdSerializer) -> Self {
        Self {
            id: id.into(),
            available: false,
            serializer,
            cache: HashMap::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Availability is accepted from the session layer as given.
    pub fn set_available(&mut self) {
        self.available = true;
    }

    pub fn set_unavailable(&mut self) {
        self.available = false;
    }

    #[inline]
    pub fn serializer(&self) -> &ErdSerializer {
        &self.serializer
    }

    /// Most recently decoded value for a code, if any. Absent entries and
    /// cached "no value" states both read as `None`.
    pub fn erd_value(&self, code: impl Into<ErdCodeId>) -> Option<&ErdValue> {
        self.cache
            .get(&code.into().resolve())
            .and_then(|value| value.as_ref())
    }

    /// The appliance category, once the type code has been seen.
    pub fn appliance_type(&self) -> Option<ErdApplianceType> {
        match self.erd_value(ErdCode::ApplianceType) {
            Some(ErdValue::ApplianceType(t)) => Some(*t),
            _ => None,
        }
    }

    /// Apply one raw update: decode, detect whether the decoded value is an
    /// observable change, and overwrite the cache entry.
    ///
    /// The overwrite happens even when no change is reported so the cache
    /// always holds the latest decode. Returns whether a change was detected.
    pub fn apply_update(&mut self, code: impl Into<ErdCodeId>, raw: &str) -> ErdResult<bool> {
        let code = code.into().resolve();
        let value = self.serializer.decode_value(&code, raw)?;

        let old = self.cache.get(&code).cloned().unwrap_or(None);
        let changed = Self::detect_change(&code, old.as_ref(), value.as_ref());

        if changed {
            tracing::debug!(appliance = %self.id, code = %code, value = ?value, "state updated");
        }
        self.cache.insert(code, value);
        Ok(changed)
    }

    /// Apply a batch of raw updates as one cycle and return only the entries
    /// whose decoded value changed, with their new values.
    ///
    /// A single wire message carrying many fields goes through here so the
    /// caller fires one notification for the whole batch instead of one per
    /// field.
    pub fn apply_updates(&mut self, updates: &HashMap<String, String>) -> ErdResult<ChangeSet> {
        let mut changes = ChangeSet::new();
        for (code, raw) in updates {
            let code = ErdCodeId::from(code.as_str()).resolve();
            if self.apply_update(code.clone(), raw)? {
                let value = self.cache.get(&code).cloned().unwrap_or(None);
                changes.insert(code, value);
            }
        }
        Ok(changes)
    }

    /// Encode an outbound write for the transport layer.
    pub fn prepare_write(
        &self,
        code: impl Into<ErdCodeId>,
        value: Option<&ErdValue>,
    ) -> ErdResult<ErdWrite> {
        let code = code.into().resolve();
        let encoded = self.serializer.encode_value(&code, value)?;
        Ok(ErdWrite {
            code: code.raw_key().to_string(),
            value: encoded,
        })
    }

    /// Whether the new decode is an observable change against the cached one.
    ///
    /// Null-ness is its own dimension: any transition between "no value" and
    /// a value counts. Two present values of different shapes mean the code
    /// was reinterpreted (e.g. a registry change across sessions); they are
    /// not comparable, which is logged and treated as no change.
    fn detect_change(code: &ErdCodeId, old: Option<&ErdValue>, new: Option<&ErdValue>) -> bool {
        match (old, new) {
            (None, None) => false,
            (None, Some(_)) | (Some(_), None) => true,
            (Some(old), Some(new)) => {
                if discriminant(old) != discriminant(new) {
                    tracing::warn!(
                        code = %code,
                        old = ?old,
                        new = ?new,
                        "unable to compare new and prior states"
                    );
                    return false;
                }
                old != new
            }
        }
    }
}

impl std::fmt::Debug for Appliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Appliance")
            .field("id", &self.id)
            .field("available", &self.available)
            .field("cached_codes", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_raw_twice_reports_one_change() {
        let mut appliance = Appliance::new("d828c9%fridge");
        assert!(appliance.apply_update(ErdCode::SabbathMode, "01").unwrap());
        assert!(!appliance.apply_update(ErdCode::SabbathMode, "01").unwrap());
        assert!(appliance.apply_update(ErdCode::SabbathMode, "00").unwrap());
    }

    #[test]
    fn null_transitions_count_as_changes() {
        let mut appliance = Appliance::new("test");
        // Absent -> null is not a change.
        assert!(!appliance.apply_update(ErdCode::SabbathMode, "").unwrap());
        // Null -> value and value -> null both are.
        assert!(appliance.apply_update(ErdCode::SabbathMode, "01").unwrap());
        assert!(appliance.apply_update(ErdCode::SabbathMode, "").unwrap());
        assert_eq!(appliance.erd_value(ErdCode::SabbathMode), None);
    }

    #[test]
    fn cache_keeps_latest_decode_even_without_change() {
        let mut appliance = Appliance::new("test");
        appliance.apply_update(ErdCode::ClockTime, "0102").unwrap();
        assert!(!appliance.apply_update(ErdCode::ClockTime, "0102").unwrap());
        assert_eq!(
            appliance.erd_value(ErdCode::ClockTime),
            Some(&ErdValue::Int(0x0102))
        );
    }

    #[test]
    fn appliance_type_accessor() {
        let mut appliance = Appliance::new("test");
        assert_eq!(appliance.appliance_type(), None);
        appliance
            .apply_update(ErdCode::ApplianceType, "03")
            .unwrap();
        assert_eq!(appliance.appliance_type(), Some(ErdApplianceType::Fridge));
    }

    #[test]
    fn availability_flags() {
        let mut appliance = Appliance::new("test");
        assert!(!appliance.is_available());
        appliance.set_available();
        assert!(appliance.is_available());
        appliance.set_unavailable();
        assert!(!appliance.is_available());
    }
}
