mod appliance;

pub use appliance::{Appliance, ChangeSet, ErdWrite};

pub use hearth_erd::{ErdCode, ErdCodeId, ErdSerializer, ErdValue};
pub use hearth_sdk::{ErdError, ErdResult};
