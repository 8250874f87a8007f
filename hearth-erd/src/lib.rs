mod codes;
mod convert;
pub mod primitives;
mod registry;
mod serializer;
pub mod types;
mod value;

pub use codes::{ErdCode, ErdCodeId};
pub use registry::{ConverterRegistry, DecodeFn, EncodeFn, ErdConverter};
pub use serializer::ErdSerializer;
pub use value::ErdValue;

// Shared foundation re-exported at the crate root so that downstream crates
// only need one dependency for the common path.
pub use hearth_sdk::{ErdError, ErdResult, HexCodec};
