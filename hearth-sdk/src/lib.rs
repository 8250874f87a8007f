mod codec;
mod error;

pub use codec::HexCodec;
pub use error::{ErdError, ErdResult};
