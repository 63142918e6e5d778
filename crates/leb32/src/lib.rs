pub mod utils;
pub mod varint;
pub mod uleb;
pub mod sleb;
pub mod stream;

#[cfg(feature = "python")]
mod python;

/// Maximum byte length of a 32-bit LEB128: `ceil(32 / 7)`.
pub const LEB128_MAX_SIZE: usize = 5;

pub use utils::{InvalidVarint, Result};
pub use varint::{VarInt32, VarUInt32};
pub use uleb::{decode_unsigned, encode_unsigned, read_unsigned};
pub use sleb::{decode_signed, encode_signed, read_signed};
pub use stream::{
    decode_stream_signed,
    decode_stream_unsigned,
    peek_size_signed,
    peek_size_unsigned
};
