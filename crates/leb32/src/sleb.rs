//! Signed LEB128 (SLEB128) over the 32-bit two's-complement domain.
use crate::utils::numbers::wrap_i32;
use crate::utils::{check_bounds, Result};
use crate::{debug_log, varint_error, VarInt32, LEB128_MAX_SIZE};

/// Emit `value` as 7-bit groups until the remaining bits are pure sign
/// extension of bit 6 of the last group.
#[inline]
pub(crate) fn encode_raw(value: i32) -> ([u8; LEB128_MAX_SIZE], usize) {
    let mut buf = [0u8; LEB128_MAX_SIZE];
    let mut v = value;
    let mut i = 0;
    if v >= 0 {
        while v > 0x3F {
            buf[i] = 0x80 | (v & 0x7F) as u8;
            v >>= 7;
            i += 1;
        }
    } else {
        while v < -0x40 {
            buf[i] = 0x80 | (v & 0x7F) as u8;
            v >>= 7;
            i += 1;
        }
    }
    buf[i] = (v & 0x7F) as u8;
    (buf, i + 1)
}

pub fn encode_signed(value: i32) -> Vec<u8> {
    VarInt32::new(value).to_bytes()
}

/// Decode a SLEB128 from the start of `data`, returning the value and bytes
/// consumed.
///
/// Reading stops at the first terminator or after `LEB128_MAX_SIZE` bytes,
/// whichever comes first. A buffer that ends while the continuation bit is
/// still set is taken as it is.
pub fn read_signed(data: &[u8]) -> Result<(VarInt32, usize)> {
    if data.is_empty() {
        return Err(varint_error!("Data buffer was empty."));
    }

    let window = &data[..data.len().min(LEB128_MAX_SIZE)];
    let mut acc = 0i64;
    let mut used = 0;
    let mut last = 0u8;
    for &b in window {
        acc |= ((b & 0x7F) as i64) << (7 * used);
        used += 1;
        last = b;
        if b & 0x80 == 0 {
            break;
        }
    }

    if last & 0x40 != 0 {
        acc |= -(1i64 << (7 * used));
    }

    let value = wrap_i32(acc);
    debug_log!("sleb128: {} byte(s) -> {}", used, value);
    Ok((VarInt32::new(value), used))
}

/// Decode a buffer holding exactly one SLEB128.
pub fn decode_signed(data: &[u8]) -> Result<VarInt32> {
    check_bounds(data)?;
    read_signed(data).map(|(var, _)| var)
}
