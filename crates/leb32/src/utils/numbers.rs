//! 32-bit wrapping and encoded-length helpers shared by both codecs.

/// Reduce `n` modulo 2^32.
#[inline(always)]
pub const fn wrap_u32(n: u64) -> u32 {
    n as u32
}

/// Reduce `n` to the signed 32-bit two's-complement range.
#[inline(always)]
pub const fn wrap_i32(n: i64) -> i32 {
    n as u32 as i32
}

/// Apply the plus-one bias on the way to the wire.
#[inline(always)]
pub const fn bias_up(value: u32, bias: bool) -> u32 {
    value.wrapping_add(bias as u32)
}

/// Remove the plus-one bias on the way off the wire.
#[inline(always)]
pub const fn bias_down(raw: u32, bias: bool) -> u32 {
    raw.wrapping_sub(bias as u32)
}

/// Number of 7-bit groups ULEB128 needs for `raw`, counting zero as one group.
#[inline(always)]
pub const fn uleb_len(raw: u32) -> usize {
    match raw {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => 5,
    }
}

/// Number of bytes in the minimal SLEB128 encoding of `value`.
///
/// A group terminates once the bits still to be emitted are all copies of
/// bit 6 of that group.
#[inline(always)]
pub const fn sleb_len(value: i32) -> usize {
    let mut v = value;
    let mut len = 1;
    loop {
        let group = v & 0x7F;
        v >>= 7;
        if (v == 0 && group & 0x40 == 0) || (v == -1 && group & 0x40 != 0) {
            return len;
        }
        len += 1;
    }
}
