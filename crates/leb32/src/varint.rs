//! Immutable varint values: a 32-bit integer paired with the length of its
//! canonical encoding.
use core::fmt::{self, Display};

use crate::utils::numbers::{bias_up, sleb_len, uleb_len};
use crate::{sleb, uleb, LEB128_MAX_SIZE};

/// Unsigned LEB128 value, optionally stored biased by one on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarUInt32 {
    value: u32,
    size: usize,
    bias: bool,
}

impl VarUInt32 {
    pub const fn new(value: u32) -> Self {
        Self::with_bias(value, false)
    }

    /// Value written as `value + 1`. `u32::MAX` stands for the logical `-1`
    /// and encodes as a single zero byte.
    pub const fn biased(value: u32) -> Self {
        Self::with_bias(value, true)
    }

    pub const fn with_bias(value: u32, bias: bool) -> Self {
        Self {
            value,
            size: uleb_len(bias_up(value, bias)),
            bias,
        }
    }

    #[inline(always)]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Length in bytes of the canonical encoding, bias included.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub const fn is_biased(&self) -> bool {
        self.bias
    }

    /// Biased values read back as `-1` for the absent sentinel.
    pub const fn logical(&self) -> i64 {
        if self.bias && self.value == u32::MAX {
            -1
        } else {
            self.value as i64
        }
    }

    /// Encode into a 5-byte buffer; returns (buffer, length_used).
    #[inline]
    pub fn encode(self) -> ([u8; LEB128_MAX_SIZE], usize) {
        uleb::encode_raw(bias_up(self.value, self.bias))
    }

    pub fn to_bytes(self) -> Vec<u8> {
        let (buf, len) = self.encode();
        buf[..len].to_vec()
    }
}

impl Display for VarUInt32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl From<u32> for VarUInt32 {
    fn from(v: u32) -> Self {
        Self::new(v)
    }
}
impl From<VarUInt32> for u32 {
    fn from(v: VarUInt32) -> Self {
        v.value
    }
}

/// Signed two-complement LEB128 (not zig-zag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarInt32 {
    value: i32,
    size: usize,
}

impl VarInt32 {
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            size: sleb_len(value),
        }
    }

    #[inline(always)]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Encode into a 5-byte buffer.
    #[inline]
    pub fn encode(self) -> ([u8; LEB128_MAX_SIZE], usize) {
        sleb::encode_raw(self.value)
    }

    pub fn to_bytes(self) -> Vec<u8> {
        let (buf, len) = self.encode();
        buf[..len].to_vec()
    }
}

impl Display for VarInt32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl From<i32> for VarInt32 {
    fn from(v: i32) -> Self {
        Self::new(v)
    }
}
impl From<VarInt32> for i32 {
    fn from(v: VarInt32) -> Self {
        v.value
    }
}
