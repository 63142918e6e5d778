//! Unsigned LEB128 (ULEB128) over the 32-bit domain, with the optional
//! plus-one bias.
use crate::utils::numbers::{bias_down, wrap_u32};
use crate::utils::{check_bounds, Result};
use crate::{debug_log, varint_error, VarUInt32, LEB128_MAX_SIZE};

/// Emit `raw` as 7-bit groups, least significant first.
#[inline]
pub(crate) fn encode_raw(raw: u32) -> ([u8; LEB128_MAX_SIZE], usize) {
    let mut buf = [0u8; LEB128_MAX_SIZE];
    let mut v = raw;
    let mut i = 0;
    loop {
        let byte = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            buf[i] = byte;
            return (buf, i + 1);
        }
        buf[i] = byte | 0x80;
        i += 1;
    }
}

pub fn encode_unsigned(value: u32, bias: bool) -> Vec<u8> {
    VarUInt32::with_bias(value, bias).to_bytes()
}

/// Decode a ULEB128 from the start of `data`, returning the value and bytes
/// consumed. Bytes past the terminator are left alone and at most
/// `LEB128_MAX_SIZE` bytes are examined.
pub fn read_unsigned(data: &[u8], bias: bool) -> Result<(VarUInt32, usize)> {
    if data.is_empty() {
        return Err(varint_error!("Data buffer was empty."));
    }

    let window = &data[..data.len().min(LEB128_MAX_SIZE)];
    let mut acc = 0u64;
    for (i, &b) in window.iter().enumerate() {
        acc |= ((b & 0x7F) as u64) << (7 * i);
        if b & 0x80 == 0 {
            let value = bias_down(wrap_u32(acc), bias);
            debug_log!("uleb128: {} byte(s) -> {} (bias: {})", i + 1, value, bias);
            return Ok((VarUInt32::with_bias(value, bias), i + 1));
        }
    }

    Err(varint_error!(
        "Invalid uleb128 sequence: no terminator in {} byte(s).",
        window.len()
    ))
}

/// Decode a buffer holding exactly one ULEB128.
pub fn decode_unsigned(data: &[u8], bias: bool) -> Result<VarUInt32> {
    check_bounds(data)?;
    read_unsigned(data, bias).map(|(var, _)| var)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------- helpers ----------

    fn roundtrip(v: u32, bias: bool) {
        let bytes = encode_unsigned(v, bias);
        assert!(!bytes.is_empty() && bytes.len() <= LEB128_MAX_SIZE);

        // only the last byte has the continuation bit clear
        let (last, head) = bytes.split_last().unwrap();
        assert_eq!(last & 0x80, 0, "last byte carries continuation for {v}");
        assert!(head.iter().all(|b| b & 0x80 != 0), "early terminator for {v}");

        let var = decode_unsigned(&bytes, bias).expect("decode failed");
        assert_eq!(var.value(), v, "round-trip value mismatch (bias: {bias})");
        assert_eq!(var.size(), bytes.len(), "size mismatch for {v}");
        assert_eq!(var.is_biased(), bias);

        // decode from a longer buffer (should ignore the tail)
        let mut long = bytes.clone();
        long.extend_from_slice(&[0xAA; 8]);
        let (var2, used) = read_unsigned(&long, bias).expect("read (long) failed");
        assert_eq!(var2, var);
        assert_eq!(used, bytes.len());
    }

    // ---------- encode ----------

    #[test]
    fn encode_vectors() {
        let cases: &[(u32, &[u8])] = &[
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (300, &[0xAC, 0x02]),
            (16_256, &[0x80, 0x7F]),
            (624_485, &[0xE5, 0x8E, 0x26]),
            (u32::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]),
        ];
        for &(v, expected) in cases {
            assert_eq!(encode_unsigned(v, false), expected, "encode {v}");
        }
    }

    #[test]
    fn encode_biased_vectors() {
        assert_eq!(encode_unsigned(u32::MAX, true), [0x00]);
        assert_eq!(encode_unsigned(0, true), [0x01]);
        assert_eq!(encode_unsigned(126, true), [0x7F]);
        assert_eq!(encode_unsigned(127, true), [0x80, 0x01]);
        // u32::MAX - 1 + 1 is the largest wire value
        assert_eq!(encode_unsigned(u32::MAX - 1, true), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    // ---------- decode ----------

    #[test]
    fn decode_vectors() {
        let var = decode_unsigned(&[0xAC, 0x02], false).unwrap();
        assert_eq!((var.value(), var.size()), (300, 2));

        let var = decode_unsigned(&[0x7F], false).unwrap();
        assert_eq!((var.value(), var.size()), (127, 1));

        let var = decode_unsigned(&[0x00], true).unwrap();
        assert_eq!(var.value(), u32::MAX);
        assert_eq!(var.logical(), -1);
    }

    #[test]
    fn decode_wraps_fifth_group() {
        // payload bits above 2^32 are dropped
        let var = decode_unsigned(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F], false).unwrap();
        assert_eq!(var.value(), u32::MAX);
    }

    #[test]
    fn roundtrip_edge_cases() {
        const CASES: &[u32] = &[
            0,
            1,
            127, // 1-byte upper bound
            128,
            16_383, // 2-byte upper bound
            16_384,
            0x1F_FFFF, // 3-byte upper bound
            0x20_0000,
            0x0FFF_FFFF, // 4-byte upper bound
            0x1000_0000,
            u32::MAX - 1,
            u32::MAX,
        ];
        for &v in CASES {
            roundtrip(v, false);
            roundtrip(v, true);
        }
    }

    #[test]
    fn roundtrip_sweep() {
        let mut v = 0u32;
        loop {
            roundtrip(v, false);
            roundtrip(v, true);
            match v.checked_add(65_521) {
                Some(next) => v = next,
                None => break,
            }
        }
    }

    // ---------- malformed ----------

    #[test]
    fn rejects_empty() {
        assert!(decode_unsigned(&[], false).is_err());
        assert!(read_unsigned(&[], true).is_err());
    }

    #[test]
    fn rejects_oversized() {
        let err = decode_unsigned(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00], false).unwrap_err();
        assert!(err.reason.contains("too large"), "{err}");
    }

    #[test]
    fn rejects_missing_terminator() {
        assert!(decode_unsigned(&[0x80, 0x80, 0x80, 0x80, 0x80], false).is_err());
        assert!(decode_unsigned(&[0xFF, 0xFF], false).is_err());
        // prefix reads stop at five bytes no matter how long the buffer is
        assert!(read_unsigned(&[0xFFu8; 16], false).is_err());
    }
}
