//! Length probing for varints sitting in a seekable stream.
//!
//! `peek_size_*` finds how many bytes the varint at the cursor spans and
//! puts the cursor back. `decode_stream_*` then reads exactly that span, so
//! the next field in the stream is never touched. The pair is not atomic:
//! callers sharing a stream across threads must hold their lock over both.
use std::io::{Read, Seek, SeekFrom};

use crate::utils::Result;
use crate::{debug_log, sleb, uleb, varint_error, VarInt32, VarUInt32, LEB128_MAX_SIZE};

#[inline]
fn read_byte<R: Read>(stream: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    stream.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Count bytes up to and including the first terminator, capped at
/// `LEB128_MAX_SIZE`. Returns the count and the last byte examined.
fn scan<R: Read>(stream: &mut R) -> Result<(usize, u8)> {
    let mut size = 0;
    let mut last = 0u8;
    while size < LEB128_MAX_SIZE {
        last = read_byte(stream)?;
        size += 1;
        if last & 0x80 == 0 {
            break;
        }
    }
    Ok((size, last))
}

/// Run `scan` and always seek back to where it started.
fn probe<S: Read + Seek>(stream: &mut S) -> Result<(usize, u8)> {
    let start = stream.stream_position()?;
    let scanned = scan(stream);
    stream.seek(SeekFrom::Start(start))?;
    let (size, last) = scanned?;
    debug_log!("probe: {} byte(s) at offset {}", size, start);
    Ok((size, last))
}

pub fn peek_size_unsigned<S: Read + Seek>(stream: &mut S) -> Result<usize> {
    let (size, last) = probe(stream)?;
    if last & 0x80 != 0 {
        return Err(varint_error!(
            "Invalid uleb128 sequence: no terminator in {} byte(s).",
            size
        ));
    }
    Ok(size)
}

/// Signed probes do not check the terminator; a five-byte run of
/// continuation bytes is handed to the decoder as is.
pub fn peek_size_signed<S: Read + Seek>(stream: &mut S) -> Result<usize> {
    probe(stream).map(|(size, _)| size)
}

fn read_span<R: Read>(stream: &mut R, size: usize) -> Result<[u8; LEB128_MAX_SIZE]> {
    let mut buf = [0u8; LEB128_MAX_SIZE];
    stream.read_exact(&mut buf[..size])?;
    Ok(buf)
}

pub fn decode_stream_unsigned<S: Read + Seek>(stream: &mut S, bias: bool) -> Result<VarUInt32> {
    let size = peek_size_unsigned(stream)?;
    let buf = read_span(stream, size)?;
    uleb::decode_unsigned(&buf[..size], bias)
}

pub fn decode_stream_signed<S: Read + Seek>(stream: &mut S) -> Result<VarInt32> {
    let size = peek_size_signed(stream)?;
    let buf = read_span(stream, size)?;
    sleb::decode_signed(&buf[..size])
}
