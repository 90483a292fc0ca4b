//! Length-prefixed binary chunks
//!
//! A chunk is a `u64` little-endian byte length followed by that many bytes.
//! Values converted with [`to_chunk`] keep the machine's native byte order,
//! so chunk bodies are only portable between machines of equal endianness.

use std::fs;
use std::io::{self, Read, Write};
use std::mem::size_of;
use std::path::Path;

use bytemuck::Pod;
use bytes::{Buf, BufMut, Bytes};
use tracing::debug;

use crate::error::{ChunkError, Result};

/// Size of the length prefix in bytes
pub const LEN_PREFIX_SIZE: usize = size_of::<u64>();

/// Limits applied when reading chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLimits {
    /// Largest accepted chunk body in bytes
    pub max_chunk_len: u64,
}

impl Default for ChunkLimits {
    fn default() -> Self {
        Self {
            max_chunk_len: 64 * 1024 * 1024, // 64 MiB
        }
    }
}

impl ChunkLimits {
    /// Limits that accept any length the platform can address
    pub fn unlimited() -> Self {
        Self {
            max_chunk_len: u64::MAX,
        }
    }

    fn check(&self, len: u64) -> Result<usize> {
        if len > self.max_chunk_len {
            return Err(ChunkError::LimitExceeded(format!(
                "chunk length {} exceeds maximum {}",
                len, self.max_chunk_len
            )));
        }
        usize::try_from(len).map_err(|_| {
            ChunkError::LimitExceeded(format!("chunk length {} is not addressable", len))
        })
    }
}

/// Copy the bytes of a plain value into a chunk body
pub fn to_chunk<T: Pod>(value: &T) -> Bytes {
    Bytes::copy_from_slice(bytemuck::bytes_of(value))
}

/// Rebuild a plain value from a chunk body of exactly `size_of::<T>()` bytes
pub fn from_chunk<T: Pod>(chunk: &[u8]) -> Result<T> {
    if chunk.len() != size_of::<T>() {
        return Err(ChunkError::SizeMismatch {
            expected: size_of::<T>(),
            actual: chunk.len(),
        });
    }
    Ok(bytemuck::pod_read_unaligned(chunk))
}

/// Copy a slice of plain values into one chunk body
pub fn slice_to_chunk<T: Pod>(values: &[T]) -> Bytes {
    Bytes::copy_from_slice(bytemuck::cast_slice(values))
}

/// Rebuild plain values from a chunk body whose length is a multiple of
/// `size_of::<T>()`
pub fn slice_from_chunk<T: Pod>(chunk: &[u8]) -> Result<Vec<T>> {
    let size = size_of::<T>();
    if size == 0 || chunk.len() % size != 0 {
        return Err(ChunkError::SizeMismatch {
            expected: size,
            actual: chunk.len(),
        });
    }
    Ok(chunk
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

/// Append a length-prefixed chunk to an in-memory buffer
pub fn encode_chunk<B: BufMut>(buf: &mut B, data: &[u8]) {
    buf.put_u64_le(data.len() as u64);
    buf.put_slice(data);
}

/// Take one length-prefixed chunk from the front of an in-memory buffer
pub fn decode_chunk<B: Buf>(buf: &mut B, limits: &ChunkLimits) -> Result<Bytes> {
    if buf.remaining() < LEN_PREFIX_SIZE {
        return Err(ChunkError::UnexpectedEof);
    }
    let len = limits.check(buf.get_u64_le())?;
    if buf.remaining() < len {
        return Err(ChunkError::UnexpectedEof);
    }
    Ok(buf.copy_to_bytes(len))
}

/// Write one length-prefixed chunk
pub fn write_chunk<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    writer.write_all(&(data.len() as u64).to_le_bytes())?;
    writer.write_all(data)?;
    debug!(len = data.len(), "wrote chunk");
    Ok(())
}

/// Read one length-prefixed chunk.
///
/// End of input anywhere inside the chunk, including before its prefix, is
/// [`ChunkError::UnexpectedEof`].
pub fn read_chunk<R: Read>(reader: &mut R, limits: &ChunkLimits) -> Result<Bytes> {
    try_read_chunk(reader, limits)?.ok_or(ChunkError::UnexpectedEof)
}

/// Read one chunk, returning `None` when the input ends cleanly before a prefix
pub(crate) fn try_read_chunk<R: Read>(
    reader: &mut R,
    limits: &ChunkLimits,
) -> Result<Option<Bytes>> {
    let Some(len) = read_len_prefix(reader)? else {
        return Ok(None);
    };
    let len = limits.check(len)?;

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).map_err(eof_error)?;
    debug!(len, "read chunk");
    Ok(Some(Bytes::from(body)))
}

fn read_len_prefix<R: Read>(reader: &mut R) -> Result<Option<u64>> {
    let mut prefix = [0u8; LEN_PREFIX_SIZE];
    let mut filled = 0;
    while filled < prefix.len() {
        match reader.read(&mut prefix[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(ChunkError::UnexpectedEof),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(Some(u64::from_le_bytes(prefix)))
}

fn eof_error(err: io::Error) -> ChunkError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        ChunkError::UnexpectedEof
    } else {
        ChunkError::Io(err)
    }
}

/// Write a plain value as one chunk
pub fn write_data<W: Write, T: Pod>(writer: &mut W, value: &T) -> Result<()> {
    write_chunk(writer, bytemuck::bytes_of(value))
}

/// Read one chunk and convert it to a plain value
pub fn read_data<R: Read, T: Pod>(reader: &mut R, limits: &ChunkLimits) -> Result<T> {
    from_chunk(&read_chunk(reader, limits)?)
}

/// Read a whole file as UTF-8 text
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path.as_ref())?;
    debug!(path = %path.as_ref().display(), len = bytes.len(), "read file");
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::{Pod, Zeroable};
    use std::io::Cursor;

    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
    struct Point {
        x: f32,
        y: f32,
    }

    #[test]
    fn test_chunk_conversion() {
        let chunk = to_chunk(&42i32);
        assert_eq!(chunk.len(), 4);
        assert_eq!(from_chunk::<i32>(&chunk).unwrap(), 42);

        let point = Point { x: 1.5, y: -2.0 };
        assert_eq!(from_chunk::<Point>(&to_chunk(&point)).unwrap(), point);
    }

    #[test]
    fn test_from_chunk_size_mismatch() {
        let chunk = to_chunk(&7u16);
        match from_chunk::<u64>(&chunk) {
            Err(ChunkError::SizeMismatch { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_slice_chunks() {
        let values = [1i64, -2, 3];
        let chunk = slice_to_chunk(&values);
        assert_eq!(chunk.len(), 24);
        assert_eq!(slice_from_chunk::<i64>(&chunk).unwrap(), values);
        assert!(slice_from_chunk::<i64>(&chunk[..23]).is_err());
        assert!(slice_from_chunk::<i64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_prefix_is_little_endian() {
        let mut out = Vec::new();
        write_chunk(&mut out, b"abc").unwrap();
        assert_eq!(&out[..8], &[3, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&out[8..], b"abc");
    }

    #[test]
    fn test_write_read_chunks() {
        let mut out = Vec::new();
        write_chunk(&mut out, b"first").unwrap();
        write_chunk(&mut out, b"").unwrap();
        write_data(&mut out, &3.25f64).unwrap();

        let limits = ChunkLimits::default();
        let mut input = Cursor::new(out);
        assert_eq!(read_chunk(&mut input, &limits).unwrap(), &b"first"[..]);
        assert!(read_chunk(&mut input, &limits).unwrap().is_empty());
        assert_eq!(read_data::<_, f64>(&mut input, &limits).unwrap(), 3.25);
        assert!(matches!(
            read_chunk(&mut input, &limits),
            Err(ChunkError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_truncated_input() {
        let limits = ChunkLimits::default();
        let mut short_prefix = Cursor::new(vec![5u8, 0, 0]);
        assert!(matches!(
            read_chunk(&mut short_prefix, &limits),
            Err(ChunkError::UnexpectedEof)
        ));

        let mut out = Vec::new();
        write_chunk(&mut out, b"hello").unwrap();
        out.truncate(10);
        assert!(matches!(
            read_chunk(&mut Cursor::new(out), &limits),
            Err(ChunkError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_limit_exceeded() {
        let mut out = Vec::new();
        write_chunk(&mut out, &[0u8; 16]).unwrap();
        let limits = ChunkLimits { max_chunk_len: 8 };
        assert!(matches!(
            read_chunk(&mut Cursor::new(&out), &limits),
            Err(ChunkError::LimitExceeded(_))
        ));
        assert!(read_chunk(&mut Cursor::new(&out), &ChunkLimits::unlimited()).is_ok());
    }

    #[test]
    fn test_in_memory_buffers() {
        let mut buf = Vec::new();
        encode_chunk(&mut buf, b"one");
        encode_chunk(&mut buf, b"two");

        let limits = ChunkLimits::default();
        let mut rest = &buf[..];
        assert_eq!(decode_chunk(&mut rest, &limits).unwrap(), &b"one"[..]);
        assert_eq!(decode_chunk(&mut rest, &limits).unwrap(), &b"two"[..]);
        assert!(rest.is_empty());
        assert!(matches!(
            decode_chunk(&mut rest, &limits),
            Err(ChunkError::UnexpectedEof)
        ));

        let mut truncated = &buf[..buf.len() - 1];
        decode_chunk(&mut truncated, &limits).unwrap();
        assert!(matches!(
            decode_chunk(&mut truncated, &limits),
            Err(ChunkError::UnexpectedEof)
        ));
    }

    #[test]
    fn test_read_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let content = "Copyright line\n\nSome dummy text read all at once.\n";
        fs::write(&path, content).unwrap();
        assert_eq!(read_all(&path).unwrap(), content);

        assert!(matches!(
            read_all(dir.path().join("missing.txt")),
            Err(ChunkError::Io(_))
        ));

        let binary = dir.path().join("binary.bin");
        fs::write(&binary, [0xFFu8, 0xFE]).unwrap();
        assert!(matches!(read_all(&binary), Err(ChunkError::Utf8(_))));
    }
}
