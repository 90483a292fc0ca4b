//! Streaming chunk writer and reader

use std::io::{Read, Write};

use bytemuck::Pod;
use bytes::Bytes;
use tracing::debug;

use crate::chunk::{self, ChunkLimits, LEN_PREFIX_SIZE};
use crate::error::Result;

/// Writes chunks to an output stream and counts them
pub struct ChunkWriter<W: Write> {
    writer: W,
    chunks_written: u64,
    bytes_written: u64,
}

impl<W: Write> ChunkWriter<W> {
    /// Wrap an output stream
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks_written: 0,
            bytes_written: 0,
        }
    }

    /// Write raw bytes as one chunk
    pub fn write_chunk(&mut self, data: &[u8]) -> Result<()> {
        chunk::write_chunk(&mut self.writer, data)?;
        self.chunks_written += 1;
        self.bytes_written += (LEN_PREFIX_SIZE + data.len()) as u64;
        Ok(())
    }

    /// Write a plain value as one chunk
    pub fn write_data<T: Pod>(&mut self, value: &T) -> Result<()> {
        self.write_chunk(bytemuck::bytes_of(value))
    }

    /// Write a slice of plain values as one chunk
    pub fn write_values<T: Pod>(&mut self, values: &[T]) -> Result<()> {
        self.write_chunk(bytemuck::cast_slice(values))
    }

    /// Number of chunks written so far
    pub fn chunks_written(&self) -> u64 {
        self.chunks_written
    }

    /// Number of bytes written so far, prefixes included
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush the underlying stream
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        debug!(
            chunks = self.chunks_written,
            bytes = self.bytes_written,
            "finished chunk stream"
        );
        Ok(self.writer)
    }
}

/// Reads chunks from an input stream and counts them
pub struct ChunkReader<R: Read> {
    reader: R,
    limits: ChunkLimits,
    chunks_read: u64,
    bytes_read: u64,
}

impl<R: Read> ChunkReader<R> {
    /// Wrap an input stream with default limits
    pub fn new(reader: R) -> Self {
        Self::with_limits(reader, ChunkLimits::default())
    }

    /// Wrap an input stream with explicit limits
    pub fn with_limits(reader: R, limits: ChunkLimits) -> Self {
        Self {
            reader,
            limits,
            chunks_read: 0,
            bytes_read: 0,
        }
    }

    /// Read the next chunk, or `None` at a clean end of stream
    pub fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        let chunk = chunk::try_read_chunk(&mut self.reader, &self.limits)?;
        if let Some(body) = &chunk {
            self.chunks_read += 1;
            self.bytes_read += (LEN_PREFIX_SIZE + body.len()) as u64;
        }
        Ok(chunk)
    }

    /// Read the next chunk as a plain value
    pub fn read_data<T: Pod>(&mut self) -> Result<Option<T>> {
        self.next_chunk()?
            .map(|body| chunk::from_chunk(&body))
            .transpose()
    }

    /// Read the next chunk as a slice of plain values
    pub fn read_values<T: Pod>(&mut self) -> Result<Option<Vec<T>>> {
        self.next_chunk()?
            .map(|body| chunk::slice_from_chunk(&body))
            .transpose()
    }

    /// Iterate over the remaining chunks.
    ///
    /// Iteration ends at a clean end of stream or after the first error.
    pub fn chunks(&mut self) -> Chunks<'_, R> {
        Chunks {
            reader: self,
            done: false,
        }
    }

    /// Number of chunks read so far
    pub fn chunks_read(&self) -> u64 {
        self.chunks_read
    }

    /// Number of bytes read so far, prefixes included
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Limits applied to each chunk
    pub fn limits(&self) -> &ChunkLimits {
        &self.limits
    }

    /// Return the underlying stream
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Iterator over the chunks of a [`ChunkReader`]
pub struct Chunks<'a, R: Read> {
    reader: &'a mut ChunkReader<R>,
    done: bool,
}

impl<R: Read> Iterator for Chunks<'_, R> {
    type Item = Result<Bytes>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
