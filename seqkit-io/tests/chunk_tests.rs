//! File-backed chunk tests

use std::fs::File;
use std::io::{BufReader, BufWriter};

use proptest::prelude::*;
use seqkit_io::{
    read_all, ChunkError, ChunkLimits, ChunkReader, ChunkWriter, LEN_PREFIX_SIZE,
};
use seqkit_test_utils::Fixtures;

#[test]
fn values_survive_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.chunks");

    let values = Fixtures::one_to_ten();
    let mut writer = ChunkWriter::new(BufWriter::new(File::create(&path).unwrap()));
    for value in &values {
        writer.write_data(&i64::from(*value)).unwrap();
    }
    writer.finish().unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert_eq!(metadata.len(), (values.len() * (LEN_PREFIX_SIZE + 8)) as u64);

    let mut reader = ChunkReader::new(BufReader::new(File::open(&path).unwrap()));
    let mut read_back = Vec::new();
    while let Some(value) = reader.read_data::<i64>().unwrap() {
        read_back.push(value);
    }
    assert_eq!(read_back, values.iter().map(|v| i64::from(*v)).collect::<Vec<_>>());
}

#[test]
fn mixed_chunks_in_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.chunks");

    let mut writer = ChunkWriter::new(File::create(&path).unwrap());
    writer.write_data(&0.5f64).unwrap();
    writer.write_chunk(Fixtures::the_text().as_bytes()).unwrap();
    writer.write_values(&[u16::MAX, 0, 1]).unwrap();
    assert_eq!(writer.chunks_written(), 3);
    writer.finish().unwrap();

    let mut reader = ChunkReader::new(File::open(&path).unwrap());
    assert_eq!(reader.read_data::<f64>().unwrap(), Some(0.5));
    let text = reader.next_chunk().unwrap().unwrap();
    assert_eq!(std::str::from_utf8(&text).unwrap(), Fixtures::the_text());
    assert_eq!(reader.read_values::<u16>().unwrap(), Some(vec![u16::MAX, 0, 1]));
    assert!(reader.next_chunk().unwrap().is_none());
}

#[test]
fn wrong_type_is_a_size_mismatch() {
    let mut writer = ChunkWriter::new(Vec::new());
    writer.write_data(&1u8).unwrap();
    let out = writer.finish().unwrap();

    let mut reader = ChunkReader::new(out.as_slice());
    assert!(matches!(
        reader.read_data::<u32>(),
        Err(ChunkError::SizeMismatch {
            expected: 4,
            actual: 1
        })
    ));
}

#[test]
fn oversized_prefix_is_rejected_before_allocation() {
    let mut bytes = u64::MAX.to_le_bytes().to_vec();
    bytes.extend_from_slice(b"tiny");
    let mut reader = ChunkReader::with_limits(bytes.as_slice(), ChunkLimits::default());
    assert!(matches!(
        reader.next_chunk(),
        Err(ChunkError::LimitExceeded(_))
    ));
}

#[test]
fn read_all_reads_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paragraph.txt");
    std::fs::write(&path, Fixtures::long_paragraph()).unwrap();
    assert_eq!(read_all(&path).unwrap(), Fixtures::long_paragraph());
}

proptest! {
    #[test]
    fn written_chunks_read_back(chunks in prop::collection::vec(
        prop::collection::vec(any::<u8>(), 0..64),
        0..16,
    )) {
        let mut writer = ChunkWriter::new(Vec::new());
        for chunk in &chunks {
            writer.write_chunk(chunk).unwrap();
        }
        let expected_len = writer.bytes_written();
        let out = writer.finish().unwrap();
        prop_assert_eq!(out.len() as u64, expected_len);

        let mut reader = ChunkReader::new(out.as_slice());
        let read_back: Vec<Vec<u8>> = reader
            .chunks()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(read_back, chunks);
    }

    #[test]
    fn truncation_never_yields_a_partial_chunk(
        body in prop::collection::vec(any::<u8>(), 1..64),
        cut in 1usize..72,
    ) {
        let mut writer = ChunkWriter::new(Vec::new());
        writer.write_chunk(&body).unwrap();
        let mut out = writer.finish().unwrap();
        let cut = cut.min(out.len() - 1);
        out.truncate(cut);

        let mut reader = ChunkReader::new(out.as_slice());
        prop_assert!(matches!(reader.next_chunk(), Err(ChunkError::UnexpectedEof)));
    }
}
