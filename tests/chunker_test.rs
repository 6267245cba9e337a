// Integration tests for the fixed-stride Chunker
// Tests cover: one-shot chunking, push/finish semantics, split invariance, zero-copy

use bytes::Bytes;
use chunkdelta::{Chunker, DiffConfig, DiffError};

fn chunker(size: usize) -> Chunker {
    Chunker::new(DiffConfig::new(size).unwrap()).unwrap()
}

fn streamed(chunker: &mut Chunker, data: &[u8], batch: usize) -> Vec<chunkdelta::Chunk> {
    let mut all = Vec::new();
    for part in data.chunks(batch) {
        all.extend(chunker.push(Bytes::copy_from_slice(part)));
    }
    all.extend(chunker.finish());
    all
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

#[test]
fn test_empty_input() {
    let mut chunker = Chunker::default();
    assert!(chunker.chunk_bytes(Bytes::new()).is_empty());

    let chunks = chunker.push(Bytes::new());
    assert!(chunks.is_empty(), "Empty input should produce no chunks");
    assert_eq!(chunker.pending_len(), 0);
    assert!(
        chunker.finish().is_none(),
        "finish() on empty state should return None"
    );
}

#[test]
fn test_zero_chunk_size_is_rejected() {
    let err = Chunker::new(DiffConfig::default().with_chunk_size(0)).unwrap_err();
    assert_eq!(
        err,
        DiffError::InvalidConfig {
            message: "chunk size must be non-zero"
        }
    );
}

#[test]
fn test_chunk_count_is_ceiling() {
    for (len, size, expected) in [(0, 3, 0), (1, 3, 1), (3, 3, 1), (4, 3, 2), (10, 1, 10)] {
        let data = vec![0x5Au8; len];
        let chunks = chunker(size).chunk_bytes(data);
        assert_eq!(chunks.len(), expected, "len={} size={}", len, size);
    }
}

#[test]
fn test_only_last_chunk_may_be_short() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
    let chunks = chunker(64).chunk_bytes(data);

    let (last, body) = chunks.split_last().unwrap();
    assert!(body.iter().all(|c| c.len() == 64));
    assert_eq!(last.len(), 1000 % 64);
    assert!(!last.is_empty());
}

#[test]
fn test_lossless_partition() {
    let data: Vec<u8> = (0..777).map(|i| (i * 7 + 13) as u8).collect();
    let chunks = chunker(100).chunk_bytes(data.clone());

    let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
    assert_eq!(joined, data, "Concatenated chunks must reproduce input");
}

// ============================================================================
// Streaming and Push/Finish Semantics
// ============================================================================

#[test]
fn test_streaming_matches_one_shot() {
    let data: Vec<u8> = (0..500).map(|i| (i % 256) as u8).collect();
    let expected = chunker(16).chunk_bytes(data.clone());

    for batch in [1, 7, 16, 37, 500] {
        let mut streaming = chunker(16);
        let all = streamed(&mut streaming, &data, batch);
        assert_eq!(all, expected, "Batch size {} must not change chunks", batch);
    }
}

#[test]
fn test_pending_bytes_handling() {
    let mut chunker = chunker(8);

    let chunks = chunker.push(Bytes::from_static(b"small"));
    assert!(chunks.is_empty());
    assert_eq!(chunker.pending_len(), 5);
    assert_eq!(chunker.offset(), 0);

    let chunks = chunker.push(Bytes::from_static(b"er"));
    assert!(chunks.is_empty());
    assert_eq!(chunker.pending_len(), 7);

    let chunks = chunker.push(Bytes::from_static(b"!"));
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].data.as_ref(), b"smaller!");
    assert_eq!(chunker.offset(), 8);
    assert_eq!(chunker.next_index(), 1);
}

#[test]
fn test_multiple_finish_calls() {
    let mut chunker = chunker(4);

    let chunks = chunker.push(Bytes::from_static(b"test"));
    assert_eq!(chunks.len(), 1);

    assert!(
        chunker.finish().is_none(),
        "finish() after an exact multiple should return None"
    );
    assert!(chunker.finish().is_none(), "Second finish() should return None");
}

#[test]
fn test_offset_resets_after_reset() {
    let mut chunker = chunker(4);

    chunker.push(Bytes::from_static(b"first stream"));
    assert!(chunker.offset() > 0);

    chunker.reset();
    assert_eq!(chunker.pending_len(), 0);

    let chunks = chunker.push(Bytes::from_static(b"second"));
    assert_eq!(chunks[0].offset, 0, "Offset should restart at 0 after reset");
    assert_eq!(chunks[0].index, 0, "Index should restart at 0 after reset");
}

// ============================================================================
// Zero-Copy Verification
// ============================================================================

#[test]
fn test_zero_copy_semantics() {
    let original = Bytes::from(&b"hello world, zero copy test data"[..]);
    let chunks = chunker(8).chunk_bytes(original.clone());

    for chunk in &chunks {
        assert!(
            chunk.data.as_ptr() >= original.as_ptr()
                && (chunk.data.as_ptr() as usize + chunk.data.len())
                    <= (original.as_ptr() as usize + original.len()),
            "Chunk data should be a slice of the original buffer"
        );
    }
}
