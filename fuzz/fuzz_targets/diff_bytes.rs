#![no_main]

use libfuzzer_sys::fuzz_target;
use chunkdelta::{ByteCompare, DigestCompare, diff};

fuzz_target!(|input: (Vec<u8>, Vec<u8>, u8)| {
    let (original, updated, size) = input;
    let chunk_size = size as usize;

    let result = match diff(original.clone(), updated.clone(), ByteCompare, chunk_size) {
        Ok(result) => result,
        Err(_) => {
            // Only a zero chunk size may fail
            assert_eq!(chunk_size, 0);
            return;
        }
    };

    // Verify: every position is classified exactly once
    let positions = original
        .len()
        .div_ceil(chunk_size)
        .max(updated.len().div_ceil(chunk_size));
    assert_eq!(result.positions(), positions);
    assert_eq!(result.modified.len(), result.removed.len());

    // Verify: both sides can be rebuilt
    assert_eq!(result.reconstruct_updated().as_ref(), updated.as_slice());
    assert_eq!(result.reconstruct_original().as_ref(), original.as_slice());

    // Verify: digest comparison agrees with byte comparison
    let by_digest = diff(original, updated, DigestCompare::blake3(), chunk_size).unwrap();
    assert_eq!(result, by_digest);
});
