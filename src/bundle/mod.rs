// src/bundle/mod.rs
//! Signature bundle framing codec
//!
//! A bundle is an ordered set of raw certificate blobs carried in a
//! compact binary framing:
//!
//! ```text
//! byte 0:         entry count (0-255)
//! per entry:      4-byte big-endian length L, then L raw bytes
//! ```
//!
//! The framing is all this layer checks. Blob contents are opaque: they
//! are not required to be well-formed certificates, duplicates are kept,
//! and order is preserved exactly as decoded. The outer base64 text
//! wrapper is the installer's concern, not the codec's.

use crate::utils::errors::{Result, ShimError};
use bytes::{Buf, BufMut, BytesMut};

/// Maximum number of entries a bundle can carry (the count is one byte).
pub const MAX_ENTRIES: usize = 255;

/// Immutable ordered set of raw certificate blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBundle {
    entries: Vec<Vec<u8>>,
}

impl SignatureBundle {
    /// Build a bundle from raw blobs. Fails if more than [`MAX_ENTRIES`]
    /// are supplied, since the framing cannot represent the count.
    pub fn new(entries: Vec<Vec<u8>>) -> Result<Self> {
        if entries.len() > MAX_ENTRIES {
            return Err(ShimError::MalformedBundle(format!(
                "{} entries exceed the framing limit of {}",
                entries.len(),
                MAX_ENTRIES
            )));
        }
        Ok(Self { entries })
    }

    /// Decode a framed bundle.
    ///
    /// Fails with [`ShimError::MalformedBundle`] if the input ends before
    /// the declared entry count is satisfied, or before any declared
    /// length's bytes are fully available. Bytes past the last declared
    /// entry are ignored.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let mut buf = raw;

        if !buf.has_remaining() {
            return Err(ShimError::MalformedBundle(
                "empty input, missing entry count".to_string(),
            ));
        }

        let count = buf.get_u8() as usize;
        let mut entries = Vec::with_capacity(count);

        for index in 0..count {
            if buf.remaining() < 4 {
                return Err(ShimError::MalformedBundle(format!(
                    "truncated length prefix for entry {} of {}",
                    index, count
                )));
            }
            let length = buf.get_u32() as usize;

            if buf.remaining() < length {
                return Err(ShimError::MalformedBundle(format!(
                    "entry {} declares {} bytes but only {} remain",
                    index,
                    length,
                    buf.remaining()
                )));
            }
            let mut blob = vec![0u8; length];
            buf.copy_to_slice(&mut blob);
            entries.push(blob);
        }

        Ok(Self { entries })
    }

    /// Encode the bundle into its framed form. Exact inverse of
    /// [`SignatureBundle::decode`].
    pub fn encode(&self) -> Vec<u8> {
        let payload: usize = self.entries.iter().map(|e| 4 + e.len()).sum();
        let mut buf = BytesMut::with_capacity(1 + payload);

        buf.put_u8(self.entries.len() as u8);
        for entry in &self.entries {
            buf.put_u32(entry.len() as u32);
            buf.put_slice(entry);
        }

        buf.to_vec()
    }

    /// Number of blobs in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bundle carries no blobs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the blobs in decoded order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|e| e.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_bundle() -> SignatureBundle {
        SignatureBundle::new(vec![
            vec![0x30, 0x82, 0x01, 0x0a],
            vec![],
            vec![0xde, 0xad, 0xbe, 0xef, 0x00],
        ])
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let bundle = sample_bundle();
        let encoded = bundle.encode();
        let decoded = SignatureBundle::decode(&encoded).unwrap();
        assert_eq!(decoded, bundle);
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = SignatureBundle::new(vec![]).unwrap();
        let encoded = bundle.encode();
        assert_eq!(encoded, vec![0u8]);
        assert!(SignatureBundle::decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_fails() {
        let err = SignatureBundle::decode(&[]).unwrap_err();
        assert!(matches!(err, ShimError::MalformedBundle(_)));
    }

    #[test]
    fn test_every_strict_prefix_fails() {
        let encoded = sample_bundle().encode();
        for cut in 0..encoded.len() {
            // A one-byte prefix of a non-empty bundle still declares
            // entries it cannot satisfy, so every strict prefix fails.
            let result = SignatureBundle::decode(&encoded[..cut]);
            assert!(
                matches!(result, Err(ShimError::MalformedBundle(_))),
                "prefix of {} bytes unexpectedly decoded",
                cut
            );
        }
        assert!(SignatureBundle::decode(&encoded).is_ok());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut encoded = sample_bundle().encode();
        encoded.extend_from_slice(&[0xff, 0xff, 0xff]);
        let decoded = SignatureBundle::decode(&encoded).unwrap();
        assert_eq!(decoded, sample_bundle());
    }

    #[test]
    fn test_duplicates_preserved() {
        let blob = vec![1, 2, 3];
        let bundle = SignatureBundle::new(vec![blob.clone(), blob.clone()]).unwrap();
        let decoded = SignatureBundle::decode(&bundle.encode()).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.iter().collect::<Vec<_>>(), vec![&blob[..], &blob[..]]);
    }

    #[test]
    fn test_too_many_entries_rejected() {
        let entries = vec![vec![0u8]; MAX_ENTRIES + 1];
        assert!(SignatureBundle::new(entries).is_err());
    }

    #[test]
    fn test_max_entries_round_trip() {
        let entries = (0..MAX_ENTRIES).map(|i| vec![i as u8]).collect();
        let bundle = SignatureBundle::new(entries).unwrap();
        let decoded = SignatureBundle::decode(&bundle.encode()).unwrap();
        assert_eq!(decoded, bundle);
    }

    proptest! {
        #[test]
        fn prop_round_trip(entries in prop::collection::vec(
            prop::collection::vec(any::<u8>(), 0..64),
            0..16,
        )) {
            let bundle = SignatureBundle::new(entries).unwrap();
            let decoded = SignatureBundle::decode(&bundle.encode()).unwrap();
            prop_assert_eq!(decoded, bundle);
        }

        #[test]
        fn prop_truncation_detected(
            entries in prop::collection::vec(
                prop::collection::vec(any::<u8>(), 0..32),
                1..8,
            ),
            cut_fraction in 0.0f64..1.0,
        ) {
            let bundle = SignatureBundle::new(entries).unwrap();
            let encoded = bundle.encode();
            let cut = (encoded.len() as f64 * cut_fraction) as usize;
            prop_assume!(cut < encoded.len());
            let result = SignatureBundle::decode(&encoded[..cut]);
            prop_assert!(matches!(result, Err(ShimError::MalformedBundle(_))));
        }
    }
}
