//! Known-answer test vectors

/// An input with its expected MD5 digest in lowercase hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestVector {
    pub input: &'static str,
    pub expected_hex: &'static str,
}

impl DigestVector {
    const fn new(input: &'static str, expected_hex: &'static str) -> Self {
        Self {
            input,
            expected_hex,
        }
    }

    /// Input as raw bytes
    pub fn input_bytes(&self) -> &'static [u8] {
        self.input.as_bytes()
    }

    /// Expected digest as raw bytes
    pub fn expected_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(self.expected_hex, &mut bytes)
            .expect("test vector hex is well formed");
        bytes
    }
}

/// The test suite from RFC 1321, appendix A.5
pub const RFC1321_VECTORS: [DigestVector; 7] = [
    DigestVector::new("", "d41d8cd98f00b204e9800998ecf8427e"),
    DigestVector::new("a", "0cc175b9c0f1b6a831c399e269772661"),
    DigestVector::new("abc", "900150983cd24fb0d6963f7d28e17f72"),
    DigestVector::new("message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
    DigestVector::new(
        "abcdefghijklmnopqrstuvwxyz",
        "c3fcd3d76192e4007dfb496cca67e13b",
    ),
    DigestVector::new(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "d174ab98d277d9f5a5611c2c9f419d9f",
    ),
    DigestVector::new(
        "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "57edf4a22be3c955ac49da2e2107b67a",
    ),
];

/// Widely published vectors outside the RFC
pub const EXTRA_VECTORS: [DigestVector; 2] = [
    DigestVector::new(
        "The quick brown fox jumps over the lazy dog",
        "9e107d9d372bb6826bd81d3542a419d6",
    ),
    DigestVector::new(
        "The quick brown fox jumps over the lazy dog.",
        "e4d909c290d0fb1ca068ffaddf22cbd0",
    ),
];

/// Every known vector
pub fn all_vectors() -> impl Iterator<Item = DigestVector> {
    RFC1321_VECTORS.into_iter().chain(EXTRA_VECTORS)
}
