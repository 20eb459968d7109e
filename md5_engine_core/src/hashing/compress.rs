//! RFC 1321 block compression function

/// Size of one MD5 input block in bytes
pub(crate) const BLOCK_SIZE: usize = 64;

/// Initial chaining values (A, B, C, D)
pub(crate) const INITIAL_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

// K[i] = floor(2^32 * |sin(i + 1)|)
const SINE_TABLE: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts, four per round
const SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Mix one 64-byte block into the chaining state.
///
/// Each of the 64 steps computes
/// `a = b + ((a + round_fn(b, c, d) + X[k] + K[step]) <<< s)` and then
/// rotates the register names; after the last step the working registers
/// are added to the incoming state.
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_SIZE]) {
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let round = step / 16;
        let (mixed, k) = match round {
            0 => (f(b, c, d), step),
            1 => (g(b, c, d), (5 * step + 1) % 16),
            2 => (h(b, c, d), (3 * step + 5) % 16),
            _ => (i(b, c, d), (7 * step) % 16),
        };

        let rotated = a
            .wrapping_add(mixed)
            .wrapping_add(words[k])
            .wrapping_add(SINE_TABLE[step])
            .rotate_left(SHIFTS[round][step % 4]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Block holding the fully padded empty message
    fn padded_empty_block() -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x80;
        block
    }

    #[test]
    fn test_sine_table_matches_formula() {
        for (index, &constant) in SINE_TABLE.iter().enumerate() {
            let expected = ((index as f64 + 1.0).sin().abs() * 4_294_967_296.0).floor() as u32;
            assert_eq!(constant, expected, "sine constant {index} mismatch");
        }
    }

    #[test]
    fn test_round_functions_truth_table() {
        // Bitwise selection on alternating patterns
        let x = 0xff00ff00;
        let y = 0xf0f0f0f0;
        let z = 0xcccccccc;

        assert_eq!(f(x, y, z), (x & y) | (!x & z));
        assert_eq!(g(x, y, z), (x & z) | (y & !z));
        assert_eq!(h(x, y, z), x ^ y ^ z);
        assert_eq!(i(x, y, z), y ^ (x | !z));

        // F selects y where x is set, z elsewhere
        assert_eq!(f(u32::MAX, y, z), y);
        assert_eq!(f(0, y, z), z);
    }

    #[test]
    fn test_compress_empty_message_block() {
        let mut state = INITIAL_STATE;
        compress(&mut state, &padded_empty_block());

        let bytes: Vec<u8> = state.iter().flat_map(|w| w.to_le_bytes()).collect();
        assert_eq!(hex::encode(bytes), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_compress_changes_every_word() {
        let mut state = INITIAL_STATE;
        compress(&mut state, &[0u8; BLOCK_SIZE]);

        for (after, before) in state.iter().zip(INITIAL_STATE.iter()) {
            assert_ne!(after, before);
        }
    }

    #[test]
    fn test_compress_is_deterministic() {
        let block: [u8; BLOCK_SIZE] = std::array::from_fn(|n| n as u8);

        let mut first = INITIAL_STATE;
        let mut second = INITIAL_STATE;
        compress(&mut first, &block);
        compress(&mut second, &block);

        assert_eq!(first, second);
    }
}
