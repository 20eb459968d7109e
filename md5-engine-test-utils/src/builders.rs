//! Deterministic test input builders

/// Byte pattern used to fill generated input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPattern {
    /// Every byte has the same value
    Repeated(u8),
    /// 0, 1, 2, ... wrapping at 256
    Counting,
    /// Linear congruential sequence from a seed
    Pseudorandom(u64),
}

/// Builder for deterministic byte inputs
#[derive(Debug, Clone)]
pub struct TestDataBuilder {
    size: usize,
    pattern: DataPattern,
}

impl TestDataBuilder {
    /// Create a builder producing empty input
    pub fn new() -> Self {
        Self {
            size: 0,
            pattern: DataPattern::Counting,
        }
    }

    /// Set the number of bytes to produce
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the fill pattern
    pub fn with_pattern(mut self, pattern: DataPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Produce the bytes
    pub fn build(&self) -> Vec<u8> {
        match self.pattern {
            DataPattern::Repeated(byte) => vec![byte; self.size],
            DataPattern::Counting => (0..self.size).map(|i| (i % 256) as u8).collect(),
            DataPattern::Pseudorandom(seed) => {
                let mut state = seed;
                (0..self.size)
                    .map(|_| {
                        state = state
                            .wrapping_mul(6364136223846793005)
                            .wrapping_add(1442695040888963407);
                        (state >> 56) as u8
                    })
                    .collect()
            }
        }
    }
}

impl Default for TestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// How to cut an input into successive `update` calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkPlan {
    /// Equal pieces of the given size, last one shorter
    Fixed(usize),
    /// Explicit piece sizes, cycled until the input is consumed
    Cycle(Vec<usize>),
}

impl ChunkPlan {
    /// Split `data` according to the plan; zero sizes yield empty pieces
    pub fn split<'a>(&self, data: &'a [u8]) -> Vec<&'a [u8]> {
        let sizes: Vec<usize> = match self {
            ChunkPlan::Fixed(size) => vec![*size],
            ChunkPlan::Cycle(sizes) => sizes.clone(),
        };
        assert!(
            sizes.iter().any(|&s| s > 0),
            "chunk plan must contain a non-zero size"
        );

        let mut pieces = Vec::new();
        let mut rest = data;
        for &size in sizes.iter().cycle() {
            if rest.is_empty() {
                break;
            }
            let take = size.min(rest.len());
            let (piece, tail) = rest.split_at(take);
            pieces.push(piece);
            rest = tail;
        }
        pieces
    }

    /// Plans that exercise every position relative to a 64-byte block
    pub fn block_edge_plans() -> Vec<ChunkPlan> {
        vec![
            ChunkPlan::Fixed(1),
            ChunkPlan::Fixed(55),
            ChunkPlan::Fixed(56),
            ChunkPlan::Fixed(63),
            ChunkPlan::Fixed(64),
            ChunkPlan::Fixed(65),
            ChunkPlan::Cycle(vec![0, 1, 62, 3, 128, 7]),
        ]
    }
}
