//! Per-frame linear congruential random stream.
//!
//! Every stochastic decision in a frame MUST draw from the single
//! [`RngState`] owned by the renderer, in a fixed order, so that replaying a
//! frame from its seed reproduces the exact same draw-intent stream.

/// LCG multiplier (Numerical Recipes).
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes).
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// 2^32, the LCG modulus, as a float divisor.
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Label mixed into the run seed when deriving the noise table seed.
/// Bump the version when the table construction changes.
pub const NOISE_TABLE_VERSION: &str = "zorn-noise/v1";

/// Single-owner random state: `state' = state * 1664525 + 1013904223 (mod 2^32)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngState {
    state: u32,
}

impl RngState {
    /// Create a stream positioned at `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Rewind the stream to `seed`.
    #[inline]
    pub fn reset(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Advance the stream and return the new state scaled into [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state as f64 / LCG_MODULUS
    }
}

/// Derive the noise table seed for a run using BLAKE3.
///
/// The noise table is built once per run, independently of the per-frame
/// stream, so it gets its own versioned sub-seed.
pub fn derive_noise_seed(run_seed: u32) -> u32 {
    let mut input = Vec::with_capacity(4 + NOISE_TABLE_VERSION.len());
    input.extend_from_slice(&run_seed.to_le_bytes());
    input.extend_from_slice(NOISE_TABLE_VERSION.as_bytes());
    let hash = blake3::hash(&input);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}
