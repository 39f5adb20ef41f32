//! Per-trial deterministic RNG streams
//!
//! Each trial owns an independent ChaCha8 stream, so trials never contend
//! for a shared generator and a whole request replays from one master seed.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// An owned pseudo-random stream for one trial.
pub struct TrialRng {
    rng: ChaCha8Rng,
}

impl TrialRng {
    /// Create a stream from an explicit seed (reproducible).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a stream from OS entropy (free-running).
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Draw a symmetric uniform value in [-amplitude, +amplitude].
    ///
    /// A zero amplitude still consumes one draw, keeping stream positions
    /// comparable across competitiveness settings.
    pub fn noise(&mut self, amplitude: f64) -> f64 {
        let draw: f64 = self.rng.gen_range(-1.0..=1.0);
        draw * amplitude
    }
}

/// Derive the seed for one trial from the request's master seed.
///
/// Golden-ratio mixing keeps the derived seeds distinct per trial and keeps
/// two requests with adjacent master seeds from sharing trial streams.
pub fn trial_seed(master: u64, trial: u32) -> u64 {
    master ^ u64::from(trial).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
