//! Simulated download progress.

use rand::Rng;

/// Maximum progress percentage.
pub const MAX_PROGRESS: u8 = 100;

/// Source of display progress for in-flight downloads.
///
/// No transfer actually runs, so progress is cosmetic. The trait keeps
/// sampling injectable: views take whichever source fits (random for the
/// active list, fixed for stable output and tests).
pub trait ProgressSource: Send + Sync {
    /// Returns a display percentage in `0..=100`.
    fn sample(&self) -> u8;
}

/// Uniform random progress in `0..100`, a fresh value per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomProgress;

impl ProgressSource for RandomProgress {
    fn sample(&self) -> u8 {
        rand::thread_rng().gen_range(0..MAX_PROGRESS)
    }
}

/// Always returns the same percentage, clamped to 100.
#[derive(Debug, Clone, Copy)]
pub struct FixedProgress(pub u8);

impl ProgressSource for FixedProgress {
    fn sample(&self) -> u8 {
        self.0.min(MAX_PROGRESS)
    }
}
