//! Degenerate-input diagnostics.
//!
//! Sampling and projection are total and silent about their fallback paths;
//! these counters make those paths observable without changing any returned
//! value. Callers that don't care use the plain entry points and pay
//! nothing.

use serde::Serialize;

/// Counters for the degenerate cases the core resolves fail-soft.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Diagnostics {
    /// Samples taken from tracks with fewer than two frames.
    pub degenerate_track_samples: u64,
    /// Linear/Cubic segments hit with a non-positive time span.
    pub zero_span_segments: u64,
    /// Gaze projections that collapsed to zero length.
    pub degenerate_projections: u64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no degenerate input has been recorded.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    pub(crate) fn record_degenerate_track(&mut self) {
        self.degenerate_track_samples += 1;
        log::debug!("sampled a track with fewer than two frames");
    }

    #[inline]
    pub(crate) fn record_zero_span(&mut self) {
        self.zero_span_segments += 1;
        log::debug!("sampled a segment with non-positive time span");
    }

    #[inline]
    pub(crate) fn record_degenerate_projection(&mut self) {
        self.degenerate_projections += 1;
        log::debug!("gaze projection collapsed to zero length");
    }
}
