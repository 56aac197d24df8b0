//! Keyframe track sampling.
//!
//! Model:
//! - A Track owns ordered Frames stamped with absolute times in seconds.
//! - Interpolation is Constant (step), Linear, or Cubic (Hermite with
//!   per-frame in/out slopes scaled by the segment span).
//! - sample(time, looping) is total: degenerate tracks and zero-span
//!   segments resolve to 0.0 (fail-soft) so a per-frame caller never stalls.
//!
//! Frames are kept in non-decreasing time order by the caller; the API does
//! not sort. Out-of-order frames make sampling ill-defined but never panic.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// Interpolation mode for a track.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Interpolation {
    Constant,
    #[default]
    Linear,
    Cubic,
}

/// A single keyframe: a value at a time, plus incoming/outgoing tangent
/// slopes. The slopes only participate in cubic sampling.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub time: f32,
    pub value: f32,
    pub in_slope: f32,
    pub out_slope: f32,
}

impl Frame {
    #[inline]
    pub fn new(time: f32, value: f32, in_slope: f32, out_slope: f32) -> Self {
        Self {
            time,
            value,
            in_slope,
            out_slope,
        }
    }
}

/// An ordered sequence of frames plus an interpolation mode, samplable at
/// arbitrary times.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    frames: Vec<Frame>,
    interpolation: Interpolation,
}

impl Track {
    pub fn new(interpolation: Interpolation) -> Self {
        Self {
            frames: Vec::new(),
            interpolation,
        }
    }

    #[inline]
    pub fn number_of_frames(&self) -> usize {
        self.frames.len()
    }

    /// Resize to exactly `n` frames, padding with default (all-zero) frames
    /// or truncating from the end. `n = 0` is allowed.
    pub fn set_number_of_frames(&mut self, n: usize) {
        self.frames.resize_with(n, Frame::default);
    }

    /// Frame at `index`. Out of range is a caller error and panics like any
    /// slice access.
    #[inline]
    pub fn frame(&self, index: usize) -> Frame {
        self.frames[index]
    }

    /// Replace the frame at `index`. Same bounds semantics as [`Track::frame`].
    #[inline]
    pub fn set_frame(&mut self, index: usize, frame: Frame) {
        self.frames[index] = frame;
    }

    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    #[inline]
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Time of the first frame; `None` on an empty track.
    #[inline]
    pub fn start_time(&self) -> Option<f32> {
        self.frames.first().map(|f| f.time)
    }

    /// Time of the last frame; `None` on an empty track.
    #[inline]
    pub fn end_time(&self) -> Option<f32> {
        self.frames.last().map(|f| f.time)
    }

    /// Sample the track at `time`. With `looping` the track repeats with
    /// period `end_time - start_time`; otherwise queries clamp to the
    /// track's span. Always returns a number; degenerate inputs yield 0.0
    /// (except single-frame Constant tracks, which hold their sole value).
    pub fn sample(&self, time: f32, looping: bool) -> f32 {
        match self.interpolation {
            Interpolation::Constant => self.sample_constant(time, looping),
            Interpolation::Linear => self.sample_linear(time, looping),
            Interpolation::Cubic => self.sample_cubic(time, looping),
        }
    }

    /// [`Track::sample`] with degenerate-input counters. The returned value
    /// is identical to the plain call.
    pub fn sample_with_diagnostics(
        &self,
        time: f32,
        looping: bool,
        diagnostics: &mut Diagnostics,
    ) -> f32 {
        if self.frames.len() <= 1 {
            diagnostics.record_degenerate_track();
        } else if self.interpolation != Interpolation::Constant {
            if let Some(i) = self.index_of_last_frame_before(time, looping) {
                if i + 1 < self.frames.len() && self.frames[i + 1].time - self.frames[i].time <= 0.0
                {
                    diagnostics.record_zero_span();
                }
            }
        }
        self.sample(time, looping)
    }

    /// Index of the frame at or before the (possibly loop-wrapped) query
    /// time; `None` with fewer than two frames, or when the backward scan
    /// falls through (a zero-duration wrap produces NaN and matches no
    /// frame).
    fn index_of_last_frame_before(&self, time: f32, looping: bool) -> Option<usize> {
        let n = self.frames.len();
        if n <= 1 {
            return None;
        }

        let adjusted = if looping {
            let start = self.frames[0].time;
            let duration = self.frames[n - 1].time - start;
            ((time - start) % duration + duration) % duration + start
        } else {
            if time <= self.frames[0].time {
                return Some(0);
            }
            // Reserve room for an upper neighbor: the last frame is only
            // ever the right end of the final segment.
            if time >= self.frames[n - 2].time {
                return Some(n - 2);
            }
            time
        };

        // Linear scan from the back; fine at blink-track scale.
        (0..n).rev().find(|&i| adjusted >= self.frames[i].time)
    }

    /// Wrap or clamp `time` into the track's span, for interpolation
    /// fraction computation. 0.0 with fewer than two frames or a
    /// non-positive duration.
    fn adjust_time_to_track(&self, time: f32, looping: bool) -> f32 {
        let n = self.frames.len();
        if n <= 1 {
            return 0.0;
        }
        let start = self.frames[0].time;
        let end = self.frames[n - 1].time;
        let duration = end - start;
        if duration <= 0.0 {
            return 0.0;
        }

        if looping {
            ((time - start) % duration + duration) % duration + start
        } else if time <= start {
            start
        } else if time >= end {
            end
        } else {
            time
        }
    }

    /// Bracketing segment for Linear/Cubic sampling: left frame index, time
    /// span to the right neighbor, and the interpolation fraction. `None`
    /// when no pair resolves or the span is non-positive (duplicate
    /// timestamps).
    fn segment_at(&self, time: f32, looping: bool) -> Option<(usize, f32, f32)> {
        let this_frame = self.index_of_last_frame_before(time, looping)?;
        if this_frame + 1 >= self.frames.len() {
            return None;
        }

        let span = self.frames[this_frame + 1].time - self.frames[this_frame].time;
        if span <= 0.0 {
            return None;
        }

        let track_time = self.adjust_time_to_track(time, looping);
        let t = (track_time - self.frames[this_frame].time) / span;
        Some((this_frame, span, t))
    }

    fn sample_constant(&self, time: f32, looping: bool) -> f32 {
        match self.index_of_last_frame_before(time, looping) {
            Some(i) => self.frames[i].value,
            // A single frame is still a step function; hold its value.
            None if self.frames.len() == 1 => self.frames[0].value,
            None => 0.0,
        }
    }

    fn sample_linear(&self, time: f32, looping: bool) -> f32 {
        let Some((i, _span, t)) = self.segment_at(time, looping) else {
            return 0.0;
        };

        let start = self.frames[i].value;
        let end = self.frames[i + 1].value;
        start + (end - start) * t
    }

    fn sample_cubic(&self, time: f32, looping: bool) -> f32 {
        let Some((i, span, t)) = self.segment_at(time, looping) else {
            return 0.0;
        };

        let p1 = self.frames[i].value;
        let out_tangent_of_p1 = self.frames[i].out_slope * span;
        let p2 = self.frames[i + 1].value;
        let in_tangent_of_p2 = self.frames[i + 1].in_slope * span;
        hermite(t, p1, out_tangent_of_p1, p2, in_tangent_of_p2)
    }
}

/// Cubic Hermite interpolation between `p1` and `p2`, with tangents already
/// scaled to the segment span.
#[inline]
fn hermite(t: f32, p1: f32, out_tangent_of_p1: f32, p2: f32, in_tangent_of_p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    p1 * h00 + out_tangent_of_p1 * h10 + p2 * h01 + in_tangent_of_p2 * h11
}
