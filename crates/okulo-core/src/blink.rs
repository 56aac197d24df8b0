//! Blink composition and per-frame scheduling.

use crate::track::{Frame, Interpolation, Track};

/// The canonical eyelid blink: quick close, a short hold, a slight
/// undershoot on release. Cubic, all slopes zero, 0.48 s long.
pub fn blink_track() -> Track {
    let frames = [
        (0.0, 0.0),
        (0.08, 0.1),
        (0.16, 1.0),
        (0.24, 1.0),
        (0.32, 0.8),
        (0.4, -0.1),
        (0.48, 0.0),
    ];

    let mut track = Track::new(Interpolation::Cubic);
    track.set_number_of_frames(frames.len());
    for (index, (time, value)) in frames.into_iter().enumerate() {
        track.set_frame(index, Frame::new(time, value, 0.0, 0.0));
    }
    track
}

/// Per-frame blink driver: samples the blink track relative to the next
/// scheduled blink and re-arms once a blink has played out.
///
/// The delay between blinks comes from a caller-supplied source so the core
/// stays deterministic; hosts typically feed `random() * 3 + 1` seconds.
pub struct BlinkScheduler<D> {
    track: Track,
    next_blink_time: f32,
    delay_source: D,
}

impl<D: FnMut() -> f32> BlinkScheduler<D> {
    /// The first blink fires `delay_source()` seconds after time zero.
    pub fn new(mut delay_source: D) -> Self {
        let first_delay = delay_source();
        Self {
            track: blink_track(),
            next_blink_time: first_delay,
            delay_source,
        }
    }

    /// Swap in a different blink track, sampled non-looping from each blink
    /// start.
    pub fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Eyelid weight at `elapsed` seconds (monotonic clock); 0.0 outside a
    /// blink. Once a blink has run past the track's end, the next one is
    /// scheduled `delay_source()` seconds from now.
    pub fn advance(&mut self, elapsed: f32) -> f32 {
        if elapsed < self.next_blink_time {
            return 0.0;
        }

        let blink_time = elapsed - self.next_blink_time;
        let weight = self.track.sample(blink_time, false);
        if blink_time >= self.track.end_time().unwrap_or(0.0) {
            self.next_blink_time = elapsed + (self.delay_source)();
        }
        weight
    }
}
