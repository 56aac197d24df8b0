//! Stored-track JSON loader.
//!
//! Parses a stored-track document into a [`Track`]:
//!
//! ```json
//! {
//!   "interpolation": "cubic",
//!   "frames": [
//!     { "time": 0.0, "value": 0.0, "inSlope": 0.0, "outSlope": 0.0 }
//!   ]
//! }
//! ```
//!
//! Validation happens here, at construction time: frame times must be
//! finite and non-decreasing. Sampling itself stays total and error-free.

use serde::Deserialize;
use thiserror::Error;

use crate::track::{Frame, Interpolation, Track};

/// Errors from parsing and validating a stored-track document.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TrackError {
    #[error("stored track parse error: {reason}")]
    Parse { reason: String },

    #[error("unknown interpolation mode: {name}")]
    UnknownInterpolation { name: String },

    #[error("frame {index} time {time} is not finite")]
    NonFiniteTime { index: usize, time: f32 },

    #[error("frame {index} time {time} precedes frame {prev_index} time {prev_time}")]
    DecreasingTime {
        index: usize,
        time: f32,
        prev_index: usize,
        prev_time: f32,
    },
}

/// Parse stored-track JSON into a [`Track`].
pub fn parse_track_json(s: &str) -> Result<Track, TrackError> {
    let stored: StoredTrack = serde_json::from_str(s).map_err(|e| TrackError::Parse {
        reason: e.to_string(),
    })?;

    let interpolation = match stored.interpolation.as_str() {
        "constant" => Interpolation::Constant,
        "linear" => Interpolation::Linear,
        "cubic" => Interpolation::Cubic,
        other => {
            return Err(TrackError::UnknownInterpolation {
                name: other.to_string(),
            })
        }
    };

    let mut track = Track::new(interpolation);
    track.set_number_of_frames(stored.frames.len());

    let mut prev: Option<(usize, f32)> = None;
    for (index, frame) in stored.frames.iter().enumerate() {
        if !frame.time.is_finite() {
            return Err(TrackError::NonFiniteTime {
                index,
                time: frame.time,
            });
        }
        if let Some((prev_index, prev_time)) = prev {
            if frame.time < prev_time {
                return Err(TrackError::DecreasingTime {
                    index,
                    time: frame.time,
                    prev_index,
                    prev_time,
                });
            }
        }
        prev = Some((index, frame.time));

        track.set_frame(
            index,
            Frame::new(frame.time, frame.value, frame.in_slope, frame.out_slope),
        );
    }

    Ok(track)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredTrack {
    interpolation: String,
    frames: Vec<StoredFrame>,
}

#[derive(Debug, Deserialize)]
struct StoredFrame {
    time: f32,
    value: f32,
    #[serde(default, rename = "inSlope")]
    in_slope: f32,
    #[serde(default, rename = "outSlope")]
    out_slope: f32,
}
