//! Turns a navigation request into the index the carousel should commit.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::IncrementMode;
use crate::state::CarouselState;

/// A navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Request {
    Next,
    Prev,
    /// One-based frame number
    JumpToFrame(usize),
    Reset,
}

/// Step size for `next`/`prev` in the state's mode
#[inline]
pub fn step(state: &CarouselState) -> usize {
    match state.mode {
        IncrementMode::Frame => state.increment,
        IncrementMode::Tile => 1,
    }
}

/// Index to commit for `request`, or `None` when the request is a no-op.
///
/// `next`/`prev` always resolve, even when clamping leaves the index where it is,
/// so boundary presses still run the full commit. `jump_to_frame` resolves only
/// when it would actually move.
pub fn resolve(state: &CarouselState, request: Request) -> Option<usize> {
    if state.is_inert() {
        return None;
    }
    let max = state.max_index();
    match request {
        Request::Next => Some((state.index + step(state)).min(max)),
        Request::Prev => Some(state.index.saturating_sub(step(state)).min(max)),
        Request::JumpToFrame(frame) => {
            if frame > state.frame_count {
                return None;
            }
            let candidate = (frame * state.increment)
                .saturating_sub(state.increment)
                .min(max);
            (candidate != state.index).then_some(candidate)
        }
        Request::Reset => Some(0),
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Next => f.write_str("next"),
            Request::Prev => f.write_str("prev"),
            Request::JumpToFrame(frame) => write!(f, "jump:{}", frame),
            Request::Reset => f.write_str("reset"),
        }
    }
}

impl FromStr for Request {
    type Err = crate::Error;

    /// Accepts `next`, `prev`, `reset` and `jump:N`
    fn from_str(s: &str) -> crate::Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "next" | "n" => return Ok(Request::Next),
            "prev" | "p" => return Ok(Request::Prev),
            "reset" | "r" => return Ok(Request::Reset),
            _ => {}
        }
        s.strip_prefix("jump:")
            .and_then(|n| n.parse::<usize>().ok())
            .map(Request::JumpToFrame)
            .ok_or_else(|| crate::Error::Other(format!("unrecognized navigation step '{}'", s)))
    }
}
