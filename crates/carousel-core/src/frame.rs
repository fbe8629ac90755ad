//! Frame arithmetic over a flat tile sequence.

use serde::{Deserialize, Serialize};

/// A window over the tile sequence: `len` tiles starting at `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameWindow {
    pub start: usize,
    pub len: usize,
}

impl FrameWindow {
    /// Window of at most `increment` tiles starting at `start`, cut off at `total`
    pub fn at(start: usize, increment: usize, total: usize) -> Self {
        let start = start.min(total);
        Self {
            start,
            len: increment.min(total - start),
        }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.end()
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }
}

/// `ceil(total / increment)`
#[inline]
pub fn frame_count(total: usize, increment: usize) -> usize {
    total.div_ceil(increment)
}

/// Shortfall of the final frame against the nominal frame size
#[inline]
pub fn tile_delta(total: usize, increment: usize) -> usize {
    increment * frame_count(total, increment) - total
}

/// Highest index navigation may settle on
#[inline]
pub fn max_index(total: usize, increment: usize) -> usize {
    total.saturating_sub(increment)
}

/// Zero-based frame holding `index`, rounding up for mid-frame offsets
#[inline]
pub fn frame_index(index: usize, increment: usize) -> usize {
    index.div_ceil(increment)
}

/// Split `total` tiles into consecutive frames of `increment` tiles
pub fn partition(total: usize, increment: usize) -> Vec<FrameWindow> {
    (0..frame_count(total, increment))
        .map(|frame| FrameWindow::at(frame * increment, increment, total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_sizes() {
        let frames = partition(10, 3);
        let sizes: Vec<usize> = frames.iter().map(|f| f.len).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
        assert_eq!(frames[3].start, 9);
        assert_eq!(tile_delta(10, 3), 2);
        assert_eq!(max_index(10, 3), 7);
    }

    #[test]
    fn test_partition_properties() {
        for total in 0..40 {
            for increment in 1..9 {
                let frames = partition(total, increment);
                assert_eq!(frames.len(), frame_count(total, increment));
                assert_eq!(frames.iter().map(|f| f.len).sum::<usize>(), total);
                if let Some((last, rest)) = frames.split_last() {
                    assert!(rest.iter().all(|f| f.len == increment));
                    assert!(last.len >= 1 && last.len <= increment);
                    assert_eq!(last.end(), total);
                }
                assert_eq!(
                    tile_delta(total, increment),
                    increment * frames.len() - total
                );
            }
        }
    }

    #[test]
    fn test_empty_sequence() {
        assert!(partition(0, 4).is_empty());
        assert_eq!(tile_delta(0, 4), 0);
        assert_eq!(max_index(0, 4), 0);
        assert!(FrameWindow::at(0, 4, 0).is_empty());
    }

    #[test]
    fn test_frame_index_rounds_up() {
        assert_eq!(frame_index(0, 3), 0);
        assert_eq!(frame_index(3, 3), 1);
        assert_eq!(frame_index(7, 3), 3);
        assert_eq!(frame_index(4, 1), 4);
    }

    #[test]
    fn test_window_contains() {
        let window = FrameWindow::at(7, 3, 10);
        assert_eq!(window.range(), 7..10);
        assert!(window.contains(9));
        assert!(!window.contains(6));
    }
}
