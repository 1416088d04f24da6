/// Steps each axis takes before its channel is exhausted.
///
/// Indices 0..=256: the parity construction visits offset zero twice
/// (indices 0 and 1), and the remaining 255 steps cover every other channel
/// value exactly once.
pub const AXIS_STEPS: u16 = 257;

/// Traversal mode for one axis.
///
/// An axis starts out alternating positive and negative offsets around its
/// center. The first time an offset would leave 0..=255 the axis latches to
/// one-directional stepping; the latch is never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Alternating offsets: `+k/2` on even indices, `-(k-1)/2` on odd.
    Balanced,
    /// Remaining candidates all lie above the center.
    ForcedUp,
    /// Remaining candidates all lie below the center.
    ForcedDown,
}

/// Saved cursor position, small enough to stash in a search cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisState {
    pub index: u16,
    pub mode: AxisMode,
    pub pivot: i32,
}

/// Offset generator for one color channel.
///
/// Walks the 256 reachable values of a channel outward from `center`:
/// 0, -0, +1, -1, +2, ... until one bound runs out of room, then straight
/// toward the other bound. The walk is self-clamping — `center + offset()`
/// stays in 0..=255 for every index below [`AXIS_STEPS`].
#[derive(Debug, Clone)]
pub struct AxisCursor {
    center: u8,
    index: u16,
    mode: AxisMode,
    pivot: i32,
}

impl AxisCursor {
    /// Fresh cursor at index 0 (the center itself).
    pub fn new(center: u8) -> Self {
        Self {
            center,
            index: 0,
            mode: AxisMode::Balanced,
            pivot: 0,
        }
    }

    /// Rebuild a cursor from a snapshot taken for the same center.
    pub fn restore(center: u8, state: AxisState) -> Self {
        Self {
            center,
            index: state.index,
            mode: state.mode,
            pivot: state.pivot,
        }
    }

    /// Snapshot the current position, including any latched mode.
    pub fn state(&self) -> AxisState {
        AxisState {
            index: self.index,
            mode: self.mode,
            pivot: self.pivot,
        }
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    /// Signed offset at the current index, latching the mode if this step is
    /// the first to run past a channel bound.
    pub fn offset(&mut self) -> i32 {
        let k = i32::from(self.index);
        match self.mode {
            AxisMode::ForcedUp => k - self.pivot,
            AxisMode::ForcedDown => self.pivot - k,
            AxisMode::Balanced if k % 2 == 0 => {
                let up = k / 2;
                if up > 255 - i32::from(self.center) {
                    // The pivot is the first magnitude that no longer fits
                    // above the center; every later step counts down from it.
                    self.mode = AxisMode::ForcedDown;
                    self.pivot = up;
                    self.pivot - k
                } else {
                    up
                }
            }
            AxisMode::Balanced => {
                let down = (k - 1) / 2;
                if down > i32::from(self.center) {
                    self.mode = AxisMode::ForcedUp;
                    self.pivot = down;
                    k - self.pivot
                } else {
                    -down
                }
            }
        }
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }
}
