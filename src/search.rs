extern crate alloc;
use alloc::collections::BTreeMap;

use crate::registry::color_key;
use crate::spiral::{AxisCursor, AxisState, AXIS_STEPS};

/// Saved traversal position for one center color: the three cursor
/// snapshots at the point where the previous search for that center stopped.
#[derive(Debug, Clone, Copy)]
struct ResumePoint {
    r: AxisState,
    g: AxisState,
    b: AxisState,
}

/// Remembers how deep previous searches got for each center color, so a
/// repeated query can pick up where the last one stopped instead of
/// rescanning from the center.
///
/// Resuming is only sound while the set of available colors shrinks
/// monotonically between searches sharing this cache: every candidate before
/// a saved position was rejected once, and must stay rejected. Use one cache
/// per recoloring run and [`clear`](SearchCache::clear) it before reusing it
/// for an unrelated image.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: BTreeMap<u32, ResumePoint>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of center colors with a saved position.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all saved positions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn get(&self, key: u32) -> Option<ResumePoint> {
        self.entries.get(&key).copied()
    }

    fn put(&mut self, key: u32, point: ResumePoint) {
        self.entries.insert(key, point);
    }
}

/// Find the nearest color to `center` accepted by `is_available`, walking
/// candidates in the fixed spiral order: each axis alternates outward from
/// the center (latching to one direction at a channel bound), with the red
/// index advancing slowest and the blue index fastest. The first accepted
/// candidate wins.
///
/// Returns `None` once all 257³ positions are rejected — only possible when
/// every one of the 16.7M colors is taken.
///
/// With a cache supplied, the winning position is saved under the center's
/// key whenever the red index has moved past zero, and the next search for
/// the identical center resumes from that position.
pub fn nearest_available(
    center: rgb::RGB<u8>,
    mut is_available: impl FnMut(rgb::RGB<u8>) -> bool,
    mut cache: Option<&mut SearchCache>,
) -> Option<rgb::RGB<u8>> {
    let key = color_key(center);
    let resume = cache.as_deref().and_then(|c| c.get(key));

    let (mut r_cur, resume_g, resume_b) = match resume {
        Some(point) => (
            AxisCursor::restore(center.r, point.r),
            Some(point.g),
            Some(point.b),
        ),
        None => (AxisCursor::new(center.r), None, None),
    };

    // Inner cursors restart at index 0 except on the first pass through a
    // resumed round, which continues from the saved snapshot.
    let first_r = r_cur.index();
    while r_cur.index() < AXIS_STEPS {
        let r_off = r_cur.offset();

        let mut g_cur = match resume_g {
            Some(state) if r_cur.index() == first_r => AxisCursor::restore(center.g, state),
            _ => AxisCursor::new(center.g),
        };
        let first_g = g_cur.index();
        while g_cur.index() < AXIS_STEPS {
            let g_off = g_cur.offset();

            let mut b_cur = match resume_b {
                Some(state) if r_cur.index() == first_r && g_cur.index() == first_g => {
                    AxisCursor::restore(center.b, state)
                }
                _ => AxisCursor::new(center.b),
            };
            while b_cur.index() < AXIS_STEPS {
                let b_off = b_cur.offset();
                let candidate = shift(center, r_off, g_off, b_off);
                if is_available(candidate) {
                    // A win at red index 0 resumes from depth zero anyway,
                    // so it is not worth an entry.
                    if r_cur.index() > 0 {
                        if let Some(cache) = cache.as_deref_mut() {
                            cache.put(
                                key,
                                ResumePoint {
                                    r: r_cur.state(),
                                    g: g_cur.state(),
                                    b: b_cur.state(),
                                },
                            );
                        }
                    }
                    return Some(candidate);
                }
                b_cur.advance();
            }
            g_cur.advance();
        }
        r_cur.advance();
    }

    None
}

fn shift(center: rgb::RGB<u8>, r_off: i32, g_off: i32, b_off: i32) -> rgb::RGB<u8> {
    let r = i32::from(center.r) + r_off;
    let g = i32::from(center.g) + g_off;
    let b = i32::from(center.b) + b_off;
    debug_assert!(
        (0..=255).contains(&r) && (0..=255).contains(&g) && (0..=255).contains(&b),
        "cursor produced an out-of-range candidate ({r}, {g}, {b})"
    );
    rgb::RGB {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
