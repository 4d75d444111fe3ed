//! Standard easel catalog and best-fit resolution.
//!
//! Darkroom easels come in a handful of fixed opening sizes. Given a sheet
//! of paper, the resolver finds the smallest cataloged easel that holds it,
//! or flags the paper as non-standard and treats the sheet itself as the
//! opening.

use std::collections::{HashMap, VecDeque};

use super::precision::slot_cache_key;
use super::EPSILON;

/// A cataloged easel opening, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaselSize {
    /// Display name (e.g. "8x10")
    pub name: &'static str,

    /// Opening width in inches
    pub width: f64,

    /// Opening height in inches
    pub height: f64,
}

impl EaselSize {
    /// Opening area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether a `w` x `h` sheet fits this opening in either orientation.
    fn contains(&self, w: f64, h: f64) -> bool {
        (self.width + EPSILON >= w && self.height + EPSILON >= h)
            || (self.width + EPSILON >= h && self.height + EPSILON >= w)
    }
}

/// Standard easel openings, sorted by area.
///
/// The sort order matters: best-fit scans front to back, so the first easel
/// that holds the paper is also the one with the least wasted area.
pub const EASEL_CATALOG: [EaselSize; 5] = [
    EaselSize {
        name: "5x7",
        width: 5.0,
        height: 7.0,
    },
    EaselSize {
        name: "8x10",
        width: 8.0,
        height: 10.0,
    },
    EaselSize {
        name: "11x14",
        width: 11.0,
        height: 14.0,
    },
    EaselSize {
        name: "16x20",
        width: 16.0,
        height: 20.0,
    },
    EaselSize {
        name: "20x24",
        width: 20.0,
        height: 24.0,
    },
];

/// A width/height pair describing an easel slot oriented to the paper.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotSize {
    pub width: f64,
    pub height: f64,
}

/// Result of resolving a paper size against the easel catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaselFit {
    /// The cataloged easel as listed (or the paper itself when non-standard)
    pub easel: SlotSize,

    /// The easel opening oriented to match the paper
    pub effective_slot: SlotSize,

    /// True when no cataloged easel holds the paper
    pub is_non_standard_paper_size: bool,
}

/// Default number of resolved fits kept by [`EaselCache`].
const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Bounded memo cache for easel resolution, keyed by rounded inputs.
///
/// Owned by the caller rather than living in module-level state; evicts the
/// oldest entry once capacity is reached.
#[derive(Debug)]
pub struct EaselCache {
    entries: HashMap<String, EaselFit>,
    order: VecDeque<String>,
    capacity: usize,
}

impl EaselCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Number of cached fits.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached fits.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn get(&self, key: &str) -> Option<EaselFit> {
        self.entries.get(key).copied()
    }

    fn insert(&mut self, key: String, fit: EaselFit) {
        if self.entries.contains_key(&key) {
            return;
        }
        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, fit);
    }
}

impl Default for EaselCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the best easel slot for a sheet of paper.
///
/// Tries an exact catalog match first (in either orientation), then the
/// smallest cataloged easel that holds the paper, and finally falls back to
/// treating the sheet itself as a custom opening with
/// `is_non_standard_paper_size` set.
///
/// `landscape` rotates the paper before matching, and the returned
/// `effective_slot` is oriented to the rotated paper. Results are memoized
/// in `cache` by rounded inputs.
pub fn resolve_easel_slot(
    cache: &mut EaselCache,
    paper_w: f64,
    paper_h: f64,
    landscape: bool,
) -> EaselFit {
    let key = slot_cache_key(paper_w, paper_h, landscape);
    if let Some(fit) = cache.get(&key) {
        return fit;
    }

    let (w, h) = if landscape {
        (paper_h, paper_w)
    } else {
        (paper_w, paper_h)
    };

    let fit = find_fit(w, h);
    cache.insert(key, fit);
    fit
}

fn find_fit(w: f64, h: f64) -> EaselFit {
    // Exact match in either orientation
    for easel in &EASEL_CATALOG {
        let direct = (easel.width - w).abs() < EPSILON && (easel.height - h).abs() < EPSILON;
        let rotated = (easel.width - h).abs() < EPSILON && (easel.height - w).abs() < EPSILON;
        if direct || rotated {
            return EaselFit {
                easel: SlotSize {
                    width: easel.width,
                    height: easel.height,
                },
                effective_slot: SlotSize {
                    width: w,
                    height: h,
                },
                is_non_standard_paper_size: false,
            };
        }
    }

    // Smallest containing easel; the catalog is area-sorted, so the first
    // hit minimizes wasted area.
    for easel in &EASEL_CATALOG {
        if easel.contains(w, h) {
            let direct = easel.width + EPSILON >= w && easel.height + EPSILON >= h;
            let effective_slot = if direct {
                SlotSize {
                    width: easel.width,
                    height: easel.height,
                }
            } else {
                SlotSize {
                    width: easel.height,
                    height: easel.width,
                }
            };
            return EaselFit {
                easel: SlotSize {
                    width: easel.width,
                    height: easel.height,
                },
                effective_slot,
                is_non_standard_paper_size: false,
            };
        }
    }

    // No cataloged easel holds the sheet; use the sheet itself as the slot.
    EaselFit {
        easel: SlotSize {
            width: w,
            height: h,
        },
        effective_slot: SlotSize {
            width: w,
            height: h,
        },
        is_non_standard_paper_size: true,
    }
}
