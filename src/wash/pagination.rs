//! Entry cutoff policy
//!
//! A parse pass stops producing entries at the cutoff. Between passes the
//! cutoff can grow: doubled, increased by a delta, or made unbounded.

/// Default number of entries per pass
pub const DEFAULT_CUTOFF: usize = 100;

/// Cutoff used for "show everything"
pub const INFINITE_CUTOFF: usize = 99_999;

/// True iff a pass that produced `produced` entries hit the cutoff exactly
pub fn should_show_more(produced: usize, cutoff: usize) -> bool {
    produced == cutoff
}

/// How to grow the cutoff between passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// Twice as many entries
    Double,
    /// Add (or remove) this many entries
    Add(i64),
    /// Jump to the unbounded sentinel
    Unbounded,
}

/// Current cutoff and the sentinel that means "no limit"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    cutoff: usize,
    infinite: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            infinite: INFINITE_CUTOFF,
        }
    }
}

impl Pagination {
    pub fn new(cutoff: usize, infinite: usize) -> Self {
        let infinite = infinite.max(1);
        Self {
            cutoff: cutoff.clamp(1, infinite),
            infinite,
        }
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn is_unbounded(&self) -> bool {
        self.cutoff >= self.infinite
    }

    /// Grow the cutoff; never below one entry, never above the sentinel
    pub fn grow(&mut self, growth: Growth) -> usize {
        let next = match growth {
            Growth::Double => self.cutoff.saturating_mul(2),
            Growth::Add(delta) => {
                if delta >= 0 {
                    self.cutoff.saturating_add(delta as usize)
                } else {
                    self.cutoff.saturating_sub(delta.unsigned_abs() as usize)
                }
            }
            Growth::Unbounded => self.infinite,
        };
        self.cutoff = next.clamp(1, self.infinite);
        log::debug!("cutoff grown by {:?} to {}", growth, self.cutoff);
        self.cutoff
    }
}
