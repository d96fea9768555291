//! Element id allocation threaded through a single render.
//!
//! There is no shared counter: every render step takes an [`IdSupply`] by
//! value and hands the advanced supply back with its output, so ids depend
//! only on where a control sits in the document.

/// Number given to the first id of every render.
pub const FIRST_ID: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdSupply {
    next: u32,
}

impl IdSupply {
    pub fn new() -> Self {
        Self { next: FIRST_ID }
    }

    /// The number the next call to [`fresh`](Self::fresh) will use.
    pub fn peek(self) -> u32 {
        self.next
    }

    /// Returns `"<prefix>-<n>"` and the supply that follows it.
    pub fn fresh(self, prefix: &str) -> (String, IdSupply) {
        let id = format!("{prefix}-{}", self.next);
        (
            id,
            IdSupply {
                next: self.next.wrapping_add(1),
            },
        )
    }
}

impl Default for IdSupply {
    fn default() -> Self {
        Self::new()
    }
}
