//! Per-frame coalescing of pointer updates.

/// Holds at most one unapplied value. Submitting replaces whatever is pending,
/// so a burst of pointer moves between two frames collapses to the newest one.
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    superseded: u64,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            superseded: 0,
        }
    }

    /// Queue `value` for the next frame. Returns `true` if it replaced an
    /// older pending value.
    pub fn submit(&mut self, value: T) -> bool {
        let replaced = self.pending.replace(value).is_some();
        if replaced {
            self.superseded += 1;
        }
        replaced
    }

    /// Take the pending value for application.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending value without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How many submitted values were dropped in favour of newer ones.
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}
