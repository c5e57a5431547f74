use std::fmt;
use std::time::Duration;

/// Identifies one auto-advance timer over the lifetime of a controller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TimerId(pub(crate) u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// The outstanding auto-advance timer.
#[derive(Debug, Clone)]
pub(crate) struct AutoAdvance {
    pub id: TimerId,
    pub elapsed: Duration,
}

impl AutoAdvance {
    pub fn new(id: TimerId) -> Self {
        Self { id, elapsed: Duration::ZERO }
    }
}

/// A slide waiting for its entered marker.
#[derive(Debug, Clone)]
pub(crate) struct PendingEnter {
    pub index: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub(crate) struct RotationState {
    pub current_index: usize,
    pub timer: Option<AutoAdvance>,
    pub pending_enter: Option<PendingEnter>,
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            timer: None,
            pending_enter: None,
        }
    }
}

/// Map any integer onto a slide index, wrapping at both ends.
///
/// Past the end resolves to the first slide and before the start resolves to
/// the last one. `len` must be non-zero.
pub fn normalize(target: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    if target < 0 {
        len - 1
    } else if target as u64 >= len as u64 {
        0
    } else {
        target as usize
    }
}
