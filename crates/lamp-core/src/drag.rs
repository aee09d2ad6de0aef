//! Drag session state machine.
//!
//! Exactly two states and four transitions. The machine never touches the
//! platform: transitions that acquire or release pointer capture return the
//! pointer id so the event layer performs the capture call on every exit
//! path (normal end, recovery end, teardown).

/// Pointer identifier as reported by the host input system.
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        pointer: PointerId,
    },
}

impl DragSession {
    pub fn new() -> Self {
        Self::Idle
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Pointer id owning the active session, if any.
    #[inline]
    pub fn owner(&self) -> Option<PointerId> {
        match *self {
            Self::Dragging { pointer } => Some(pointer),
            Self::Idle => None,
        }
    }

    /// Pointer-down on the fixture's hit region. Returns the pointer to
    /// capture, or `None` if a session is already active (at most one
    /// session at a time).
    pub fn begin(&mut self, pointer: PointerId) -> Option<PointerId> {
        match self {
            Self::Idle => {
                *self = Self::Dragging { pointer };
                Some(pointer)
            }
            Self::Dragging { .. } => None,
        }
    }

    /// Pointer-up. Ends the session only when `pointer` owns it; returns the
    /// capture to release.
    pub fn end(&mut self, pointer: PointerId) -> Option<PointerId> {
        match *self {
            Self::Dragging { pointer: owner } if owner == pointer => {
                *self = Self::Idle;
                Some(owner)
            }
            _ => None,
        }
    }

    /// Safety net for pointer-leave/cancel and teardown: ends whatever
    /// session is active and returns its capture to release. Strict no-op
    /// while idle.
    pub fn recover(&mut self) -> Option<PointerId> {
        match *self {
            Self::Dragging { pointer } => {
                *self = Self::Idle;
                Some(pointer)
            }
            Self::Idle => None,
        }
    }
}
