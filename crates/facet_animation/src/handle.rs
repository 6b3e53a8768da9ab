//! Animation identity and the owner-side handle
//!
//! The scheduler names every registration with an [`AnimId`]; owning objects
//! keep the id in an [`AnimHandle`] to track "my current in-flight animation,
//! if any" and to cancel it on teardown without holding the item itself.

use std::fmt;

use crate::scheduler::SchedulerHandle;

/// Identity of a registered animation.
///
/// Ids are strictly increasing per scheduler and never reused; `0` is the
/// sentinel "inactive" value ([`AnimId::NONE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AnimId(pub u64);

impl AnimId {
    /// The inactive sentinel.
    pub const NONE: AnimId = AnimId(0);

    pub fn is_active(self) -> bool {
        self.0 != 0
    }
}

impl PartialEq<u64> for AnimId {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for AnimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracks at most one outstanding animation for its owner.
///
/// The handle is a lookup key, not an owner: the scheduler owns the item.
/// Dropping an active handle cancels the animation, so a visual component
/// that stores its handles tears its animations down with itself.
pub struct AnimHandle {
    id: AnimId,
    sched: SchedulerHandle,
}

impl AnimHandle {
    /// An inactive handle bound to the given scheduler.
    pub fn new(sched: SchedulerHandle) -> Self {
        Self {
            id: AnimId::NONE,
            sched,
        }
    }

    /// An inactive handle bound to nothing; `cancel` is a no-op until the
    /// handle is replaced with a bound one.
    pub fn detached() -> Self {
        Self::new(SchedulerHandle::detached())
    }

    pub fn id(&self) -> AnimId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_active()
    }

    /// Store a new id.
    ///
    /// Deliberately does *not* cancel a previously held id — overwriting an
    /// active handle leaves the old animation running with nothing tracking
    /// it. Call [`AnimHandle::cancel`] first when replacing an animation.
    pub fn set(&mut self, id: AnimId) {
        self.id = id;
    }

    /// Cancel the tracked animation, if any.
    ///
    /// Always leaves the handle inactive; returns whether it was active.
    /// Safe to call when the animation already completed (the scheduler
    /// lookup simply misses) or after the scheduler was dropped.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            self.sched.unregister(self.id);
        }
        self.id = AnimId::NONE;
        was_active
    }
}

impl Drop for AnimHandle {
    fn drop(&mut self) {
        if self.is_active() {
            self.sched.unregister(self.id);
        }
    }
}

impl PartialEq<AnimId> for AnimHandle {
    fn eq(&self, other: &AnimId) -> bool {
        self.id == *other
    }
}

impl fmt::Debug for AnimHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnimHandle").field(&self.id).finish()
    }
}
