//! Callback contract between the scheduler and animated objects
//!
//! Any object that drives its state from animations implements [`AnimTarget`]
//! and hands the scheduler an `Rc<RefCell<Self>>`. One object typically owns
//! several animations at once and dispatches on the id inside the callback.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::handle::AnimId;

/// Opaque payload attached to an animation and passed back to its callbacks.
///
/// Consumers downcast it back to their own type; the scheduler never looks
/// inside.
pub type UserData = Rc<dyn Any>;

/// Shared reference to an animation's target object.
pub type SharedTarget = Rc<RefCell<dyn AnimTarget>>;

/// Receives per-frame values and completion notifications for animations.
///
/// Both callbacks run inside the scheduler's `advance()` pass. It is safe to
/// register new animations or cancel existing ones from either callback;
/// such mutations are staged and reconciled at the end of the pass.
pub trait AnimTarget {
    /// Called with the evaluated value for one frame.
    ///
    /// Return `false` to retire the animation early; `complete` will fire
    /// before it is removed. Timer-kind animations only receive this call
    /// when a period elapses, not every frame.
    fn frame(&mut self, id: AnimId, value: f32, data: Option<&dyn Any>) -> bool;

    /// Called once when the animation finishes or is retired by a `false`
    /// return from [`AnimTarget::frame`]. Not called for explicit
    /// cancellation or scheduler teardown.
    fn complete(&mut self, id: AnimId, data: Option<&dyn Any>);
}
