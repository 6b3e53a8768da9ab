//! Animation scheduler
//!
//! Owns every live animation for one screen and evaluates them all in a
//! single per-frame [`AnimScheduler::advance`] pass. Target callbacks run
//! inside that pass and may register new animations or cancel existing ones;
//! such reentrant mutations are staged in side lists and reconciled after
//! the scan so iteration is never invalidated.
//!
//! The scheduler is single-threaded by design: one frame-pump call stack
//! drives `advance`, `register`, and `unregister`, including the nested
//! calls made by callbacks. The staging lists exist for reentrancy, not for
//! thread safety.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use facet_core::{ticks_to_millis, Clock, TimeDomain};

use crate::curve::sample_curve;
use crate::handle::AnimId;
use crate::item::{AnimItem, AnimKind};
use crate::target::{SharedTarget, UserData};

struct SchedulerInner {
    clock: Clock,
    /// Live animations, in insertion order.
    items: Vec<AnimItem>,
    /// Registrations issued while traversing; merged after the pass.
    pending_adds: Vec<AnimItem>,
    /// Cancellations issued while traversing; applied after the pass.
    pending_removes: SmallVec<[AnimId; 8]>,
    /// Next id to hand out. Ids start at 1 and are never reused.
    next_id: u64,
    traversing: bool,
}

/// The per-screen animation scheduler.
///
/// Created when a screen activates and dropped when it tears down; dropping
/// discards every live and staged item without firing `complete` (screen
/// transitions intentionally abandon in-flight animations). Components
/// reference the scheduler through [`SchedulerHandle`] clones, which go inert
/// once the owner is gone.
pub struct AnimScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimScheduler {
    pub fn new(clock: Clock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                clock,
                items: Vec::new(),
                pending_adds: Vec::new(),
                pending_removes: SmallVec::new(),
                next_id: 1,
                traversing: false,
            })),
        }
    }

    /// Get a weak handle for passing to components.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Register an animation against the given time domain.
    ///
    /// The item's identity, start timestamp, and value span are assigned
    /// here; the returned id is never [`AnimId::NONE`] and never reused.
    /// Safe to call from inside a callback during `advance`.
    pub fn register(&self, item: AnimItem, domain: TimeDomain) -> AnimId {
        register_in(&self.inner, item, domain)
    }

    /// Register against game time, the common case.
    pub fn register_game(&self, item: AnimItem) -> AnimId {
        self.register(item, TimeDomain::Game)
    }

    /// Cancel an animation by id.
    ///
    /// Returns `false` if the id is not live (already completed or never
    /// registered) — cancelling defensively is cheap and expected. Neither
    /// callback fires for a cancelled item. Safe to call from inside a
    /// callback during `advance`; removal is then deferred to end-of-pass,
    /// and a not-yet-visited item is skipped for the rest of the pass.
    pub fn unregister(&self, id: AnimId) -> bool {
        unregister_in(&self.inner, id)
    }

    /// Number of live animations. Staged adds don't count until the pass
    /// that staged them ends.
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate every live animation once. Call once per frame, after
    /// `Clock::tick`.
    ///
    /// For each item this computes elapsed time in the item's domain,
    /// derives shaped progress, invokes the target's `frame` callback
    /// (timer kinds only when a period elapses), and retires the item via
    /// `complete` when it finishes or the callback returns `false`.
    pub fn advance(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.traversing {
                debug_assert!(false, "advance() called from inside an animation callback");
                tracing::warn!("reentrant advance() ignored");
                return;
            }
            inner.traversing = true;
        }

        let mut index = 0;
        loop {
            // Evaluate under the borrow, then release it before calling out
            // so callbacks can re-enter register/unregister.
            let step = {
                let inner = self.inner.borrow();
                let Some(item) = inner.items.get(index) else {
                    break;
                };
                if inner.pending_removes.contains(&item.id) {
                    // Cancelled earlier in this pass; no callbacks for it.
                    None
                } else {
                    Some(evaluate(item, &inner.clock))
                }
            };
            let Some(step) = step else {
                index += 1;
                continue;
            };
            if !step.notify {
                index += 1;
                continue;
            }

            let data = step.user_data.as_deref();
            let keep = step.target.borrow_mut().frame(step.id, step.value, data);
            if !keep || step.done {
                step.target.borrow_mut().complete(step.id, data);
                let mut inner = self.inner.borrow_mut();
                // Reentrant calls only touch the staging lists, so the item
                // is still at `index`.
                debug_assert_eq!(inner.items[index].id, step.id);
                inner.items.remove(index);
                tracing::trace!(id = %step.id, remaining = inner.items.len(), "animation retired");
                // The next item slid into `index`; don't advance.
            } else {
                if step.rearm {
                    let mut inner = self.inner.borrow_mut();
                    let now = inner.clock.now(inner.items[index].domain);
                    inner.items[index].start_ticks = now;
                }
                index += 1;
            }
        }

        // Reconcile staged mutations: removes first, then adds, so an item
        // cancelled mid-pass can never come back through the add path.
        let removes = {
            let mut inner = self.inner.borrow_mut();
            inner.traversing = false;
            std::mem::take(&mut inner.pending_removes)
        };
        for id in removes {
            unregister_in(&self.inner, id);
        }
        let mut inner = self.inner.borrow_mut();
        let adds = std::mem::take(&mut inner.pending_adds);
        inner.items.extend(adds);
    }
}

/// A weak, cloneable reference to a scheduler.
///
/// Components hold one of these to start and cancel their own animations.
/// Every operation is a no-op once the owning [`AnimScheduler`] has been
/// dropped, so a stale handle on a torn-down screen is harmless.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// A handle bound to nothing. Every operation is a no-op; useful as a
    /// placeholder before a component is attached to a screen.
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    /// Whether the owning scheduler is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Register an animation; returns [`AnimId::NONE`] if the scheduler is
    /// gone.
    pub fn register(&self, item: AnimItem, domain: TimeDomain) -> AnimId {
        match self.inner.upgrade() {
            Some(inner) => register_in(&inner, item, domain),
            None => AnimId::NONE,
        }
    }

    /// Register against game time, the common case.
    pub fn register_game(&self, item: AnimItem) -> AnimId {
        self.register(item, TimeDomain::Game)
    }

    /// Cancel an animation; returns `false` if the id is not live or the
    /// scheduler is gone.
    pub fn unregister(&self, id: AnimId) -> bool {
        match self.inner.upgrade() {
            Some(inner) => unregister_in(&inner, id),
            None => false,
        }
    }
}

fn register_in(cell: &RefCell<SchedulerInner>, mut item: AnimItem, domain: TimeDomain) -> AnimId {
    let mut inner = cell.borrow_mut();
    let id = AnimId(inner.next_id);
    inner.next_id += 1;

    if item.duration_ms == 0 {
        // Zero would divide progress by zero; a 1ms item completes on its
        // first evaluated frame, which is what fire-once callers want.
        tracing::warn!(%id, "zero-duration animation clamped to 1ms");
        item.duration_ms = 1;
    }

    item.id = id;
    item.start_ticks = inner.clock.now(domain);
    item.span = item.end_val - item.start_val;
    item.domain = domain;

    let kind = item.kind;
    if inner.traversing {
        inner.pending_adds.push(item);
    } else {
        inner.items.push(item);
    }
    tracing::trace!(%id, ?kind, live = inner.items.len(), "animation registered");
    id
}

fn unregister_in(cell: &RefCell<SchedulerInner>, id: AnimId) -> bool {
    let mut inner = cell.borrow_mut();
    let Some(pos) = inner.items.iter().position(|item| item.id == id) else {
        return false;
    };
    if inner.traversing {
        inner.pending_removes.push(id);
    } else {
        inner.items.remove(pos);
    }
    true
}

/// Everything `advance` needs from one item, captured so the scheduler
/// borrow can be released before the callbacks run.
struct Step {
    id: AnimId,
    value: f32,
    done: bool,
    /// Whether the target's `frame` callback fires this pass.
    notify: bool,
    /// Infinite timer that should restart its period after notifying.
    rearm: bool,
    target: SharedTarget,
    user_data: Option<UserData>,
}

fn evaluate(item: &AnimItem, clock: &Clock) -> Step {
    let infinite = item.kind.is_infinite();
    let timer = item.kind.is_timer();

    let now = clock.now(item.domain);
    let elapsed_ms = ticks_to_millis(now.saturating_sub(item.start_ticks));
    let done = elapsed_ms >= item.duration_ms && !infinite;

    // Raw progress, with the cycle multiplier compressing repeats into one
    // duration. Finite kinds wrap back into [0,1); the `done` edge was
    // already decided above.
    let mut p = if done {
        1.0
    } else {
        item.cycle as f32 * (elapsed_ms as f32 / item.duration_ms as f32)
    };
    if p > 1.0 && !infinite {
        p -= p.floor();
    }

    match item.kind {
        AnimKind::LinearBounce => {
            p = 2.0 * p.min(1.0 - p);
        }
        AnimKind::LinearInfiniteBounce => {
            p -= p.floor();
            p = 2.0 * p.min(1.0 - p);
        }
        AnimKind::Parametric => {
            if let Some(samples) = item.curve.as_deref().filter(|s| s.len() >= 2) {
                if done {
                    // Explicit completion policy: land on the curve's last
                    // sample, not a blend.
                    p = samples[samples.len() - 1];
                } else {
                    p = sample_curve(samples, p);
                }
            }
        }
        _ => {}
    }

    let value = item.start_val + p * item.span;

    // Timers are elapsed-progress signals; their target only hears about
    // finished periods, never intermediate frames.
    let notify = !timer || done || p >= 1.0;

    Step {
        id: item.id,
        value,
        done,
        notify,
        rearm: item.kind == AnimKind::TimerInfinite,
        target: Rc::clone(&item.target),
        user_data: item.user_data.clone(),
    }
}
