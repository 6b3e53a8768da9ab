//! Animation item definition and configuration
//!
//! An [`AnimItem`] is pure data until it is registered: interpolation bounds,
//! duration, repeat cycle, kind, optional parametric curve, and the target
//! that receives callbacks. Identity, start timestamp, value span, and time
//! domain are filled in by the scheduler at registration.

use std::fmt;

use facet_core::{Ticks, TimeDomain};

use crate::error::{AnimationError, Result};
use crate::handle::AnimId;
use crate::target::{SharedTarget, UserData};

/// Interpolation kinds supported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimKind {
    /// Unconfigured. Items default to this; registering one is legal but it
    /// completes on its first evaluated frame at value `start_val`.
    #[default]
    None,
    /// Straight 0→1 ramp over the duration.
    Linear,
    /// Triangle wave: up and back down within one duration.
    LinearBounce,
    /// Unbounded ramp advancing one progress unit per `duration_ms` until
    /// cancelled (continuous rotation and the like).
    LinearInfinite,
    /// Triangle wave that repeats every `duration_ms` until cancelled.
    LinearInfiniteBounce,
    /// Progress shaped by a user-supplied sample curve.
    Parametric,
    /// Fires `frame` once when the duration elapses, then completes.
    Timer,
    /// Fires `frame` once per period and re-arms until cancelled.
    TimerInfinite,
}

impl AnimKind {
    /// Kinds that never end unless explicitly told to.
    pub fn is_infinite(self) -> bool {
        matches!(
            self,
            Self::LinearInfinite | Self::LinearInfiniteBounce | Self::TimerInfinite
        )
    }

    /// Kinds that only notify their target when a period elapses.
    pub fn is_timer(self) -> bool {
        matches!(self, Self::Timer | Self::TimerInfinite)
    }
}

/// One time-driven value interpolation.
///
/// Configure with [`config_simple`](AnimItem::config_simple),
/// [`config_timer`](AnimItem::config_timer), or
/// [`config_parametric`](AnimItem::config_parametric), then hand ownership to
/// the scheduler via `register`.
pub struct AnimItem {
    /// Interpolation start value.
    pub start_val: f32,
    /// Interpolation end value.
    pub end_val: f32,
    /// Total duration; for infinite kinds, the period length.
    pub duration_ms: u64,
    /// Progress multiplier: `n` repeats compressed into one duration.
    pub cycle: u32,
    pub kind: AnimKind,
    /// Sample curve, required for [`AnimKind::Parametric`].
    pub curve: Option<Vec<f32>>,
    /// Opaque payload handed back to the target's callbacks.
    pub user_data: Option<UserData>,

    pub(crate) target: SharedTarget,

    // Assigned by the scheduler at registration.
    pub(crate) id: AnimId,
    pub(crate) start_ticks: Ticks,
    pub(crate) span: f32,
    pub(crate) domain: TimeDomain,
}

impl AnimItem {
    /// A blank item targeting `target`.
    pub fn new(target: SharedTarget) -> Self {
        Self {
            start_val: 0.0,
            end_val: 0.0,
            duration_ms: 0,
            cycle: 1,
            kind: AnimKind::None,
            curve: None,
            user_data: None,
            target,
            id: AnimId::NONE,
            start_ticks: 0,
            span: 0.0,
            domain: TimeDomain::Game,
        }
    }

    /// Configure the four core fields. Valid for every kind except
    /// [`AnimKind::Parametric`].
    pub fn config_simple(&mut self, start: f32, end: f32, duration_ms: u64, kind: AnimKind) {
        self.start_val = start;
        self.end_val = end;
        self.duration_ms = duration_ms;
        self.kind = kind;
    }

    /// Configure as a timer: a 0→1 progress signal whose target is only
    /// notified when a period elapses.
    pub fn config_timer(&mut self, duration_ms: u64, infinite: bool) {
        let kind = if infinite {
            AnimKind::TimerInfinite
        } else {
            AnimKind::Timer
        };
        self.config_simple(0.0, 1.0, duration_ms, kind);
    }

    /// Configure with a parametric sample curve.
    ///
    /// Fails with [`AnimationError::CurveTooShort`] unless `samples` holds at
    /// least 2 values; a parametric item must never reach the scheduler
    /// without its curve.
    pub fn config_parametric(
        &mut self,
        start: f32,
        end: f32,
        duration_ms: u64,
        samples: &[f32],
    ) -> Result<()> {
        if samples.len() < 2 {
            return Err(AnimationError::CurveTooShort(samples.len()));
        }
        self.start_val = start;
        self.end_val = end;
        self.duration_ms = duration_ms;
        self.kind = AnimKind::Parametric;
        self.curve = Some(samples.to_vec());
        Ok(())
    }

    /// Repeat the interpolation `cycle` times within one duration. Values
    /// below 1 are treated as 1.
    pub fn set_cycle(&mut self, cycle: u32) {
        self.cycle = cycle.max(1);
    }

    /// Attach an opaque payload, passed through to both callbacks.
    pub fn set_user_data(&mut self, data: UserData) {
        self.user_data = Some(data);
    }
}

impl fmt::Debug for AnimItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimItem")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("start_val", &self.start_val)
            .field("end_val", &self.end_val)
            .field("duration_ms", &self.duration_ms)
            .field("cycle", &self.cycle)
            .finish_non_exhaustive()
    }
}
