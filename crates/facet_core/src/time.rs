//! Tick unit, conversions, and the engine clocks
//!
//! All durations inside the engine are tracked in a fixed-rate integer tick
//! unit ([`TICKS_PER_SECOND`]) and converted to milliseconds for animation
//! math. Two counters are exposed:
//!
//! - **System time** (`raw_ticks`): elapsed since clock init, never paused.
//!   Used for effects that must keep moving while the game is suspended and
//!   for watchdog-style staleness checks.
//! - **Game time** (`game_ticks`): advanced only by an explicit [`Clock::tick`]
//!   call once per frame, with the per-frame delta clamped to
//!   [`MAX_FRAME_DELTA_MS`]. It therefore stops when the frame driver stops
//!   (app suspension, debugger breaks) and can additionally be paused
//!   explicitly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

/// The engine's fixed-rate time unit. One tick is 100ns.
pub type Ticks = u64;

/// Tick rate of the engine clock.
pub const TICKS_PER_SECOND: Ticks = 10_000_000;

/// Largest frame delta that `Clock::tick` will credit to game time, in
/// milliseconds. Anything longer (suspension, debugger pause) is absorbed.
pub const MAX_FRAME_DELTA_MS: u64 = 100;

const TICKS_PER_MILLI: Ticks = TICKS_PER_SECOND / 1000;

/// Convert ticks to whole milliseconds.
pub fn ticks_to_millis(ticks: Ticks) -> u64 {
    ticks / TICKS_PER_MILLI
}

/// Convert milliseconds to ticks.
pub fn millis_to_ticks(millis: u64) -> Ticks {
    millis * TICKS_PER_MILLI
}

/// Convert ticks to fractional seconds.
pub fn ticks_to_seconds(ticks: Ticks) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}

/// Convert fractional seconds to ticks.
pub fn seconds_to_ticks(seconds: f64) -> Ticks {
    (seconds * TICKS_PER_SECOND as f64) as Ticks
}

/// Which counter a time-driven consumer keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeDomain {
    /// Pausable, frame-advanced game time. The default for gameplay visuals.
    #[default]
    Game,
    /// Unpausable system time. For effects tied to real elapsed time.
    System,
}

/// Raw monotonic tick provider backing a [`Clock`].
///
/// The production implementation is [`MonotonicSource`]; tests and headless
/// harnesses drive a [`ManualSource`] instead so frames can be stepped
/// deterministically.
pub trait TickSource {
    /// Current reading of the underlying counter, in ticks.
    fn current_ticks(&self) -> Ticks;
}

/// [`TickSource`] backed by [`std::time::Instant`].
pub struct MonotonicSource {
    origin: Instant,
}

impl MonotonicSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicSource {
    fn current_ticks(&self) -> Ticks {
        // One tick is 100ns.
        (self.origin.elapsed().as_nanos() / 100) as Ticks
    }
}

/// Hand-driven [`TickSource`] for tests and headless harnesses.
///
/// Clones share the same counter, so a test can keep one clone and hand the
/// other to [`Clock::with_source`].
#[derive(Clone, Default)]
pub struct ManualSource {
    ticks: Rc<Cell<Ticks>>,
}

impl ManualSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the counter forward by `millis`.
    pub fn advance_millis(&self, millis: u64) {
        self.ticks.set(self.ticks.get() + millis_to_ticks(millis));
    }

    /// Set the counter to an absolute tick value.
    pub fn set_ticks(&self, ticks: Ticks) {
        self.ticks.set(ticks);
    }
}

impl TickSource for ManualSource {
    fn current_ticks(&self) -> Ticks {
        self.ticks.get()
    }
}

struct ClockInner {
    source: Box<dyn TickSource>,
    /// Source reading at init; `raw_ticks` is measured from here.
    init_ticks: Ticks,
    /// Accumulated game time.
    game_ticks: Ticks,
    /// Source reading at the last `tick()` call.
    last_sample: Ticks,
    paused: bool,
}

/// The engine clock. Cheap to clone; clones share the same counters.
///
/// The frame driver owns the clock, calls [`Clock::tick`] once per frame, and
/// hands clones to whatever needs timestamps (one scheduler per screen, HUD
/// stopwatches, ...). There is no global instance.
#[derive(Clone)]
pub struct Clock {
    inner: Rc<RefCell<ClockInner>>,
}

impl Clock {
    /// Clock driven by real monotonic time.
    pub fn new() -> Self {
        Self::with_source(Box::new(MonotonicSource::new()))
    }

    /// Clock driven by an explicit tick source.
    pub fn with_source(source: Box<dyn TickSource>) -> Self {
        let init_ticks = source.current_ticks();
        Self {
            inner: Rc::new(RefCell::new(ClockInner {
                source,
                init_ticks,
                game_ticks: 0,
                last_sample: init_ticks,
                paused: false,
            })),
        }
    }

    /// Advance game time. Call exactly once per frame.
    ///
    /// The delta since the previous call is clamped to [`MAX_FRAME_DELTA_MS`]
    /// so suspension gaps never land on animations as a single huge step.
    pub fn tick(&self) {
        let mut inner = self.inner.borrow_mut();
        let now = inner.source.current_ticks();
        let mut delta = now.saturating_sub(inner.last_sample);
        let max_delta = millis_to_ticks(MAX_FRAME_DELTA_MS);
        if delta > max_delta {
            tracing::debug!(
                delta_ms = ticks_to_millis(delta),
                "frame delta clamped to {}ms",
                MAX_FRAME_DELTA_MS
            );
            delta = max_delta;
        }
        inner.last_sample = now;
        if !inner.paused {
            inner.game_ticks += delta;
        }
    }

    /// Accumulated game time, in ticks.
    pub fn game_ticks(&self) -> Ticks {
        self.inner.borrow().game_ticks
    }

    /// Accumulated game time, in milliseconds.
    pub fn game_millis(&self) -> u64 {
        ticks_to_millis(self.game_ticks())
    }

    /// Ticks elapsed since clock init, system-time based, never paused.
    pub fn raw_ticks(&self) -> Ticks {
        let inner = self.inner.borrow();
        inner.source.current_ticks().saturating_sub(inner.init_ticks)
    }

    /// Milliseconds elapsed since clock init, never paused.
    pub fn raw_millis(&self) -> u64 {
        ticks_to_millis(self.raw_ticks())
    }

    /// Current reading of the given domain's counter.
    pub fn now(&self, domain: TimeDomain) -> Ticks {
        match domain {
            TimeDomain::Game => self.game_ticks(),
            TimeDomain::System => self.raw_ticks(),
        }
    }

    /// Stop accumulating game time. System time keeps running.
    pub fn pause(&self) {
        self.inner.borrow_mut().paused = true;
    }

    /// Resume accumulating game time.
    pub fn resume(&self) {
        self.inner.borrow_mut().paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.inner.borrow().paused
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures elapsed game time with its own pause bookkeeping.
///
/// Useful for per-screen effects that pause independently of the global
/// clock (a countdown frozen while a dialog is up, for example). Paused
/// spans are subtracted from the reported elapsed time.
pub struct Stopwatch {
    clock: Clock,
    start_ticks: Ticks,
    /// Total ticks spent paused so far.
    paused_ticks: Ticks,
    /// Game time at which the current pause began, if paused.
    pause_start: Option<Ticks>,
}

impl Stopwatch {
    /// Start measuring from the clock's current game time.
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            start_ticks: clock.game_ticks(),
            paused_ticks: 0,
            pause_start: None,
        }
    }

    pub fn pause(&mut self) {
        if self.pause_start.is_none() {
            self.pause_start = Some(self.clock.game_ticks());
        }
    }

    pub fn resume(&mut self) {
        if let Some(start) = self.pause_start.take() {
            self.paused_ticks += self.clock.game_ticks().saturating_sub(start);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_start.is_some()
    }

    /// Restart measuring from now, clearing any pause bookkeeping.
    pub fn reset(&mut self) {
        self.start_ticks = self.clock.game_ticks();
        self.paused_ticks = 0;
        self.pause_start = None;
    }

    /// Elapsed game time, excluding paused spans, in ticks.
    pub fn elapsed_ticks(&self) -> Ticks {
        let now = self.pause_start.unwrap_or_else(|| self.clock.game_ticks());
        now.saturating_sub(self.start_ticks)
            .saturating_sub(self.paused_ticks)
    }

    /// Elapsed game time, excluding paused spans, in milliseconds.
    pub fn elapsed_millis(&self) -> u64 {
        ticks_to_millis(self.elapsed_ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_clock() -> (ManualSource, Clock) {
        let source = ManualSource::new();
        let clock = Clock::with_source(Box::new(source.clone()));
        (source, clock)
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ticks_to_millis(TICKS_PER_SECOND), 1000);
        assert_eq!(millis_to_ticks(1000), TICKS_PER_SECOND);
        assert_eq!(ticks_to_millis(millis_to_ticks(16)), 16);
        assert_eq!(ticks_to_seconds(TICKS_PER_SECOND / 2), 0.5);
        assert_eq!(seconds_to_ticks(2.0), 2 * TICKS_PER_SECOND);
    }

    #[test]
    fn test_game_time_advances_per_tick() {
        let (source, clock) = manual_clock();
        assert_eq!(clock.game_ticks(), 0);

        source.advance_millis(16);
        clock.tick();
        assert_eq!(clock.game_millis(), 16);

        source.advance_millis(16);
        clock.tick();
        assert_eq!(clock.game_millis(), 32);
    }

    #[test]
    fn test_game_time_only_advances_on_tick() {
        let (source, clock) = manual_clock();
        source.advance_millis(50);
        // No tick() yet, so game time hasn't moved.
        assert_eq!(clock.game_millis(), 0);
        assert_eq!(clock.raw_millis(), 50);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let (source, clock) = manual_clock();
        source.advance_millis(5_000);
        clock.tick();
        assert_eq!(clock.game_millis(), MAX_FRAME_DELTA_MS);
        // Raw time is never clamped.
        assert_eq!(clock.raw_millis(), 5_000);
    }

    #[test]
    fn test_pause_stops_game_time() {
        let (source, clock) = manual_clock();
        source.advance_millis(20);
        clock.tick();

        clock.pause();
        assert!(clock.is_paused());
        source.advance_millis(20);
        clock.tick();
        assert_eq!(clock.game_millis(), 20);

        clock.resume();
        source.advance_millis(20);
        clock.tick();
        assert_eq!(clock.game_millis(), 40);
    }

    #[test]
    fn test_clones_share_state() {
        let (source, clock) = manual_clock();
        let other = clock.clone();
        source.advance_millis(10);
        clock.tick();
        assert_eq!(other.game_millis(), 10);
    }

    #[test]
    fn test_now_selects_domain() {
        let (source, clock) = manual_clock();
        source.advance_millis(300);
        clock.tick();
        assert_eq!(ticks_to_millis(clock.now(TimeDomain::Game)), MAX_FRAME_DELTA_MS);
        assert_eq!(ticks_to_millis(clock.now(TimeDomain::System)), 300);
    }

    #[test]
    fn test_stopwatch_excludes_paused_spans() {
        let (source, clock) = manual_clock();
        let mut watch = Stopwatch::new(&clock);

        source.advance_millis(30);
        clock.tick();
        assert_eq!(watch.elapsed_millis(), 30);

        watch.pause();
        assert!(watch.is_paused());
        source.advance_millis(30);
        clock.tick();
        // Frozen while paused.
        assert_eq!(watch.elapsed_millis(), 30);

        watch.resume();
        source.advance_millis(10);
        clock.tick();
        assert_eq!(watch.elapsed_millis(), 40);
    }

    #[test]
    fn test_stopwatch_reset() {
        let (source, clock) = manual_clock();
        let mut watch = Stopwatch::new(&clock);
        source.advance_millis(25);
        clock.tick();
        watch.reset();
        assert_eq!(watch.elapsed_millis(), 0);
    }
}
