//! Facet Engine Core
//!
//! Foundational primitives shared by every Facet subsystem:
//!
//! - **Tick unit**: fixed-rate integer time ([`TICKS_PER_SECOND`]) with
//!   millisecond/second conversions
//! - **Clock**: pausable frame-advanced game time plus unpausable system
//!   time, behind a cloneable handle
//! - **Tick sources**: [`MonotonicSource`] for production, [`ManualSource`]
//!   for deterministic tests and headless harnesses
//! - **Stopwatch**: per-object elapsed-time measurement with independent
//!   pause bookkeeping
//!
//! # Example
//!
//! ```rust
//! use facet_core::{Clock, TimeDomain};
//!
//! let clock = Clock::new();
//!
//! // Frame driver, once per frame:
//! clock.tick();
//!
//! let _game = clock.now(TimeDomain::Game);
//! let _wall = clock.now(TimeDomain::System);
//! ```

pub mod time;

pub use time::{
    millis_to_ticks, seconds_to_ticks, ticks_to_millis, ticks_to_seconds, Clock, ManualSource,
    MonotonicSource, Stopwatch, TickSource, Ticks, TimeDomain, MAX_FRAME_DELTA_MS,
    TICKS_PER_SECOND,
};
