//! Facet Animation Core
//!
//! Time-driven value interpolation for every visual component in the engine.
//!
//! # Features
//!
//! - **One scheduler per screen**: a single [`AnimScheduler`] owns all live
//!   animations and evaluates them in one `advance()` pass per frame
//! - **Reentrancy-safe**: callbacks may register and cancel animations while
//!   the pass is running; mutations are staged and reconciled after the scan
//! - **Interpolation kinds**: linear, bouncing, infinite, parametric
//!   (tent-kernel sample curves), and one-shot / repeating timers
//! - **Two time domains**: pausable game time and unpausable system time,
//!   both from [`facet_core::Clock`]
//! - **Handles**: [`AnimHandle`] tracks an owner's in-flight animation and
//!   cancels it on drop
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use facet_animation::{AnimId, AnimItem, AnimKind, AnimScheduler, AnimTarget};
//! use facet_core::Clock;
//!
//! struct Fader {
//!     opacity: f32,
//! }
//!
//! impl AnimTarget for Fader {
//!     fn frame(&mut self, _id: AnimId, value: f32, _data: Option<&dyn Any>) -> bool {
//!         self.opacity = value;
//!         true
//!     }
//!     fn complete(&mut self, _id: AnimId, _data: Option<&dyn Any>) {}
//! }
//!
//! let clock = Clock::new();
//! let scheduler = AnimScheduler::new(clock.clone());
//!
//! let fader = Rc::new(RefCell::new(Fader { opacity: 0.0 }));
//! let mut item = AnimItem::new(fader.clone());
//! item.config_simple(0.0, 1.0, 250, AnimKind::Linear);
//! scheduler.register_game(item);
//!
//! // Frame driver, once per frame:
//! clock.tick();
//! scheduler.advance();
//! ```

pub mod curve;
pub mod error;
pub mod handle;
pub mod item;
pub mod scheduler;
pub mod target;

pub use curve::sample_curve;
pub use error::{AnimationError, Result};
pub use handle::{AnimHandle, AnimId};
pub use item::{AnimItem, AnimKind};
pub use scheduler::{AnimScheduler, SchedulerHandle};
pub use target::{AnimTarget, SharedTarget, UserData};
