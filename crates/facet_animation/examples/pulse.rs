//! Drives a bouncing pulse and a repeating timer through the scheduler for
//! two simulated seconds, printing every callback.
//!
//! Run with: `cargo run -p facet_animation --example pulse`

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use facet_animation::{AnimHandle, AnimId, AnimItem, AnimKind, AnimScheduler, AnimTarget};
use facet_core::{Clock, ManualSource};

struct PulseWidget {
    scale: f32,
    pulse: AnimHandle,
    blink: AnimHandle,
    blinks: u32,
}

impl AnimTarget for PulseWidget {
    fn frame(&mut self, id: AnimId, value: f32, _data: Option<&dyn Any>) -> bool {
        if self.pulse == id {
            self.scale = value;
            println!("scale -> {value:.3}");
            true
        } else {
            self.blinks += 1;
            println!("blink #{}", self.blinks);
            // Stop blinking after five periods.
            self.blinks < 5
        }
    }

    fn complete(&mut self, id: AnimId, _data: Option<&dyn Any>) {
        if self.blink == id {
            println!("blink timer retired");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A manual tick source keeps the demo deterministic; swap in
    // Clock::new() to run against real time.
    let source = ManualSource::new();
    let clock = Clock::with_source(Box::new(source.clone()));
    let scheduler = AnimScheduler::new(clock.clone());

    let widget = Rc::new(RefCell::new(PulseWidget {
        scale: 1.0,
        pulse: AnimHandle::new(scheduler.handle()),
        blink: AnimHandle::new(scheduler.handle()),
        blinks: 0,
    }));

    let mut pulse = AnimItem::new(widget.clone());
    pulse.config_simple(1.0, 1.25, 400, AnimKind::LinearInfiniteBounce);
    let pulse_id = scheduler.register_game(pulse);

    let mut blink = AnimItem::new(widget.clone());
    blink.config_timer(300, true);
    let blink_id = scheduler.register_game(blink);

    {
        let mut widget = widget.borrow_mut();
        widget.pulse.set(pulse_id);
        widget.blink.set(blink_id);
    }

    // Simulated frame pump: 125 frames at 16ms.
    for _ in 0..125 {
        source.advance_millis(16);
        clock.tick();
        scheduler.advance();
    }

    let mut widget = widget.borrow_mut();
    println!(
        "done: scale {:.3}, {} blinks, {} live animations",
        widget.scale,
        widget.blinks,
        scheduler.len()
    );
    widget.pulse.cancel();
}
