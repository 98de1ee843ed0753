//! Startup progress indicator driver.
//!
//! Purely time-based: a 500 ms interval advances the bar 10 percent per tick
//! and hides the overlay at 100, and an independent 15 s timeout force-hides
//! the overlay in case the bar never completes.

use crate::domain::{
    logging::LogComponent,
    progress::{LoadingProgress, OVERLAY_SAFETY_MS, PROGRESS_TICK_MS},
};
use crate::infrastructure::dom;
use crate::log_warn;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;

pub fn start_progress_indicator() {
    let mut progress = LoadingProgress::new();

    // The interval must be able to cancel itself from inside its own tick
    let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&interval_slot);

    let interval = Interval::new(PROGRESS_TICK_MS, move || {
        progress.tick();
        if let Err(e) = dom::set_progress_bar(&progress.label()) {
            log_warn!(
                LogComponent::Presentation("Progress"),
                "Cannot update progress bar: {}",
                e
            );
        }

        if progress.is_complete() {
            if let Some(interval) = slot.borrow_mut().take() {
                interval.cancel();
            }
            if let Err(e) = dom::hide_startup_overlay() {
                log_warn!(
                    LogComponent::Presentation("Progress"),
                    "Cannot hide startup overlay: {}",
                    e
                );
            }
        }
    });
    *interval_slot.borrow_mut() = Some(interval);

    // Safety net: the overlay goes away even if the bar element is missing
    Timeout::new(OVERLAY_SAFETY_MS, || {
        let _ = dom::hide_startup_overlay();
    })
    .forget();
}
