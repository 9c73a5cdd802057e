use std::{cell::RefCell, rc::Rc, time::Duration};

use anyhow::{anyhow, Result};
use humantime::format_duration;
use leptos::{leptos_dom::helpers::IntervalHandle, set_interval_with_handle};
use rand::Rng;
use tracing::info;

use crate::monitoring::simulation::{SimulationEngine, TICK_PERIOD};
use crate::monitoring::types::TickOutcome;

pub trait PeriodicHandle {
    fn cancel(self);
}

/// Runs a task repeatedly at a fixed period until its handle is cancelled.
pub trait Scheduler {
    type Handle: PeriodicHandle;

    fn every(&self, period: Duration, task: impl Fn() + 'static) -> Result<Self::Handle>;
}

/// Browser timers, backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl PeriodicHandle for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every(&self, period: Duration, task: impl Fn() + 'static) -> Result<Self::Handle> {
        set_interval_with_handle(task, period).map_err(|err| anyhow!("set interval error: {err:?}"))
    }
}

/// Registers the engine's tick with `scheduler` and hands every outcome to
/// `on_tick`.
pub fn start_updates<S, R>(
    scheduler: &S,
    engine: Rc<RefCell<SimulationEngine<R>>>,
    on_tick: impl Fn(TickOutcome) + 'static,
) -> Result<S::Handle>
where
    S: Scheduler,
    R: Rng + 'static,
{
    info!(period = %format_duration(TICK_PERIOD), "starting real-time updates");

    scheduler.every(TICK_PERIOD, move || {
        let outcome = engine.borrow_mut().tick();
        on_tick(outcome);
    })
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::manual::ManualScheduler;
    use super::*;

    #[test]
    fn ticks_follow_the_period() {
        let scheduler = ManualScheduler::default();
        let engine = Rc::new(RefCell::new(SimulationEngine::new(StdRng::seed_from_u64(1))));
        let ticks = Rc::new(Cell::new(0));

        let counter = Rc::clone(&ticks);
        let handle = start_updates(&scheduler, Rc::clone(&engine), move |_| {
            counter.set(counter.get() + 1);
        });
        assert!(handle.is_ok());

        scheduler.advance(Duration::from_millis(2999));
        assert_eq!(ticks.get(), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(ticks.get(), 1);

        scheduler.advance(Duration::from_millis(9000));
        assert_eq!(ticks.get(), 4);
    }

    #[test]
    fn outcomes_match_the_engine_state() {
        let scheduler = ManualScheduler::default();
        let engine = Rc::new(RefCell::new(SimulationEngine::new(StdRng::seed_from_u64(2))));
        let last = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last);
        let _handle = start_updates(&scheduler, Rc::clone(&engine), move |outcome| {
            *sink.borrow_mut() = Some(outcome);
        });

        scheduler.advance(TICK_PERIOD * 3);

        let outcome = last.borrow_mut().take();
        let Some(outcome) = outcome else {
            panic!("no tick ran");
        };
        assert_eq!(&outcome.snapshot, engine.borrow().snapshot());
        assert_eq!(&outcome.window, engine.borrow().window());
    }

    #[test]
    fn cancelled_updates_stop() {
        let scheduler = ManualScheduler::default();
        let engine = Rc::new(RefCell::new(SimulationEngine::new(StdRng::seed_from_u64(3))));
        let ticks = Rc::new(Cell::new(0));

        let counter = Rc::clone(&ticks);
        let handle = start_updates(&scheduler, engine, move |_| {
            counter.set(counter.get() + 1);
        });

        scheduler.advance(TICK_PERIOD);
        if let Ok(handle) = handle {
            handle.cancel();
        }
        scheduler.advance(TICK_PERIOD * 5);

        assert_eq!(ticks.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn browser_scheduler_hands_out_interval_handles() {
        fn assert_scheduler<S: Scheduler<Handle = IntervalHandle>>(_: &S) {}
        fn assert_handle<H: PeriodicHandle>() {}

        assert_scheduler(&IntervalScheduler);
        assert_handle::<IntervalHandle>();
    }

    #[test]
    fn zero_period_is_rejected() {
        let scheduler = ManualScheduler::default();

        assert!(scheduler.every(Duration::ZERO, || {}).is_err());
    }
}
