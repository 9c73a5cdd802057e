use std::time::Duration;

use rand::Rng;
use tracing::debug;

use super::threshold;
use super::types::{
    round_kg, round_one_decimal, MeasurementSnapshot, RollingWindow, TickOutcome,
};

pub const TICK_PERIOD: Duration = Duration::from_millis(3000);

/// Owns the live readings and advances them with bounded random perturbation.
pub struct SimulationEngine<R> {
    rng: R,
    snapshot: MeasurementSnapshot,
    window: RollingWindow,
}

impl<R: Rng> SimulationEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_state(rng, MeasurementSnapshot::default(), RollingWindow::default())
    }

    pub fn with_state(rng: R, snapshot: MeasurementSnapshot, window: RollingWindow) -> Self {
        Self {
            rng,
            snapshot,
            window,
        }
    }

    pub fn snapshot(&self) -> &MeasurementSnapshot {
        &self.snapshot
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    pub fn tick(&mut self) -> TickOutcome {
        let rng = &mut self.rng;
        let snapshot = &mut self.snapshot;

        snapshot.waste_level = (snapshot.waste_level + rng.gen_range(0.0..2.0)).min(100.0);
        snapshot.total_waste = round_kg(f64::from(snapshot.total_waste) + rng.gen_range(0.0..0.5));
        snapshot.water_temp = round_one_decimal(27.0 + rng.gen_range(0.0..2.0));
        snapshot.ph_level = round_one_decimal(7.0 + rng.gen_range(0.0..0.5));
        snapshot.turbidity = round_kg(10.0 + rng.gen_range(0.0..5.0));
        snapshot.water_flow = round_one_decimal(2.0 + rng.gen_range(0.0..1.0));
        snapshot.humidity = round_kg(70.0 + rng.gen_range(0.0..10.0));
        snapshot.recompute_categories();

        self.window.push(snapshot.waste_level);

        debug!(
            waste_level = snapshot.waste_level,
            total_waste = snapshot.total_waste,
            "tick"
        );

        TickOutcome {
            snapshot: *snapshot,
            window: self.window,
            notifications: threshold::evaluate(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::monitoring::types::{WasteCategories, WINDOW_LEN};

    use super::*;

    fn seeded(seed: u64) -> SimulationEngine<StdRng> {
        SimulationEngine::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn one_tick_from_the_initial_state() {
        let mut engine = seeded(7);
        let outcome = engine.tick();
        let snapshot = outcome.snapshot;

        assert!((45.0..=47.0).contains(&snapshot.waste_level));
        assert!((123..=124).contains(&snapshot.total_waste));
        assert_eq!(
            snapshot.categories(),
            WasteCategories::from_total(snapshot.total_waste)
        );
        assert!(snapshot.categories().sum().abs_diff(snapshot.total_waste) <= 2);
        assert_eq!(&outcome.snapshot, engine.snapshot());
        assert_eq!(&outcome.window, engine.window());
    }

    #[test]
    fn readings_stay_within_their_ranges() {
        let mut engine = seeded(42);

        for _ in 0..200 {
            let snapshot = engine.tick().snapshot;

            assert!((27.0..=29.0).contains(&snapshot.water_temp));
            assert!((7.0..=7.5).contains(&snapshot.ph_level));
            assert!((10..=15).contains(&snapshot.turbidity));
            assert!((2.0..=3.0).contains(&snapshot.water_flow));
            assert!((70..=80).contains(&snapshot.humidity));
            assert!(
                ((snapshot.water_temp * 10.0).round() - snapshot.water_temp * 10.0).abs() < 1e-9
            );
        }
    }

    #[test]
    fn window_receives_the_new_level() {
        let mut engine = seeded(3);
        let before = *engine.window().values();

        let outcome = engine.tick();

        assert_eq!(outcome.window.values()[..WINDOW_LEN - 1], before[1..]);
        assert!(
            (outcome.window.values()[WINDOW_LEN - 1] - outcome.snapshot.waste_level).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn level_saturates_at_full() {
        let mut engine = seeded(11);

        for _ in 0..100 {
            engine.tick();
        }

        assert!((engine.snapshot().waste_level - 100.0).abs() < f64::EPSILON);
        assert!(engine
            .window()
            .values()
            .iter()
            .all(|value| (*value - 100.0).abs() < f64::EPSILON));
    }

    #[test]
    fn same_seed_same_readings() {
        let mut first = seeded(99);
        let mut second = seeded(99);

        for _ in 0..10 {
            assert_eq!(first.tick(), second.tick());
        }
    }

    #[test]
    fn high_capacity_alerts_only_inside_its_band() {
        let start = MeasurementSnapshot::new(300, 79.0, 28.0, 7.2, 12, 2.5, 75);
        let mut engine =
            SimulationEngine::with_state(StdRng::seed_from_u64(5), start, RollingWindow::default());

        let mut fired = 0;
        while engine.snapshot().waste_level <= 82.0 {
            let outcome = engine.tick();
            let level = outcome.snapshot.waste_level;
            let in_band = level > 80.0 && level <= 81.0;

            assert_eq!(outcome.notifications.len(), usize::from(in_band), "level {level}");
            fired += outcome.notifications.len();
        }

        assert_eq!(fired, 1);
    }

    proptest! {
        #[test]
        fn tick_is_monotonic_and_bounded(
            seed in any::<u64>(),
            level in 0.0..=100.0_f64,
            total in 0_u32..100_000,
        ) {
            let start = MeasurementSnapshot::new(total, level, 28.0, 7.2, 12, 2.5, 75);
            let mut engine = SimulationEngine::with_state(
                StdRng::seed_from_u64(seed),
                start,
                RollingWindow::default(),
            );

            for _ in 0..5 {
                let before = *engine.snapshot();
                let outcome = engine.tick();
                let after = outcome.snapshot;

                prop_assert!(after.waste_level >= before.waste_level);
                prop_assert!(after.waste_level <= 100.0);
                prop_assert!(after.total_waste >= before.total_waste);
                prop_assert!(after.categories().sum().abs_diff(after.total_waste) <= 2);
                prop_assert_eq!(outcome.window.len(), WINDOW_LEN);
            }
        }
    }
}
