use std::ops::RangeInclusive;

use tracing::warn;

use crate::display::format_percent;
use crate::notification::types::NotificationEvent;

use super::types::MeasurementSnapshot;

// Both bands are open on the left: (80, 81] and (95, 96]
const HIGH_CAPACITY_BAND: RangeInclusive<f64> = 80.0..=81.0;
const EMERGENCY_BAND: RangeInclusive<f64> = 95.0..=96.0;

/// Derives the alerts for a freshly ticked snapshot.
///
/// Each band is one percentage point wide, so an alert fires on the tick that
/// carries the level across its threshold. A single increment larger than one
/// point can jump over a band, in which case no alert is raised for it.
pub fn evaluate(snapshot: &MeasurementSnapshot) -> Vec<NotificationEvent> {
    let level = snapshot.waste_level;
    let mut events = Vec::new();

    if in_band(level, &HIGH_CAPACITY_BAND) {
        warn!(level, "waste level crossed the high capacity threshold");
        events.push(NotificationEvent::warning(
            "High capacity warning!",
            format!(
                "Waste level reached {}. Please schedule a clean-up.",
                format_percent(level)
            ),
        ));
    }

    if in_band(level, &EMERGENCY_BAND) {
        warn!(level, "waste level crossed the emergency threshold");
        events.push(NotificationEvent::danger(
            "Emergency! Capacity full",
            format!(
                "Waste level reached {}. The trap is almost full!",
                format_percent(level)
            ),
        ));
    }

    events
}

fn in_band(level: f64, band: &RangeInclusive<f64>) -> bool {
    level > *band.start() && level <= *band.end()
}

#[cfg(test)]
mod tests {
    use crate::notification::types::Severity;

    use super::*;

    fn snapshot_at(level: f64) -> MeasurementSnapshot {
        MeasurementSnapshot::new(123, level, 28.0, 7.2, 12, 2.5, 75)
    }

    #[test]
    fn high_capacity_fires_inside_its_band() {
        for level in [80.01, 80.5, 81.0] {
            let events = evaluate(&snapshot_at(level));

            assert_eq!(events.len(), 1, "level {level}");
            assert_eq!(events[0].severity, Severity::Warning);
            assert_eq!(events[0].title, "High capacity warning!");
        }
    }

    #[test]
    fn emergency_fires_inside_its_band() {
        let events = evaluate(&snapshot_at(95.4));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Danger);
        assert!(events[0].message.contains("95.4%"));
    }

    #[test]
    fn band_edges() {
        assert!(evaluate(&snapshot_at(80.0)).is_empty());
        assert!(evaluate(&snapshot_at(81.01)).is_empty());
        assert!(evaluate(&snapshot_at(95.0)).is_empty());
        assert_eq!(evaluate(&snapshot_at(96.0)).len(), 1);
        assert!(evaluate(&snapshot_at(96.5)).is_empty());
    }

    #[test]
    fn nothing_fires_outside_the_bands() {
        for level in [0.0, 45.0, 79.9, 82.0, 90.0, 97.0, 100.0] {
            assert!(evaluate(&snapshot_at(level)).is_empty(), "level {level}");
        }
    }

    #[test]
    fn a_large_increment_skips_the_band() {
        let before = snapshot_at(79.8);
        let after = snapshot_at(81.5);

        assert!(evaluate(&before).is_empty());
        assert!(evaluate(&after).is_empty());
    }
}
