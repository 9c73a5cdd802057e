use crate::notification::types::NotificationEvent;

pub const WINDOW_LEN: usize = 6;

pub const WINDOW_LABELS: [&str; WINDOW_LEN] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

// The chart spaces points by (N - 1)
const _: () = assert!(WINDOW_LEN >= 2);

const PLASTIC_FRACTION: f64 = 0.37;
const BAG_FRACTION: f64 = 0.26;
const PACKAGE_FRACTION: f64 = 0.23;
const OTHER_FRACTION: f64 = 0.14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WasteCategories {
    pub plastic: u32,
    pub bag: u32,
    pub package: u32,
    pub other: u32,
}

impl WasteCategories {
    /// Splits a total weight using the fixed category proportions, each share
    /// rounded to the nearest kilogram on its own.
    pub fn from_total(total_waste: u32) -> Self {
        let total = f64::from(total_waste);

        Self {
            plastic: round_kg(total * PLASTIC_FRACTION),
            bag: round_kg(total * BAG_FRACTION),
            package: round_kg(total * PACKAGE_FRACTION),
            other: round_kg(total * OTHER_FRACTION),
        }
    }

    #[cfg(test)]
    pub fn sum(&self) -> u32 {
        self.plastic + self.bag + self.package + self.other
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSnapshot {
    pub total_waste: u32,
    pub waste_level: f64,
    pub water_temp: f64,
    pub ph_level: f64,
    pub turbidity: u32,
    pub water_flow: f64,
    pub humidity: u32,
    categories: WasteCategories,
}

impl MeasurementSnapshot {
    pub fn new(
        total_waste: u32,
        waste_level: f64,
        water_temp: f64,
        ph_level: f64,
        turbidity: u32,
        water_flow: f64,
        humidity: u32,
    ) -> Self {
        Self {
            total_waste,
            waste_level: waste_level.clamp(0.0, 100.0),
            water_temp,
            ph_level,
            turbidity,
            water_flow,
            humidity,
            categories: WasteCategories::from_total(total_waste),
        }
    }

    pub fn categories(&self) -> WasteCategories {
        self.categories
    }

    pub(super) fn recompute_categories(&mut self) {
        self.categories = WasteCategories::from_total(self.total_waste);
    }
}

impl Default for MeasurementSnapshot {
    fn default() -> Self {
        Self::new(123, 45.0, 28.0, 7.2, 12, 2.5, 75)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingWindow {
    values: [f64; WINDOW_LEN],
}

impl RollingWindow {
    pub fn new(values: [f64; WINDOW_LEN]) -> Self {
        Self { values }
    }

    /// Drops the oldest sample and appends `value` as the newest one.
    pub fn push(&mut self, value: f64) {
        self.values.rotate_left(1);
        self.values[WINDOW_LEN - 1] = value;
    }

    pub fn values(&self) -> &[f64; WINDOW_LEN] {
        &self.values
    }

    #[cfg(test)]
    #[expect(clippy::unused_self)]
    pub fn len(&self) -> usize {
        WINDOW_LEN
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        WINDOW_LABELS
            .into_iter()
            .zip(self.values.iter())
            .map(|(label, value)| Sample {
                label,
                value: *value,
            })
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new([30.0, 35.0, 40.0, 42.0, 45.0, 45.0])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub snapshot: MeasurementSnapshot,
    pub window: RollingWindow,
    pub notifications: Vec<NotificationEvent>,
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn round_kg(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

pub(super) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
