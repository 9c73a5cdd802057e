use std::f64::consts::PI;

use tracing::{debug, error};

use crate::display::format_percent;

use super::surface::{DrawingSurface, LinearGradient, TextAlign};
use super::types::{RollingWindow, WINDOW_LEN};

pub const CHART_HEIGHT: f64 = 200.0;
pub const PADDING: f64 = 40.0;

const GRID_LINES: usize = 5;

const BACKGROUND_COLOR: &str = "#f0f9ff";
const GRID_COLOR: &str = "#e0f2fe";
const LINE_COLOR: &str = "#0891b2";
const LABEL_COLOR: &str = "#075985";
const GRADIENT_TOP: &str = "rgba(8, 145, 178, 0.3)";
const GRADIENT_BOTTOM: &str = "rgba(8, 145, 178, 0.05)";

const MARKER_RADIUS: f64 = 6.0;
const MARKER_INNER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Plot geometry for a surface of the given size. Values live in `[0, 100]`
/// and are mapped onto the padded plot height, higher values drawn higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn plot_width(&self) -> f64 {
        self.width - PADDING * 2.0
    }

    pub fn plot_height(&self) -> f64 {
        self.height - PADDING * 2.0
    }

    pub fn baseline(&self) -> f64 {
        self.height - PADDING
    }

    pub fn value_to_y(&self, value: f64) -> f64 {
        PADDING + self.plot_height() - (value / 100.0) * self.plot_height()
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn index_to_x(&self, index: usize) -> f64 {
        PADDING + (self.plot_width() / (WINDOW_LEN - 1) as f64) * index as f64
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn grid_y(&self, line: usize) -> f64 {
        PADDING + (self.plot_height() / GRID_LINES as f64) * line as f64
    }

    pub fn points(&self, window: &RollingWindow) -> [ChartPoint; WINDOW_LEN] {
        let values = window.values();
        std::array::from_fn(|index| ChartPoint {
            x: self.index_to_x(index),
            y: self.value_to_y(values[index]),
            value: values[index],
        })
    }
}

pub struct WasteChart<S> {
    surface: S,
}

impl<S: DrawingSurface> WasteChart<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn render(&mut self, window: &RollingWindow, width: f64, height: f64, dpr: f64) {
        debug!("rendering");

        if width < f64::EPSILON || height < f64::EPSILON {
            return;
        }

        let area = ChartArea::new(width, height);
        let points = area.points(window);

        self.surface.save();
        if let Err(err) = self.surface.scale(dpr) {
            error!(dpr, "{err}");
        }

        self.surface.clear_rect(0.0, 0.0, width, height);
        self.surface.set_fill_color(BACKGROUND_COLOR);
        self.surface.fill_rect(0.0, 0.0, width, height);

        self.render_grid(&area);
        self.render_area(&area, &points);
        self.render_line(&points);
        self.render_points(&area, window, &points);
        self.render_scale(&area);

        self.surface.restore();
    }

    fn render_grid(&mut self, area: &ChartArea) {
        debug!("rendering grid");

        self.surface.set_stroke_color(GRID_COLOR);
        self.surface.set_line_width(1.0);

        for line in 0..=GRID_LINES {
            let y = area.grid_y(line);
            self.surface.begin_path();
            self.surface.move_to(PADDING, y);
            self.surface.line_to(area.width - PADDING, y);
            self.surface.stroke();
        }
    }

    fn render_area(&mut self, area: &ChartArea, points: &[ChartPoint; WINDOW_LEN]) {
        debug!("rendering area");

        let gradient = LinearGradient {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: area.height,
            stops: vec![(0.0, GRADIENT_TOP), (1.0, GRADIENT_BOTTOM)],
        };
        if let Err(err) = self.surface.set_fill_gradient(&gradient) {
            error!("{err}");
            self.surface.set_fill_color(GRADIENT_BOTTOM);
        }

        let first = points[0];
        let last = points[WINDOW_LEN - 1];

        self.surface.begin_path();
        self.surface.move_to(first.x, area.baseline());
        for point in points {
            self.surface.line_to(point.x, point.y);
        }
        self.surface.line_to(last.x, area.baseline());
        self.surface.close_path();
        self.surface.fill();
    }

    fn render_line(&mut self, points: &[ChartPoint; WINDOW_LEN]) {
        debug!("rendering line");

        self.surface.set_stroke_color(LINE_COLOR);
        self.surface.set_line_width(3.0);

        self.surface.begin_path();
        self.surface.move_to(points[0].x, points[0].y);
        for point in points {
            self.surface.line_to(point.x, point.y);
        }
        self.surface.stroke();
    }

    fn render_points(
        &mut self,
        area: &ChartArea,
        window: &RollingWindow,
        points: &[ChartPoint; WINDOW_LEN],
    ) {
        debug!("rendering points");

        for (point, sample) in points.iter().zip(window.samples()) {
            self.render_marker(point, LINE_COLOR, MARKER_RADIUS);
            self.render_marker(point, "#ffffff", MARKER_INNER_RADIUS);

            self.surface.set_fill_color(LABEL_COLOR);
            self.surface.set_font("12px Segoe UI");
            self.surface.set_text_align(TextAlign::Center);
            if let Err(err) = self
                .surface
                .fill_text(sample.label, point.x, area.height - 10.0)
            {
                error!("{err}");
            }

            self.surface.set_fill_color(LINE_COLOR);
            self.surface.set_font("bold 11px Segoe UI");
            if let Err(err) =
                self.surface
                    .fill_text(&format_percent(point.value), point.x, point.y - 15.0)
            {
                error!("{err}");
            }
        }
    }

    fn render_marker(&mut self, point: &ChartPoint, color: &str, radius: f64) {
        self.surface.set_fill_color(color);
        self.surface.begin_path();
        if let Err(err) = self.surface.arc(point.x, point.y, radius, 0.0, PI * 2.0) {
            error!("{err}");
        }
        self.surface.fill();
    }

    fn render_scale(&mut self, area: &ChartArea) {
        debug!("rendering scale");

        self.surface.set_fill_color(LABEL_COLOR);
        self.surface.set_font("11px Segoe UI");
        self.surface.set_text_align(TextAlign::Right);

        for line in 0..=GRID_LINES {
            let value = 100 - line * 20;
            if let Err(err) =
                self.surface
                    .fill_text(&format!("{value}%"), PADDING - 10.0, area.grid_y(line) + 4.0)
            {
                error!("{err}");
            }
        }
    }
}
