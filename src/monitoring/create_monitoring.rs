use std::{cell::RefCell, rc::Rc};

use chrono::{DateTime, Local};
use leptos::{
    create_effect, create_signal, html::Canvas, on_cleanup, NodeRef, Signal, SignalGet,
    SignalSet, SignalWith,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::error;

use crate::{
    notification::components::Notifier,
    schedule::{start_updates, IntervalScheduler, PeriodicHandle},
    use_canvas::{use_canvas, UseCanvasReturn},
};

use super::{
    canvas::{WasteChart, CHART_HEIGHT},
    simulation::SimulationEngine,
    surface::WebSurface,
    types::{MeasurementSnapshot, RollingWindow},
};

pub struct CreateMonitoringReturn {
    pub canvas_node_ref: NodeRef<Canvas>,

    pub snapshot: Signal<MeasurementSnapshot>,
    pub last_update: Signal<DateTime<Local>>,
    pub canvas_actual_width: Signal<f64>,
    pub canvas_actual_height: Signal<f64>,
}

pub fn create_monitoring(notifier: Notifier) -> CreateMonitoringReturn {
    let UseCanvasReturn {
        node_ref: canvas_node_ref,
        dpr,
        width: canvas_width,
        height: canvas_height,
        actual_width: canvas_actual_width,
        actual_height: canvas_actual_height,
    } = use_canvas(CHART_HEIGHT);

    let engine = Rc::new(RefCell::new(SimulationEngine::new(StdRng::from_entropy())));

    let (snapshot, set_snapshot) = create_signal(*engine.borrow().snapshot());
    let (window, set_window) = create_signal::<RollingWindow>(*engine.borrow().window());
    let (last_update, set_last_update) = create_signal(Local::now());
    let (chart, set_chart) = create_signal::<Option<Rc<RefCell<WasteChart<WebSurface>>>>>(None);

    match start_updates(&IntervalScheduler, engine, move |outcome| {
        set_snapshot.set(outcome.snapshot);
        set_window.set(outcome.window);
        set_last_update.set(Local::now());

        for event in outcome.notifications {
            notifier.notify(event);
        }
    }) {
        Ok(handle) => on_cleanup(move || handle.cancel()),
        Err(err) => error!("real-time updates failed to start: {err}"),
    }

    create_effect(move |_| {
        let Some(node) = canvas_node_ref.get() else {
            return;
        };

        let surface = match WebSurface::try_new(&node) {
            Ok(surface) => surface,
            Err(err) => {
                error!("waste chart failed to initialize: {err}");
                return;
            }
        };

        set_chart.set(Some(Rc::new(RefCell::new(WasteChart::new(surface)))));
    });

    create_effect(move |_| {
        canvas_width.track();
        canvas_height.track();

        let Some(chart) = chart.get() else {
            return;
        };

        chart.borrow_mut().render(
            &window.get(),
            canvas_width.get(),
            canvas_height.get(),
            dpr.get(),
        );
    });

    CreateMonitoringReturn {
        canvas_node_ref,

        snapshot: snapshot.into(),
        last_update: last_update.into(),
        canvas_actual_width,
        canvas_actual_height,
    }
}
