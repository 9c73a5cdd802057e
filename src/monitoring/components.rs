use leptos::html::Canvas as CanvasNode;
use leptos::{component, view, IntoView, NodeRef, Signal, SignalGet};

use crate::components::{ProgressBar, StatCard};
use crate::display::{
    display_update_time, format_celsius, format_flow, format_humidity, format_kg, format_ntu,
    format_percent, format_ph,
};
use crate::notification::components::use_notifier;

use super::canvas::CHART_HEIGHT;
use super::create_monitoring::{create_monitoring, CreateMonitoringReturn};
use super::types::MeasurementSnapshot;

#[component]
pub fn Monitoring() -> impl IntoView {
    let CreateMonitoringReturn {
        canvas_node_ref,
        snapshot,
        last_update,
        canvas_actual_width,
        canvas_actual_height,
    } = create_monitoring(use_notifier());

    let reading = move |format: fn(&MeasurementSnapshot) -> String| {
        Signal::derive(move || format(&snapshot.get()))
    };

    view! {
        <>
        <section id="dashboard" class="section">
            <header>
                <h2>"Dashboard"</h2>
                <small id="last-update">{move || display_update_time(last_update.get())}</small>
            </header>
            <div class="grid">
                <StatCard
                    id="total-waste"
                    icon="fa-trash"
                    title="Total waste"
                    value=reading(|snapshot| format_kg(snapshot.total_waste))
                />
                <StatCard
                    id="waste-level"
                    icon="fa-fill-drip"
                    title="Waste level"
                    value=reading(|snapshot| format_percent(snapshot.waste_level))
                />
                <StatCard
                    id="water-temp"
                    icon="fa-thermometer-half"
                    title="Water temperature"
                    value=reading(|snapshot| format_celsius(snapshot.water_temp))
                />
                <StatCard
                    id="ph-level"
                    icon="fa-flask"
                    title="pH level"
                    value=reading(|snapshot| format_ph(snapshot.ph_level))
                />
            </div>
            <ProgressBar percent=Signal::derive(move || snapshot.get().waste_level) />
        </section>

        <section id="monitoring" class="section">
            <h2>"Monitoring"</h2>
            <WasteChartCanvas
                canvas_node_ref
                actual_width=canvas_actual_width
                actual_height=canvas_actual_height
            />
            <div class="grid">
                <StatCard
                    id="turbidity"
                    icon="fa-water"
                    title="Turbidity"
                    value=reading(|snapshot| format_ntu(snapshot.turbidity))
                />
                <StatCard
                    id="water-flow"
                    icon="fa-wind"
                    title="Water flow"
                    value=reading(|snapshot| format_flow(snapshot.water_flow))
                />
                <StatCard
                    id="humidity"
                    icon="fa-tint"
                    title="Humidity"
                    value=reading(|snapshot| format_humidity(snapshot.humidity))
                />
            </div>
        </section>

        <section id="categories" class="section">
            <h2>"Waste categories"</h2>
            <div class="grid">
                <StatCard
                    id="plastic-waste"
                    icon="fa-wine-bottle"
                    title="Plastic"
                    value=reading(|snapshot| format_kg(snapshot.categories().plastic))
                />
                <StatCard
                    id="bag-waste"
                    icon="fa-shopping-bag"
                    title="Bags"
                    value=reading(|snapshot| format_kg(snapshot.categories().bag))
                />
                <StatCard
                    id="package-waste"
                    icon="fa-box"
                    title="Packaging"
                    value=reading(|snapshot| format_kg(snapshot.categories().package))
                />
                <StatCard
                    id="other-waste"
                    icon="fa-recycle"
                    title="Other"
                    value=reading(|snapshot| format_kg(snapshot.categories().other))
                />
            </div>
        </section>
        </>
    }
}

#[component]
fn WasteChartCanvas(
    canvas_node_ref: NodeRef<CanvasNode>,
    actual_width: Signal<f64>,
    actual_height: Signal<f64>,
) -> impl IntoView {
    view! {
        <canvas
            id="wasteChart"
            class="w-full"
            node_ref=canvas_node_ref
            width=actual_width
            height=actual_height
            style:width="100%"
            style:height=format!("{CHART_HEIGHT}px")
        />
    }
}
