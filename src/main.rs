#![deny(clippy::all, clippy::pedantic)]
#![allow(non_snake_case, clippy::module_name_repetitions)]

use leptos::{component, create_signal, view, IntoView};
use tracing::{info, Level};
use wasm_tracing::WASMLayerConfigBuilder;

use crate::monitoring::components::Monitoring;
use crate::nav::components::Nav;
use crate::notification::components::{provide_notifier, show_welcome, NotificationContainer};
use crate::report::components::{ReportForm, ReportStats};

mod components;
mod display;
mod monitoring;
mod nav;
mod notification;
mod report;
mod schedule;
mod use_canvas;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(Level::INFO)
            .build(),
    );

    info!("B-SMART System: Bubble System for Monitoring and Rubbish Trapping");
    info!("Desa Pejagan, Bangkalan, Indonesia");

    leptos::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let notifier = provide_notifier();
    show_welcome(notifier);

    let (total_reports, set_total_reports) = create_signal(0_u32);

    view! {
        <main class="container-fluid">
            <Nav />
            <Monitoring />
            <section id="report" class="section">
                <h2>"Report pollution"</h2>
                <ReportStats total_reports />
                <ReportForm set_total_reports />
            </section>
            <NotificationContainer />
        </main>
    }
}
