use chrono::Utc;
use leptos::{
    component, create_signal, ev::SubmitEvent, event_target_value, view, IntoView, ReadSignal,
    SignalGet, SignalSet, SignalUpdate, WriteSignal,
};
use tracing::error;
use web_sys::Event;

use crate::notification::components::use_notifier;

use super::submit::submit;
use super::types::{PollutionCategory, ReportSubmission};

#[component]
pub fn ReportForm(set_total_reports: WriteSignal<u32>) -> impl IntoView {
    let notifier = use_notifier();

    let (location, set_location) = create_signal(String::new());
    let (category, set_category) = create_signal(PollutionCategory::default());
    let (details, set_details) = create_signal(String::new());

    let reset = move || {
        set_location.set(String::new());
        set_category.set(PollutionCategory::default());
        set_details.set(String::new());
    };

    let handle_submit = move |evt: SubmitEvent| {
        evt.prevent_default();

        let report = ReportSubmission {
            location: location.get(),
            category: category.get(),
            details: details.get(),
            timestamp: Utc::now(),
        };

        let mut event = None;
        set_total_reports.update(|total_reports| event = Some(submit(&report, total_reports)));
        if let Some(event) = event {
            notifier.notify(event);
        }

        reset();
    };

    let handle_category = move |evt: Event| match event_target_value(&evt).parse() {
        Ok(value) => set_category.set(value),
        Err(err) => error!("{err}"),
    };

    view! {
        <form id="pollution-form" on:submit=handle_submit>
            <label for="location">"Location"</label>
            <input
                id="location"
                type="text"
                required
                prop:value=location
                on:input=move |evt| set_location.set(event_target_value(&evt))
            />

            <label for="category">"Category"</label>
            <select id="category" required on:change=handle_category>
                {PollutionCategory::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option
                                value=option.value()
                                prop:selected=move || category.get() == option
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            <label for="pollutionDetails">"Details"</label>
            <textarea
                id="pollutionDetails"
                rows="4"
                prop:value=details
                on:input=move |evt| set_details.set(event_target_value(&evt))
            ></textarea>

            <button type="submit">"Send report"</button>
        </form>
    }
}

#[component]
pub fn ReportStats(total_reports: ReadSignal<u32>) -> impl IntoView {
    view! {
        <div class="report-stats">
            <span id="total-reports">{move || total_reports.get()}</span>
            " reports received"
        </div>
    }
}
