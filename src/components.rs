use leptos::{component, view, IntoView, Signal, SignalGet};

#[component]
pub fn StatCard(
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <article class="stat-card">
            <i class=format!("fas {icon}")></i>
            <h4>{title}</h4>
            <p id=id class="stat-value">{move || value.get()}</p>
        </article>
    }
}

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress">
            <div
                id="wasteProgress"
                class="progress-bar"
                style:width=move || format!("{}%", percent.get())
            ></div>
        </div>
    }
}
