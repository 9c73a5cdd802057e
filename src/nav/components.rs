use leptos::{component, document, view, window, For, IntoView, SignalGet};
use leptos_use::use_window_scroll;
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

pub const SECTIONS: [(&str, &str); 4] = [
    ("dashboard", "Dashboard"),
    ("monitoring", "Monitoring"),
    ("categories", "Categories"),
    ("report", "Report"),
];

// Height of the fixed header
const NAV_OFFSET: f64 = 70.0;
const SCROLL_SPY_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// The section containing the probe line, `SCROLL_SPY_OFFSET` below the top
/// of the viewport.
pub fn active_section<'a>(scroll_y: f64, sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    let probe = scroll_y + SCROLL_SPY_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| probe >= section.top && probe < section.top + section.height)
        .map(|section| section.id)
}

fn section_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn scroll_to_section(id: &str) {
    let Some(section) = section_element(id) else {
        error!(id, "section not found");
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(section.offset_top()) - NAV_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn Nav() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    let active = move || {
        let bounds = SECTIONS
            .iter()
            .filter_map(|&(id, _)| {
                let section = section_element(id)?;
                Some(SectionBounds {
                    id,
                    top: f64::from(section.offset_top()),
                    height: f64::from(section.offset_height()),
                })
            })
            .collect::<Vec<_>>();

        active_section(scroll_y.get(), &bounds).unwrap_or(SECTIONS[0].0)
    };

    view! {
        <nav>
            <ul>
                <li>
                    <strong>"B-SMART"</strong>
                </li>
            </ul>
            <ul class="nav-menu">
                <For each=move || SECTIONS key=|(id, _)| *id let:section>
                    <li>
                        <a
                            href=format!("#{}", section.0)
                            class:active=move || active() == section.0
                            on:click=move |evt| {
                                evt.prevent_default();
                                scroll_to_section(section.0);
                            }
                        >
                            {section.1}
                        </a>
                    </li>
                </For>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> [SectionBounds<'static>; 3] {
        [
            SectionBounds {
                id: "dashboard",
                top: 0.0,
                height: 600.0,
            },
            SectionBounds {
                id: "monitoring",
                top: 600.0,
                height: 400.0,
            },
            SectionBounds {
                id: "report",
                top: 1000.0,
                height: 500.0,
            },
        ]
    }

    #[test]
    fn probe_sits_below_the_scroll_position() {
        assert_eq!(active_section(0.0, &layout()), Some("dashboard"));
        assert_eq!(active_section(499.0, &layout()), Some("dashboard"));
        assert_eq!(active_section(500.0, &layout()), Some("monitoring"));
        assert_eq!(active_section(900.0, &layout()), Some("report"));
    }

    #[test]
    fn nothing_active_past_the_last_section() {
        assert_eq!(active_section(1400.0, &layout()), None);
    }
}
