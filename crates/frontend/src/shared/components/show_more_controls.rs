use crate::shared::list_view::PAGE_SIZE;
use leptos::prelude::*;
use thaw::*;

/// Footer under every list: "Showing X of Y" caption plus incremental
/// show-more / show-less controls.
#[component]
pub fn ShowMoreControls(
    /// Rows currently rendered
    #[prop(into)]
    shown: Signal<usize>,
    /// Rows after filters
    #[prop(into)]
    matched: Signal<usize>,
    /// Rows before any filter
    #[prop(into)]
    total: Signal<usize>,
    on_show_more: Callback<()>,
    on_show_less: Callback<()>,
) -> impl IntoView {
    let caption = move || {
        let matched = matched.get();
        let total = total.get();
        let shown = shown.get().min(matched);
        if matched == total {
            format!("Showing {} of {}", shown, matched)
        } else {
            format!("Showing {} of {} (filtered from {})", shown, matched, total)
        }
    };

    let can_show_more = move || shown.get() < matched.get();
    let can_show_less = move || shown.get() > PAGE_SIZE && matched.get() > PAGE_SIZE;

    view! {
        <div class="show-more-controls">
            <span class="show-more-controls__caption">{caption}</span>
            {move || {
                if can_show_more() {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| on_show_more.run(())
                        >
                            "Show more"
                        </Button>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
            {move || {
                if can_show_less() {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| on_show_less.run(())
                        >
                            "Show less"
                        </Button>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
