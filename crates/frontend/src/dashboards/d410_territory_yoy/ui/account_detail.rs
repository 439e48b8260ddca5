use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency, format_signed_currency, format_signed_int};
use crate::shared::storage::NoteStoreHandle;
use contracts::dashboards::d410_territory_yoy::AccountRecord;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Drill-down modal for one account: YoY figures, frame mix detail when
/// the pipeline delivered it, and the per-account note editor.
#[component]
pub fn AccountDetailModal(account: AccountRecord, on_close: Callback<()>) -> impl IntoView {
    let notes = use_context::<NoteStoreHandle>().expect("NoteStoreHandle context not found");
    let customer_id = account.customer_id;

    // Note text is read once when the drill-down opens and written only on
    // an explicit save.
    let (note_text, set_note_text) = signal(notes.get(customer_id).unwrap_or_default());
    let (saved, set_saved) = signal(false);

    let notes_for_save = notes.clone();
    let save_note = move |_| {
        notes_for_save.set(customer_id, &note_text.get_untracked());
        set_saved.set(true);
        // Fixed short delay before the indicator resets; fire-and-forget.
        spawn_local(async move {
            TimeoutFuture::new(2_000).await;
            set_saved.set(false);
        });
    };

    let difference = account.difference();
    let diff_class = if difference < 0.0 {
        "detail-figure__value detail-figure__value--negative"
    } else {
        "detail-figure__value detail-figure__value--positive"
    };

    let frame_detail = account.frame_detail.clone();
    let frame_section = match frame_detail {
        Some(rows) if !rows.is_empty() => view! {
            <table class="detail-frame-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"CY Units"</th>
                        <th>"PY Units"</th>
                        <th>"Change"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let change = row.change();
                            let change_class = if change < 0 {
                                "table__cell--negative"
                            } else {
                                "table__cell--positive"
                            };
                            view! {
                                <tr>
                                    <td>{row.category.clone()}</td>
                                    <td class="table__cell--num">{row.cy_units.to_string()}</td>
                                    <td class="table__cell--num">{row.py_units.to_string()}</td>
                                    <td class=format!("table__cell--num {}", change_class)>
                                        {format_signed_int(change)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
        _ => view! {
            <div class="coming-soon">
                "Frame mix breakdown coming soon"
            </div>
        }
        .into_any(),
    };

    view! {
        <ModalFrame
            on_close=on_close
            z_index=1100
            modal_style="width: min(640px, 92vw); max-height: 85vh; overflow-y: auto; padding: 20px;".to_string()
        >
            <div class="modal__header">
                <div class="modal__title">
                    <h2>{account.name.clone()}</h2>
                    <span class="modal__subtitle">
                        {format!("{} · Customer #{}", account.city, account.customer_id)}
                    </span>
                    {account.category.clone().map(|tag| view! {
                        <span class="account-category-tag">{tag}</span>
                    })}
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close.run(())
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="detail-figures">
                <div class="detail-figure">
                    <span class="detail-figure__label">"Current Year"</span>
                    <span class="detail-figure__value">{format_currency(account.cy_total)}</span>
                </div>
                <div class="detail-figure">
                    <span class="detail-figure__label">"Previous Year"</span>
                    <span class="detail-figure__value">{format_currency(account.py_total)}</span>
                </div>
                <div class="detail-figure">
                    <span class="detail-figure__label">"Difference"</span>
                    <span class=diff_class>{format_signed_currency(difference)}</span>
                </div>
            </div>

            <h3 class="detail-section__title">{icon("layers")}" Frame Mix"</h3>
            {frame_section}

            <h3 class="detail-section__title">{icon("edit-3")}" Notes"</h3>
            <div class="note-editor">
                <textarea
                    class="note-editor__input"
                    rows="4"
                    placeholder="Visit notes, reorder reminders..."
                    prop:value=move || note_text.get()
                    on:input=move |ev| set_note_text.set(event_target_value(&ev))
                ></textarea>
                <div class="note-editor__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=save_note
                    >
                        "Save note"
                    </Button>
                    {move || {
                        if saved.get() {
                            view! {
                                <span class="note-editor__saved">"Saved ✓"</span>
                            }
                            .into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
            </div>
        </ModalFrame>
    }
}
