use leptos::{
    component, event_target_value, view, Callable, Callback, CollectView, IntoView, ReadSignal,
    SignalGet, SignalSet, WriteSignal,
};
use crate::overlay::{OverlayCategory, Overlays};

/// Filter input plus one toggle per overlay category and the refetch
/// button. Everything stays disabled until the first load succeeds.
#[component]
#[must_use]
pub fn OverlayControls(
    filter_value: ReadSignal<String>,
    set_filter_value: WriteSignal<String>,
    overlays: ReadSignal<Overlays>,
    data_loaded: ReadSignal<bool>,
    on_toggle: Callback<OverlayCategory>,
    on_refetch: Callback<()>,
) -> impl IntoView {
    let disabled = move || !data_loaded.get();

    view! {
        <div class="overlay-controls">
            <input
                type="text"
                placeholder="Filter by node1DvsnCode"
                prop:value=move || filter_value.get()
                on:input=move |ev| set_filter_value.set(event_target_value(&ev))
                prop:disabled=disabled
            />
            {OverlayCategory::ALL
                .into_iter()
                .map(|category| view! {
                    <button
                        on:click=move |_| on_toggle.call(category)
                        prop:disabled=disabled
                    >
                        {move || category.toggle_label(overlays.get().contains(category.flag()))}
                    </button>
                })
                .collect_view()}
            <button on:click=move |_| on_refetch.call(()) prop:disabled=disabled>
                "Filter"
            </button>
        </div>
    }
}
