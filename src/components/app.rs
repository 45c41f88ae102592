use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Title};
use crate::components::junction_map::JunctionMap;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Junction Map"/>

        <div class="app">
            <JunctionMap />
        </div>
    }
}
