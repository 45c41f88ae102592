#![cfg(target_arch = "wasm32")]

use junction_map::config::MapConfig;
use junction_map::map::LeafletMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn attach_fails_without_leaflet_loaded() {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let container = document
        .create_element("div")
        .expect("div")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("html element");

    let result = LeafletMap::attach(&container, &MapConfig::default());
    assert!(result.is_err());
}
