use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use super::{CircleStyle, LineStyle, MapSurface};
use crate::config::{MapConfig, WmsLayer};
use crate::models::LatLng;

/// A Leaflet map created on a container element. Requires the Leaflet script
/// to be loaded so that `window.L` exists.
pub struct LeafletMap {
    l: JsValue,
    map: JsValue,
}

/// A layer added to a [`LeafletMap`], together with its click listener
pub struct LeafletLayer {
    layer: JsValue,
    on_click: Option<Closure<dyn FnMut()>>,
}

fn leaflet() -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let l = js_sys::Reflect::get(&window, &JsValue::from_str("L"))?;
    if l.is_undefined() || l.is_null() {
        return Err("Leaflet is not loaded (window.L is undefined)".into());
    }
    Ok(l)
}

/// Call `target[name](...args)`
fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method = js_sys::Reflect::get(target, &JsValue::from_str(name))?;
    let method = method
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| format!("{name} not a function"))?;

    let arguments = js_sys::Array::new();
    for arg in args {
        arguments.push(arg);
    }
    method.apply(target, &arguments)
}

fn options(entries: &[(&str, JsValue)]) -> Result<js_sys::Object, JsValue> {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object)
}

fn lat_lng_array(point: LatLng) -> js_sys::Array {
    let coords = js_sys::Array::new();
    coords.push(&JsValue::from_f64(point.lat));
    coords.push(&JsValue::from_f64(point.lng));
    coords
}

fn js_error(error: &JsValue) -> String {
    format!("{error:?}")
}

fn request_animation_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(f);
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl LeafletMap {
    /// Create the map on `container`, center it and add the base layer
    ///
    /// # Errors
    ///
    /// Returns an error if Leaflet is not loaded or rejects the container.
    pub fn attach(container: &web_sys::HtmlElement, config: &MapConfig) -> Result<Self, JsValue> {
        let l = leaflet()?;

        // L.map(container).setView([lat, lng], zoom)
        let container: &JsValue = container.as_ref();
        let map = call_method(&l, "map", &[container])?;
        call_method(
            &map,
            "setView",
            &[&lat_lng_array(config.center), &JsValue::from_f64(config.zoom)],
        )?;

        let leaflet_map = Self { l, map };
        leaflet_map.add_wms_layer(&config.base_layer)?;
        Ok(leaflet_map)
    }

    /// Add a WMS tile layer beneath the overlays
    ///
    /// # Errors
    ///
    /// Returns an error if the layer could not be created or added.
    pub fn add_wms_layer(&self, wms: &WmsLayer) -> Result<(), JsValue> {
        let tile_layer = js_sys::Reflect::get(&self.l, &JsValue::from_str("tileLayer"))?;
        let wms_options = options(&[
            ("layers", JsValue::from_str(&wms.layers)),
            ("format", JsValue::from_str(&wms.format)),
            ("transparent", JsValue::from_bool(wms.transparent)),
            ("attribution", JsValue::from_str(&wms.attribution)),
        ])?;

        let layer = call_method(&tile_layer, "wms", &[&JsValue::from_str(&wms.url), &wms_options])?;
        call_method(&layer, "addTo", &[&self.map])?;
        Ok(())
    }

    /// Recompute the map size once the container has been laid out
    pub fn invalidate_size_delayed(&self) {
        let map = self.map.clone();
        request_animation_frame(move || {
            request_animation_frame(move || {
                let _ = call_method(&map, "invalidateSize", &[]);
            });
        });
    }

    /// Tear down the Leaflet map and all of its layers
    pub fn destroy(self) {
        if let Err(e) = call_method(&self.map, "remove", &[]) {
            leptos::logging::error!("Failed to remove map: {}", js_error(&e));
        }
    }

    fn add_layer(&self, layer: JsValue) -> Result<LeafletLayer, String> {
        call_method(&layer, "addTo", &[&self.map]).map_err(|e| js_error(&e))?;
        Ok(LeafletLayer { layer, on_click: None })
    }
}

impl MapSurface for LeafletMap {
    type Handle = LeafletLayer;

    fn add_circle(&mut self, at: LatLng, style: &CircleStyle) -> Result<LeafletLayer, String> {
        let circle_options = options(&[
            ("color", JsValue::from_str(&style.color)),
            ("fillColor", JsValue::from_str(&style.fill_color)),
            ("fillOpacity", JsValue::from_f64(style.fill_opacity)),
            ("radius", JsValue::from_f64(style.radius_m)),
        ])
        .map_err(|e| js_error(&e))?;

        let circle = call_method(&self.l, "circle", &[&lat_lng_array(at), &circle_options])
            .map_err(|e| js_error(&e))?;
        self.add_layer(circle)
    }

    fn add_polyline(&mut self, points: &[LatLng], style: &LineStyle) -> Result<LeafletLayer, String> {
        let latlngs = js_sys::Array::new();
        for point in points {
            latlngs.push(&lat_lng_array(*point));
        }
        let line_options = options(&[("color", JsValue::from_str(&style.color))])
            .map_err(|e| js_error(&e))?;

        let polyline = call_method(&self.l, "polyline", &[&latlngs, &line_options])
            .map_err(|e| js_error(&e))?;
        self.add_layer(polyline)
    }

    fn add_marker(&mut self, at: LatLng) -> Result<LeafletLayer, String> {
        let marker = call_method(&self.l, "marker", &[&lat_lng_array(at)]).map_err(|e| js_error(&e))?;
        self.add_layer(marker)
    }

    fn bind_popup(&mut self, handle: &mut LeafletLayer, text: &str) -> Result<(), String> {
        call_method(&handle.layer, "bindPopup", &[&JsValue::from_str(text)])
            .map(|_| ())
            .map_err(|e| js_error(&e))
    }

    fn on_click(&mut self, handle: &mut LeafletLayer, callback: Box<dyn Fn()>) -> Result<(), String> {
        let listener = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        call_method(&handle.layer, "on", &[&JsValue::from_str("click"), listener.as_ref()])
            .map_err(|e| js_error(&e))?;
        handle.on_click = Some(listener);
        Ok(())
    }

    fn remove(&mut self, handle: LeafletLayer) {
        if handle.on_click.is_some() {
            let _ = call_method(&handle.layer, "off", &[]);
        }
        if let Err(e) = call_method(&self.map, "removeLayer", &[&handle.layer]) {
            leptos::logging::error!("Failed to remove layer: {}", js_error(&e));
        }
    }

    fn layer_count(&self) -> usize {
        let count = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&count);
        let visit = Closure::wrap(Box::new(move |_layer: JsValue| {
            counter.set(counter.get() + 1);
        }) as Box<dyn FnMut(JsValue)>);

        let _ = call_method(&self.map, "eachLayer", &[visit.as_ref()]);
        count.get()
    }
}
