use std::rc::Rc;
use leptos::{
    component, create_effect, create_memo, create_node_ref, create_signal, on_cleanup, spawn_local,
    store_value, view, Callback, IntoView, SignalGet, SignalGetUntracked, SignalSet, SignalUpdate,
    SignalWith, SignalWithUntracked, WriteSignal,
};
use crate::api::fetch_network;
use crate::components::overlay_controls::OverlayControls;
use crate::config::MapConfig;
use crate::logging::log;
use crate::map::LeafletMap;
use crate::models::{Junction, NetworkData};
use crate::overlay::{OverlayCategory, OverlayRegistry, Overlays};

/// Numbers each load so that only the most recently started one is applied
#[derive(Debug, Default)]
pub(crate) struct LoadGeneration(u64);

impl LoadGeneration {
    /// Start a new load and return its ticket
    pub(crate) fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Apply a finished load. On success junctions and stations are replaced
/// together and the loaded flag is set; a failure is logged and leaves both
/// as they were. Returns whether the data was applied.
pub(crate) fn apply_network_result(
    result: Result<NetworkData, String>,
    set_network: WriteSignal<NetworkData>,
    set_data_loaded: WriteSignal<bool>,
) -> bool {
    match result {
        Ok(data) => {
            log!(
                "Loaded {} junctions and {} stations",
                data.junctions.len(),
                data.stations.len()
            );
            // Signals are gone once the component has been disposed
            if set_network.try_set(data).is_some() {
                return false;
            }
            set_data_loaded.set(true);
            true
        }
        Err(e) => {
            leptos::logging::error!("Error fetching data: {}", e);
            false
        }
    }
}

/// Leaflet map with junction and station overlays loaded from the backend
#[component]
#[must_use]
pub fn JunctionMap(
    /// Endpoints, initial view and base layer; defaults to the local backend
    #[prop(optional)]
    config: Option<MapConfig>,
) -> impl IntoView {
    let config = store_value(config.unwrap_or_default());
    let map_container_ref = create_node_ref::<leptos::html::Div>();

    let (network, set_network) = create_signal(NetworkData::default());
    let (data_loaded, set_data_loaded) = create_signal(false);
    let (filter_value, set_filter_value) = create_signal(config.with_value(|c| c.default_filter.clone()));
    let (overlays, set_overlays) = create_signal(Overlays::empty());
    let (map_ready, set_map_ready) = create_signal(false);
    let registry = store_value(None::<OverlayRegistry<LeafletMap>>);

    let generation = store_value(LoadGeneration::default());

    let load_network = move || {
        let config = config.get_value();
        let Some(ticket) = generation.try_update_value(LoadGeneration::begin) else { return };
        spawn_local(async move {
            let result = fetch_network(&config).await;
            if generation.try_with_value(|g| g.is_current(ticket)) != Some(true) {
                log!("Dropping result of superseded load #{}", ticket);
                return;
            }
            apply_network_result(result, set_network, set_data_loaded);
        });
    };

    // Initialize Leaflet map when container is mounted
    create_effect(move |_| {
        let Some(container) = map_container_ref.get() else { return };
        if registry.with_value(Option::is_some) {
            return;
        }
        let container_element: &web_sys::HtmlElement = &container;

        match config.with_value(|c| LeafletMap::attach(container_element, c)) {
            Ok(map) => {
                map.invalidate_size_delayed();

                let mut overlay_registry = OverlayRegistry::new(map);
                overlay_registry.set_line_click_handler(Rc::new(move |junction: &Junction| {
                    network.with_untracked(|data| {
                        registry.update_value(|slot| {
                            if let Some(layers) = slot.as_mut() {
                                layers.highlight_stations_on(junction, &data.stations);
                            }
                        });
                    });
                }));
                registry.set_value(Some(overlay_registry));
                set_map_ready.set(true);

                load_network();
            }
            Err(e) => {
                leptos::logging::error!("Failed to initialize Leaflet map: {:?}", e);
            }
        }
    });

    // One reconciliation pass per category, re-run when its toggle flips or
    // new data arrives. The filter text is read at that moment, so edits
    // apply on the next toggle or refetch.
    for category in OverlayCategory::ALL {
        let enabled = create_memo(move |_| overlays.get().contains(category.flag()));
        create_effect(move |_| {
            let enabled = enabled.get();
            if !map_ready.get() {
                return;
            }
            let filter = filter_value.get_untracked();
            network.with(|data| {
                registry.update_value(|slot| {
                    if let Some(layers) = slot.as_mut() {
                        layers.reconcile(category, enabled, data, &filter);
                    }
                });
            });
        });
    }

    on_cleanup(move || {
        if let Some(registry) = registry.try_update_value(Option::take).flatten() {
            registry.into_surface().destroy();
        }
    });

    let on_toggle = Callback::new(move |category: OverlayCategory| {
        set_overlays.update(|overlays| overlays.toggle(category.flag()));
    });
    let on_refetch = Callback::new(move |()| load_network());

    view! {
        <div class="junction-map">
            <OverlayControls
                filter_value=filter_value
                set_filter_value=set_filter_value
                overlays=overlays
                data_loaded=data_loaded
                on_toggle=on_toggle
                on_refetch=on_refetch
            />
            <div
                class="map-container"
                node_ref=map_container_ref
                style="height: 70vh; width: 100%;"
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;
    use crate::models::Station;

    fn prior_network() -> NetworkData {
        NetworkData::new(
            vec![Junction {
                junction_id: Some("J1".to_string()),
                ..Junction::default()
            }],
            vec![Station {
                station_id: Some("S1".to_string()),
                ..Station::default()
            }],
        )
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let runtime = create_runtime();
        let (network, set_network) = create_signal(prior_network());
        let (data_loaded, set_data_loaded) = create_signal(false);

        let applied = apply_network_result(
            Err("Request to http://localhost:8082/junctionLink failed".to_string()),
            set_network,
            set_data_loaded,
        );

        assert!(!applied);
        assert_eq!(network.get_untracked(), prior_network());
        assert!(!data_loaded.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_failed_reload_keeps_loaded_flag() {
        let runtime = create_runtime();
        let (network, set_network) = create_signal(prior_network());
        let (data_loaded, set_data_loaded) = create_signal(true);

        apply_network_result(Err("decode error".to_string()), set_network, set_data_loaded);

        assert_eq!(network.get_untracked(), prior_network());
        assert!(data_loaded.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_successful_load_replaces_both_collections() {
        let runtime = create_runtime();
        let (network, set_network) = create_signal(prior_network());
        let (data_loaded, set_data_loaded) = create_signal(false);

        let applied = apply_network_result(Ok(NetworkData::default()), set_network, set_data_loaded);

        assert!(applied);
        assert_eq!(network.get_untracked(), NetworkData::default());
        assert!(data_loaded.get_untracked());
        runtime.dispose();
    }

    #[test]
    fn test_only_latest_load_is_current() {
        let mut generation = LoadGeneration::default();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
