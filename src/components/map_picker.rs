use yew::prelude::*;

use crate::hooks::use_leaflet_map;
use crate::models::GeoPosition;
use crate::utils::constants::MAP_CONTAINER_ID;

#[derive(Properties, PartialEq)]
pub struct MapPickerProps {
    pub center: GeoPosition,
    pub marker: GeoPosition,
    pub on_click: Callback<GeoPosition>,
}

#[function_component(MapPicker)]
pub fn map_picker(props: &MapPickerProps) -> Html {
    use_leaflet_map(MAP_CONTAINER_ID, props.center, props.marker, props.on_click.clone());

    html! {
        <div id={MAP_CONTAINER_ID}></div>
    }
}
