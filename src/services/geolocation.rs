use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::error::ServiceError;
use crate::models::GeoPosition;

/// `navigator.geolocation.getCurrentPosition` como future. Un solo intento.
pub async fn current_position() -> Result<GeoPosition, ServiceError> {
    let geolocation = web_sys::window()
        .ok_or(ServiceError::Unavailable("window"))?
        .navigator()
        .geolocation()
        .map_err(|_| ServiceError::Unavailable("geolocation"))?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|e| ServiceError::Geolocation(js_error_message(&e)))?;

    // position.coords.{latitude,longitude} leídos por reflexión
    let coords = Reflect::get(&position, &JsValue::from_str("coords")).unwrap_or(JsValue::UNDEFINED);
    position_from_coords(read_number(&coords, "latitude"), read_number(&coords, "longitude"))
}

fn read_number(object: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

fn position_from_coords(latitude: Option<f64>, longitude: Option<f64>) -> Result<GeoPosition, ServiceError> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(GeoPosition::new(latitude, longitude)),
        _ => Err(ServiceError::Parse("posición sin coords.latitude/longitude".to_string())),
    }
}

fn js_error_message(error: &JsValue) -> String {
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
