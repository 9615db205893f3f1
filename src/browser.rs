use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Defined in index.html; wraps the Google Identity Services code client.
    #[wasm_bindgen(catch, js_namespace = window, js_name = ssRequestGoogleCode)]
    fn request_google_code_js(client_id: &str, on_code: &JsValue, on_error: &JsValue) -> Result<(), JsValue>;
}

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|w| w.location())
}

/// Full reload; authenticated UI is rebuilt from local storage.
pub fn reload() {
    if let Some(loc) = location() {
        if let Err(e) = loc.reload() {
            log::error!("reload failed: {e:?}");
        }
    }
}

pub fn navigate(path: &str) {
    if let Some(loc) = location() {
        if let Err(e) = loc.set_href(path) {
            log::error!("navigation to {path} failed: {e:?}");
        }
    }
}

/// Opens the Google popup. Exactly one of the callbacks fires, at most once.
pub fn request_google_code<F>(client_id: &str, on_code: F)
where
    F: FnOnce(String) + 'static,
{
    let on_code = Closure::once_into_js(move |code: String| on_code(code));
    let on_error = Closure::once_into_js(move |err: JsValue| {
        log::error!("Google Login Error: {err:?}");
    });
    if let Err(e) = request_google_code_js(client_id, &on_code, &on_error) {
        log::error!("Google popup unavailable: {e:?}");
    }
}
