//! One-shot application bootstrap.
//!
//! Order: build the shared client, construct the root component with the
//! client injected, register it in context, install the router (both inside
//! [`App`]), mount into `#app`. Any failure is returned to the caller; there
//! is no retry or rollback.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("mount element #{0} not found")]
    MissingMountElement(&'static str),

    #[error("mount element #{0} is not an HTML element")]
    NotHtmlElement(&'static str),
}

/// Mount [`App`] with `client` into the page's `#app` element.
///
/// # Errors
///
/// Returns a [`BootError`] when the browser objects or the mount element are
/// missing.
#[cfg(feature = "csr")]
pub fn mount(client: crate::net::ApiClient) -> Result<(), BootError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::{App, MOUNT_ELEMENT_ID};

    let document = web_sys::window().ok_or(BootError::NoWindow)?.document().ok_or(BootError::NoDocument)?;
    let element = document
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .ok_or(BootError::MissingMountElement(MOUNT_ELEMENT_ID))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BootError::NotHtmlElement(MOUNT_ELEMENT_ID))?;

    leptos::mount::mount_to(element, move || view! { <App client=client/> }).forget();
    Ok(())
}

/// WASM entry point: logging, shared client, mount.
///
/// # Errors
///
/// Surfaces any [`BootError`] to the JS caller as a thrown error.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let client = crate::net::ApiClient::browser();
    log::info!("lab-web starting; api base url {}", client.base_url());

    mount(client).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}
