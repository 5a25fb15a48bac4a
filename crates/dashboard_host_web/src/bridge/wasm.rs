use std::{cell::RefCell, rc::Rc};

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::*;

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

fn property(target: &JsValue, key: &str) -> Result<JsValue, HostError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|err| HostError::MalformedApi {
        detail: format!("reading `{key}` failed: {}", js_error_to_string(err)),
    })
}

pub fn install_namespace_listener(
    host_global: &str,
    callback: NamespaceCallback,
) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::WindowUnavailable)?;
    let dashboard = property(&window, host_global)?;
    if is_absent(&dashboard) {
        return Err(HostError::GlobalMissing {
            global: host_global.to_string(),
        });
    }

    let handler_class = property(&dashboard, EVENT_HANDLER_KEY)?;
    if is_absent(&handler_class) {
        return Err(HostError::MalformedApi {
            detail: format!("`{host_global}.{EVENT_HANDLER_KEY}` is not defined"),
        });
    }
    let init: Function = property(&handler_class, "init")?
        .dyn_into()
        .map_err(|_| HostError::MalformedApi {
            detail: format!("`{host_global}.{EVENT_HANDLER_KEY}.init` is not a function"),
        })?;

    // The host usually calls back synchronously; a failure to attach the listener is surfaced
    // from this call in that case.
    let attach_error: Rc<RefCell<Option<HostError>>> = Rc::new(RefCell::new(None));
    let attach_error_slot = attach_error.clone();
    let on_ready = Closure::<dyn FnMut(JsValue)>::new(move |event_handler: JsValue| {
        let callback = callback.clone();
        let on_selected = Closure::<dyn FnMut(JsValue)>::new(move |namespace: JsValue| {
            if let Some(namespace) = namespace.as_string() {
                callback(namespace);
            }
        });
        if let Err(err) = Reflect::set(
            &event_handler,
            &JsValue::from_str(NAMESPACE_SELECTED_KEY),
            on_selected.as_ref(),
        ) {
            *attach_error_slot.borrow_mut() = Some(HostError::MalformedApi {
                detail: format!(
                    "setting `{NAMESPACE_SELECTED_KEY}` failed: {}",
                    js_error_to_string(err)
                ),
            });
        }
        on_selected.forget();
    });

    let called = init.call1(&handler_class, on_ready.as_ref());
    // The host may have kept the callback even when `init` threw.
    on_ready.forget();
    called.map_err(|err| HostError::InitFailed {
        message: js_error_to_string(err),
    })?;

    match attach_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn location_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}
