use bevy::prelude::*;
use bridge_protocol::channel::{BridgeEndpoint, BridgeSender};

/// Resource holding the engine's end of the boundary.
///
/// Wired once at app assembly; everything that talks to the shell goes
/// through this, nothing discovers the channel at runtime.
#[derive(Resource)]
pub struct BridgeInterface {
    endpoint: BridgeEndpoint,
}

impl BridgeInterface {
    pub fn new(endpoint: BridgeEndpoint) -> Self {
        Self { endpoint }
    }

    /// Inbound lines delivered since the last frame, in send order.
    pub fn drain_incoming(&self) -> Vec<String> {
        self.endpoint.drain()
    }

    pub fn sender(&self) -> BridgeSender {
        self.endpoint.sender()
    }

    pub fn endpoint(&self) -> &BridgeEndpoint {
        &self.endpoint
    }
}

/// The page's half of the channel when the engine runs embedded in a
/// browser: inbound `message` events feed the engine's inbox, and whatever
/// the engine sends is forwarded to the parent window.
#[cfg(target_arch = "wasm32")]
#[derive(Resource)]
pub struct PageProxy(BridgeEndpoint);

#[cfg(target_arch = "wasm32")]
pub fn setup_page_listener(mut commands: Commands, bridge: Res<BridgeInterface>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{MessageEvent, window};

    let page = bridge.endpoint().peer();
    let inbox = page.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let line: String = data.into();
            // Cheap pre-filter; anything that survives still goes through
            // the real decoder, which logs and drops the malformed rest.
            if line.contains('|') {
                inbox.send_line(line);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("failed to register message listener");
    }

    // Ownership moves to the JS side for the lifetime of the page.
    closure.forget();
    commands.insert_resource(PageProxy(page));
}

/// Forward engine-sent lines to the embedding page, in send order.
#[cfg(target_arch = "wasm32")]
pub fn forward_lines_to_page(proxy: Res<PageProxy>) {
    use wasm_bindgen::JsValue;
    use web_sys::window;

    for line in proxy.0.drain() {
        let Some(window) = window() else {
            error!("window object not available");
            return;
        };
        match window.parent().ok().flatten() {
            Some(parent) => {
                if let Err(err) = parent.post_message(&JsValue::from_str(&line), "*") {
                    error!("failed to post message to parent: {err:?}");
                }
            }
            None => warn!("no parent window, dropping outbound line"),
        }
    }
}
