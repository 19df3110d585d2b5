//! Host-facing registration surface.
//!
//! The host reads the descriptor and calls [`init_plugin`] exactly once at
//! plugin-load time, passing whatever application handle it wants the
//! widget to hold on to.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use loradeck_core::PluginDescriptor;

use crate::app::ManagerPanel;

pub const PLUGIN: PluginDescriptor = PluginDescriptor {
    name: "LoRA Manager",
    icon: "📚",
};

/// Opaque host handle; retained by the panel, never inspected.
#[derive(Clone)]
pub struct HostApp {
    #[allow(dead_code)]
    handle: JsValue,
}

impl HostApp {
    pub fn new(handle: JsValue) -> Self {
        Self { handle }
    }
}

#[wasm_bindgen(js_name = pluginName)]
pub fn plugin_name() -> String {
    PLUGIN.name.to_string()
}

#[wasm_bindgen(js_name = pluginIcon)]
pub fn plugin_icon() -> String {
    PLUGIN.icon.to_string()
}

/// Entry point the host calls once at plugin-load time.
#[wasm_bindgen(js_name = initPlugin)]
pub fn init_plugin(app: JsValue) {
    console_error_panic_hook::set_once();
    let host = HostApp::new(app);
    leptos::mount::mount_to_body(move || view! { <ManagerPanel host=host.clone() /> });
}
