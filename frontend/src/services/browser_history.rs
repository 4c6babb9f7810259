use crate::services::logging::Logger;
use wasm_bindgen::JsValue;
use week_engine::NavigationHistory;

/// `window.history` and `window.location` behind the engine's history seam
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

impl NavigationHistory for BrowserHistory {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn push_search(&self, search: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pathname = window.location().pathname().unwrap_or_default();
        let url = format!("{}{}", pathname, search);
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = pushed {
            Logger::warn_with_component("browser-history", &format!("⚠️ Could not push {}: {:?}", url, e));
        }
    }
}
