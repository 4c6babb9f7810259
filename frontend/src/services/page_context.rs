//! Reads what the hosting page hands to the week view.
//!
//! The server renders two optional JSON blocks into the page:
//! `<script id="week-view-config">` with the engine configuration and
//! `<script id="week-view-user">` with the signed-in user (absent or `null`
//! for guests). The CSRF token comes from `<meta name="csrf-token">`.

use anyhow::{anyhow, Context, Result};
use shared::User;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlMetaElement};
use week_engine::{Viewer, WeekViewConfig};

const CONFIG_SCRIPT_ID: &str = "week-view-config";
const USER_SCRIPT_ID: &str = "week-view-user";

#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub config: WeekViewConfig,
    pub viewer: Viewer,
    pub csrf_token: Option<String>,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            config: WeekViewConfig::default(),
            viewer: Viewer::Guest,
            csrf_token: None,
        }
    }
}

impl PageContext {
    pub fn load() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| anyhow!("No document available"))?;

        let config = match script_text(&document, CONFIG_SCRIPT_ID) {
            Some(json) => parse_config(&json)?,
            None => WeekViewConfig::default(),
        };
        let viewer = match script_text(&document, USER_SCRIPT_ID) {
            Some(json) => parse_viewer(&json)?,
            None => Viewer::Guest,
        };

        Ok(Self {
            config,
            viewer,
            csrf_token: csrf_token(&document),
        })
    }
}

pub fn parse_config(json: &str) -> Result<WeekViewConfig> {
    WeekViewConfig::from_json(json).context("Invalid week view configuration")
}

pub fn parse_viewer(json: &str) -> Result<Viewer> {
    if json.trim().is_empty() {
        return Ok(Viewer::Guest);
    }
    let user: Option<User> = serde_json::from_str(json).context("Invalid week view user")?;
    Ok(Viewer::from_user(user))
}

fn script_text(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|element| element.text_content())
}

fn csrf_token(document: &Document) -> Option<String> {
    document
        .query_selector("meta[name='csrf-token']")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .filter(|token| !token.is_empty())
}
