mod components;
mod hooks;
mod services;

use components::week_view::WeekViewComponent;
use services::logging::{init_logging, Logger};
use services::page_context::PageContext;
use yew::prelude::*;

/// Engine and frontend log level in `EnvFilter` syntax
const LOG_FILTER: &str = "info";

#[function_component(App)]
fn app() -> Html {
    let context = use_memo((), |_| {
        PageContext::load().unwrap_or_else(|e| {
            Logger::warn_with_component("app", &format!("⚠️ Using default page context: {:#}", e));
            PageContext::default()
        })
    });

    html! {
        <main class="growth-sessions">
            <WeekViewComponent context={(*context).clone()} />
        </main>
    }
}

fn main() {
    init_logging(LOG_FILTER);
    yew::Renderer::<App>::new().render();
}
