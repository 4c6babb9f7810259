use crate::services::api::GrowthSessionApi;
use crate::services::browser_history::BrowserHistory;
use crate::services::logging::Logger;
use crate::services::page_context::PageContext;
use gloo::events::EventListener;
use shared::{CreateGrowthSessionRequest, GrowthSession};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use week_engine::{
    Clock, FetchOutcome, NavigationHistory, SessionApi, SystemClock, Viewport, WeekNavigationController,
    WeekNavigator, WeekView,
};
use yew::prelude::*;

const COMPONENT: &str = "week-navigation";

pub struct UseWeekNavigationResult {
    pub view: WeekView,
    pub actions: UseWeekNavigationActions,
}

#[derive(Clone, PartialEq)]
pub struct UseWeekNavigationActions {
    pub previous_week: Callback<MouseEvent>,
    pub next_week: Callback<MouseEvent>,
    pub reload: Callback<()>,
    pub dismiss_notice: Callback<()>,
    pub create: Callback<CreateGrowthSessionRequest>,
    pub join: Callback<GrowthSession>,
    pub leave: Callback<GrowthSession>,
    pub delete: Callback<GrowthSession>,
}

fn build_navigator(context: &PageContext) -> WeekNavigator {
    let clock: Rc<dyn Clock> = Rc::new(SystemClock);
    let history: Rc<dyn NavigationHistory> = Rc::new(BrowserHistory);
    let api: Rc<dyn SessionApi> = Rc::new(GrowthSessionApi::new(
        context.config.clone(),
        context.csrf_token.clone(),
    ));
    let controller = WeekNavigationController::new(context.config.clone(), context.viewer.clone(), clock, history);
    WeekNavigator::new(controller, api)
}

fn log_outcome(action: &str, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Applied => Logger::debug_with_component(COMPONENT, &format!("✅ {} applied", action)),
        FetchOutcome::Failed(e) => Logger::warn_with_component(COMPONENT, &format!("❌ {} failed: {}", action, e)),
        FetchOutcome::Discarded => {
            Logger::debug_with_component(COMPONENT, &format!("⏭️ {} superseded by a newer navigation", action))
        }
    }
}

/// Owns the week navigator for the lifetime of the component.
///
/// Loads the starting week on mount, re-renders on every navigator change and
/// re-syncs from the URL on browser back/forward.
#[hook]
pub fn use_week_navigation(context: &PageContext, viewport: Viewport) -> UseWeekNavigationResult {
    let navigator = {
        let context = context.clone();
        use_memo((), move |_| build_navigator(&context))
    };
    let update = use_force_update();

    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            navigator.set_listener(move || update.force_update());

            let starter = (*navigator).clone();
            spawn_local(async move {
                log_outcome("Initial load", starter.start().await);
            });

            let popstate = {
                let navigator = (*navigator).clone();
                EventListener::new(&gloo::utils::window(), "popstate", move |_| {
                    let navigator = navigator.clone();
                    spawn_local(async move {
                        log_outcome("History navigation", navigator.history_navigated().await);
                    });
                })
            };

            move || {
                navigator.clear_listener();
                drop(popstate);
            }
        });
    }

    let previous_week = {
        let navigator = navigator.clone();
        use_callback((), move |_: MouseEvent, _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                log_outcome("Previous week", navigator.previous_week().await);
            });
        })
    };

    let next_week = {
        let navigator = navigator.clone();
        use_callback((), move |_: MouseEvent, _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                log_outcome("Next week", navigator.next_week().await);
            });
        })
    };

    let reload = {
        let navigator = navigator.clone();
        use_callback((), move |_: (), _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                log_outcome("Reload", navigator.reload().await);
            });
        })
    };

    let dismiss_notice = {
        let navigator = navigator.clone();
        use_callback((), move |_: (), _| navigator.dismiss_notice())
    };

    // Mutation failures already land in the notice; only log them here
    let create = {
        let navigator = navigator.clone();
        use_callback((), move |request: CreateGrowthSessionRequest, _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                if let Ok(session) = navigator.create(request).await {
                    Logger::info_with_component(COMPONENT, &format!("📝 Created session {}", session.id));
                }
            });
        })
    };

    let join = {
        let navigator = navigator.clone();
        use_callback((), move |session: GrowthSession, _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                if navigator.join(&session).await.is_ok() {
                    Logger::info_with_component(COMPONENT, &format!("🙋 Joined session {}", session.id));
                }
            });
        })
    };

    let leave = {
        let navigator = navigator.clone();
        use_callback((), move |session: GrowthSession, _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                if navigator.leave(&session).await.is_ok() {
                    Logger::info_with_component(COMPONENT, &format!("👋 Left session {}", session.id));
                }
            });
        })
    };

    let delete = {
        let navigator = navigator.clone();
        use_callback((), move |session: GrowthSession, _| {
            let navigator = (*navigator).clone();
            spawn_local(async move {
                if navigator.delete(&session).await.is_ok() {
                    Logger::info_with_component(COMPONENT, &format!("🗑️ Deleted session {}", session.id));
                }
            });
        })
    };

    UseWeekNavigationResult {
        view: navigator.view(viewport),
        actions: UseWeekNavigationActions {
            previous_week,
            next_week,
            reload,
            dismiss_notice,
            create,
            join,
            leave,
            delete,
        },
    }
}
