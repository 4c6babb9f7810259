//! Async driver pairing controller transitions with server calls.
//!
//! The UI holds a [`WeekNavigator`] and fires its methods from event
//! handlers. Each call runs the synchronous transition, notifies the change
//! listener (so loading state renders right away), awaits the server, applies
//! the result and notifies again. The controller is never borrowed across an
//! await, so overlapping calls are safe; stale fetches are dropped by the
//! controller's generation check.

use crate::error::FetchError;
use crate::navigation::{FetchOutcome, FetchTicket, WeekNavigationController};
use crate::session_api::SessionApi;
use crate::view::WeekView;
use crate::visibility::{Viewer, Viewport};
use shared::{CreateGrowthSessionRequest, GrowthSession};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

type Listener = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct WeekNavigator {
    controller: Rc<RefCell<WeekNavigationController>>,
    api: Rc<dyn SessionApi>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl WeekNavigator {
    pub fn new(controller: WeekNavigationController, api: Rc<dyn SessionApi>) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
            api,
            listener: Rc::new(RefCell::new(None)),
        }
    }

    /// Called after every state change, typically to schedule a re-render
    pub fn set_listener(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn clear_listener(&self) {
        *self.listener.borrow_mut() = None;
    }

    pub fn controller(&self) -> Ref<'_, WeekNavigationController> {
        self.controller.borrow()
    }

    pub fn view(&self, viewport: Viewport) -> WeekView {
        self.controller.borrow().view(viewport)
    }

    pub fn set_viewer(&self, viewer: Viewer) {
        self.controller.borrow_mut().set_viewer(viewer);
        self.notify();
    }

    pub fn dismiss_notice(&self) {
        self.controller.borrow_mut().clear_notice();
        self.notify();
    }

    /// Load the week named by the URL, or the current week
    pub async fn start(&self) -> FetchOutcome {
        let ticket = self.transition(WeekNavigationController::initialize);
        self.fetch(ticket).await
    }

    pub async fn previous_week(&self) -> FetchOutcome {
        let ticket = self.transition(WeekNavigationController::previous_week);
        self.fetch(ticket).await
    }

    pub async fn next_week(&self) -> FetchOutcome {
        let ticket = self.transition(WeekNavigationController::next_week);
        self.fetch(ticket).await
    }

    /// Handle a browser back/forward (popstate) event
    pub async fn history_navigated(&self) -> FetchOutcome {
        let ticket = self.transition(WeekNavigationController::history_navigated);
        self.fetch(ticket).await
    }

    pub async fn reload(&self) -> FetchOutcome {
        let ticket = self.transition(WeekNavigationController::reload);
        self.fetch(ticket).await
    }

    pub async fn create(&self, request: CreateGrowthSessionRequest) -> Result<GrowthSession, FetchError> {
        match self.api.create(&request).await {
            Ok(session) => {
                tracing::info!("✅ Created growth session {} on {}", session.id, session.date);
                self.controller.borrow_mut().apply_created(session.clone());
                self.notify();
                Ok(session)
            }
            Err(error) => Err(self.report("create the growth session", error)),
        }
    }

    pub async fn join(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError> {
        match self.api.join(session).await {
            Ok(updated) => {
                self.controller.borrow_mut().apply_updated(updated.clone());
                self.notify();
                Ok(updated)
            }
            Err(error) => Err(self.report("join the growth session", error)),
        }
    }

    pub async fn leave(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError> {
        match self.api.leave(session).await {
            Ok(updated) => {
                self.controller.borrow_mut().apply_updated(updated.clone());
                self.notify();
                Ok(updated)
            }
            Err(error) => Err(self.report("leave the growth session", error)),
        }
    }

    /// Removes the session locally once the server confirms the delete
    pub async fn delete(&self, session: &GrowthSession) -> Result<(), FetchError> {
        match self.api.delete(session).await {
            Ok(()) => {
                tracing::info!("🗑️ Deleted growth session {}", session.id);
                self.controller.borrow_mut().apply_deleted(session.id);
                self.notify();
                Ok(())
            }
            Err(error) => Err(self.report("delete the growth session", error)),
        }
    }

    fn transition(&self, step: impl FnOnce(&mut WeekNavigationController) -> FetchTicket) -> FetchTicket {
        let ticket = step(&mut *self.controller.borrow_mut());
        self.notify();
        ticket
    }

    async fn fetch(&self, ticket: FetchTicket) -> FetchOutcome {
        let result = self.api.fetch_week(&ticket.anchor_iso_date()).await;
        let outcome = self.controller.borrow_mut().apply_fetch(ticket, result);
        if outcome != FetchOutcome::Discarded {
            self.notify();
        }
        outcome
    }

    fn report(&self, action: &str, error: FetchError) -> FetchError {
        tracing::warn!("❌ Could not {}: {}", action, error);
        self.controller
            .borrow_mut()
            .set_notice(format!("Could not {}: {}", action, error));
        self.notify();
        error
    }

    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}
