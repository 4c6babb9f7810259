use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use week_engine::Viewport;
use yew::prelude::*;

/// Resize events are coalesced over this many milliseconds
const RESIZE_DEBOUNCE_MS: u32 = 150;

fn window_width() -> f64 {
    gloo::utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}

/// Tracks the window width and classifies it against `breakpoint`
#[hook]
pub fn use_viewport(breakpoint: f64) -> Viewport {
    let width = use_state(window_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
                let width = width.clone();
                let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || width.set(window_width()));
                // Replacing the handle cancels the previous timer
                *pending.borrow_mut() = Some(timeout);
            });
            move || drop(listener)
        });
    }

    Viewport::from_width(*width, breakpoint)
}
