use shared::GrowthSession;
use week_engine::{SessionAction, SessionView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GrowthSessionCardProps {
    pub session: SessionView,
    /// Server base URL for the show and edit pages
    pub base_url: String,
    pub on_join: Callback<GrowthSession>,
    pub on_leave: Callback<GrowthSession>,
    pub on_delete: Callback<GrowthSession>,
}

fn emit_with(callback: &Callback<GrowthSession>, session: &GrowthSession) -> Callback<MouseEvent> {
    let callback = callback.clone();
    let session = session.clone();
    Callback::from(move |_: MouseEvent| callback.emit(session.clone()))
}

#[function_component(GrowthSessionCard)]
pub fn growth_session_card(props: &GrowthSessionCardProps) -> Html {
    let view = &props.session;
    let session = &view.session;
    let show_url = format!("{}/growth_sessions/{}", props.base_url.trim_end_matches('/'), session.id);

    let attendance = match session.attendee_limit {
        Some(limit) => format!("👥 {}/{}", session.attendees.len(), limit),
        None => format!("👥 {}", session.attendees.len()),
    };

    html! {
        <div class="growth-session" data-session-id={session.id.to_string()}>
            <div class="growth-session-header">
                <span class="start-time">{&view.start_time_label}</span>
                <a class="title" href={show_url.clone()}>{&session.title}</a>
            </div>
            <p class="topic">{&session.topic}</p>
            <div class="growth-session-meta">
                <span class="location">{format!("📍 {}", session.location)}</span>
                <span class="attendees">{attendance}</span>
                <img class="owner-avatar" src={session.owner.avatar.clone()}
                     alt={session.owner.github_nickname.clone()}
                     title={session.owner.name.clone()} />
            </div>

            <div class="growth-session-actions">
                {if view.can(SessionAction::Join) {
                    html! { <button class="join-button" onclick={emit_with(&props.on_join, session)}>{"Join"}</button> }
                } else { html! {} }}
                {if view.can(SessionAction::Leave) {
                    html! { <button class="leave-button" onclick={emit_with(&props.on_leave, session)}>{"Leave"}</button> }
                } else { html! {} }}
                {if view.can(SessionAction::Edit) {
                    html! { <a class="edit-button" href={format!("{}/edit", show_url)}>{"Edit"}</a> }
                } else { html! {} }}
                {if view.can(SessionAction::Delete) {
                    html! { <button class="delete-button" onclick={emit_with(&props.on_delete, session)}>{"Delete"}</button> }
                } else { html! {} }}
            </div>
        </div>
    }
}
