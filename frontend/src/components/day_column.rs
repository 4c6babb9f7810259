use crate::components::growth_session_card::GrowthSessionCard;
use shared::GrowthSession;
use week_engine::{CalendarDate, DayView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayColumnProps {
    pub day: DayView,
    pub base_url: String,
    pub on_create: Callback<CalendarDate>,
    pub on_join: Callback<GrowthSession>,
    pub on_leave: Callback<GrowthSession>,
    pub on_delete: Callback<GrowthSession>,
}

/// One day-slot of the week.
///
/// Hidden days are still rendered, with the `hidden` class, so layout and
/// selectors stay stable when the viewport changes.
#[function_component(DayColumn)]
pub fn day_column(props: &DayColumnProps) -> Html {
    let day = &props.day;
    let classes = classes!(
        "day",
        day.is_today.then_some("today"),
        day.is_hidden.then_some("hidden")
    );

    html! {
        <div class={classes} weekday={day.weekday.clone()} data-date={day.date.to_date_string()}>
            <h3 class="day-header">
                <span class="weekday">{&day.weekday}</span>
                <span class="day-date">{day.date.date().format("%b %-d").to_string()}</span>
            </h3>

            {if day.can_create_session() {
                let on_create = props.on_create.clone();
                let date = day.date;
                html! {
                    <button class="create-growth-session"
                            onclick={Callback::from(move |_: MouseEvent| on_create.emit(date))}>
                        {"＋ Create Growth Session"}
                    </button>
                }
            } else { html! {} }}

            {if let Some(phrase) = day.empty_phrase.as_ref() {
                html! { <div class="nothing-planned">{phrase}</div> }
            } else {
                html! {
                    <div class="day-sessions">
                        {for day.sessions.iter().map(|session| html! {
                            <GrowthSessionCard
                                key={session.session.id}
                                session={session.clone()}
                                base_url={props.base_url.clone()}
                                on_join={props.on_join.clone()}
                                on_leave={props.on_leave.clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        })}
                    </div>
                }
            }}
        </div>
    }
}
