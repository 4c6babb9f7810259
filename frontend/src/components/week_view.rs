use crate::components::create_session_form::CreateSessionForm;
use crate::components::day_column::DayColumn;
use crate::hooks::use_viewport::use_viewport;
use crate::hooks::use_week_navigation::use_week_navigation;
use crate::services::page_context::PageContext;
use shared::CreateGrowthSessionRequest;
use week_engine::{CalendarDate, Phase};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekViewProps {
    pub context: PageContext,
}

#[function_component(WeekViewComponent)]
pub fn week_view(props: &WeekViewProps) -> Html {
    let viewport = use_viewport(props.context.config.narrow_breakpoint);
    let navigation = use_week_navigation(&props.context, viewport);
    let creating_on = use_state(|| Option::<CalendarDate>::None);

    let view = &navigation.view;
    let actions = &navigation.actions;
    let base_url = props.context.config.api_base_url.clone();

    let on_create_clicked = {
        let creating_on = creating_on.clone();
        Callback::from(move |date: CalendarDate| creating_on.set(Some(date)))
    };

    let on_create_submit = {
        let creating_on = creating_on.clone();
        let create = actions.create.clone();
        Callback::from(move |request: CreateGrowthSessionRequest| {
            creating_on.set(None);
            create.emit(request);
        })
    };

    let on_create_cancel = {
        let creating_on = creating_on.clone();
        Callback::from(move |_: ()| creating_on.set(None))
    };

    let on_retry = {
        let reload = actions.reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    let on_dismiss = {
        let dismiss_notice = actions.dismiss_notice.clone();
        Callback::from(move |_: MouseEvent| dismiss_notice.emit(()))
    };

    html! {
        <div class={classes!("week-view", view.is_loading.then_some("loading"))}>
            <nav class="week-navigation">
                <button class="load-previous-week" title={view.previous_anchor().to_date_string()}
                        onclick={actions.previous_week.clone()}>{"◀ Previous week"}</button>
                <h2 class="week-of">{format!("Week of {}", view.week_of.date().format("%B %-d, %Y"))}</h2>
                <button class="load-next-week" title={view.next_anchor().to_date_string()}
                        onclick={actions.next_week.clone()}>{"Next week ▶"}</button>
            </nav>

            {if let Some(notice) = view.notice.as_ref() {
                html! {
                    <div class="form-message error notice">
                        <span>{notice}</span>
                        {if view.phase == Phase::Error {
                            html! { <button class="retry" onclick={on_retry}>{"Try again"}</button> }
                        } else { html! {} }}
                        <button class="dismiss" onclick={on_dismiss}>{"✕"}</button>
                    </div>
                }
            } else { html! {} }}

            {if let Some(date) = *creating_on {
                html! {
                    <CreateSessionForm
                        date={date}
                        on_submit={on_create_submit}
                        on_cancel={on_create_cancel}
                    />
                }
            } else { html! {} }}

            <div class="week">
                {for view.days.iter().map(|day| html! {
                    <DayColumn
                        key={day.date.to_date_string()}
                        day={day.clone()}
                        base_url={base_url.clone()}
                        on_create={on_create_clicked.clone()}
                        on_join={actions.join.clone()}
                        on_leave={actions.leave.clone()}
                        on_delete={actions.delete.clone()}
                    />
                })}
            </div>
        </div>
    }
}
