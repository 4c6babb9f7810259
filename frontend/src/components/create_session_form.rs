use shared::CreateGrowthSessionRequest;
use web_sys::HtmlInputElement;
use week_engine::{parse_time_of_day, CalendarDate};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateSessionFormProps {
    pub date: CalendarDate,
    pub on_submit: Callback<CreateGrowthSessionRequest>,
    pub on_cancel: Callback<()>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateSessionFields {
    pub title: String,
    pub topic: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub attendee_limit: String,
}

impl CreateSessionFields {
    /// Build the request, or the first problem found in the fields
    pub fn to_request(&self, date: CalendarDate) -> Result<CreateGrowthSessionRequest, String> {
        let required = [
            ("title", &self.title),
            ("topic", &self.topic),
            ("location", &self.location),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(format!("Please enter a {}", name));
        }

        let start = parse_time_of_day(&self.start_time).map_err(|e| e.to_string())?;
        let end_time = if self.end_time.trim().is_empty() {
            None
        } else {
            let end = parse_time_of_day(&self.end_time).map_err(|e| e.to_string())?;
            if end <= start {
                return Err("End time must be after the start time".to_string());
            }
            Some(end.format("%H:%M").to_string())
        };

        let attendee_limit = match self.attendee_limit.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => Some(limit),
                _ => return Err("Attendee limit must be a positive number".to_string()),
            },
        };

        Ok(CreateGrowthSessionRequest {
            title: self.title.trim().to_string(),
            topic: self.topic.trim().to_string(),
            location: self.location.trim().to_string(),
            date: date.date(),
            start_time: start.format("%H:%M").to_string(),
            end_time,
            attendee_limit,
        })
    }
}

fn input_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(CreateSessionForm)]
pub fn create_session_form(props: &CreateSessionFormProps) -> Html {
    let fields = use_state(CreateSessionFields::default);
    let form_error = use_state(|| Option::<String>::None);

    let on_field = |update: fn(&mut CreateSessionFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let mut next = (*fields).clone();
            update(&mut next, input_value(&e));
            fields.set(next);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let form_error = form_error.clone();
        let on_submit = props.on_submit.clone();
        let date = props.date;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match fields.to_request(date) {
                Ok(request) => {
                    form_error.set(None);
                    on_submit.emit(request);
                }
                Err(message) => form_error.set(Some(message)),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <section class="create-growth-session-form">
            <h2>{format!("📝 New growth session on {} {}", props.date.weekday_name(), props.date.to_date_string())}</h2>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input type="text" id="title" value={fields.title.clone()}
                           onchange={on_field(|f, v| f.title = v)} />
                </div>
                <div class="form-group">
                    <label for="topic">{"Topic"}</label>
                    <input type="text" id="topic" value={fields.topic.clone()}
                           onchange={on_field(|f, v| f.topic = v)} />
                </div>
                <div class="form-group">
                    <label for="location">{"Location"}</label>
                    <input type="text" id="location" placeholder="Discord, room 2, ..."
                           value={fields.location.clone()}
                           onchange={on_field(|f, v| f.location = v)} />
                </div>
                <div class="form-group">
                    <label for="start_time">{"Starts at"}</label>
                    <input type="time" id="start_time" value={fields.start_time.clone()}
                           onchange={on_field(|f, v| f.start_time = v)} />
                </div>
                <div class="form-group">
                    <label for="end_time">{"Ends at"}</label>
                    <input type="time" id="end_time" value={fields.end_time.clone()}
                           onchange={on_field(|f, v| f.end_time = v)} />
                </div>
                <div class="form-group">
                    <label for="attendee_limit">{"Attendee limit"}</label>
                    <input type="number" id="attendee_limit" min="1" placeholder="No limit"
                           value={fields.attendee_limit.clone()}
                           onchange={on_field(|f, v| f.attendee_limit = v)} />
                </div>
                <button type="submit" class="btn btn-primary">{"Create"}</button>
                <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
            </form>
        </section>
    }
}
