pub mod create_session_form;
pub mod day_column;
pub mod growth_session_card;
pub mod week_view;
