//! egui desktop front-end.

mod app;
mod confirm;
mod event_dialog;
mod gantt_view;
mod list_view;

pub use app::SchedulerApp;
