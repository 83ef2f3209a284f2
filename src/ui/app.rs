//! Top-level eframe application: tab strip, dialog routing, and the
//! handlers that route user actions through the schedule context.

use crate::models::event::EventId;
use crate::services::schedule::ScheduleContext;
use crate::timeline::grid::GridMetrics;

use super::confirm::{ConfirmAction, ConfirmDialogState, ConfirmResult};
use super::event_dialog::{self, EventDialogResult, EventDialogState};
use super::gantt_view;
use super::list_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    List,
    Gantt,
}

pub struct SchedulerApp {
    context: ScheduleContext,
    metrics: GridMetrics,
    active_tab: Tab,
    selected_event: Option<EventId>,
    event_dialog: Option<EventDialogState>,
    confirm_dialog: ConfirmDialogState,
}

impl SchedulerApp {
    pub fn new() -> Self {
        Self {
            context: ScheduleContext::today(),
            metrics: GridMetrics::default(),
            active_tab: Tab::List,
            selected_event: None,
            event_dialog: None,
            confirm_dialog: ConfirmDialogState::new(),
        }
    }
}

impl Default for SchedulerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, Tab::List, "List View");
                ui.selectable_value(&mut self.active_tab, Tab::Gantt, "Gantt Chart");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            Tab::List => self.show_list_tab(ui),
            Tab::Gantt => self.show_gantt_tab(ui),
        });

        self.handle_event_dialog(ctx);
        self.handle_confirm_dialog(ctx);
    }
}

impl SchedulerApp {
    fn show_list_tab(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Event").clicked() {
                self.event_dialog = Some(EventDialogState::new_event());
            }
            if ui.button("Edit Event").clicked() {
                if let Some(event) = self.selected_event.and_then(|id| self.context.event(id)) {
                    self.event_dialog = Some(EventDialogState::edit_event(event));
                }
            }
            if ui.button("Delete Event").clicked() {
                if let Some(row) = self
                    .selected_event
                    .and_then(|id| self.context.rows().iter().find(|r| r.id == id))
                {
                    self.confirm_dialog.request(ConfirmAction::DeleteEvent {
                        event_id: row.id,
                        event_name: row.name.clone(),
                    });
                }
            }
        });
        ui.separator();
        list_view::show_event_table(ui, self.context.rows(), &mut self.selected_event);
    }

    fn show_gantt_tab(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀ Previous Week").clicked() {
                self.context.prev_week();
            }
            ui.label(self.context.week().range_label());
            if ui.button("Next Week ▶").clicked() {
                self.context.next_week();
            }
        });
        ui.separator();
        gantt_view::show_gantt_chart(ui, &mut self.context, &self.metrics);
    }

    fn handle_event_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut state) = self.event_dialog.take() else {
            return;
        };

        match event_dialog::render_event_dialog(ctx, &mut state) {
            EventDialogResult::Open => self.event_dialog = Some(state),
            EventDialogResult::Cancelled => {}
            EventDialogResult::Save => {
                let outcome = match state.editing {
                    Some(id) => self.context.edit_event(id, state.to_patch()).map(|_| id),
                    None => self.context.add_event(state.to_draft()),
                };
                if let Err(err) = outcome {
                    log::warn!("event form rejected: {err}");
                    // Keep the form open with the error banner.
                    state.error_message = Some(err.to_string());
                    self.event_dialog = Some(state);
                }
            }
        }
    }

    fn handle_confirm_dialog(&mut self, ctx: &egui::Context) {
        if self.confirm_dialog.render(ctx) != ConfirmResult::Confirmed {
            return;
        }
        if let Some(ConfirmAction::DeleteEvent {
            event_id,
            event_name,
        }) = self.confirm_dialog.take_action()
        {
            match self.context.remove_event(event_id) {
                Ok(()) => {
                    if self.selected_event == Some(event_id) {
                        self.selected_event = None;
                    }
                }
                Err(err) => log::error!("failed to delete '{event_name}': {err}"),
            }
        }
    }
}
