//! Event form dialog, shared between Add and Edit.
//!
//! Plain string fields, parsed and validated on save. An unparseable or
//! zero duration is a form error shown in the banner, never a silent
//! cancel; pressing Cancel discards the whole form at once so there is no
//! partially-applied edit.

use egui::Color32;

use crate::models::event::{Event, EventDraft, EventId, EventPatch, StaffBreakdown, StaffRole};

/// State for the event form dialog.
pub struct EventDialogState {
    /// `Some` when editing an existing event, `None` when adding.
    pub editing: Option<EventId>,
    pub name: String,
    /// Duration as typed; parsed on save.
    pub duration: String,
    pub staff: Vec<(StaffRole, String)>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDialogResult {
    Open,
    Save,
    Cancelled,
}

impl EventDialogState {
    pub fn new_event() -> Self {
        Self {
            editing: None,
            name: String::new(),
            duration: String::new(),
            staff: StaffRole::ALL
                .iter()
                .map(|role| (*role, String::new()))
                .collect(),
            error_message: None,
        }
    }

    pub fn edit_event(event: &Event) -> Self {
        Self {
            editing: Some(event.id),
            name: event.name.clone(),
            duration: event.duration.to_string(),
            staff: StaffRole::ALL
                .iter()
                .map(|role| (*role, event.staff.get(*role).unwrap_or("").to_string()))
                .collect(),
            error_message: None,
        }
    }

    /// Parse the form into a creation draft. Validation happens in the
    /// store; a bad duration surfaces there as a typed error.
    pub fn to_draft(&self) -> EventDraft {
        let mut draft = EventDraft::new(self.name.clone(), self.parsed_duration());
        draft.staff = self.breakdown();
        draft
    }

    /// Parse the form into a patch for the event being edited.
    pub fn to_patch(&self) -> EventPatch {
        EventPatch {
            name: Some(self.name.clone()),
            duration: Some(self.parsed_duration()),
            staff: Some(self.breakdown()),
            start_time: None,
        }
    }

    fn breakdown(&self) -> StaffBreakdown {
        let mut staff = StaffBreakdown::new();
        for (role, count) in &self.staff {
            staff.set(*role, count.clone());
        }
        staff
    }

    fn parsed_duration(&self) -> f64 {
        // NaN fails validation with the rest of the non-positive values.
        self.duration.trim().parse().unwrap_or(f64::NAN)
    }
}

pub fn render_event_dialog(ctx: &egui::Context, state: &mut EventDialogState) -> EventDialogResult {
    let mut result = EventDialogResult::Open;
    let mut open = true;

    let title = if state.editing.is_some() {
        "Edit Event"
    } else {
        "Add Event"
    };

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(error) = &state.error_message {
                ui.colored_label(Color32::from_rgb(200, 60, 60), error);
                ui.add_space(5.0);
            }

            egui::Grid::new("event_form")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Event name:");
                    ui.text_edit_singleline(&mut state.name);
                    ui.end_row();

                    ui.label("Duration (hours):");
                    ui.text_edit_singleline(&mut state.duration);
                    ui.end_row();

                    for (role, count) in &mut state.staff {
                        ui.label(format!("{}:", role.label()));
                        ui.add(egui::TextEdit::singleline(count).desired_width(60.0));
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    result = EventDialogResult::Save;
                }
                if ui.button("Cancel").clicked() {
                    result = EventDialogResult::Cancelled;
                }
            });
        });

    if !open {
        result = EventDialogResult::Cancelled;
    }
    result
}
