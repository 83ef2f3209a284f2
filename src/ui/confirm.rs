//! Confirmation dialog for destructive actions.

use egui::{Context, RichText};

use crate::models::event::EventId;

/// Actions that require confirmation before executing.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteEvent {
        event_id: EventId,
        event_name: String,
    },
}

impl ConfirmAction {
    fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
        }
    }

    fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { event_name, .. } => {
                format!("Are you sure you want to delete \"{}\"?", event_name)
            }
        }
    }

    fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    Pending,
}

/// State for the confirmation dialog.
#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request confirmation for an action.
    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    /// Take the pending action after a `Confirmed` render result.
    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }

    /// Render the dialog. On `Confirmed` the action stays pending for
    /// [`take_action`](Self::take_action); on `Cancelled` it is dropped.
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.label(action.message());
                });

                ui.add_space(10.0);
                ui.separator();

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button = egui::Button::new(
                            RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(180, 60, 60));

                        if ui.add(confirm_button).clicked() {
                            result = ConfirmResult::Confirmed;
                        }

                        ui.add_space(10.0);

                        if ui.button("Cancel").clicked() {
                            result = ConfirmResult::Cancelled;
                        }
                    });
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Cancelled {
            self.pending_action = None;
        }

        result
    }
}
