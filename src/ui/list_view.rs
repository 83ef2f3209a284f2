//! Tabular event list, rendered from the table mirror's rows.
//!
//! The table is a read-only projection; selection is the only state it
//! feeds back. All mutations go through the buttons above it and from
//! there through the schedule context.

use egui_extras::{Column, TableBuilder};

use crate::models::event::EventId;
use crate::services::sync::EventRow;

pub fn show_event_table(ui: &mut egui::Ui, rows: &[EventRow], selected: &mut Option<EventId>) {
    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .column(Column::auto().at_least(180.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(110.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Event");
            });
            header.col(|ui| {
                ui.strong("Staff Breakdown");
            });
            header.col(|ui| {
                ui.strong("Event Duration");
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(22.0, |mut table_row| {
                    table_row.set_selected(*selected == Some(row.id));
                    table_row.col(|ui| {
                        ui.label(&row.name);
                    });
                    table_row.col(|ui| {
                        ui.label(&row.staff_summary);
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{}h", row.duration));
                    });
                    if table_row.response().clicked() {
                        *selected = Some(row.id);
                    }
                });
            }
        });
}
