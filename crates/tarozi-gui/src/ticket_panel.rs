//! Ticket entry form and table

use eframe::egui::{self, text::LayoutJob, Color32, RichText, TextFormat, Ui};
use tarozi_app::export::FilePrinter;
use tarozi_app::{AlarmDevice, FormField, ReloadFacility, Session, SubmitOutcome, TableView};
use tarozi_domain::service::HighlightedText;
use tarozi_domain::Column;
use tracing::warn;

const HIGHLIGHT_BG: Color32 = Color32::from_rgb(255, 214, 102);

/// Form, action bar and ticket table
pub struct TicketPanel {
    /// Search box text
    search_text: String,
    /// Field to focus on the next frame
    focus: Option<FormField>,
    /// Field that failed validation
    invalid_field: Option<FormField>,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl TicketPanel {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            focus: None,
            invalid_field: None,
            status_message: None,
        }
    }

    /// Render the panel UI
    pub fn ui(&mut self, ui: &mut Ui, session: &mut Session, alarm: &mut dyn AlarmDevice) {
        if let Some(field) = session.take_focus_request() {
            self.focus = Some(field);
        }

        ui.columns(2, |columns| {
            self.render_form(&mut columns[0], session);
            self.render_actions(&mut columns[1], session, &mut *alarm);
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Search:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_text)
                    .hint_text("plate, check, weight, date...")
                    .desired_width(260.0),
            );
            if response.changed() {
                session.set_search(self.search_text.clone());
            }
        });

        ui.add_space(6.0);
        let view = session.view();
        if let Some(display_row) = self.render_table(ui, &view) {
            session.select_row(display_row);
        }
    }

    fn render_form(&mut self, ui: &mut Ui, session: &mut Session) {
        let label = session.selection().submit_label();
        ui.label(RichText::new(if label == "Save" { "Edit ticket" } else { "New ticket" }).strong());
        ui.add_space(5.0);

        let mut weights_changed = false;

        egui::Grid::new("ticket_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for field in FormField::ALL {
                    let invalid = self.invalid_field == Some(field);
                    let text = RichText::new(format!("{}:", field.label()));
                    ui.label(if invalid { text.color(Color32::LIGHT_RED) } else { text });

                    let hint = match field {
                        FormField::Date => "YYYY-MM-DD",
                        FormField::NetWeight => "auto",
                        FormField::CheckNumber | FormField::Summa30 | FormField::Summa40 | FormField::Price => "optional",
                        _ => "required",
                    };
                    let response = ui.add(
                        egui::TextEdit::singleline(session.form_mut().get_mut(field))
                            .hint_text(hint)
                            .desired_width(200.0),
                    );
                    if self.focus == Some(field) {
                        response.request_focus();
                        self.focus = None;
                    }
                    if response.changed() {
                        if invalid {
                            self.invalid_field = None;
                        }
                        if matches!(field, FormField::GrossWeight | FormField::TareWeight) {
                            weights_changed = true;
                        }
                    }
                    ui.end_row();
                }
            });

        if weights_changed {
            session.form_mut().on_weight_input();
        }
    }

    fn render_actions(&mut self, ui: &mut Ui, session: &mut Session, alarm: &mut dyn AlarmDevice) {
        let view = session.view();
        let has_selection = session.selection().selected_index().is_some();

        ui.vertical(|ui| {
            if ui.button(view.submit_label).clicked() {
                match session.submit(&mut *alarm) {
                    Ok(outcome) => {
                        self.invalid_field = None;
                        let message = match outcome {
                            SubmitOutcome::Added => "Ticket added".to_string(),
                            SubmitOutcome::Updated(_) => "Ticket saved".to_string(),
                            SubmitOutcome::Skipped(_) => "Ticket no longer exists".to_string(),
                        };
                        self.status_message = Some((message, false));
                    }
                    Err(e) => {
                        self.invalid_field = Some(FormField::from_validation(&e));
                        self.status_message = Some((e.to_string(), true));
                    }
                }
            }

            ui.horizontal(|ui| {
                if ui.add_enabled(has_selection, egui::Button::new("Edit")).clicked() {
                    session.edit();
                }
                if ui.add_enabled(has_selection, egui::Button::new("Delete")).clicked() {
                    if let Some(removed) = session.delete() {
                        self.status_message = Some((format!("Deleted {}", removed.plate_number), false));
                    }
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Print").clicked() {
                    self.print(session);
                }
                if ui.button("Reload").clicked() {
                    session.reload(&mut *self, &mut *alarm);
                }
                if ui.button(view.relay_label).clicked() {
                    session.toggle_relay(&mut *alarm);
                }
            });

            ui.add_space(8.0);
            ui.label(format!("{} of {} tickets", view.shown(), view.total));

            if let Some((ref message, is_error)) = self.status_message {
                let color = if is_error { Color32::LIGHT_RED } else { Color32::LIGHT_GREEN };
                ui.label(RichText::new(message).color(color));
            }
        });
    }

    fn print(&mut self, session: &Session) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel", &["xlsx"])
            .add_filter("CSV", &["csv"])
            .set_file_name("tickets.xlsx")
            .save_file()
        else {
            return;
        };

        match session.print(&mut FilePrinter::new(&path)) {
            Ok(()) => {
                self.status_message = Some((format!("Saved {}", path.display()), false));
            }
            Err(e) => {
                warn!(path = %path.display(), "print failed: {}", e);
                self.status_message = Some((format!("Print failed: {}", e), true));
            }
        }
    }

    /// Returns the display row that was clicked
    fn render_table(&self, ui: &mut Ui, view: &TableView) -> Option<usize> {
        if view.rows.is_empty() {
            let text = if view.total == 0 { "No tickets yet" } else { "No tickets match the search" };
            ui.label(RichText::new(text).italics().color(Color32::GRAY));
            return None;
        }

        let mut clicked = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("ticket_table")
                .num_columns(Column::ALL.len() + 1)
                .spacing([14.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("");
                    for header in view.headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for (display_row, row) in view.rows.iter().enumerate() {
                        ui.label(if row.selected { "▶" } else { "" });
                        for cell in &row.cells {
                            let job = highlighted_job(ui, cell, row.selected);
                            let response = ui.add(egui::Label::new(job).sense(egui::Sense::click()));
                            if response.clicked() {
                                clicked = Some(display_row);
                            }
                        }
                        ui.end_row();
                    }
                });
        });

        clicked
    }
}

impl Default for TicketPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadFacility for TicketPanel {
    fn reload(&mut self) {
        self.search_text.clear();
        self.focus = None;
        self.invalid_field = None;
        self.status_message = Some(("Reloaded".to_string(), false));
    }
}

fn highlighted_job(ui: &Ui, cell: &HighlightedText, selected: bool) -> LayoutJob {
    let base = TextFormat {
        font_id: egui::TextStyle::Body.resolve(ui.style()),
        color: if selected {
            ui.visuals().strong_text_color()
        } else {
            ui.visuals().text_color()
        },
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    for (segment, highlighted) in cell.segments() {
        let mut format = base.clone();
        if highlighted {
            format.background = HIGHLIGHT_BG;
            format.color = Color32::BLACK;
        }
        job.append(segment, 0.0, format);
    }
    job
}
