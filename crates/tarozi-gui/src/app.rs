//! Main application structure

use eframe::egui::{self, Color32, RichText};
use tarozi_app::config::Config;
use tarozi_app::{AlarmDevice, LocalDate, Playback, Session, StartOutcome};

use crate::ticket_panel::TicketPanel;

/// Flashing on-screen alarm.
///
/// Starting is settled on the next frame, so every start goes through the
/// deferred path. A minimised window cannot show the alarm and rejects it.
#[derive(Debug, Default)]
pub struct VisualAlarm {
    pending: bool,
}

impl AlarmDevice for VisualAlarm {
    fn try_start(&mut self) -> StartOutcome {
        self.pending = true;
        StartOutcome::Deferred
    }

    fn stop(&mut self) {
        self.pending = false;
    }
}

impl VisualAlarm {
    /// Settle a pending start against the session
    fn settle(&mut self, session: &mut Session, visible: bool) {
        if !std::mem::take(&mut self.pending) {
            return;
        }
        if visible {
            session.confirm_alarm_started();
        } else {
            session.confirm_alarm_blocked();
        }
    }
}

/// Main application state
pub struct TaroziApp {
    session: Session,
    alarm: VisualAlarm,
    panel: TicketPanel,
}

impl TaroziApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        Self {
            session: Session::new(Box::new(LocalDate), config.alarm_on_start),
            alarm: VisualAlarm::default(),
            panel: TicketPanel::new(),
        }
    }

    fn render_alarm(&self, ui: &mut egui::Ui) {
        let alarm = self.session.alarm();
        if !alarm.is_active() {
            ui.label(RichText::new("● alarm off").color(Color32::GRAY));
            return;
        }
        match alarm.playback() {
            Playback::Playing => {
                let t = ui.input(|i| i.time);
                let color = if (t * 2.0) as i64 % 2 == 0 {
                    Color32::RED
                } else {
                    Color32::DARK_RED
                };
                ui.label(RichText::new("● ALARM").strong().color(color));
                ui.ctx()
                    .request_repaint_after(std::time::Duration::from_millis(250));
            }
            Playback::Starting => {
                ui.label(RichText::new("● starting").color(Color32::YELLOW));
            }
            Playback::Stopped => {
                ui.label(RichText::new("● armed").color(Color32::LIGHT_GREEN));
            }
        }
    }
}

impl eframe::App for TaroziApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let minimized = ctx.input(|i| i.viewport().minimized.unwrap_or(false));
        self.alarm.settle(&mut self.session, !minimized);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tarozi");
                ui.add_space(16.0);
                self.render_alarm(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.ui(ui, &mut self.session, &mut self.alarm);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_session(alarm: &mut VisualAlarm) -> Session {
        let mut session = Session::new(Box::new(LocalDate), false);
        session.toggle_relay(alarm);
        assert_eq!(session.alarm().playback(), Playback::Starting);
        session
    }

    #[test]
    fn test_visible_window_starts_alarm() {
        let mut alarm = VisualAlarm::default();
        let mut session = starting_session(&mut alarm);
        alarm.settle(&mut session, true);
        assert_eq!(session.alarm().playback(), Playback::Playing);
    }

    #[test]
    fn test_minimized_window_blocks_alarm_until_next_event() {
        let mut alarm = VisualAlarm::default();
        let mut session = starting_session(&mut alarm);
        alarm.settle(&mut session, false);
        assert_eq!(session.alarm().playback(), Playback::Stopped);
        assert!(session.alarm().is_active());

        // Nothing pending any more
        alarm.settle(&mut session, true);
        assert_eq!(session.alarm().playback(), Playback::Stopped);
    }
}
