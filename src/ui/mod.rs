//! UI components and rendering

mod launcher;
mod settings;

pub use launcher::render_launcher;
pub use settings::render_settings;

use eframe::egui;

use crate::app::{LauncherApp, Tab};

// ============================================================================
// eframe::App Implementation
// ============================================================================

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.config.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        render_delete_confirmation(self, ctx);

        let strings = self.strings();
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_tab, Tab::Launcher, strings.tab_launcher);
                ui.selectable_value(&mut self.current_tab, Tab::Settings, strings.tab_settings);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Launcher => render_launcher(self, ui),
            Tab::Settings => render_settings(self, ui),
        });
    }
}

/// Localized yes/no confirmation shown before a mod is deleted from both
/// mod directories.
fn render_delete_confirmation(app: &mut LauncherApp, ctx: &egui::Context) {
    let Some(name) = app.pending_delete.clone() else {
        return;
    };
    let strings = app.strings();

    egui::Window::new(strings.confirm_title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(strings.confirm_del);
            ui.label(egui::RichText::new(&name).strong());
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button(strings.confirm_yes).clicked() {
                    app.confirm_pending_delete();
                }
                if ui.button(strings.confirm_no).clicked() {
                    app.cancel_pending_delete();
                }
            });
        });
}
