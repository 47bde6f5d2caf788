//! Settings tab: language, theme, save

use eframe::egui;

use funkin_launcher::i18n::Language;

use crate::app::{LauncherApp, StatusKind};

pub fn render_settings(app: &mut LauncherApp, ui: &mut egui::Ui) {
    let strings = app.strings();

    ui.add_space(20.0);
    ui.label(strings.lang_label);
    let mut lang = app.config.lang;
    egui::ComboBox::from_id_salt("language_select")
        .selected_text(lang.selector_label())
        .show_ui(ui, |ui| {
            for candidate in Language::ALL {
                ui.selectable_value(&mut lang, candidate, candidate.selector_label());
            }
        });
    if lang != app.config.lang {
        app.set_language(lang);
    }

    ui.add_space(20.0);
    ui.label(strings.theme_label);
    let theme_label = if app.config.dark {
        strings.dark_mode
    } else {
        strings.light_mode
    };
    if ui.button(theme_label).clicked() {
        app.toggle_theme();
    }

    ui.add_space(30.0);
    let save = egui::Button::new(
        egui::RichText::new(strings.save_btn).color(egui::Color32::WHITE),
    )
    .fill(egui::Color32::from_rgb(33, 150, 243));
    if ui.add(save).clicked() {
        app.save_settings();
    }

    if let Some(status) = &app.status {
        ui.add_space(10.0);
        let color = match status.kind {
            StatusKind::Info => egui::Color32::LIGHT_GREEN,
            StatusKind::Error => egui::Color32::RED,
        };
        ui.colored_label(color, &status.text);
    }
}
