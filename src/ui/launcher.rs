//! Launcher tab: engine/version selection, mod list, play button

use eframe::egui;

use funkin_launcher::engines::Engine;

use crate::app::{LauncherApp, StatusKind};

pub fn render_launcher(app: &mut LauncherApp, ui: &mut egui::Ui) {
    let strings = app.strings();

    // ------------------------------------------------------------------
    // Engine / version selectors
    // ------------------------------------------------------------------
    ui.add_space(5.0);
    ui.horizontal(|ui| {
        ui.label(strings.engine_label);

        let mut engine = app.engine;
        egui::ComboBox::from_id_salt("engine_select")
            .selected_text(engine.display_name())
            .show_ui(ui, |ui| {
                for candidate in Engine::ALL {
                    ui.selectable_value(&mut engine, candidate, candidate.display_name());
                }
            });
        if engine != app.engine {
            app.set_engine(engine);
        }

        let selected_label = match app.current_version() {
            Some(version) => version.label(app.config.lang).to_string(),
            None => strings.no_version.to_string(),
        };
        let mut picked = None;
        egui::ComboBox::from_id_salt("version_select")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (i, version) in app.versions.iter().enumerate() {
                    let selected = app.selected_version == Some(i);
                    if ui
                        .selectable_label(selected, version.label(app.config.lang))
                        .clicked()
                    {
                        picked = Some(i);
                    }
                }
            });
        if let Some(i) = picked {
            app.select_version(i);
        }
    });

    // ------------------------------------------------------------------
    // Mod list
    // ------------------------------------------------------------------
    ui.add_space(5.0);
    let list_height = (ui.available_height() - 120.0).max(100.0);
    let mut clicked = None;
    egui::ScrollArea::vertical()
        .max_height(list_height)
        .show(ui, |ui| {
            for (i, name) in app.mods.iter().enumerate() {
                let selected = app.selected_mod.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name).clicked() {
                    clicked = Some(i);
                }
            }
        });
    if let Some(i) = clicked {
        app.selected_mod = Some(app.mods[i].clone());
    }

    // ------------------------------------------------------------------
    // Mod buttons + play
    // ------------------------------------------------------------------
    ui.add_space(5.0);
    ui.horizontal(|ui| {
        let add = egui::Button::new(
            egui::RichText::new(strings.add_mod).color(egui::Color32::WHITE),
        )
        .fill(egui::Color32::from_rgb(33, 150, 243));
        if ui.add(add).clicked() {
            if let Some(src) = rfd::FileDialog::new().pick_folder() {
                app.add_mod_from(&src);
            }
        }

        let del = egui::Button::new(
            egui::RichText::new(strings.del_mod).color(egui::Color32::WHITE),
        )
        .fill(egui::Color32::from_rgb(244, 67, 54));
        if ui.add_enabled(app.selected_mod.is_some(), del).clicked() {
            app.request_delete_selected();
        }
    });

    ui.add_space(5.0);
    let can_play = app.selected_mod.is_some() && app.selected_version.is_some();
    let play = egui::Button::new(
        egui::RichText::new(strings.play)
            .size(18.0)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(egui::Color32::from_rgb(76, 175, 80));
    ui.add_enabled_ui(can_play, |ui| {
        if ui.add_sized([ui.available_width(), 40.0], play).clicked() {
            app.play();
        }
    });

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => egui::Color32::LIGHT_GREEN,
            StatusKind::Error => egui::Color32::RED,
        };
        ui.colored_label(color, &status.text);
    }
}
