use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save figure…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let curves: usize = state.figure.panels.iter().map(|p| p.curves.len()).sum();
        ui.label(format!(
            "{} panel(s), {curves} curve(s)",
            state.figure.panels.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Save figure")
        .set_file_name("test_plots.pdf")
        .add_filter("PDF", &["pdf"])
        .add_filter("SVG", &["svg"])
        .save_file();

    if let Some(path) = file {
        state.save_figure(&path);
    }
}
