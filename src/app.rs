use eframe::egui;

use crate::figure::Figure;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EntropyViewerApp {
    pub state: ViewerState,
}

impl EntropyViewerApp {
    pub fn new(figure: Figure) -> Self {
        Self {
            state: ViewerState::new(figure),
        }
    }
}

impl eframe::App for EntropyViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: figure ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_grid(ui, &self.state.figure);
        });
    }
}
