use anyhow::{anyhow, Context};
use eframe::egui;

use spin_entropy_plot::app::EntropyViewerApp;
use spin_entropy_plot::config::ReportConfig;
use spin_entropy_plot::figure::FigureSpec;
use spin_entropy_plot::report;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ReportConfig::default();
    let spec = FigureSpec::ising_single();
    let figure = report::run(&config, &spec)
        .with_context(|| format!("loading entropy data from {}", config.data_dir.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Entropy Viewer",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(EntropyViewerApp::new(figure)))
        }),
    )
    .map_err(|e| anyhow!("viewer window failed: {e}"))
}
