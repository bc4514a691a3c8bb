use anyhow::{Context, Result};

use spin_entropy_plot::config::ReportConfig;
use spin_entropy_plot::figure::FigureSpec;
use spin_entropy_plot::report;

fn main() -> Result<()> {
    env_logger::init();

    let config = ReportConfig::default();
    let spec = FigureSpec::four_panel(&config.output);

    report::run(&config, &spec).with_context(|| {
        format!(
            "rendering entropy report from {}",
            config.data_dir.display()
        )
    })?;

    Ok(())
}
