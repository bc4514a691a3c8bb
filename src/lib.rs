//! spin-entropy-plot: entropy comparison charts for spin-model simulations
//!
//! The simulation leaves result files such as `2D_ising_clean.txt` next to
//! its binary. This crate moves them into `plot/data/`, loads the entropy
//! curves onto one shared temperature axis and draws clean vs. disorder
//! comparisons, either to an image file or to a window.
//!
//! ```rust,ignore
//! use spin_entropy_plot::config::ReportConfig;
//! use spin_entropy_plot::figure::FigureSpec;
//!
//! let config = ReportConfig::default();
//! let spec = FigureSpec::four_panel(&config.output);
//! spin_entropy_plot::report::run(&config, &spec)?;
//! ```
//!
//! # Modules
//!
//! - [`data`]: result files, relocation, series table, entropy integration
//! - [`figure`]: panel / figure description and presets
//! - [`render`]: static output through `plotters`
//! - [`app`], [`state`], [`ui`]: the interactive viewer
//! - [`report`]: the relocate → load → render pipeline

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod render;
pub mod report;
pub mod state;
pub mod ui;

pub use error::{ReportError, Result};
