#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dataset;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ViewportConfig};
pub use dataset::parse_dataset;
pub use layout::{DrawPrimitive, Layout, LayoutError, compute_layout};
pub use render::render_svg;
pub use theme::Theme;
