//! Output rendering (generated accessor sources, resolution report)

pub mod flags;
pub mod report;

pub use flags::render_packages;
pub use report::write_report;
