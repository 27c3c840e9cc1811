//! TUI Widget components
//!
//! Modular widgets for the dashboard display.

pub mod footer;
pub mod header;
pub mod help;
pub mod podium;
pub mod profile;
pub mod ranked;
pub mod ratio_bar;
pub mod socials_modal;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use podium::render_podium;
pub use profile::render_profile;
pub use ranked::render_ranked;
pub use ratio_bar::{ratio_line, ratio_line_with_counts};
pub use socials_modal::render_socials_modal;
