//! The slide-in mobile panel.

pub mod render_panel;
