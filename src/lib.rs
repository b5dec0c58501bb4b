//! Site navigation bar for egui.
//!
//! A horizontal bar with two dropdowns that open on hover or click, and a
//! slide-in mobile panel mirroring the same links with expandable submenus.
//! Both surfaces share one [`MenuController`]: a dropdown opened on the bar is
//! expanded in the panel and the other way round.
//!
//! Open dropdowns close when the pointer is pressed outside every region the
//! dropdown currently occupies, except for presses inside the open panel.
//!
//! ```rust
//! use egui_navbar::{DropdownKey, NavBar};
//!
//! let mut nav = NavBar::tour_site("site_nav");
//! nav.controller_mut().toggle_dropdown(DropdownKey::TourPackage);
//! assert!(nav.expanded(DropdownKey::TourPackage));
//! assert!(nav.controller().is_observer_attached());
//! ```

pub mod error;
pub mod menu;
pub mod navbar;
pub mod panel;

pub use error::{NavError, Result};
pub use menu::controller::MenuController;
pub use menu::items::{DropdownKey, DropdownMenu, NavEntry, NavLink, Surface};
pub use menu::observer::{ObserverClaim, PointerHub};
pub use menu::registry::{Region, RegionHandle, RegionRegistry};
pub use navbar::{NavBar, NavStyle};
