//! The [`NavBar`] widget and its style.

pub mod render_bar;

use std::hash::Hash;

use egui::{Color32, Id, Rect};
use enum_map::EnumMap;

use crate::error::Result;
use crate::menu::controller::MenuController;
use crate::menu::items::{DropdownKey, DropdownMenu, NavEntry, NavLink, Surface};
use crate::menu::observer::PointerHub;
use crate::menu::registry::RegionHandle;

/// Colors and sizes of the navigation bar and its panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NavStyle {
    /// Fill of the bar.
    pub background_color: Color32,
    /// Color of link labels on both surfaces.
    pub text_color: Color32,
    /// Fill behind a hovered or expanded item.
    pub hover_color: Color32,
    /// Color of the brand label.
    pub brand_color: Color32,
    /// Fill of the call-to-action button.
    pub cta_color: Color32,
    /// Label color of the call-to-action button.
    pub cta_text_color: Color32,
    /// Fill of the desktop popups.
    pub dropdown_background_color: Color32,
    /// Outline of the desktop popups.
    pub dropdown_border_color: Color32,
    /// Fill of the mobile panel.
    pub panel_background_color: Color32,
    /// Font size of every label, in points.
    pub text_size: f32,
    /// Height of the bar, in points.
    pub bar_height: f32,
    /// Height of one popup or panel row, in points.
    pub item_height: f32,
    /// Minimum width of a desktop popup, in points.
    pub dropdown_min_width: f32,
    /// Width of the mobile panel, in points.
    pub panel_width: f32,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(24, 24, 27),
            text_color: Color32::from_rgb(220, 220, 220),
            hover_color: Color32::from_rgb(50, 50, 55),
            brand_color: Color32::WHITE,
            cta_color: Color32::from_rgb(234, 88, 12),
            cta_text_color: Color32::WHITE,
            dropdown_background_color: Color32::from_rgb(32, 32, 36),
            dropdown_border_color: Color32::from_rgb(70, 70, 75),
            panel_background_color: Color32::from_rgb(28, 28, 32),
            text_size: 14.0,
            bar_height: 48.0,
            item_height: 32.0,
            dropdown_min_width: 200.0,
            panel_width: 280.0,
        }
    }
}

/// A site navigation bar: brand, links, two dropdowns, a call-to-action and
/// a hamburger that opens a mobile panel mirroring the links.
///
/// The dropdown flags are shared by the desktop popups and the mobile
/// submenus; see [`MenuController`] for the interaction rules.
pub struct NavBar {
    pub(crate) id: Id,
    pub(crate) controller: MenuController,
    pub(crate) brand: NavLink,
    pub(crate) entries: Vec<NavEntry>,
    pub(crate) call_to_action: Option<NavLink>,
    pub(crate) style: NavStyle,
    pub(crate) on_select: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Desktop hover state at the end of the previous pass, for enter/leave edges.
    pub(crate) desktop_hovered: EnumMap<DropdownKey, bool>,
    /// Desktop trigger rectangles laid out in the current pass.
    pub(crate) trigger_rects: EnumMap<DropdownKey, Option<Rect>>,
    /// Desktop popup rectangles drawn in the previous pass.
    pub(crate) popup_rects: EnumMap<DropdownKey, Option<Rect>>,
    /// Frame whose input has already been applied.
    pub(crate) last_input_frame: Option<u64>,
    /// False on repeated passes of one frame, which replay the same input.
    pub(crate) input_live: bool,
}

impl NavBar {
    /// Create an empty navigation bar with its own outside-click observer.
    pub fn new(id_source: impl Hash) -> Self {
        let id = Id::new(id_source);
        Self {
            id,
            controller: MenuController::new(id),
            brand: NavLink::new("Logo", "/"),
            entries: Vec::new(),
            call_to_action: None,
            style: NavStyle::default(),
            on_select: None,
            desktop_hovered: EnumMap::default(),
            trigger_rects: EnumMap::default(),
            popup_rects: EnumMap::default(),
            last_input_frame: None,
            input_live: false,
        }
    }

    /// The stock navigation of the tour site: Home, both tour dropdowns,
    /// Gallery, Reviews, About, Contact and a "Plan My Trip" call-to-action.
    pub fn tour_site(id_source: impl Hash) -> Self {
        Self::new(id_source)
            .add_link("Home", "/")
            .add_dropdown(
                DropdownMenu::new(DropdownKey::TourPackage, "Tour Package")
                    .add_item("Taj Mahal Tour Package", "/tours/taj-mahal")
                    .add_item("Golden Triangle Tour", "/tours/golden-triangle")
                    .add_item("Rajasthan Tour Package", "/tours/rajasthan"),
            )
            .add_dropdown(
                DropdownMenu::new(DropdownKey::TourByDuration, "Tour By Duration")
                    .add_item("1-2 Days Tour Package", "/tours/1-2-days")
                    .add_item("3-5 Days Tour Package", "/tours/3-5-days")
                    .add_item("6-10 Days Tour Package", "/tours/6-10-days"),
            )
            .add_link("Gallery", "/gallery")
            .add_link("Reviews", "/reviews")
            .add_link("About", "/about")
            .add_link("Contact", "/contact")
            .with_call_to_action("Plan My Trip", "/")
    }

    /// Move the outside-click observer into a shared `hub`.
    ///
    /// Fails if a navigation bar with the same id is already registered there.
    pub fn with_pointer_hub(mut self, hub: &PointerHub) -> Result<Self> {
        self.controller = MenuController::with_hub(self.id, hub)?;
        Ok(self)
    }

    /// The id every widget of the bar derives from.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Shared dropdown and panel state.
    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    /// Mutable access to the state, for driving the bar programmatically.
    pub fn controller_mut(&mut self) -> &mut MenuController {
        &mut self.controller
    }

    /// Whether the dropdown `key` is open.
    pub fn is_open(&self, key: DropdownKey) -> bool {
        self.controller.is_open(key)
    }

    /// `expanded` state of the triggers for `key`.
    pub fn expanded(&self, key: DropdownKey) -> bool {
        self.controller.expanded(key)
    }

    /// Whether the mobile panel is open.
    pub fn is_panel_open(&self) -> bool {
        self.controller.is_panel_open()
    }

    /// Current colors and sizes.
    pub fn style(&self) -> &NavStyle {
        &self.style
    }

    /// Region handle of the desktop copy of `key`.
    pub fn desktop_handle(&self, key: DropdownKey) -> RegionHandle {
        RegionHandle::new(self.id.with(("desktop", key.as_str())), Surface::Desktop)
    }

    /// Region handle of the mobile copy of `key`.
    pub fn mobile_handle(&self, key: DropdownKey) -> RegionHandle {
        RegionHandle::new(self.id.with(("mobile", key.as_str())), Surface::Mobile)
    }

    pub(crate) fn select(&self, href: &str) {
        log::debug!("navigation selected {href:?} on {:?}", self.id);
        if let Some(callback) = &self.on_select {
            callback(href);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_site_has_both_dropdowns_in_order() {
        let bar = NavBar::tour_site("nav");
        let keys: Vec<DropdownKey> = bar
            .entries
            .iter()
            .filter_map(|entry| match entry {
                NavEntry::Dropdown(menu) => Some(menu.key),
                NavEntry::Link(_) => None,
            })
            .collect();
        assert_eq!(keys, DropdownKey::ALL.to_vec());
        assert_eq!(bar.entries.len(), 7);
        assert!(bar.call_to_action.is_some());
    }

    #[test]
    fn surface_handles_differ_per_key_and_surface() {
        let bar = NavBar::new("nav");
        let a = DropdownKey::TourPackage;
        let b = DropdownKey::TourByDuration;
        assert_ne!(bar.desktop_handle(a), bar.mobile_handle(a));
        assert_ne!(bar.desktop_handle(a), bar.desktop_handle(b));
        assert_eq!(bar.mobile_handle(b).surface(), Surface::Mobile);
    }

    #[test]
    fn shared_hub_rejects_duplicate_navbar() {
        let hub = PointerHub::new();
        let _first = NavBar::new("nav").with_pointer_hub(&hub).unwrap();
        assert!(NavBar::new("nav").with_pointer_hub(&hub).is_err());
        assert!(NavBar::new("other").with_pointer_hub(&hub).is_ok());
    }
}
