//! Builder methods of [`NavBar`] and the desktop dropdown popups.

use egui::{
    Area, Button, Color32, Context, CornerRadius, Frame, Margin, Order, Rect, RichText, Stroke,
};

use crate::NavBar;
use crate::menu::items::{DropdownKey, DropdownMenu, NavEntry, NavLink};
use crate::menu::registry::Region;

impl NavBar {
    /// Set the background color of the bar
    ///
    /// # Arguments
    /// * `color` - The bar background as a Color32
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use egui::Color32;
    /// let nav = egui_navbar::NavBar::new("nav")
    ///     .with_background_color(Color32::from_rgb(250, 250, 250));
    /// assert_eq!(nav.style().background_color, Color32::from_rgb(250, 250, 250));
    /// ```
    pub fn with_background_color(mut self, color: Color32) -> Self {
        self.style.background_color = color;
        self
    }

    /// Set the color of link and trigger text
    ///
    /// # Arguments
    /// * `color` - The text color as a Color32
    pub fn with_text_color(mut self, color: Color32) -> Self {
        self.style.text_color = color;
        self
    }

    /// Set the highlight drawn behind hovered links and triggers
    ///
    /// # Arguments
    /// * `color` - The hover color as a Color32
    pub fn with_hover_color(mut self, color: Color32) -> Self {
        self.style.hover_color = color;
        self
    }

    /// Set the font size of every label
    ///
    /// # Arguments
    /// * `size` - The font size in points
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.style.text_size = size;
        self
    }

    /// Set the height of the bar in points
    pub fn with_bar_height(mut self, height: f32) -> Self {
        self.style.bar_height = height;
        self
    }

    /// Set the width of the mobile panel in points
    pub fn with_panel_width(mut self, width: f32) -> Self {
        self.style.panel_width = width;
        self
    }

    /// Replace every color and size at once
    ///
    /// # Arguments
    /// * `style` - The complete style
    ///
    /// # Examples
    ///
    /// ```rust
    /// use egui_navbar::{NavBar, NavStyle};
    ///
    /// let style = NavStyle {
    ///     bar_height: 56.0,
    ///     ..Default::default()
    /// };
    /// let nav = NavBar::new("nav").with_style(style);
    /// assert_eq!(nav.style().bar_height, 56.0);
    /// ```
    pub fn with_style(mut self, style: crate::NavStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the brand link shown at the left of the bar
    ///
    /// # Arguments
    /// * `label` - The brand text
    /// * `href` - Destination handed to the selection callback
    pub fn with_brand(mut self, label: &str, href: &str) -> Self {
        self.brand = NavLink::new(label, href);
        self
    }

    /// Set the highlighted call-to-action link at the right of the bar
    pub fn with_call_to_action(mut self, label: &str, href: &str) -> Self {
        self.call_to_action = Some(NavLink::new(label, href));
        self
    }

    /// Set the callback invoked with the href of any selected link or
    /// dropdown entry
    ///
    /// # Examples
    ///
    /// ```rust
    /// let nav = egui_navbar::NavBar::tour_site("nav")
    ///     .on_select(Box::new(|href: &str| println!("navigate to {href}")));
    /// ```
    pub fn on_select(mut self, callback: Box<dyn Fn(&str) + Send + Sync>) -> Self {
        self.on_select = Some(callback);
        self
    }

    /// Append a plain link, shown on both the bar and the mobile panel
    pub fn add_link(mut self, label: &str, href: &str) -> Self {
        self.entries.push(NavEntry::Link(NavLink::new(label, href)));
        self
    }

    /// Append a dropdown, shown as a hover popup on the bar and as an
    /// expandable submenu on the mobile panel
    ///
    /// A dropdown already present for the same key is replaced in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use egui_navbar::{DropdownKey, DropdownMenu, NavBar};
    ///
    /// let nav = NavBar::new("nav").add_dropdown(
    ///     DropdownMenu::new(DropdownKey::TourPackage, "Tours")
    ///         .add_item("Taj Mahal", "/tours/taj-mahal"),
    /// );
    /// assert!(!nav.is_open(DropdownKey::TourPackage));
    /// ```
    pub fn add_dropdown(mut self, menu: DropdownMenu) -> Self {
        let existing = self.entries.iter_mut().find(
            |entry| matches!(entry, NavEntry::Dropdown(current) if current.key == menu.key),
        );
        match existing {
            Some(slot) => {
                log::warn!("replacing dropdown {} on {:?}", menu.key, self.id);
                *slot = NavEntry::Dropdown(menu);
            }
            None => self.entries.push(NavEntry::Dropdown(menu)),
        }
        self
    }

    /// Turn hover enter/leave edges on the desktop copies into open/close.
    ///
    /// A desktop copy covers its trigger of this pass plus the popup drawn in
    /// the previous pass, if the dropdown is still open.
    pub(crate) fn apply_hover_edges(&mut self, ctx: &Context) {
        let hover_pos = ctx.pointer_hover_pos();

        for key in DropdownKey::ALL {
            let Some(trigger) = self.trigger_rects[key] else {
                continue;
            };
            let mut region = Region::from_rect(trigger);
            if let Some(popup) = self.popup_rects[key].filter(|_| self.controller.is_open(key)) {
                region = region.with_rect(popup);
            }

            // The panel sits above the bar, so the bar cannot be hovered through it.
            let hovered = hover_pos.is_some_and(|pos| {
                region.contains(pos) && !self.controller.regions().panel_contains(pos)
            });
            if hovered != self.desktop_hovered[key] {
                self.desktop_hovered[key] = hovered;
                if hovered {
                    self.controller.open_dropdown(key);
                } else {
                    self.controller.close_dropdown(key);
                }
                ctx.request_repaint();
            }
        }
    }

    /// Render the desktop popups of open dropdowns and register the desktop
    /// regions.
    pub(crate) fn render_open_dropdowns(&mut self, ctx: &Context) {
        let mut selected = None;

        for key in DropdownKey::ALL {
            let Some(trigger) = self.trigger_rects[key] else {
                continue;
            };
            let Some(menu) = self.dropdown(key) else {
                continue;
            };

            let mut region = Region::from_rect(trigger);
            let mut popup_rect = None;
            if self.controller.is_open(key) && !menu.items.is_empty() {
                let (popup, clicked) = self.render_dropdown_popup(ctx, menu, trigger);
                region = region.with_rect(popup);
                popup_rect = Some(popup);
                if clicked.is_some() {
                    selected = clicked;
                }
            }

            self.popup_rects[key] = popup_rect;
            let handle = self.desktop_handle(key);
            self.controller.register_region(key, handle, region);
        }

        if let Some(href) = selected.filter(|_| self.input_live) {
            self.select(&href);
        }
    }

    /// Draw the popup for `menu` under its trigger. Returns the popup
    /// rectangle and the href of a clicked entry.
    fn render_dropdown_popup(
        &self,
        ctx: &Context,
        menu: &DropdownMenu,
        trigger: Rect,
    ) -> (Rect, Option<String>) {
        let style = &self.style;
        let mut clicked = None;

        let response = Area::new(self.id.with(("dropdown_popup", menu.key.as_str())))
            .fixed_pos(trigger.left_bottom())
            .order(Order::Foreground)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(style.dropdown_background_color)
                    .stroke(Stroke::new(1.0, style.dropdown_border_color))
                    .corner_radius(CornerRadius::same(4))
                    .inner_margin(Margin::same(4))
                    .show(ui, |ui| {
                        ui.set_min_width(style.dropdown_min_width);
                        for item in &menu.items {
                            let text = RichText::new(item.label.as_str())
                                .size(style.text_size)
                                .color(style.text_color);
                            if ui.add(Button::new(text).frame(false)).clicked() {
                                clicked = Some(item.href.clone());
                            }
                        }
                    });
            })
            .response;

        (response.rect, clicked)
    }

    pub(crate) fn dropdown(&self, key: DropdownKey) -> Option<&DropdownMenu> {
        self.entries.iter().find_map(|entry| match entry {
            NavEntry::Dropdown(menu) if menu.key == key => Some(menu),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_dropdown_replaces_same_key() {
        let nav = NavBar::new("nav")
            .add_link("Home", "/")
            .add_dropdown(DropdownMenu::new(DropdownKey::TourPackage, "Old"))
            .add_dropdown(DropdownMenu::new(DropdownKey::TourPackage, "New"));

        assert_eq!(nav.entries.len(), 2);
        assert_eq!(
            nav.dropdown(DropdownKey::TourPackage).map(|menu| menu.label.as_str()),
            Some("New")
        );
        assert!(nav.dropdown(DropdownKey::TourByDuration).is_none());
    }

    #[test]
    fn with_style_replaces_every_field() {
        let style = crate::NavStyle {
            panel_width: 360.0,
            text_color: Color32::BLACK,
            ..Default::default()
        };
        let nav = NavBar::new("nav").with_style(style.clone());
        assert_eq!(nav.style(), &style);
    }

    #[test]
    fn builder_updates_style() {
        let nav = NavBar::new("nav")
            .with_text_size(18.0)
            .with_bar_height(60.0)
            .with_panel_width(320.0);
        assert_eq!(nav.style().text_size, 18.0);
        assert_eq!(nav.style().bar_height, 60.0);
        assert_eq!(nav.style().panel_width, 320.0);
    }
}
