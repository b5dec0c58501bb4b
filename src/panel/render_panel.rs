//! Drawing and input handling of the mobile panel.

use egui::{
    Align, Area, Button, Context, Frame, Layout, Margin, Order, Pos2, Rect, RichText, Ui,
    WidgetInfo, WidgetType,
};

use crate::NavBar;
use crate::menu::items::{DropdownKey, NavEntry};
use crate::menu::menu_bar::DROPDOWN_MARKER;
use crate::menu::registry::Region;

/// What the user did inside the panel during one frame.
#[derive(Default)]
struct PanelInput {
    close: bool,
    toggled: Vec<DropdownKey>,
    selected: Option<String>,
    submenus: Vec<(DropdownKey, Rect)>,
}

impl NavBar {
    /// Render the slide-in panel anchored to the right edge of the window.
    ///
    /// The panel and each mobile submenu are mounted as regions while drawn.
    /// Pressing the close button unmounts them immediately.
    pub(crate) fn render_mobile_panel(&mut self, ctx: &Context) {
        let content_rect = ctx.content_rect();
        let width = self.style.panel_width.min(content_rect.width());
        let position = Pos2::new(content_rect.max.x - width, content_rect.min.y);
        let mut input = PanelInput::default();

        let area = Area::new(self.id.with("mobile_panel"))
            .fixed_pos(position)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(self.style.panel_background_color)
                    .inner_margin(Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_width((width - 32.0).max(0.0));
                        ui.set_min_height((content_rect.height() - 32.0).max(0.0));
                        self.panel_contents(ui, &mut input);
                    });
            });

        if input.close && self.input_live {
            self.controller.toggle_mobile_panel();
            return;
        }

        self.controller
            .mount_panel(Region::from_rect(area.response.rect));
        for (key, rect) in input.submenus {
            let handle = self.mobile_handle(key);
            self.controller
                .register_region(key, handle, Region::from_rect(rect));
        }
        if !self.input_live {
            return;
        }
        for key in input.toggled {
            self.controller.toggle_dropdown(key);
        }
        if let Some(href) = input.selected {
            self.select(&href);
        }
    }

    fn panel_contents(&self, ui: &mut Ui, input: &mut PanelInput) {
        let style = &self.style;
        let text = |label: &str| {
            RichText::new(label)
                .size(style.text_size)
                .color(style.text_color)
        };

        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            let close = ui
                .add(Button::new(text("✕")).frame(false))
                .on_hover_text("Close menu");
            if close.clicked() {
                input.close = true;
            }
        });
        ui.add_space(8.0);

        for entry in &self.entries {
            match entry {
                NavEntry::Link(link) => {
                    if ui.add(Button::new(text(link.label.as_str())).frame(false)).clicked() {
                        input.selected = Some(link.href.clone());
                    }
                }
                NavEntry::Dropdown(menu) => {
                    let expanded = self.controller.expanded(menu.key);
                    let submenu = ui.vertical(|ui| {
                        let label = format!("{}{DROPDOWN_MARKER}", menu.label);
                        let toggle = ui.add(Button::new(text(label.as_str())).frame(false));
                        toggle.widget_info(|| {
                            WidgetInfo::selected(WidgetType::Button, true, expanded, &menu.label)
                        });
                        if toggle.clicked() {
                            input.toggled.push(menu.key);
                        }

                        if expanded {
                            ui.indent(("mobile_submenu", menu.key.as_str()), |ui| {
                                for item in &menu.items {
                                    if ui.add(Button::new(text(item.label.as_str())).frame(false)).clicked() {
                                        input.selected = Some(item.href.clone());
                                    }
                                }
                            });
                        }
                    });
                    input.submenus.push((menu.key, submenu.response.rect));
                }
            }
        }
    }
}
