//! Link row of the desktop bar.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Response, Sense, Ui, Vec2, WidgetInfo,
    WidgetType,
};

use crate::NavBar;
use crate::menu::items::NavEntry;
use crate::navbar::NavStyle;

/// Label suffix marking a dropdown trigger.
pub(crate) const DROPDOWN_MARKER: &str = " ▼";

/// Paint one clickable bar item and return its response.
///
/// The item is highlighted while hovered, or permanently when `fill` is set
/// (an expanded trigger, the call-to-action).
pub(crate) fn bar_item(
    ui: &mut Ui,
    style: &NavStyle,
    label: &str,
    text_color: Color32,
    fill: Option<Color32>,
) -> Response {
    let item_width = ui.fonts_mut(|f| {
        f.layout_no_wrap(
            label.to_string(),
            FontId::proportional(style.text_size),
            text_color,
        )
        .size()
        .x
    }) + 16.0;
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(item_width, style.item_height), Sense::click());

    if let Some(fill) = fill {
        ui.painter().rect_filled(rect, CornerRadius::same(4), fill);
    } else if response.hovered() {
        ui.painter()
            .rect_filled(rect, CornerRadius::same(2), style.hover_color);
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(style.text_size),
        text_color,
    );

    response
}

impl NavBar {
    /// Render the desktop link row: plain links and dropdown triggers in
    /// entry order.
    ///
    /// Hover enter/leave edges are applied before trigger clicks, since the
    /// pointer reaches a trigger before pressing it. The laid-out trigger
    /// rectangles are kept for the popup pass.
    pub(crate) fn render_link_row(&mut self, ui: &mut Ui) {
        let style = &self.style;
        let mut toggled = Vec::new();
        let mut selected = None;

        for entry in &self.entries {
            match entry {
                NavEntry::Link(link) => {
                    if bar_item(ui, style, &link.label, style.text_color, None).clicked() {
                        selected = Some(link.href.clone());
                    }
                }
                NavEntry::Dropdown(menu) => {
                    let expanded = self.controller.expanded(menu.key);
                    let label = format!("{}{DROPDOWN_MARKER}", menu.label);
                    let fill = expanded.then_some(style.hover_color);
                    let response = bar_item(ui, style, &label, style.text_color, fill);
                    response.widget_info(|| {
                        WidgetInfo::selected(WidgetType::Button, true, expanded, &menu.label)
                    });
                    if response.clicked() {
                        toggled.push(menu.key);
                    }
                    self.trigger_rects[menu.key] = Some(response.rect);
                }
            }
        }

        if !self.input_live {
            return;
        }
        self.apply_hover_edges(ui.ctx());
        for key in toggled {
            self.controller.toggle_dropdown(key);
        }
        if let Some(href) = selected {
            self.select(&href);
        }
    }
}
