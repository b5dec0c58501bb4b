//! Per-frame entry point and the top bar itself.

use egui::{Align, Context, Frame, Layout, Margin, TopBottomPanel, Vec2};

use crate::NavBar;
use crate::menu::menu_bar::bar_item;

impl NavBar {
    /// Display the navigation bar in the egui context
    ///
    /// Call once per frame. Pointer presses are checked against the regions
    /// of the previous frame before anything is drawn, so a region that was
    /// not drawn last frame never counts as inside.
    ///
    /// # Arguments
    /// * `ctx` - The egui context
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # struct App { nav: egui_navbar::NavBar }
    /// # impl App {
    /// fn update(&mut self, ctx: &egui::Context) {
    ///     self.nav.show(ctx);
    ///
    ///     egui::CentralPanel::default().show(ctx, |ui| {
    ///         ui.label("Main content");
    ///     });
    /// }
    /// # }
    /// ```
    pub fn show(&mut self, ctx: &Context) {
        let frame_nr = ctx.cumulative_frame_nr();
        self.input_live = self.last_input_frame != Some(frame_nr);
        self.last_input_frame = Some(frame_nr);
        if self.input_live {
            self.dispatch_pointer_down(ctx);
        }

        self.controller.regions_mut().begin_pass();
        self.trigger_rects = Default::default();

        let content_rect = ctx.content_rect();
        if content_rect.width() > 0.0 && content_rect.height() > 0.0 {
            self.render_bar(ctx);
            self.render_open_dropdowns(ctx);
            if self.controller.is_panel_open() {
                self.render_mobile_panel(ctx);
            }
        }

        let swept = self.controller.regions_mut().end_pass();
        if swept > 0 {
            log::trace!("unmounted {swept} region(s) not drawn this frame on {:?}", self.id);
        }
    }

    /// Feed this frame's pointer press, if any, to the outside-click check.
    fn dispatch_pointer_down(&mut self, ctx: &Context) {
        let press = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        });
        if let Some(target) = press {
            let closed = self.controller.handle_pointer_down(target);
            if !closed.is_empty() {
                ctx.request_repaint();
            }
        }
    }

    fn render_bar(&mut self, ctx: &Context) {
        let style = self.style.clone();

        TopBottomPanel::top(self.id)
            .exact_height(style.bar_height)
            .frame(
                Frame::new()
                    .fill(style.background_color)
                    .inner_margin(Margin::symmetric(12, 0))
                    .outer_margin(Margin::same(0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                        let brand =
                            bar_item(ui, &style, &self.brand.label, style.brand_color, None);
                        if brand.clicked() && self.input_live {
                            self.select(&self.brand.href);
                        }
                        ui.add_space(16.0);

                        self.render_link_row(ui);
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.spacing_mut().item_spacing = Vec2::new(8.0, 0.0);

                        let hamburger = bar_item(ui, &style, "☰", style.text_color, None)
                            .on_hover_text("Open menu");
                        if hamburger.clicked() && self.input_live {
                            self.controller.toggle_mobile_panel();
                        }

                        if let Some(cta) = &self.call_to_action {
                            let response = bar_item(
                                ui,
                                &style,
                                &cta.label,
                                style.cta_text_color,
                                Some(style.cta_color),
                            );
                            if response.clicked() && self.input_live {
                                self.select(&cta.href);
                            }
                        }
                    });
                });
            });
    }
}
