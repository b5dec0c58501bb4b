use eframe::egui;
use egui_navbar::{DropdownKey, NavBar};

struct TourSite {
    nav: NavBar,
}

impl Default for TourSite {
    fn default() -> Self {
        Self {
            nav: NavBar::tour_site("tour_site_nav")
                .on_select(Box::new(|href: &str| println!("navigate to {href}"))),
        }
    }
}

impl eframe::App for TourSite {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.nav.show(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Tour site");
            for key in DropdownKey::ALL {
                ui.label(format!("{key}: expanded = {}", self.nav.expanded(key)));
            }
            ui.label(format!("mobile panel open = {}", self.nav.is_panel_open()));
            ui.label(format!(
                "outside-click observer attached = {}",
                self.nav.controller().is_observer_attached()
            ));
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tour site navigation",
        options,
        Box::new(|_cc| Ok(Box::new(TourSite::default()))),
    )
}
