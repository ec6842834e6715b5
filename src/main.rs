// Date Navigation Bar Demo
// Main entry point

use chrono::NaiveDate;
use date_nav_bar::models::config::NavBarConfig;
use date_nav_bar::services::nav_bar::DateNavBar;
use date_nav_bar::ui_egui::NavBarView;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting date navigation bar demo");

    eframe::run_native(
        "Date Navigation Bar",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([880.0, 260.0])
                .with_min_inner_size([600.0, 200.0]),
            ..Default::default()
        },
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}

struct DemoApp {
    nav: DateNavBar,
    selected: NaiveDate,
}

impl DemoApp {
    fn new() -> Self {
        let config = NavBarConfig::new()
            .with_min_date_str("2015-01-01")
            .with_show_future(false)
            .with_show_days(true);
        let mut nav = DateNavBar::new(config).expect("demo configuration is valid");
        nav.on_ready(|date| log::info!("Nav bar ready at {}", date));
        nav.on_navigate(|date| log::info!("Navigated to {}", date));
        let selected = nav.date();
        Self { nav, selected }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Date Navigation Bar");
            ui.add_space(8.0);
            let response = NavBarView::show(ui, &mut self.nav);
            if let Some(date) = response.changed {
                self.selected = date;
            }
            ui.add_space(8.0);
            ui.label(format!("Selected: {}", self.selected.format("%d %B %Y")));
        });
    }
}
