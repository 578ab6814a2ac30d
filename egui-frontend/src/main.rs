use eframe::egui;
use log::{error, info};

use life_in_weeks_egui::ui::LifeInWeeksApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity
    env_logger::init();
    info!("Starting Life in Weeks egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 860.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Your Life in Weeks")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Your Life in Weeks",
        options,
        Box::new(|cc| match LifeInWeeksApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Life in Weeks app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
