// Crew Scheduler Application
// Main entry point

use crew_scheduler::ui::SchedulerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Crew Scheduler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Crew Scheduler",
        options,
        Box::new(|_cc| Ok(Box::new(SchedulerApp::new()))),
    )
}
