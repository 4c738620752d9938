#![warn(clippy::all)]

use life_grid::{App, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let config = Config::from_args(std::env::args().skip(1));
    log::info!("{}x{} field, {}", config.rows, config.columns, config.edge_behavior);
    let app = App::new(config)?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(640., 760.))
            .with_min_inner_size(vec2(320.0, 400.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}
