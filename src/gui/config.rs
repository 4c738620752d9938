use crate::EdgeBehavior;
use eframe::egui::Color32;
use log::warn;

/// Settings of the window, chosen before the engine is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub edge_behavior: EdgeBehavior,
    pub generations_per_second: f64, // auto-play rate
    pub fill_rate: f64,              // used by "Randomize"
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            edge_behavior: EdgeBehavior::NoWrap,
            generations_per_second: 4.,
            fill_rate: 0.3,
        }
    }
}

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const WIDGET_GAP: f32 = 12.;
    pub const CONTROLS_HEIGHT: f32 = 80.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BACKGROUND_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::WHITE;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0x3c, 0xb3, 0x4a);
    pub const DEAD_COLOR: Color32 = Color32::GRAY;
    pub const CELL_GAP: f32 = 0.5;
    pub const GRID_STROKE_WIDTH: f32 = 2.;
    pub const GRID_STROKE_COLOR: Color32 = Color32::BLACK;

    /// Reads `ROWS [COLUMNS]` positional arguments over the defaults.
    ///
    /// A square field is used when only `ROWS` is given.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut config = Self::default();
        let mut args = args.into_iter();

        let Some(rows) = args.next() else {
            return config;
        };
        match rows.parse::<usize>() {
            Ok(rows) if rows > 0 => {
                config.rows = rows;
                config.columns = rows;
            }
            _ => {
                warn!("ignoring invalid row count {:?}", rows);
                return config;
            }
        }
        if let Some(columns) = args.next() {
            match columns.parse::<usize>() {
                Ok(columns) if columns > 0 => config.columns = columns,
                _ => warn!("ignoring invalid column count {:?}", columns),
            }
        }
        config
    }
}
