use super::{App, Config};
use crate::{EdgeBehavior, GameState};
use eframe::egui::{vec2, Button, Rect, RichText, Sense, Stroke, Ui, Vec2};
use log::info;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'static> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn header_text(&self) -> String {
        match self.engine.state() {
            GameState::Seeding => "Click on cells to configure initial state".to_string(),
            GameState::Running => format!("Generation: {}", self.engine.generation()),
            GameState::Completed => {
                format!("Life ended at generation {}", self.engine.generation())
            }
        }
    }

    fn primary_label(&self) -> &'static str {
        match self.engine.state() {
            GameState::Seeding => "Start",
            GameState::Running => "Next Generation",
            GameState::Completed => "Restart",
        }
    }

    fn draw_edge_picker(&mut self, ui: &mut Ui) {
        let mut edge = self.engine.edge_behavior();
        ui.label(Self::new_text("Edge Behavior:"));
        for option in EdgeBehavior::ALL {
            ui.radio_value(&mut edge, option, Self::new_text(&option.to_string()));
        }
        if edge != self.engine.edge_behavior() {
            info!("edge behavior {}", edge);
            self.engine.set_edge_behavior(edge);
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button(self.primary_label())).clicked() {
                self.primary_action();
            }

            match self.engine.state() {
                GameState::Seeding => {
                    if ui.add(Self::new_button("Randomize")).clicked() {
                        info!("randomize");
                        self.engine.randomize(self.config.fill_rate, None);
                    }
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_edge_picker(ui);
                }
                GameState::Running => {
                    let text = if self.is_playing { "Pause" } else { "Play" };
                    if ui.add(Self::new_button(text)).clicked() {
                        self.toggle_play();
                    }
                    if ui.add(Self::new_button("Restart")).clicked() {
                        self.restart();
                    }
                }
                GameState::Completed => {}
            }
        });

        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.engine.population()
        )));
    }

    fn draw_field(&mut self, ui: &mut Ui, side_px: f32) {
        let (rows, columns) = (self.engine.rows(), self.engine.columns());
        let cell = (side_px / rows.max(columns) as f32).floor().max(1.);
        let size = vec2(cell * columns as f32, cell * rows as f32);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter_at(rect);
        for (r, row) in self.engine.cell_rows().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                let min = rect.min + vec2(c as f32 * cell, r as f32 * cell);
                let color = if alive {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(
                    Rect::from_min_size(min, Vec2::splat(cell)).shrink(Config::CELL_GAP),
                    0.,
                    color,
                );
            }
        }
        painter.rect_stroke(
            rect,
            0.,
            Stroke::new(Config::GRID_STROKE_WIDTH, Config::GRID_STROKE_COLOR),
        );

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - rect.min;
                let (r, c) = ((offset.y / cell) as usize, (offset.x / cell) as usize);
                self.engine.toggle_cell((r, c));
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(Self::new_text(&self.header_text()).strong());
            ui.add_space(Config::WIDGET_GAP);

            let area = ui.available_size();
            let side_px = area.x.min(area.y - Config::CONTROLS_HEIGHT).max(0.);
            self.draw_field(ui, side_px);

            ui.add_space(Config::WIDGET_GAP);
            self.draw_controls(ui);
        });
    }
}
