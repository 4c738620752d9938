use super::{Config, Ticker};
use crate::{GameState, GridError, LifeEngine};
use eframe::egui::{CentralPanel, Context, Frame, Margin};
use log::{debug, info};

pub struct App {
    pub(super) engine: LifeEngine,
    pub(super) config: Config,
    pub(super) is_playing: bool, // advance on a timer instead of on clicks
    pub(super) ticker: Ticker,
    seen_revision: u64, // engine revision at the last repaint
}

impl App {
    pub fn new(config: Config) -> Result<Self, GridError> {
        let mut engine = LifeEngine::new(config.rows, config.columns, config.edge_behavior)?;
        engine.subscribe(|life, change| {
            debug!(
                "{:?}: generation {}, {:?}, population {}",
                change,
                life.generation(),
                life.state(),
                life.population()
            )
        });
        Ok(Self {
            engine,
            config,
            is_playing: false,
            ticker: Ticker::default(),
            seen_revision: 0,
        })
    }

    /// The one button that is always shown: start, step or restart.
    pub(super) fn primary_action(&mut self) {
        match self.engine.state() {
            GameState::Seeding => {
                info!("start");
                self.engine.start();
            }
            GameState::Running => {
                info!("next generation");
                self.engine.step(1);
            }
            GameState::Completed => self.restart(),
        }
    }

    pub(super) fn restart(&mut self) {
        info!("restart");
        self.is_playing = false;
        self.engine.restart();
    }

    pub(super) fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        info!("{}", if self.is_playing { "play" } else { "pause" });
        self.ticker.reset();
    }

    fn update_engine(&mut self) {
        if self.engine.state() != GameState::Running {
            self.is_playing = false;
        }
        if self.is_playing && self.ticker.ready(self.config.generations_per_second) {
            self.engine.step(1);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.update_engine();

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        // clicks handled while drawing are only visible on the next frame
        if self.engine.revision() != self.seen_revision {
            self.seen_revision = self.engine.revision();
            ctx.request_repaint();
        }
        if self.is_playing {
            ctx.request_repaint_after(self.ticker.remaining(self.config.generations_per_second));
        }
    }
}
