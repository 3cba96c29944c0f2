//! Application lifecycle: the main event loop.

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::App;

impl App {
    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.particles
            .resize(f64::from(size.width), f64::from(size.height));

        tracing::info!(endpoint = %self.config.endpoint(), "starting up");
        self.start_fetch();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(width, height) => {
                        self.particles.resize(f64::from(width), f64::from(height));
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }

            // Let spawned requests make progress on this worker.
            tokio::task::yield_now().await;
        }

        tracing::info!("shutting down");
        Ok(())
    }

    /// Advances every frame-driven animation by one step.
    pub(crate) fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.particles.tick();
        self.ui.tick_toast();
        self.ui.tick_loading();
    }
}
