use crate::error::{Error, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub enum AppEvent {
    Tick,
    Key(KeyEvent),
    Resize(u16, u16),
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        let render_err = |e: std::io::Error| Error::Render(e.to_string());

        if event::poll(self.tick_rate).map_err(render_err)? {
            match event::read().map_err(render_err)? {
                Event::Key(key) => Ok(AppEvent::Key(key)),
                Event::Resize(w, h) => Ok(AppEvent::Resize(w, h)),
                _ => Ok(AppEvent::Tick),
            }
        } else {
            Ok(AppEvent::Tick)
        }
    }
}

pub fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

pub fn should_cycle_focus(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Tab)
}
