//! The live viewer and its run loop.
//!
//! Resize events are coalesced: the page is only re-fitted once the
//! terminal has kept the same size for [`RESIZE_DEBOUNCE`].

use std::time::Instant;

use ratatui::{Frame, widgets::Paragraph};
use termgrid_protocol::Dimensions;
use termgrid_reflow::{Debounce, RESIZE_DEBOUNCE};
use tracing::debug;

use crate::compose::Screen;
use crate::event::{Action, event_to_action, poll_event};
use crate::terminal::LiveTerminal;

/// Shows a page full-screen and keeps it fitted to the terminal.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    size: Dimensions,
    resize: Debounce<Dimensions>,
    lines: Vec<String>,
    dirty: bool,
    should_quit: bool,
}

impl App {
    /// Creates a viewer for a terminal of `size` cells.
    #[must_use]
    pub fn new(screen: Screen, size: Dimensions) -> Self {
        Self {
            screen,
            size,
            resize: Debounce::new(RESIZE_DEBOUNCE),
            lines: Vec::new(),
            dirty: true,
            should_quit: false,
        }
    }

    /// Applies an action received at `now`.
    pub fn update(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Flip => {
                self.screen.flip();
                self.dirty = true;
            }
            Action::Resize(size) => self.resize.push(size, now),
        }
    }

    /// Picks up a resize that has settled by `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(size) = self.resize.poll(now) {
            debug!(cols = size.cols, rows = size.rows, "resize settled");
            self.size = size;
            self.dirty = true;
        }
    }

    /// Returns the lines currently shown, re-fitting them first if needed.
    pub fn lines(&mut self) -> &[String] {
        if self.dirty {
            self.lines = self.screen.lines_for(self.size);
            self.dirty = false;
        }
        &self.lines
    }

    /// Draws the current lines into the frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let text = self.lines().join("\n");
        frame.render_widget(Paragraph::new(text), area);
    }

    /// Runs until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal events fails.
    pub async fn run(&mut self, terminal: &mut LiveTerminal) -> anyhow::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|frame| self.view(frame))?;

            if let Some(action) = poll_event()?.as_ref().and_then(event_to_action) {
                self.update(action, Instant::now());
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
