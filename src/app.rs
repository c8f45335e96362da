//! Interactive terminal game loop.
//!
//! [`App`] is the event-to-state glue and has no terminal I/O, so it can be
//! driven from tests. [`run`] owns the terminal: it renders a frame, blocks
//! for input, drains whatever else is already queued, and repeats. The title
//! is synced once per settled frame.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::core::{GameSnapshot, GameState};
use crate::input::{handle_key_event, should_quit, InputHandler};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, TitleSync, Viewport};
use crate::types::Intent;

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Terminal size changed; the next frame must be a full redraw.
    Resized,
    Quit,
}

pub struct App {
    state: GameState,
    input: InputHandler,
    view: GameView,
    title: TitleSync,
    viewport: Viewport,
}

impl App {
    pub fn new(config: &Config, viewport: Viewport) -> Self {
        Self {
            state: GameState::with_mode(config.history_mode)
                .with_sort_descending(config.sort_descending),
            input: InputHandler::new(),
            view: GameView::default(),
            title: TitleSync::new(config.title),
            viewport,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Render the current state into `fb`.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        self.view
            .render_into(snap, Some(self.input.cursor()), self.viewport, fb);
    }

    /// Title to push for `snap`, if it changed since the last push.
    pub fn pending_title(&mut self, snap: &GameSnapshot) -> Option<String> {
        self.title.update(&snap.status)
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Flow::Continue;
                }
                if should_quit(key) {
                    return Flow::Quit;
                }
                if let Some(action) = handle_key_event(key) {
                    let snap = self.state.snapshot();
                    if let Some(intent) = self.input.handle(action, &snap) {
                        self.dispatch(intent);
                    }
                }
                Flow::Continue
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let snap = self.state.snapshot();
                    let hit = self
                        .view
                        .hit_test(&snap, self.viewport, mouse.column, mouse.row);
                    if let Some(intent) = hit {
                        if let Intent::SelectCell(index) = intent {
                            self.input.set_cursor(index);
                        }
                        self.dispatch(intent);
                    }
                }
                Flow::Continue
            }
            Event::Resize(width, height) => {
                self.viewport = Viewport::new(width, height);
                self.title.invalidate();
                Flow::Resized
            }
            _ => Flow::Continue,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        let changed = self.state.dispatch(intent);
        debug!(intent = intent.as_str(), changed, "intent");
    }
}

/// Run the interactive game until the user quits.
#[instrument(skip_all, fields(history_mode = %config.history_mode))]
pub fn run(config: &Config) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!("terminal session started");

    let result = run_loop(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("terminal session ended");
    result
}

fn run_loop(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let snap = app.snapshot();
        app.render_into(&snap, &mut fb);
        term.draw_swap(&mut fb)?;
        if let Some(title) = app.pending_title(&snap) {
            term.set_title(&title)?;
        }

        let mut event = event::read()?;
        loop {
            match app.handle_event(event) {
                Flow::Quit => return Ok(()),
                Flow::Resized => term.invalidate(),
                Flow::Continue => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
            event = event::read()?;
        }
    }
}
