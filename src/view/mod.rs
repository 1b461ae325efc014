//! TUI rendering and terminal management (impure shell)

pub mod cards;
pub mod constants;
pub mod dots;
mod styles;
mod surface;

pub use styles::{CarouselStyles, ColorConfig};
pub use surface::TerminalSurface;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing::debug;

use crate::config::KeyBindings;
use crate::model::{Deck, KeyAction};
use crate::state::{CarouselConfig, CarouselState, PointerButton, StepDirection};
use crate::view_state::Surface;

use constants::{
    CARD_HEIGHT, DOT_ROW_HEIGHT, FRAME_INTERVAL, IDLE_POLL_INTERVAL, PX_PER_CELL, STATUS_BAR_HEIGHT,
};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    deck: Deck,
    carousel: CarouselState,
    surface: TerminalSurface,
    key_bindings: KeyBindings,
    styles: CarouselStyles,
    /// Last rendered strip area (for pointer hit detection)
    last_strip_area: Option<Rect>,
    /// Last rendered dot row area (for dot click detection)
    last_dot_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(deck: Deck, config: CarouselConfig, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let mut app = Self::with_terminal(terminal, deck, config, Instant::now())?;
        app.set_color_config(colors);
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Event-driven: polls with a timeout
    /// derived from the next pending deadline (frame cadence while a drag
    /// or transition is in flight, the auto-advance deadline otherwise),
    /// so an idle carousel consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let now = Instant::now();
        self.sync_layout(now)?;
        self.draw(now)?;

        loop {
            let now = Instant::now();
            let timeout = if self.carousel.needs_frame(now) {
                FRAME_INTERVAL
            } else {
                match self.carousel.next_deadline() {
                    Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL_INTERVAL),
                    None => IDLE_POLL_INTERVAL,
                }
            };

            // Drain every queued event before rendering. Pointer moves can
            // arrive much faster than the refresh cadence; the frame samples
            // only the latest state, once per loop pass.
            if event::poll(timeout)? {
                loop {
                    if self.handle_event(event::read()?, Instant::now())? {
                        return Ok(());
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            let now = Instant::now();
            self.carousel.tick(now);
            if self.carousel.take_dirty() || self.carousel.needs_frame(now) {
                self.draw(now)?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an application over an already-built terminal.
    ///
    /// `now` seeds the auto-advance deadline; tests pass a virtual clock.
    pub fn with_terminal(
        terminal: Terminal<B>,
        deck: Deck,
        config: CarouselConfig,
        now: Instant,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let surface = TerminalSurface::new(size.width, size.height, deck.len());
        let carousel = CarouselState::new(deck.len(), config, now);
        Ok(Self {
            terminal,
            deck,
            carousel,
            surface,
            key_bindings: KeyBindings::default(),
            styles: CarouselStyles::new(),
            last_strip_area: None,
            last_dot_area: None,
        })
    }

    /// The carousel state, for inspection.
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    /// Immutable access to the terminal, used by test harnesses.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Fire the auto-advance timer if its deadline has passed.
    /// Returns `true` when the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.carousel.tick(now)
    }

    /// Re-measure the surface and feed fresh metrics to the carousel.
    pub fn sync_layout(&mut self, now: Instant) -> Result<(), TuiError> {
        let metrics = self.surface.metrics();
        self.carousel.sync_layout(metrics.as_ref(), now);
        Ok(())
    }

    /// Apply one input event to the application state.
    ///
    /// Returns `true` when the app should quit. Never renders; the event
    /// loop draws at most once per pass after the queue is drained.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<bool, TuiError> {
        match event {
            Event::Key(key) => return Ok(self.handle_key(key, now)),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Resize(width, height) => {
                self.surface.set_size(width, height);
                self.sync_layout(now)?;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Replace the style table with one honoring the given color
    /// configuration.
    pub fn set_color_config(&mut self, colors: ColorConfig) {
        self.styles = CarouselStyles::with_color_config(colors);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == crossterm::event::KeyCode::Char('c')
        {
            return true;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::NextCard => self.carousel.arrow(StepDirection::Forward, now),
            KeyAction::PrevCard => self.carousel.arrow(StepDirection::Backward, now),
            KeyAction::ToggleAutoplay => self.carousel.toggle_autoplay(now),
            KeyAction::GoToCard(index) => self.carousel.dot(index, now),
        }
        false
    }

    /// Route a mouse event to the carousel.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let pos = (
            f64::from(mouse.column) * PX_PER_CELL,
            f64::from(mouse.row) * PX_PER_CELL,
        );
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(area) = self.last_dot_area {
                    if area.y == mouse.row {
                        if let Some(index) = dots::hit_test(mouse.column, area, self.deck.len()) {
                            self.carousel.dot(index, now);
                            return;
                        }
                    }
                }
                if self.in_strip(mouse.column, mouse.row) {
                    self.carousel.pointer_down(pos, PointerButton::Primary);
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                self.carousel.pointer_down(pos, PointerButton::Secondary);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.carousel.pointer_move(pos, now);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.carousel.pointer_up(now);
            }
            // Motion without a held button while a session is open means the
            // release happened outside our capture.
            MouseEventKind::Moved if self.carousel.is_dragging() => {
                self.carousel.pointer_leave(now);
            }
            _ => {}
        }
    }

    fn in_strip(&self, column: u16, row: u16) -> bool {
        self.last_strip_area
            .is_some_and(|area| area.contains(ratatui::layout::Position { x: column, y: row }))
    }

    /// Render one frame.
    pub fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let view = self.carousel.frame(now);
        self.surface.present(&view);

        let size = self.terminal.size()?;
        let full = Rect::new(0, 0, size.width, size.height);
        let [strip_area, dot_area, status_area] = Layout::vertical([
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(DOT_ROW_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(full);
        self.last_strip_area = Some(strip_area);
        self.last_dot_area = Some(dot_area);

        let deck = &self.deck;
        let styles = &self.styles;
        let status = status_line(deck.len(), &view, self.carousel.autoplay_enabled());

        self.terminal.draw(|f| {
            if deck.is_empty() {
                f.render_widget(Paragraph::new("no cards to show"), strip_area);
            } else {
                cards::render_cards(f, strip_area, deck, &view, styles);
                dots::render_dots(f, dot_area, deck.len(), &view, styles);
            }
            f.render_widget(
                Paragraph::new(Line::styled(status, styles.status_bar())),
                status_area,
            );
        })?;
        Ok(())
    }
}

fn status_line(count: usize, view: &crate::view_state::RenderFrame, autoplay: bool) -> String {
    let position = match view.active {
        Some(index) if count > 0 => format!("card {}/{}", index.display(), count),
        _ => "empty deck".to_string(),
    };
    let play = if autoplay { "auto" } else { "paused" };
    format!("{position} | {play} | arrows/h/l move, space pause, q quit")
}

/// Run the TUI over `deck` until the user quits, restoring the terminal on
/// the way out even when the event loop fails.
pub fn run_with_deck(
    deck: Deck,
    config: CarouselConfig,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(deck, config, colors)?;
    let result = app.run();
    let restored = restore_terminal();
    result.and(restored)
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
