use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, InputEvent, TickOutcome};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::{Canvas, Renderer};

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    canvas: Canvas,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Input received since the last tick
    pending: Vec<InputEvent>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let canvas = Canvas::new(config.grid(), config.palette.background);
        let engine = GameEngine::new(config);

        Self {
            engine,
            canvas,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::start()?;
        let result = self.run_game_loop(&mut session.terminal).await;
        session.restore()?;
        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_period = self.engine.config().tick_period();
        let mut tick_timer = interval(tick_period);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Game loop running at {:?} per tick", tick_period);

        loop {
            tokio::select! {
                // Buffer terminal events until the next tick
                maybe_event = event_stream.next() => {
                    if !self.on_input(maybe_event) {
                        break;
                    }
                }

                // One simulation step, then one frame
                _ = tick_timer.tick() => {
                    if !self.update_game() {
                        break;
                    }
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.canvas,
                            &self.engine.config().palette,
                            self.engine.snake().length,
                            &self.metrics,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Take one item from the terminal event stream. Returns false once the
    /// stream has ended and no more input can arrive.
    fn on_input(&mut self, maybe_event: Option<io::Result<Event>>) -> bool {
        match maybe_event {
            Some(Ok(event)) => self.handle_event(event),
            Some(Err(err)) => warn!("Terminal event error: {err}"),
            None => {
                info!("Input stream closed");
                return false;
            }
        }
        true
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(input) = self.input_handler.handle_key_event(key) {
                self.pending.push(input);
            }
        }
    }

    /// Run one tick with the buffered input. Returns false once the player quits.
    fn update_game(&mut self) -> bool {
        match self.engine.tick(self.pending.drain(..)) {
            TickOutcome::Quit => false,
            TickOutcome::Continue(info) => {
                self.metrics.record(&info, self.engine.snake().length);
                self.canvas.apply_all(self.engine.frame());
                true
            }
        }
    }
}

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Raw mode plus the alternate screen, undone on `restore` or on drop
struct TerminalSession {
    terminal: Tui,
    active: bool,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        match Self::enter() {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(err) => {
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    fn enter() -> Result<Tui> {
        let mut out = stderr();
        execute!(out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(out))
            .context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("Terminal left in a bad state: {err:#}");
        }
    }
}
