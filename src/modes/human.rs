use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::{debug, info};

use crate::game::{GameConfig, GameSession, Schedule, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{FrameBuffer, Renderer};

/// Game timer matching the session's current [`Schedule`]
struct GameTimer {
    schedule: Schedule,
    interval: Interval,
}

impl GameTimer {
    fn new(schedule: Schedule) -> Self {
        // first timed tick is one period out; the start tick already ran
        let mut interval = interval_at(Instant::now() + schedule.period, schedule.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { schedule, interval }
    }
}

/// Bring `timer` in line with `schedule`, replacing or dropping it
fn sync_timer(timer: &mut Option<GameTimer>, schedule: Option<Schedule>) {
    match (schedule, timer.as_ref()) {
        (None, _) => *timer = None,
        (Some(wanted), Some(current)) if current.schedule == wanted => {}
        (Some(wanted), _) => {
            debug!(period_ms = wanted.period.as_secs_f64() * 1000.0, "rescheduling game timer");
            *timer = Some(GameTimer::new(wanted));
        }
    }
}

/// Resolves on the next game tick, or never when no game is running
async fn next_tick(timer: &mut Option<GameTimer>) {
    match timer {
        Some(timer) => {
            timer.interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

pub struct HumanMode {
    session: GameSession<FrameBuffer>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let board = FrameBuffer::new(config.grid_size);

        Self {
            session: GameSession::new(config, board),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut game_timer: Option<GameTimer> = None;

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            sync_timer(&mut game_timer, self.session.schedule());

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = next_tick(&mut game_timer) => {
                    let result = self.session.tick();
                    self.record(result);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let status = self.session.game().map(|game| game.status);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.display(), status, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => {
                if !self.session.set_pending_direction(direction) {
                    debug!(?direction, "turn ignored");
                }
            }
            KeyAction::Start => self.start_game(),
            KeyAction::Stop => self.stop_game(),
            KeyAction::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn start_game(&mut self) {
        self.metrics.on_game_start();
        let result = self.session.start();
        self.record(result);
    }

    fn stop_game(&mut self) {
        if self.session.is_running() {
            self.metrics.on_game_stopped();
        }
        self.session.stop();
    }

    fn record(&mut self, result: TickResult) {
        if let Some(final_score) = result.final_score {
            self.metrics.on_game_over(final_score);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
