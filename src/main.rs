use std::path::PathBuf;
use std::time::{Duration, Instant};

use arcade_snake::config::{GRID, TARGET_FPS};
use arcade_snake::error::AppError;
use arcade_snake::game::{GameState, GameStatus, TickOutcome};
use arcade_snake::input::{GameInput, InputHandler};
use arcade_snake::logging::{self, LogLevel};
use arcade_snake::renderer;
use arcade_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use arcade_snake::ui::scene::build_scene;
use arcade_snake::ui::viewport::Viewport;
use clap::Parser;
use log::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(version, about = "Arcade Snake in the terminal")]
struct Cli {
    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log file location (defaults to the platform data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = logging::init(cli.log_level, cli.log_file)? {
        info!("logging to {}", path.display());
    }

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    info!(
        "starting on a {}x{} grid at {TARGET_FPS} fps (seed: {:?})",
        GRID.width, GRID.height, cli.seed
    );

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let result = run(&mut session, state);
    drop(session);

    if let Err(error) = &result {
        log::error!("{error}");
    }
    result
}

fn run(session: &mut TerminalSession, mut state: GameState) -> Result<(), AppError> {
    let frame_interval = Duration::from_millis(1000 / TARGET_FPS);
    let mut input = InputHandler::new();
    let mut viewport: Option<Viewport> = None;
    let mut canvas_visible = true;
    let mut next_frame = Instant::now();

    loop {
        next_frame += frame_interval;

        for game_input in input.poll_until(next_frame, viewport)? {
            if game_input == GameInput::Quit {
                info!("quit at score {}", state.score);
                return Ok(());
            }

            let was_over = state.is_over();
            state.apply_input(game_input);
            if was_over && state.status == GameStatus::Running {
                info!("restarted, food at {:?}", state.food.position);
            }
        }

        match state.tick() {
            TickOutcome::Ate => debug!(
                "ate food, score {} length {}, next food at {:?}",
                state.score,
                state.snake.len(),
                state.food.position
            ),
            TickOutcome::Died(reason) => info!(
                "game over ({reason:?}) with score {} after {} ticks",
                state.score, state.tick_count
            ),
            TickOutcome::Moved | TickOutcome::Idle => {}
        }

        let scene = build_scene(&state);
        session
            .terminal_mut()
            .draw(|frame| viewport = renderer::render(frame, &scene))?;

        if viewport.is_some() != canvas_visible {
            canvas_visible = viewport.is_some();
            if canvas_visible {
                info!("terminal large enough again, canvas restored");
            } else {
                warn!("terminal too small for the canvas, clicks are ignored");
            }
        }

        // Drop frames rather than spiral when a frame overruns.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }
}
