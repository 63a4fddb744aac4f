use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_runner::compute::init_state;
use side_runner::config::GameConfig;
use side_runner::display::terminal::TerminalSurface;
use side_runner::entities::GameStatus;
use side_runner::game_loop::tick;
use side_runner::input::InputState;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Only used on terminals that don't report key-release
/// events: OS key-repeat refreshes the key well before it expires.
const HOLD_WINDOW: u64 = 8;

#[derive(Parser, Debug)]
#[command(name = "side_runner", about = "Jump over obstacles in your terminal")]
struct Args {
    /// Host frame rate (ticks per second).
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for the obstacle spawn jitter (random when omitted).
    #[arg(long, env = "SIDE_RUNNER_SEED")]
    seed: Option<u64>,

    /// Background scroll speed in pixels per tick.
    #[arg(long, default_value_t = 0.0)]
    scroll_speed: f64,

    /// Don't draw the collision circles.
    #[arg(long)]
    hide_hitboxes: bool,

    /// Write logs to this file (RUST_LOG controls the level).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Logs go to a file only: stderr shares the terminal with the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  After game over the loop stops ticking and
/// only waits for the quit key.
///
/// Input model: arrow key events update `InputState` between ticks.  On
/// terminals without key-release events a `key_frame` map records the frame
/// of the last press/repeat, and keys that fall silent for `HOLD_WINDOW`
/// frames are released.
fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    config: GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    frame_period: Duration,
    keyboard_enhanced: bool,
) -> Result<()> {
    let mut state = init_state(config, rng);
    let mut input = InputState::new();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let start = Instant::now();

    info!("game started, field {}x{}", state.config.field_width, state.config.field_height);

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if is_quit(code, modifiers) {
                            return Ok(());
                        }
                        if input.press(code).is_some() {
                            key_frame.insert(code, frame);
                        }
                    }
                    KeyEventKind::Release => {
                        input.release(code);
                        key_frame.remove(&code);
                    }
                },
                Event::FocusLost => {
                    input.clear();
                    key_frame.clear();
                }
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }

        if !keyboard_enhanced {
            key_frame.retain(|code, last| {
                let held = frame.saturating_sub(*last) <= HOLD_WINDOW;
                if !held {
                    input.release(*code);
                }
                held
            });
        }

        if state.status == GameStatus::Running {
            let timestamp = start.elapsed().as_secs_f64() * 1000.0;
            state = tick(&state, &input, timestamp, surface, rng)
                .context("failed to draw frame")?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_period {
            thread::sleep(frame_period - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    ensure!(args.fps > 0, "--fps must be at least 1");
    let config = GameConfig {
        scroll_speed: args.scroll_speed,
        show_hitboxes: !args.hide_hitboxes,
        ..GameConfig::default()
    };
    config.validate().context("invalid game configuration")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableFocusChange)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    if !keyboard_enhanced {
        warn!("terminal does not report key releases, expiring held keys after {HOLD_WINDOW} frames");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let frame_period = Duration::from_secs_f64(1.0 / args.fps as f64);
    let result = terminal::size().map_err(anyhow::Error::from).and_then(|(cols, rows)| {
        let mut surface = TerminalSurface::new(&mut out, cols, rows, &config);
        game_loop(&mut surface, config, &mut rng, &rx, frame_period, keyboard_enhanced)
    });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{e:#}");
    }
    result
}
