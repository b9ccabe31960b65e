//! Terminal sand viewer (default binary).
//!
//! This is the interactive entrypoint. It wires crossterm input, the
//! framebuffer-based presenter, and the frame driver around an engine
//! instance, then runs the fixed-tick frame loop until quit.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_sand::driver::{FrameDriver, RenderPath, Schedule};
use tui_sand::engine::{Engine, InertEngine};
use tui_sand::input::{
    apply_mouse_event, handle_key_event, should_quit, PointerMapping, ViewerAction,
};
use tui_sand::term::TermPresenter;
use tui_sand::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewerConfig {
    width: u32,
    height: u32,
    scale: u16,
    text: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            scale: 1,
            text: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<ViewerConfig> {
    let mut config = ViewerConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --width"))?;
                config.width = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --width value: {}", v))?;
            }
            "--height" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --height"))?;
                config.height = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --height value: {}", v))?;
            }
            "--scale" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --scale"))?;
                config.scale = v
                    .parse::<u16>()
                    .map_err(|_| anyhow!("invalid --scale value: {}", v))?;
            }
            "--text" => {
                config.text = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    log::info!(
        "starting viewer: grid {}x{}, scale {}, text mode {}",
        config.width,
        config.height,
        config.scale,
        config.text
    );

    // Startup failures are fatal and surface immediately; nothing below
    // retries construction.
    let mut engine = InertEngine::create(config.width, config.height)?;
    let path = if config.text {
        RenderPath::Text
    } else {
        RenderPath::Pixels
    };
    let mut driver = FrameDriver::attach(engine.size(), path, &engine)?;
    let mut presenter = TermPresenter::new(engine.size(), config.scale);

    presenter.enter()?;

    let result = run(&mut engine, &mut driver, &mut presenter);

    // Always try to restore terminal state.
    let _ = presenter.exit();
    result
}

fn run(
    engine: &mut InertEngine,
    driver: &mut FrameDriver,
    presenter: &mut TermPresenter,
) -> Result<()> {
    let mapping = PointerMapping::new(presenter.grid_origin(), presenter.cell_scale() as f64);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Input with timeout until the next tick boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            driver.request_stop();
                        } else if let Some(action) = handle_key_event(key) {
                            match action {
                                ViewerAction::SpawnOnce => {
                                    driver.context_mut().request_single_spawn();
                                }
                                ViewerAction::Select(kind) => {
                                    driver.context_mut().select_kind(kind);
                                }
                                ViewerAction::TogglePath => {
                                    driver.toggle_path();
                                }
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    apply_mouse_event(&mapping, &mouse, driver.context_mut());
                }
                Event::Resize(_, _) => {
                    presenter.invalidate();
                }
                _ => {}
            }
        }

        // Frame.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let path_label = match driver.path() {
                RenderPath::Pixels => "pixels",
                RenderPath::Text => "text",
            };
            presenter.set_status(
                driver.context().kind(),
                driver.context().is_painting(),
                path_label,
            );

            let (schedule, _report) = driver.run_frame(engine, presenter);
            if schedule == Schedule::Stop {
                return Ok(());
            }
        }
    }
}
