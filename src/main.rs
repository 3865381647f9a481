//! Terminal Flappy Bird runner (default binary).
//!
//! One thread, one fixed-rate loop: drain input, tick the game, render, then
//! sleep until the next tick. Input comes from crossterm; frames are drawn
//! into a half-block framebuffer and diffed to the terminal.

use std::fs::File;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use tui_flappy::core::{Game, GameConfig, MaskSet, SpriteSheet};
use tui_flappy::input::{poll_input, Polled};
use tui_flappy::term::{
    FrameBuffer, FramePacer, TermCanvas, TerminalAudio, TerminalRenderer, Viewport,
};
use tui_flappy::types::TICKS_PER_SECOND;

/// Log destination; unset means no logging (the terminal owns stdout/stderr).
const LOG_FILE_ENV: &str = "FLAPPY_LOG_FILE";

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env().context("invalid game configuration")?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("starting with seed {seed}: {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<()> {
    let world_w = config.world_width;
    let world_h = config.world_height;

    let sheet = Rc::new(SpriteSheet::new(&config));
    let masks = Rc::new(MaskSet::from_sheet(&sheet));
    let mut audio = TerminalAudio::new(config.bell);
    let mut game = Game::new(config, masks, seed, &mut audio);

    let mut canvas = TermCanvas::new(Rc::clone(&sheet), world_w, world_h);
    let mut fb = FrameBuffer::new(0, 0);
    let (mut cols, mut rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::fit(cols, rows, world_w, world_h);
    let mut pacer = FramePacer::new(TICKS_PER_SECOND);

    loop {
        // Input.
        for polled in poll_input(|col, row| viewport.cell_to_world(col, row))? {
            match polled {
                Polled::Game(event) => game.handle_input(event, &mut audio),
                Polled::Resize(c, r) => {
                    cols = c;
                    rows = r;
                    viewport = Viewport::fit(cols, rows, world_w, world_h);
                    term.invalidate();
                }
            }
            if game.is_exiting() {
                log::info!("quit, best score {}", game.best_score());
                return Ok(());
            }
        }

        // Tick.
        game.tick(&mut audio);

        // Render.
        canvas.begin_frame(cols, rows);
        game.draw(&mut canvas);
        canvas.compose_into(&mut fb);
        term.present_frame(&mut fb)?;

        pacer.wait_for_next_tick();
    }
}
