//! Game driver: owns the mode, the current session and the best score.
//!
//! The host loop feeds it input, ticks it at a fixed rate and asks it to
//! draw; everything else (which screen, when a new round starts, when to
//! exit) is decided here.

use std::rc::Rc;

use crate::config::GameConfig;
use crate::mask::MaskSet;
use crate::mode::{next_mode, Mode, ModeEvent};
use crate::platform::{AudioSink, Canvas};
use crate::rng::SimpleRng;
use crate::screens::MenuLayout;
use crate::session::{Session, TickOutcome};
use crate::types::{InputEvent, Key, MusicTrack};

pub struct Game {
    config: GameConfig,
    masks: Rc<MaskSet>,
    layout: MenuLayout,
    mode: Mode,
    session: Option<Session>,
    /// Seeds each new session.
    rng: SimpleRng,
    best: u32,
}

impl Game {
    /// Start at the menu and request the background music loop.
    pub fn new(config: GameConfig, masks: Rc<MaskSet>, seed: u32, audio: &mut dyn AudioSink) -> Self {
        audio.play_music_loop(MusicTrack::Theme);
        Self {
            layout: MenuLayout::new(config.world_width, config.world_height),
            config,
            masks,
            mode: Mode::Menu,
            session: None,
            rng: SimpleRng::new(seed),
            best: 0,
        }
    }

    pub fn handle_input(&mut self, event: InputEvent, audio: &mut dyn AudioSink) {
        if self.mode == Mode::Playing {
            if let Some(session) = self.session.as_mut() {
                match event {
                    InputEvent::KeyDown(Key::Space | Key::Up) => session.jump(audio),
                    InputEvent::KeyDown(Key::Char('p')) => session.toggle_pause(),
                    _ => {}
                }
            }
        }
        self.apply(ModeEvent::Input(event));
    }

    /// One fixed step. Only the playing mode simulates anything.
    pub fn tick(&mut self, audio: &mut dyn AudioSink) {
        if self.mode != Mode::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let TickOutcome::Terminated { score } = session.tick(audio) {
            self.best = self.best.max(score);
            self.apply(ModeEvent::RoundOver { score });
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self.mode {
            Mode::Menu => self.layout.draw_menu(canvas),
            Mode::Playing => {
                if let Some(session) = &self.session {
                    session.draw(canvas);
                }
            }
            Mode::GameOver { score } => self.layout.draw_game_over(canvas, score, self.best),
            Mode::Exiting => {}
        }
    }

    fn apply(&mut self, event: ModeEvent) {
        let next = next_mode(self.mode, &event, &self.layout);
        if next == self.mode {
            return;
        }
        log::info!("mode {} -> {}", self.mode.name(), next.name());

        match next {
            Mode::Playing => {
                let seed = self.rng.next_u32();
                self.session = Some(Session::new(
                    self.config.clone(),
                    Rc::clone(&self.masks),
                    seed,
                ));
            }
            Mode::Menu | Mode::GameOver { .. } | Mode::Exiting => {}
        }
        self.mode = next;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_exiting(&self) -> bool {
        self.mode == Mode::Exiting
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Highest score this process has seen.
    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
