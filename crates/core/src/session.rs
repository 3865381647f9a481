//! Session controller - one round of play, from first tick to collision
//!
//! Every tick runs the same fixed sequence:
//!
//! 1. paused: nothing moves
//! 2. bird physics and animation
//! 3. parallax layers
//! 4. spawn timer, new pipe when it exceeds the interval
//! 5. pipes scroll
//! 6. off-screen pipes are dropped
//! 7. collision, which ends the round
//! 8. scoring, once per pipe
//!
//! Pipe masks live on the pipes themselves, so dropping a pipe drops its mask
//! with it and there is no separate cache to keep in sync. Drawing is a
//! separate call ([`Session::draw`]) so a paused session still renders.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tui_flappy_core::{GameConfig, MaskSet, NullAudio, Session, SpriteSheet, TickOutcome};
//!
//! let config = GameConfig::default();
//! let masks = Rc::new(MaskSet::from_sheet(&SpriteSheet::new(&config)));
//! let mut session = Session::new(config, masks, 42);
//!
//! let mut audio = NullAudio;
//! session.jump(&mut audio);
//! assert_eq!(session.tick(&mut audio), TickOutcome::Running);
//! assert_eq!(session.score(), 0);
//! ```

use std::fmt::Write as _;
use std::rc::Rc;

use arrayvec::ArrayString;

use crate::bird::Bird;
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::mask::MaskSet;
use crate::parallax::ParallaxScroller;
use crate::pipe::Pipe;
use crate::platform::{AudioSink, Canvas};
use crate::rng::SimpleRng;
use crate::types::{Rgb, SoundCue, SpriteId, Vec2};

/// Pipes alive at once never exceed this with sane configs; the vector grows if they do.
const PIPE_CAPACITY: usize = 8;

/// Result of one [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Paused,
    /// The round is over; further ticks keep returning this.
    Terminated { score: u32 },
}

pub struct Session {
    config: GameConfig,
    masks: Rc<MaskSet>,
    rng: SimpleRng,
    bird: Bird,
    pipes: Vec<Pipe>,
    scroller: ParallaxScroller,
    spawn_timer: u32,
    score: u32,
    paused: bool,
    collision: Option<Collision>,
    ticks: u64,
}

impl Session {
    pub fn new(config: GameConfig, masks: Rc<MaskSet>, seed: u32) -> Self {
        log::info!("session start (seed {seed})");
        Self {
            bird: Bird::new(&config),
            scroller: ParallaxScroller::new(&config),
            pipes: Vec::with_capacity(PIPE_CAPACITY),
            rng: SimpleRng::new(seed),
            spawn_timer: 0,
            score: 0,
            paused: false,
            collision: None,
            ticks: 0,
            config,
            masks,
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self, audio: &mut dyn AudioSink) -> TickOutcome {
        if self.collision.is_some() {
            return self.terminated();
        }
        if self.paused {
            return TickOutcome::Paused;
        }
        self.ticks += 1;

        self.bird.update();
        self.scroller.advance();

        self.spawn_timer += 1;
        if self.spawn_timer > self.config.spawn_interval_ticks {
            let pipe = Pipe::spawn(&self.config, &mut self.rng, &self.masks);
            log::debug!(
                "pipe spawned at tick {} (gap top {:.0})",
                self.ticks,
                pipe.top().rect().bottom()
            );
            self.pipes.push(pipe);
            self.spawn_timer = 0;
        }

        let speed = self.config.pipe_speed;
        for pipe in &mut self.pipes {
            pipe.advance(speed);
        }
        self.pipes.retain(|pipe| !pipe.is_offscreen());

        let bird_mask = self.masks.bird(self.bird.frame_index());
        if let Some(hit) = collision::detect(
            self.bird.rect(),
            bird_mask,
            &self.pipes,
            self.config.world_height,
        ) {
            log::info!(
                "collision with {} at tick {}, score {}",
                hit.as_str(),
                self.ticks,
                self.score
            );
            audio.play_sound(SoundCue::Hit);
            self.collision = Some(hit);
            return self.terminated();
        }

        let bird_x = self.bird.x();
        for pipe in &mut self.pipes {
            if !pipe.is_scored() && pipe.center_x() < bird_x {
                pipe.mark_scored();
                self.score += 1;
                log::debug!("scored, now {}", self.score);
                audio.play_sound(SoundCue::Score);
            }
        }

        TickOutcome::Running
    }

    /// Flap. Ignored while paused or after the round ended.
    pub fn jump(&mut self, audio: &mut dyn AudioSink) {
        if self.paused || self.collision.is_some() {
            return;
        }
        self.bird.jump();
        audio.play_sound(SoundCue::Flap);
    }

    pub fn toggle_pause(&mut self) {
        if self.collision.is_some() {
            return;
        }
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "paused" } else { "resumed" });
    }

    /// Scene, score overlay and, when paused, the paused banner.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let world_w = self.config.world_width;
        let world_h = self.config.world_height;

        canvas.draw(SpriteId::Background, Vec2::new(0.0, 0.0));
        self.scroller.draw(canvas);
        for pipe in &self.pipes {
            for piece in pipe.pieces() {
                canvas.draw(piece.sprite(), piece.rect().top_left());
            }
        }
        canvas.draw(
            SpriteId::bird(self.bird.frame_index()),
            self.bird.rect().top_left(),
        );

        let mut text = ArrayString::<16>::new();
        let _ = write!(text, "{}", self.score);
        canvas.draw_text(&text, Vec2::new(world_w / 2.0 - 20.0, 30.0), Rgb::WHITE);

        if self.paused {
            let banner = "Paused - Press 'P' to Resume";
            let x = (world_w - canvas.text_width(banner)) / 2.0;
            canvas.draw_text(banner, Vec2::new(x, world_h / 2.0), Rgb::WHITE);
        }
    }

    fn terminated(&self) -> TickOutcome {
        TickOutcome::Terminated { score: self.score }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_terminated(&self) -> bool {
        self.collision.is_some()
    }

    /// What ended the round, once it has ended.
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn scroller(&self) -> &ParallaxScroller {
        &self.scroller
    }

    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Simulated (unpaused) ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{RecordingAudio, RecordingCanvas};
    use crate::sprites::SpriteSheet;

    /// No gravity and a fixed gap centred on the bird: it can never die.
    fn floating_config() -> GameConfig {
        GameConfig {
            gravity: 0.0,
            pipe_center_min: 300,
            pipe_center_max: 300,
            ..GameConfig::default()
        }
    }

    fn session(config: GameConfig) -> Session {
        let masks = Rc::new(MaskSet::from_sheet(&SpriteSheet::new(&config)));
        Session::new(config, masks, 1)
    }

    #[test]
    fn test_first_pipe_spawns_after_interval() {
        let mut s = session(floating_config());
        let mut audio = RecordingAudio::default();
        for _ in 0..200 {
            assert_eq!(s.tick(&mut audio), TickOutcome::Running);
        }
        assert!(s.pipes().is_empty());
        assert_eq!(s.spawn_timer(), 200);

        s.tick(&mut audio);
        assert_eq!(s.pipes().len(), 1);
        assert_eq!(s.spawn_timer(), 0);
        // Spawned at 850 and already advanced once this tick.
        assert_eq!(s.pipes()[0].center_x(), 849.0);
    }

    #[test]
    fn test_score_once_per_pipe() {
        let mut s = session(floating_config());
        let mut audio = RecordingAudio::default();
        // First pipe: at 849 after tick 201, centre passes x=150 on tick 901.
        // The second one only passes on tick 1102.
        for _ in 0..900 {
            s.tick(&mut audio);
        }
        assert_eq!(s.score(), 0);
        for _ in 0..100 {
            assert_eq!(s.tick(&mut audio), TickOutcome::Running);
        }
        assert_eq!(s.score(), 1);
        assert_eq!(audio.count(SoundCue::Score), 1);
        assert_eq!(audio.count(SoundCue::Hit), 0);
    }

    #[test]
    fn test_jump_plays_flap() {
        let mut s = session(GameConfig::default());
        let mut audio = RecordingAudio::default();
        s.jump(&mut audio);
        assert_eq!(s.bird().velocity(), -5.0);
        assert_eq!(audio.sounds, vec![SoundCue::Flap]);
    }

    #[test]
    fn test_floor_ends_round_and_stays_terminated() {
        let mut s = session(GameConfig::default());
        let mut audio = RecordingAudio::default();
        let mut outcome = TickOutcome::Running;
        for _ in 0..200 {
            outcome = s.tick(&mut audio);
            if outcome != TickOutcome::Running {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::Terminated { score: 0 });
        assert_eq!(s.collision(), Some(Collision::Floor));
        assert_eq!(audio.count(SoundCue::Hit), 1);

        let ticks = s.ticks();
        assert_eq!(s.tick(&mut audio), TickOutcome::Terminated { score: 0 });
        assert_eq!(s.ticks(), ticks);
        assert_eq!(audio.count(SoundCue::Hit), 1);
    }

    #[test]
    fn test_paused_jump_is_ignored() {
        let mut s = session(GameConfig::default());
        let mut audio = RecordingAudio::default();
        s.toggle_pause();
        s.jump(&mut audio);
        assert_eq!(s.bird().velocity(), 0.0);
        assert!(audio.sounds.is_empty());
        assert_eq!(s.tick(&mut audio), TickOutcome::Paused);
    }

    #[test]
    fn test_draw_layers_in_order() {
        let mut s = session(floating_config());
        let mut audio = RecordingAudio::default();
        for _ in 0..250 {
            s.tick(&mut audio);
        }
        let mut canvas = RecordingCanvas::default();
        s.draw(&mut canvas);

        let sprites: Vec<SpriteId> = canvas.sprites.iter().map(|(id, _)| *id).collect();
        assert_eq!(sprites[0], SpriteId::Background);
        assert_eq!(sprites[1], SpriteId::Clouds);
        assert_eq!(sprites[5], SpriteId::Ground);
        assert_eq!(sprites[6], SpriteId::Ground);
        assert!(matches!(sprites[7], SpriteId::Pipe(_)));
        assert!(matches!(sprites[8], SpriteId::Pipe(_)));
        assert!(matches!(sprites[9], SpriteId::Bird(_)));
        assert_eq!(sprites.len(), 10);

        assert_eq!(canvas.texts.len(), 1);
        assert_eq!(canvas.texts[0].0, "0");
        assert_eq!(canvas.texts[0].1, Vec2::new(380.0, 30.0));
    }

    #[test]
    fn test_paused_draw_shows_banner() {
        let mut s = session(GameConfig::default());
        s.toggle_pause();
        let mut canvas = RecordingCanvas::default();
        s.draw(&mut canvas);
        assert!(canvas.has_text("Paused - Press 'P' to Resume"));
    }
}
