use std::rc::Rc;

use tui_flappy::core::{
    detect, Collision, GameConfig, MaskSet, Pipe, PixelMask, RecordingAudio, Session, SpriteSheet,
    TickOutcome,
};
use tui_flappy::types::{Rect, SoundCue, Vec2};

fn session(config: GameConfig) -> Session {
    let masks = Rc::new(MaskSet::from_sheet(&SpriteSheet::new(&config)));
    Session::new(config, masks, 11)
}

#[test]
fn test_bounds_are_hits_without_any_pipe() {
    let mask = PixelMask::filled(64, 64);
    let at_top = Rect::new(100.0, 0.0, 64.0, 64.0);
    let above = Rect::new(100.0, -100.0, 64.0, 64.0);
    let at_floor = Rect::new(100.0, 536.0, 64.0, 64.0);
    let below = Rect::new(100.0, 700.0, 64.0, 64.0);
    assert_eq!(detect(at_top, &mask, &[], 600.0), Some(Collision::Ceiling));
    assert_eq!(detect(above, &mask, &[], 600.0), Some(Collision::Ceiling));
    assert_eq!(detect(at_floor, &mask, &[], 600.0), Some(Collision::Floor));
    assert_eq!(detect(below, &mask, &[], 600.0), Some(Collision::Floor));
}

#[test]
fn test_flapping_into_the_ceiling_ends_the_round() {
    let mut s = session(GameConfig::default());
    let mut audio = RecordingAudio::default();
    let mut outcome = TickOutcome::Running;
    for _ in 0..100 {
        s.jump(&mut audio);
        outcome = s.tick(&mut audio);
        if outcome != TickOutcome::Running {
            break;
        }
    }
    assert_eq!(outcome, TickOutcome::Terminated { score: 0 });
    assert_eq!(s.collision(), Some(Collision::Ceiling));
    assert!(s.bird().rect().top() <= 0.0);
    assert_eq!(audio.count(SoundCue::Hit), 1);
}

#[test]
fn test_low_gap_pipe_hits_hovering_bird() {
    // Gap 25..275; the bird hovers at 268..332 and meets the bottom piece.
    let config = GameConfig {
        gravity: 0.0,
        pipe_center_min: 150,
        pipe_center_max: 150,
        ..GameConfig::default()
    };
    let mut s = session(config);
    let mut audio = RecordingAudio::default();
    let mut outcome = TickOutcome::Running;
    for _ in 0..2000 {
        outcome = s.tick(&mut audio);
        if outcome != TickOutcome::Running {
            break;
        }
    }
    assert_eq!(outcome, TickOutcome::Terminated { score: 0 });
    assert_eq!(s.collision(), Some(Collision::Pipe));
    // First contact happens as the pipe's left side reaches the bird.
    let pipe = &s.pipes()[0];
    assert!(pipe.bottom().rect().left() < s.bird().rect().right());
    assert!(pipe.center_x() > s.bird().x());
}

#[test]
fn test_masks_decide_when_rectangles_overlap() {
    let config = GameConfig::default();
    let masks = MaskSet::from_sheet(&SpriteSheet::new(&config));
    let pipe = Pipe::at(150.0, 300.0, &config, &masks);

    // Bird box overlaps the bottom piece by one row; the bird's lowest
    // rows are transparent.
    let grazing = Rect::from_center(Vec2::new(150.0, 425.0 - 31.0), 64.0, 64.0);
    assert!(grazing.intersects(&pipe.bottom().rect()));
    assert_eq!(detect(grazing, masks.bird(0), &[pipe.clone()], 600.0), None);

    // Fully filled mask at the same place collides.
    let solid = PixelMask::filled(64, 64);
    assert_eq!(
        detect(grazing, &solid, &[pipe], 600.0),
        Some(Collision::Pipe)
    );
}
