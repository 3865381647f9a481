//! The bird: vertical physics and flap animation.

use crate::config::GameConfig;
use crate::types::{Rect, Vec2};

#[derive(Debug, Clone)]
pub struct Bird {
    x: f32,
    y: f32,
    velocity: f32,
    size: f32,
    gravity: f32,
    jump_velocity: f32,
    /// Animation counter, `0..period`
    phase: u32,
    period: u32,
    frames_per_sprite: u32,
}

impl Bird {
    /// Bird centred at (`bird_x`, world centre), at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.world_height / 2.0,
            velocity: 0.0,
            size: config.bird_size,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            phase: 0,
            period: config.animation_period().max(1),
            frames_per_sprite: config.frames_per_sprite.max(1),
        }
    }

    /// One tick: velocity first, then position (semi-implicit Euler), then animation.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
        self.phase = (self.phase + 1) % self.period;
    }

    /// Upward impulse. Replaces the current velocity.
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity;
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Collision volume, centred on the bird.
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position(), self.size, self.size)
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn frame_index(&self) -> u8 {
        (self.phase / self.frames_per_sprite) as u8
    }
}
