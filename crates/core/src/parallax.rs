//! Parallax scroller: three background strips moving at their own speeds.

use crate::config::GameConfig;
use crate::platform::Canvas;
use crate::types::{SpriteId, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLayer {
    sprite: SpriteId,
    y: f32,
    speed: f32,
    offset: f32,
}

impl ScrollLayer {
    pub fn new(sprite: SpriteId, y: f32, speed: f32) -> Self {
        Self {
            sprite,
            y,
            speed,
            offset: 0.0,
        }
    }

    /// Scroll left by `speed`; wrap to zero once a full width has gone by.
    pub fn advance(&mut self, width: f32) {
        self.offset -= self.speed;
        if self.offset <= -width {
            self.offset = 0.0;
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }

    /// Two copies side by side cover the whole width at any offset.
    pub fn draw(&self, canvas: &mut dyn Canvas, width: f32) {
        canvas.draw(self.sprite, Vec2::new(self.offset, self.y));
        canvas.draw(self.sprite, Vec2::new(self.offset + width, self.y));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxScroller {
    width: f32,
    layers: [ScrollLayer; 3],
}

impl ParallaxScroller {
    /// Clouds at the top, mountains behind the play field, ground at pipe speed.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.world_width,
            layers: [
                ScrollLayer::new(SpriteId::Clouds, 0.0, config.cloud_speed),
                ScrollLayer::new(SpriteId::Mountains, config.mountain_y, config.mountain_speed),
                ScrollLayer::new(
                    SpriteId::Ground,
                    config.world_height - config.ground_height,
                    config.pipe_speed,
                ),
            ],
        }
    }

    pub fn advance(&mut self) {
        for layer in &mut self.layers {
            layer.advance(self.width);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for layer in &self.layers {
            layer.draw(canvas, self.width);
        }
    }

    pub fn layers(&self) -> &[ScrollLayer] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::RecordingCanvas;

    #[test]
    fn test_layers_scroll_at_own_speeds() {
        let mut scroller = ParallaxScroller::new(&GameConfig::default());
        for _ in 0..10 {
            scroller.advance();
        }
        let offsets: Vec<f32> = scroller.layers().iter().map(|l| l.offset()).collect();
        assert_eq!(offsets, vec![-10.0, -20.0, -10.0]);
    }

    #[test]
    fn test_wrap_at_full_width() {
        let mut layer = ScrollLayer::new(SpriteId::Mountains, 100.0, 2.0);
        for _ in 0..399 {
            layer.advance(800.0);
        }
        assert_eq!(layer.offset(), -798.0);
        layer.advance(800.0);
        assert_eq!(layer.offset(), 0.0);
    }

    #[test]
    fn test_wrap_when_passing_width() {
        let mut layer = ScrollLayer::new(SpriteId::Clouds, 0.0, 3.0);
        for _ in 0..266 {
            layer.advance(800.0);
        }
        assert_eq!(layer.offset(), -798.0);
        layer.advance(800.0);
        assert_eq!(layer.offset(), 0.0);
    }

    #[test]
    fn test_draw_emits_two_copies_per_layer() {
        let mut scroller = ParallaxScroller::new(&GameConfig::default());
        scroller.advance();
        let mut canvas = RecordingCanvas::default();
        scroller.draw(&mut canvas);
        assert_eq!(canvas.sprites.len(), 6);
        assert_eq!(canvas.sprites[0], (SpriteId::Clouds, Vec2::new(-1.0, 0.0)));
        assert_eq!(canvas.sprites[1], (SpriteId::Clouds, Vec2::new(799.0, 0.0)));
        assert_eq!(
            canvas.sprites[4],
            (SpriteId::Ground, Vec2::new(-1.0, 500.0))
        );
    }
}
