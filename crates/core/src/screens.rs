//! Menu and game-over screens: button layout and drawing.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::platform::Canvas;
use crate::types::{Rect, Rgb, SpriteId, Vec2};

const BUTTON_W: f32 = 200.0;
const BUTTON_H: f32 = 60.0;

/// Button rectangles in world coordinates, shared by hit-testing and drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    world_width: f32,
    world_height: f32,
    /// "Play" on the menu, "Replay" after a round
    pub primary: Rect,
    pub quit: Rect,
}

impl MenuLayout {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        let x = world_width / 2.0 - BUTTON_W / 2.0;
        Self {
            world_width,
            world_height,
            primary: Rect::new(x, 250.0, BUTTON_W, BUTTON_H),
            quit: Rect::new(x, 330.0, BUTTON_W, BUTTON_H),
        }
    }

    pub fn hit_primary(&self, x: f32, y: f32) -> bool {
        self.primary.contains(Vec2::new(x, y))
    }

    pub fn hit_quit(&self, x: f32, y: f32) -> bool {
        self.quit.contains(Vec2::new(x, y))
    }

    pub fn draw_menu(&self, canvas: &mut dyn Canvas) {
        canvas.draw(SpriteId::Background, Vec2::new(0.0, 0.0));
        self.centered_text(canvas, "Flappy Bird", 100.0, Rgb::WHITE);
        self.draw_button(canvas, self.primary, "Play", Rgb::LIGHT_GREEN);
        self.draw_button(canvas, self.quit, "Quit", Rgb::LIGHT_RED);
        self.centered_text(canvas, "Space to flap, P to pause", 430.0, Rgb::WHITE);
    }

    pub fn draw_game_over(&self, canvas: &mut dyn Canvas, score: u32, best: u32) {
        canvas.draw_rect(
            Rect::new(0.0, 0.0, self.world_width, self.world_height),
            Rgb::LIGHT_BLUE,
        );
        self.centered_text(canvas, "Game Over", 100.0, Rgb::WHITE);

        let mut line = ArrayString::<32>::new();
        let _ = write!(line, "Score: {score}");
        self.centered_text(canvas, &line, 160.0, Rgb::WHITE);
        line.clear();
        let _ = write!(line, "Best: {best}");
        self.centered_text(canvas, &line, 195.0, Rgb::WHITE);

        self.draw_button(canvas, self.primary, "Replay", Rgb::LIGHT_GREEN);
        self.draw_button(canvas, self.quit, "Quit", Rgb::LIGHT_RED);
    }

    fn draw_button(&self, canvas: &mut dyn Canvas, rect: Rect, label: &str, color: Rgb) {
        canvas.draw_rect(rect, color);
        let x = rect.center_x() - canvas.text_width(label) / 2.0;
        let y = rect.center_y() - 8.0;
        canvas.draw_text(label, Vec2::new(x, y), Rgb::BLACK);
    }

    fn centered_text(&self, canvas: &mut dyn Canvas, text: &str, y: f32, color: Rgb) {
        let x = (self.world_width - canvas.text_width(text)) / 2.0;
        canvas.draw_text(text, Vec2::new(x, y), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::RecordingCanvas;

    #[test]
    fn test_reference_button_positions() {
        let layout = MenuLayout::new(800.0, 600.0);
        assert_eq!(layout.primary, Rect::new(300.0, 250.0, 200.0, 60.0));
        assert_eq!(layout.quit, Rect::new(300.0, 330.0, 200.0, 60.0));
        assert!(layout.hit_primary(400.0, 280.0));
        assert!(!layout.hit_primary(400.0, 320.0));
        assert!(layout.hit_quit(300.0, 390.0));
        assert!(!layout.hit_quit(299.0, 350.0));
    }

    #[test]
    fn test_game_over_shows_score_and_best() {
        let layout = MenuLayout::new(800.0, 600.0);
        let mut canvas = RecordingCanvas::default();
        layout.draw_game_over(&mut canvas, 7, 12);
        assert!(canvas.has_text("Score: 7"));
        assert!(canvas.has_text("Best: 12"));
        assert!(canvas.has_text("Replay"));
        assert_eq!(canvas.rects.len(), 3);
    }

    #[test]
    fn test_menu_buttons() {
        let layout = MenuLayout::new(800.0, 600.0);
        let mut canvas = RecordingCanvas::default();
        layout.draw_menu(&mut canvas);
        assert!(canvas.has_text("Play"));
        assert!(canvas.has_text("Quit"));
        assert_eq!(canvas.rects[0], (layout.primary, Rgb::LIGHT_GREEN));
        assert_eq!(canvas.rects[1], (layout.quit, Rgb::LIGHT_RED));
    }
}
