//! Hero selection side panel
//!
//! Slides in from the right edge. Keyboard navigation and clicks pick a row;
//! the caller binds the hero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Panel width
pub const MENU_WIDTH: f32 = 150.0;
/// Vertical distance between rows
pub const ITEM_HEIGHT: f32 = 80.0;
/// y of the first row's anchor
pub const ITEM_TOP: f32 = 70.0;
/// Fraction of the remaining slide distance covered per tick
pub const SLIDE_RATE: f32 = 0.2;

/// Menu input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MenuCommand {
    Toggle,
    Up,
    Down,
    Confirm,
    /// Left click at a canvas position
    Click(Vec2),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroMenu {
    pub visible: bool,
    /// Highlighted row
    pub selected: usize,
    /// Panel left edge, easing toward `target_x`
    pub current_x: f32,
    pub target_x: f32,
    canvas_width: f32,
    item_count: usize,
}

impl HeroMenu {
    pub fn new(canvas_width: f32, item_count: usize) -> Self {
        Self {
            visible: false,
            selected: 0,
            current_x: canvas_width,
            target_x: canvas_width,
            canvas_width,
            item_count,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.target_x = if self.visible {
            self.canvas_width - MENU_WIDTH
        } else {
            self.canvas_width
        };
    }

    fn hide(&mut self) {
        self.visible = false;
        self.target_x = self.canvas_width;
    }

    /// Apply a command; returns the hero index chosen, if any
    pub fn handle(&mut self, command: MenuCommand) -> Option<usize> {
        if command == MenuCommand::Toggle {
            self.toggle();
            return None;
        }
        if !self.visible || self.item_count == 0 {
            return None;
        }

        match command {
            MenuCommand::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            MenuCommand::Down => {
                self.selected = (self.selected + 1).min(self.item_count - 1);
                None
            }
            MenuCommand::Confirm => {
                self.hide();
                Some(self.selected)
            }
            MenuCommand::Click(point) => {
                let hit = (0..self.item_count).find(|&i| self.hit_test(i, point))?;
                self.selected = hit;
                self.hide();
                Some(hit)
            }
            MenuCommand::Toggle => None,
        }
    }

    /// Clickable bounds of row `index` as (min, max) corners.
    ///
    /// Measured against the panel's open position, not its animated one.
    pub fn item_bounds(&self, index: usize) -> (Vec2, Vec2) {
        let y = ITEM_TOP + index as f32 * ITEM_HEIGHT;
        (
            Vec2::new(self.canvas_width - 140.0, y - 10.0),
            Vec2::new(self.canvas_width - 10.0, y + 60.0),
        )
    }

    fn hit_test(&self, index: usize, point: Vec2) -> bool {
        let (min, max) = self.item_bounds(index);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Ease the panel toward its target position
    pub fn animate(&mut self) {
        self.current_x += (self.target_x - self.current_x) * SLIDE_RATE;
    }

    /// Whether any part of the panel is on screen
    pub fn is_on_screen(&self) -> bool {
        self.current_x < self.canvas_width - 0.5
    }
}
