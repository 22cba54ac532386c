//! Read-only per-tick view of the session for render sinks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Platform, Player};
use crate::heroes::Hero;

/// Player pose with deformation applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub target_rotation: f32,
    pub shake_offset: f32,
    pub charging: bool,
    pub jump_charge: f32,
    pub last_jump_force: f32,
    pub on_platform: bool,
}

impl PlayerView {
    /// Draw centre: the box centre displaced by the shake on both axes
    pub fn draw_center(&self) -> Vec2 {
        self.pos + self.size / 2.0 + Vec2::splat(self.shake_offset)
    }
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            pos: player.pos,
            size: player.size,
            rotation: player.rotation,
            target_rotation: player.target_rotation,
            shake_offset: player.shake_offset,
            charging: player.charging,
            jump_charge: player.jump_charge,
            last_jump_force: player.last_jump_force,
            on_platform: player.on_platform,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuView {
    pub visible: bool,
    /// Any part of the panel is inside the view (also true while sliding out)
    pub on_screen: bool,
    pub current_x: f32,
    pub selected: usize,
    pub items: Vec<Hero>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub canvas: Vec2,
    pub header_height: f32,
    pub player: PlayerView,
    pub platforms: Vec<Platform>,
    pub score: u64,
    pub lives: u8,
    pub max_lives: u8,
    pub game_over: bool,
    pub hero_name: Option<String>,
    pub hero_sprite: Option<String>,
    pub menu: MenuView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_center_includes_shake() {
        let mut player = Player::new(50.0, Vec2::new(100.0, 200.0));
        player.shake_offset = 3.0;
        let view = PlayerView::from(&player);
        assert_eq!(view.draw_center(), Vec2::new(128.0, 228.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let player = Player::new(50.0, Vec2::ZERO);
        let snap = Snapshot {
            canvas: Vec2::new(400.0, 700.0),
            header_height: 50.0,
            player: PlayerView::from(&player),
            platforms: vec![Platform::new(Vec2::new(150.0, 680.0), Vec2::new(100.0, 20.0), 0.0)],
            score: 2000,
            lives: 2,
            max_lives: 3,
            game_over: false,
            hero_name: Some("Kaelrik".into()),
            hero_sprite: None,
            menu: MenuView {
                visible: false,
                on_screen: false,
                current_x: 400.0,
                selected: 0,
                items: Vec::new(),
            },
        };
        let json = serde_json::to_string(&snap).expect("snapshot should serialize");
        let back: Snapshot = serde_json::from_str(&json).expect("snapshot should deserialize");
        assert_eq!(back, snap);
    }
}
