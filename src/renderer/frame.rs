//! Frame assembly: snapshot in, ordered draw commands out

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::Snapshot;
use crate::ui::menu::{ITEM_HEIGHT, ITEM_TOP, MENU_WIDTH};

const HEART_SIZE: f32 = 20.0;
const HEART_SPACING: f32 = 10.0;
const HEART_TOP: f32 = 15.0;
const MENU_ICON: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One backend operation, executed in order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear([f32; 4]),
    Triangles(Vec<Vertex>),
    /// Image centred on `center`, scaled to `size`, rotated by `rotation`
    Sprite {
        sprite: String,
        center: Vec2,
        size: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: TextAlign,
        color: [f32; 4],
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn triangles(&mut self, vertices: Vec<Vertex>) {
        if !vertices.is_empty() {
            self.commands.push(DrawCommand::Triangles(vertices));
        }
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, align: TextAlign, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            pos,
            size,
            align,
            color,
        });
    }

    /// Total vertices across all triangle batches
    pub fn vertex_count(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                DrawCommand::Triangles(v) => v.len(),
                _ => 0,
            })
            .sum()
    }

    /// All text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { sprite, .. } => Some(sprite.as_str()),
            _ => None,
        })
    }
}

/// Build the full frame for a snapshot
pub fn build_frame(snapshot: &Snapshot) -> Frame {
    let mut frame = Frame::default();
    frame.commands.push(DrawCommand::Clear(colors::BACKGROUND));

    // Platforms hidden behind the header are skipped
    let platforms: Vec<Vertex> = snapshot
        .platforms
        .iter()
        .filter(|p| p.is_visible(snapshot.header_height))
        .flat_map(|p| shapes::rect(p.pos, p.size, colors::PLATFORM))
        .collect();
    frame.triangles(platforms);

    let player = &snapshot.player;
    match &snapshot.hero_sprite {
        Some(sprite) => frame.commands.push(DrawCommand::Sprite {
            sprite: sprite.clone(),
            center: player.draw_center(),
            size: player.size,
            rotation: player.rotation,
        }),
        None => frame.triangles(shapes::rotated_rect(
            player.draw_center(),
            player.size,
            player.rotation,
            colors::PLAYER,
        )),
    }

    if snapshot.game_over {
        let center = snapshot.canvas / 2.0;
        frame.text("Game Over", center, 40.0, TextAlign::Center, colors::TEXT_DARK);
        frame.text(
            "Press R to restart",
            center + Vec2::new(0.0, 40.0),
            20.0,
            TextAlign::Center,
            colors::TEXT_DARK,
        );
    }

    // --- HEADER ---
    frame.triangles(shapes::rect(
        Vec2::ZERO,
        Vec2::new(snapshot.canvas.x, snapshot.header_height),
        colors::HEADER,
    ));
    frame.text(
        format!("Score: {}", snapshot.score),
        Vec2::new(10.0, 30.0),
        20.0,
        TextAlign::Left,
        colors::TEXT,
    );
    frame.triangles(hearts(snapshot));

    draw_menu(&mut frame, snapshot);

    frame
}

fn hearts(snapshot: &Snapshot) -> Vec<Vertex> {
    let count = f32::from(snapshot.max_lives);
    let total_width = count * HEART_SIZE + (count - 1.0).max(0.0) * HEART_SPACING;
    let start_x = (snapshot.canvas.x - total_width) / 2.0;

    (0..snapshot.max_lives)
        .flat_map(|i| {
            let x = start_x + f32::from(i) * (HEART_SIZE + HEART_SPACING);
            let color = if i < snapshot.lives {
                colors::HEART_FULL
            } else {
                colors::HEART_EMPTY
            };
            shapes::heart(Vec2::new(x, HEART_TOP), HEART_SIZE, color)
        })
        .collect()
}

fn draw_menu(frame: &mut Frame, snapshot: &Snapshot) {
    let menu = &snapshot.menu;
    if !menu.on_screen {
        return;
    }

    let left = menu.current_x;
    let mid_x = left + MENU_WIDTH / 2.0;
    frame.triangles(shapes::rect(
        Vec2::new(left, 0.0),
        Vec2::new(MENU_WIDTH, snapshot.canvas.y),
        colors::MENU_PANEL,
    ));
    frame.text("Choose Hero", Vec2::new(mid_x, 30.0), 20.0, TextAlign::Center, colors::TEXT);

    for (i, hero) in menu.items.iter().enumerate() {
        let y = ITEM_TOP + i as f32 * ITEM_HEIGHT;
        if i == menu.selected {
            frame.triangles(shapes::rect(
                Vec2::new(left + 10.0, y - 10.0),
                Vec2::new(MENU_WIDTH - 20.0, 70.0),
                colors::MENU_HIGHLIGHT,
            ));
        }

        let icon_center = Vec2::new(mid_x, y + 25.0);
        match &hero.sprite {
            Some(sprite) => frame.commands.push(DrawCommand::Sprite {
                sprite: sprite.clone(),
                center: icon_center,
                size: Vec2::splat(MENU_ICON),
                rotation: 0.0,
            }),
            None => frame.triangles(shapes::rect(
                icon_center - Vec2::splat(MENU_ICON / 2.0),
                Vec2::splat(MENU_ICON),
                colors::MENU_PLACEHOLDER,
            )),
        }
        frame.text(hero.name.clone(), Vec2::new(mid_x, y + 60.0), 16.0, TextAlign::Center, colors::TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameSession, TickInput, tick};
    use crate::ui::MenuCommand;

    #[test]
    fn test_basic_frame() {
        let session = GameSession::with_defaults(3);
        let frame = build_frame(&session.snapshot());

        assert_eq!(frame.commands[0], DrawCommand::Clear(colors::BACKGROUND));
        assert!(frame.texts().any(|t| t == "Score: 0"));
        assert!(!frame.texts().any(|t| t == "Game Over"));
        assert_eq!(frame.sprites().collect::<Vec<_>>(), vec!["images/hero-1.png"]);
    }

    #[test]
    fn test_hidden_platforms_are_skipped() {
        let session = GameSession::with_defaults(3);
        let mut snap = session.snapshot();
        let full = build_frame(&snap).vertex_count();
        snap.platforms[1].pos.y = -100.0;
        assert_eq!(build_frame(&snap).vertex_count(), full - 6);
    }

    #[test]
    fn test_player_without_sprite_is_a_rectangle() {
        let session = GameSession::with_defaults(3);
        let mut snap = session.snapshot();
        let with_sprite = build_frame(&snap).vertex_count();
        snap.hero_sprite = None;
        let frame = build_frame(&snap);
        assert_eq!(frame.sprites().count(), 0);
        assert_eq!(frame.vertex_count(), with_sprite + 6);
    }

    #[test]
    fn test_game_over_banner() {
        let mut session = GameSession::with_defaults(3);
        session.phase = crate::sim::GamePhase::GameOver;
        let frame = build_frame(&session.snapshot());
        let texts: Vec<_> = frame.texts().collect();
        assert!(texts.contains(&"Game Over"));
        assert!(texts.contains(&"Press R to restart"));
    }

    #[test]
    fn test_menu_drawn_once_slid_in() {
        let mut session = GameSession::with_defaults(3);
        assert!(!build_frame(&session.snapshot()).texts().any(|t| t == "Choose Hero"));

        tick(
            &mut session,
            &TickInput {
                menu: vec![MenuCommand::Toggle],
                ..Default::default()
            },
        );
        let frame = build_frame(&session.snapshot());
        assert!(frame.texts().any(|t| t == "Choose Hero"));
        assert!(frame.texts().any(|t| t == "Kaelrik"));
        // Player sprite plus one icon per hero
        assert_eq!(frame.sprites().count(), 4);
    }
}
