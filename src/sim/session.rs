//! Game session: owns the player, the platform field and the score/lives bookkeeping

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::field::PlatformField;
use super::snapshot::{MenuView, PlayerView, Snapshot};
use super::state::{GameEvent, GamePhase, Player, RngState};
use crate::heroes::{Hero, HeroCatalog};
use crate::tuning::{Tuning, TuningError};
use crate::ui::HeroMenu;

/// Stream offset for the cosmetic RNG so visual jitter never shifts platform layout
const FX_STREAM: u64 = 0x5eed_0f_f7;

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    /// Seed for reproducibility
    rng_state: RngState,
    pub player: Player,
    pub field: PlatformField,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    /// Simulation tick counter (reset with the session)
    pub time_ticks: u64,
    pub heroes: HeroCatalog,
    pub hero_index: usize,
    pub menu: HeroMenu,
    /// Platform placement
    pub(crate) rng: Pcg32,
    /// Shake jitter (not gameplay-affecting)
    pub(crate) fx_rng: Pcg32,
}

impl GameSession {
    /// Create a session with validated tuning and the default heroes
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_heroes(tuning, seed, HeroCatalog::default())
    }

    /// Create a session with the canonical tuning
    pub fn with_defaults(seed: u64) -> Self {
        Self::build(Tuning::default(), seed, HeroCatalog::default())
    }

    pub fn with_heroes(tuning: Tuning, seed: u64, heroes: HeroCatalog) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed, heroes))
    }

    fn build(tuning: Tuning, seed: u64, heroes: HeroCatalog) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let fx_rng = Pcg32::seed_from_u64(seed ^ FX_STREAM);
        let field = PlatformField::generate(&tuning, &mut rng);
        let player = Self::starting_player(&tuning);
        let menu = HeroMenu::new(tuning.canvas_width, heroes.len());

        log::info!("Session created with seed {seed}");

        Self {
            lives: tuning.starting_lives,
            tuning,
            rng_state,
            player,
            field,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            heroes,
            hero_index: 0,
            menu,
            rng,
            fx_rng,
        }
    }

    /// Player at rest, centred on the starting platform
    fn starting_player(tuning: &Tuning) -> Player {
        let anchor = PlatformField::anchor_position(tuning);
        Player::new(
            tuning.player_size,
            Vec2::new(
                anchor.x + (tuning.platform_width - tuning.player_size) / 2.0,
                anchor.y - tuning.player_size,
            ),
        )
    }

    /// Start over: fresh player and ladder, score and lives restored.
    ///
    /// The hero binding survives; the RNG keeps running so each reset deals a
    /// new ladder.
    pub fn reset(&mut self) {
        self.player = Self::starting_player(&self.tuning);
        self.field = PlatformField::generate(&self.tuning, &mut self.rng);
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        log::info!("Session reset");
    }

    /// Seed this session was created with
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.heroes.get(self.hero_index)
    }

    /// Bind a hero by index (clamped). Physics state is untouched.
    pub fn select_hero(&mut self, index: usize) -> Option<GameEvent> {
        if self.heroes.is_empty() {
            return None;
        }
        let index = self.heroes.clamp_index(index);
        self.hero_index = index;
        self.menu.selected = index;
        if let Some(hero) = self.heroes.get(index) {
            log::info!("Hero selected: {}", hero.name);
        }
        Some(GameEvent::HeroChanged { index })
    }

    pub(crate) fn award(&mut self, points: u64, events: &mut Vec<GameEvent>) {
        if points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        events.push(GameEvent::ScoreAwarded { points });
    }

    /// Handle the player dropping out of the view
    pub(crate) fn fall_through(&mut self, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            log::info!("Life lost, {} remaining", self.lives);
            self.reposition_player();
            events.push(GameEvent::LifeLost {
                remaining: self.lives,
            });
        } else {
            log::info!("Game over with score {}", self.score);
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
        }
    }

    /// Put the player back on the lowest platform still in view
    pub fn reposition_player(&mut self) {
        let platform = match self.field.lowest_landing_spot(self.tuning.header_height) {
            Some(platform) => platform.clone(),
            None => {
                log::warn!("No platform to respawn on, restoring the anchor");
                self.field.push_anchor(&self.tuning)
            }
        };

        let player = &mut self.player;
        player.place_on(&platform);
        player.pos.x = platform.pos.x + (platform.size.x - player.size.x) / 2.0;
        player.clamp_x(self.tuning.canvas_width);
        player.velocity = 0.0;
        player.on_platform = true;
        player.can_jump = true;
        player.charging = false;
        player.jump_charge = 0.0;
        player.shake_offset = 0.0;
        player.rotation = 0.0;
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let hero = self.hero();
        Snapshot {
            canvas: Vec2::new(self.tuning.canvas_width, self.tuning.canvas_height),
            header_height: self.tuning.header_height,
            player: PlayerView::from(&self.player),
            platforms: self.field.platforms().cloned().collect(),
            score: self.score,
            lives: self.lives,
            max_lives: self.tuning.starting_lives,
            game_over: self.is_game_over(),
            hero_name: hero.map(|h| h.name.clone()),
            hero_sprite: hero.and_then(|h| h.sprite.clone()),
            menu: MenuView {
                visible: self.menu.visible,
                on_screen: self.menu.is_on_screen(),
                current_x: self.menu.current_x,
                selected: self.menu.selected,
                items: self.heroes.heroes().to_vec(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let session = GameSession::with_defaults(1);
        assert_eq!(session.lives, 3);
        assert_eq!(session.score, 0);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.field.len(), 6);

        let anchor = &session.field.entries()[0].platform;
        assert_eq!(session.player.bottom(), anchor.top());
        assert!(session.player.overlaps_x(anchor));
        assert!(session.player.on_platform && session.player.can_jump);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let tuning = Tuning {
            canvas_width: -1.0,
            ..Default::default()
        };
        assert!(GameSession::new(tuning, 1).is_err());
    }

    #[test]
    fn test_select_hero_clamps_and_keeps_physics() {
        let mut session = GameSession::with_defaults(1);
        session.player.velocity = 4.0;
        session.player.pos.y = 123.0;
        assert_eq!(
            session.select_hero(99),
            Some(GameEvent::HeroChanged { index: 2 })
        );
        assert_eq!(session.hero().map(|h| h.name.as_str()), Some("Seraphine"));
        assert_eq!(session.player.velocity, 4.0);
        assert_eq!(session.player.pos.y, 123.0);
    }

    #[test]
    fn test_select_hero_on_empty_catalog() {
        let mut session =
            GameSession::with_heroes(Tuning::default(), 1, HeroCatalog::new(Vec::new()))
                .expect("default tuning is valid");
        assert_eq!(session.select_hero(0), None);
        assert!(session.hero().is_none());
    }

    #[test]
    fn test_reposition_with_empty_field_restores_anchor() {
        let mut session = GameSession::with_defaults(1);
        session.field = PlatformField::default();
        session.player.pos.y = 900.0;
        session.reposition_player();
        assert_eq!(session.field.len(), 1);
        assert_eq!(session.player.bottom(), session.field.entries()[0].platform.top());
        assert!(session.player.on_platform);
    }

    #[test]
    fn test_reset_keeps_hero() {
        let mut session = GameSession::with_defaults(1);
        session.select_hero(1);
        session.score = 5000;
        session.lives = 1;
        session.phase = GamePhase::GameOver;
        session.reset();
        assert_eq!(session.hero_index, 1);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let session = GameSession::with_defaults(4);
        let snap = session.snapshot();
        assert_eq!(snap.platforms.len(), session.field.len());
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.hero_name.as_deref(), Some("Lysaria"));
        assert_eq!(snap.menu.items.len(), 3);
        assert!(!snap.menu.on_screen);
        assert_eq!(session.seed(), 4);
        assert!(!snap.game_over);
    }
}
