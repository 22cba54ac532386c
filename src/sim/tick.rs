//! Per-tick simulation step
//!
//! One call advances the session by one display refresh. Order:
//! input edges, kinematics, collision, scroll + recycle, deformation,
//! fall-through.

use rand::Rng;

use super::autopilot;
use super::collision;
use super::deform;
use super::session::GameSession;
use super::kinematics;
use super::state::{GameEvent, GamePhase};
use crate::tuning::ScoringScheme;
use crate::ui::MenuCommand;

/// Input sampled at the start of a tick.
///
/// `charge_pressed` / `charge_released` are edges, delivered once each; a held
/// key does not re-fire.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub charge_pressed: bool,
    pub charge_released: bool,
    pub reset: bool,
    pub menu: Vec<MenuCommand>,
    /// Demo mode - the autopilot plays
    pub idle_mode: bool,
}

impl TickInput {
    /// Horizontal axis: -1, 0 or +1
    pub fn direction(&self) -> i8 {
        i8::from(self.right) - i8::from(self.left)
    }
}

/// Advance the session by one tick, returning what happened
pub fn tick(session: &mut GameSession, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        session.reset();
        events.push(GameEvent::Reset);
        return events;
    }

    for &command in &input.menu {
        if let Some(index) = session.menu.handle(command) {
            events.extend(session.select_hero(index));
        }
    }
    session.menu.animate();

    if session.phase == GamePhase::GameOver {
        return events;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::steer(session, &mut input);
    }

    session.time_ticks += 1;
    let tuning = session.tuning.clone();

    // --- INPUT EDGES ---
    if input.charge_pressed {
        kinematics::start_charge(&mut session.player, &tuning);
    }
    if input.charge_released {
        if let Some(force) = kinematics::release_charge(&mut session.player, &tuning) {
            events.push(GameEvent::JumpReleased { force });
        }
    }

    // --- KINEMATICS ---
    let was_on_platform = session.player.on_platform;
    kinematics::integrate(&mut session.player, input.direction(), &tuning);

    // --- COLLISION ---
    let landing = collision::resolve(&mut session.player, &session.field, &tuning);
    let touchdown = landing.is_some() && !was_on_platform;
    if landing.is_none() {
        session.player.on_platform = was_on_platform
            && !session.player.charging
            && collision::is_supported(&session.player, &session.field);
    }

    if let Some(landing) = landing.as_ref().filter(|_| touchdown) {
        log::debug!("Landed on platform {} at y={:.1}", landing.platform_id, landing.platform_y);
        events.push(GameEvent::Landed {
            platform_y: landing.platform_y,
        });
        if tuning.scoring == ScoringScheme::NewHighestPlatform {
            let is_record = session
                .player
                .highest_platform
                .is_none_or(|best| landing.platform_id > best);
            // The starting platform is not an achievement
            if is_record && landing.platform_id > 0 {
                session.player.highest_platform = Some(landing.platform_id);
                session.award(tuning.points_per_platform, &mut events);
            }
        }
    }

    // --- SCROLL ---
    if session.player.velocity < 0.0 {
        session
            .field
            .scroll(tuning.scroll_speed, &mut session.player, &tuning);
    } else if tuning.settle_scroll
        && session.player.on_platform
        && session.player.pos.y < tuning.target_height
    {
        session
            .field
            .scroll(tuning.scroll_speed / 2.0, &mut session.player, &tuning);
    }

    let removed = session
        .field
        .recycle(tuning.scroll_speed, &tuning, &mut session.rng);
    if removed > 0 {
        events.push(GameEvent::PlatformsRecycled { count: removed });
        if tuning.scoring == ScoringScheme::RecycledPlatforms {
            session.award(tuning.points_per_platform * removed as u64, &mut events);
        }
    }

    // --- DEFORMATION ---
    let shake_roll: f32 = session.fx_rng.random_range(-1.0..=1.0);
    let deformation = deform::compute(&session.player, touchdown, &tuning, shake_roll);
    deform::apply(&mut session.player, deformation, &tuning);

    // --- FALL-THROUGH ---
    if session.player.pos.y > tuning.canvas_height {
        session.fall_through(&mut events);
    }

    events
}
