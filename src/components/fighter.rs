//! The fighter entity.
//!
//! A [`Fighter`] is composed from a [`Sprite`] (which owns the animation)
//! plus physics, health and combat state. Visual state changes go through
//! [`Fighter::switch_state`], which enforces the precedence rules:
//!
//! 1. `Death` accepts nothing; once its last frame shows, the fighter is dead for good.
//! 2. `Attack1` and `TakeHit` must reach their last frame before being left.
//! 3. Otherwise the requested state is applied, restarting the animation
//!    only when the state actually changes.

use std::fmt;

use bevy_ecs::prelude::Component;
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::drawable::Drawable;
use crate::components::fighterstate::{FighterState, StateBank};
use crate::components::geometry::{Rect, Size, Vector};
use crate::components::hitbox::HitBox;
use crate::components::sprite::Sprite;
use crate::resources::arena::Arena;
use crate::surface::PaintSurface;

/// Gameplay body width shared by all fighters.
pub const BODY_WIDTH: f32 = 50.0;
/// Gameplay body height shared by all fighters.
pub const BODY_HEIGHT: f32 = 150.0;
pub const MAX_HEALTH: i32 = 100;
/// Health lost per landed hit.
pub const HIT_DAMAGE: i32 = 20;

/// Which side of the match a fighter plays.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }

    pub fn opponent(self) -> Slot {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::One => f.write_str("Player 1"),
            Slot::Two => f.write_str("Player 2"),
        }
    }
}

/// Most recently pressed horizontal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Component, Debug)]
pub struct Fighter {
    pub name: String,
    pub sprite: Sprite,
    pub velocity: Vector,
    /// Starts at [`MAX_HEALTH`], only ever decreases, may go negative.
    pub health: i32,
    /// Set by [`attack`](Self::attack), cleared once the swing's active
    /// frame has been evaluated or the swing is left.
    pub is_attacking: bool,
    pub last_direction: Direction,
    pub hit_box: HitBox,
    /// Attack animation frame on which the hit box is live.
    pub active_frame: usize,
    states: StateBank,
    active_state: FighterState,
    dead: bool,
}

impl Fighter {
    pub fn new(
        name: impl Into<String>,
        position: Vector,
        states: StateBank,
        hit_box: HitBox,
        active_frame: usize,
    ) -> Self {
        let idle = &states.idle;
        let sprite = Sprite::new(position, idle.sheet.clone())
            .with_base_size(Size::new(BODY_WIDTH, BODY_HEIGHT))
            .with_animation(Animation::with_frames(idle.frames));
        let mut hit_box = hit_box;
        hit_box.follow(position);
        Self {
            name: name.into(),
            sprite,
            velocity: Vector::ZERO,
            health: MAX_HEALTH,
            is_attacking: false,
            last_direction: Direction::None,
            hit_box,
            active_frame,
            states,
            active_state: FighterState::Idle,
            dead: false,
        }
    }

    /// Art placement: pixels between the sheet's top-left and the body, and scale.
    pub fn with_render(mut self, offset: Vector, scale: f32) -> Self {
        self.sprite.render_offset = offset;
        self.sprite.scale = scale;
        self
    }

    pub fn position(&self) -> Vector {
        self.sprite.position
    }

    pub fn set_position(&mut self, position: Vector) {
        self.sprite.position = position;
    }

    /// Gameplay body used as the defender rectangle in combat.
    pub fn body(&self) -> Rect {
        Rect::from_parts(self.sprite.position, self.sprite.base_size)
    }

    pub fn state(&self) -> FighterState {
        self.active_state
    }

    pub fn states(&self) -> &StateBank {
        &self.states
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.sprite.animation()
    }

    pub fn current_frame(&self) -> usize {
        self.animation().map(Animation::current_frame).unwrap_or(0)
    }

    fn on_last_frame(&self) -> bool {
        self.animation().map(Animation::is_last_frame).unwrap_or(true)
    }

    /// Health as a 0..=100 bar width.
    pub fn health_percent(&self) -> f32 {
        (self.health.max(0) as f32 / MAX_HEALTH as f32) * 100.0
    }

    /// Request a visual state. Returns whether the state actually changed.
    pub fn switch_state(&mut self, requested: FighterState) -> bool {
        if self.active_state == FighterState::Death {
            if !self.dead && self.on_last_frame() {
                self.dead = true;
                info!("{} is down", self.name);
            }
            return false;
        }
        if self.active_state.is_committed() && !self.on_last_frame() {
            return false;
        }
        if requested == self.active_state {
            return false;
        }

        if self.active_state == FighterState::Attack1 {
            self.is_attacking = false;
        }
        let target = self.states.get(requested);
        let mut animation = Animation::with_frames(target.frames);
        if requested == FighterState::Death {
            animation = animation.once();
        }
        self.sprite.sheet = Some(target.sheet.clone());
        self.sprite.set_animation(animation);
        debug!("{}: {} -> {}", self.name, self.active_state, requested);
        self.active_state = requested;
        true
    }

    /// Start a swing. Ignored once dead.
    pub fn attack(&mut self) {
        if self.dead {
            return;
        }
        self.switch_state(FighterState::Attack1);
        if self.active_state == FighterState::Attack1 {
            self.is_attacking = true;
        }
    }

    /// Take one hit and return the remaining health.
    pub fn take_hit(&mut self) -> i32 {
        self.health -= HIT_DAMAGE;
        if self.health <= 0 {
            self.switch_state(FighterState::Death);
        } else {
            self.switch_state(FighterState::TakeHit);
        }
        info!("{} takes a hit, health now {}", self.name, self.health);
        self.health
    }

    /// Launch upwards. Ignored once dead.
    pub fn jump(&mut self, impulse: f32) {
        if self.dead {
            return;
        }
        self.velocity.y = -impulse;
    }

    /// Horizontal intent from held keys, then the run/idle and jump/fall
    /// requests. Only the most recently pressed held direction moves.
    pub fn steer(&mut self, left_held: bool, right_held: bool, run_speed: f32) {
        self.velocity.x = 0.0;
        let running = if self.dead {
            false
        } else {
            match self.last_direction {
                Direction::Left if left_held => {
                    self.velocity.x = -run_speed;
                    true
                }
                Direction::Right if right_held => {
                    self.velocity.x = run_speed;
                    true
                }
                _ => false,
            }
        };
        if running {
            self.switch_state(FighterState::Run);
        } else {
            self.switch_state(FighterState::Idle);
        }

        if self.velocity.y < 0.0 {
            self.switch_state(FighterState::Jump);
        } else if self.velocity.y > 0.0 {
            self.switch_state(FighterState::Fall);
        }
    }

    /// Hit box follow, explicit Euler step, then gravity or ground snap.
    pub fn step_physics(&mut self, arena: &Arena) {
        self.hit_box.follow(self.sprite.position);
        self.sprite.position += self.velocity;

        let feet = self.sprite.position.y + self.sprite.base_size.height + self.velocity.y;
        if feet >= arena.ground_line() {
            self.velocity.y = 0.0;
            self.sprite.position.y = arena.rest_y;
        } else {
            self.velocity.y += arena.gravity;
        }
    }

    /// Advance the animation unless dead.
    pub fn update(&mut self) {
        if !self.dead {
            self.sprite.update();
        }
    }

    /// Whether this tick shows the swing's live frame.
    pub fn attack_frame_reached(&self) -> bool {
        self.active_state == FighterState::Attack1 && self.current_frame() == self.active_frame
    }
}

impl Drawable for Fighter {
    fn draw(&self, surface: &mut dyn PaintSurface) {
        self.sprite.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::DEFAULT_FRAME_HOLD;
    use crate::components::fighterstate::AnimatedSheet;
    use crate::components::sprite::SpriteSheet;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn bank() -> StateBank {
        let sheet = |key: &str, frames: usize| {
            AnimatedSheet::new(SpriteSheet::new(key, 200.0 * frames as f32, 200.0), frames).unwrap()
        };
        StateBank {
            idle: sheet("idle", 8),
            run: sheet("run", 8),
            jump: sheet("jump", 2),
            fall: sheet("fall", 2),
            attack1: sheet("attack1", 6),
            take_hit: sheet("takeHit", 4),
            death: sheet("death", 6),
        }
    }

    fn fighter() -> Fighter {
        Fighter::new(
            "Samurai Mack",
            Vector::new(0.0, 330.0),
            bank(),
            HitBox::new(Vector::new(100.0, 50.0), 160.0, 50.0),
            4,
        )
    }

    /// Tick only the animation, as the match does after state selection.
    fn animate(fighter: &mut Fighter, ticks: u32) {
        for _ in 0..ticks {
            fighter.update();
        }
    }

    fn play_to_last_frame(fighter: &mut Fighter) {
        let frames = fighter.animation().unwrap().frame_count() as u32;
        animate(fighter, DEFAULT_FRAME_HOLD * (frames - 1));
        assert!(fighter.animation().unwrap().is_last_frame());
    }

    // ==================== CONSTRUCTION ====================

    #[test]
    fn test_new_fighter_idles_at_full_health() {
        let f = fighter();
        assert_eq!(f.state(), FighterState::Idle);
        assert_eq!(f.health, MAX_HEALTH);
        assert!(!f.is_attacking);
        assert!(!f.is_dead());
        assert_eq!(f.sprite.sheet.as_ref().unwrap().key, "idle");
        assert_eq!(f.animation().unwrap().frame_count(), 8);
        assert_eq!(f.body(), Rect::new(0.0, 330.0, 50.0, 150.0));
        assert_eq!(f.hit_box.position, Vector::new(100.0, 380.0));
    }

    // ==================== STATE SWITCHING ====================

    #[test]
    fn test_switch_changes_sheet_and_restarts_animation() {
        let mut f = fighter();
        animate(&mut f, DEFAULT_FRAME_HOLD * 3);
        assert!(f.switch_state(FighterState::Run));
        assert_eq!(f.state(), FighterState::Run);
        assert_eq!(f.sprite.sheet.as_ref().unwrap().key, "run");
        assert_eq!(f.current_frame(), 0);
    }

    #[test]
    fn test_reentering_same_state_keeps_cycle() {
        let mut f = fighter();
        f.switch_state(FighterState::Run);
        animate(&mut f, DEFAULT_FRAME_HOLD * 3);
        assert!(!f.switch_state(FighterState::Run));
        assert_eq!(f.current_frame(), 3);
    }

    #[test]
    fn test_attack_cannot_be_interrupted_mid_swing() {
        let mut f = fighter();
        f.attack();
        for frame in 0..5u32 {
            for target in FighterState::ALL {
                assert!(!f.switch_state(target), "frame {frame}, target {target}");
                assert_eq!(f.state(), FighterState::Attack1);
            }
            animate(&mut f, DEFAULT_FRAME_HOLD);
        }
        assert!(f.animation().unwrap().is_last_frame());
        assert!(f.switch_state(FighterState::Idle));
    }

    #[test]
    fn test_take_hit_stun_cannot_be_interrupted() {
        let mut f = fighter();
        f.take_hit();
        assert_eq!(f.state(), FighterState::TakeHit);
        animate(&mut f, DEFAULT_FRAME_HOLD * 2);
        assert!(!f.switch_state(FighterState::Run));
        assert!(!f.switch_state(FighterState::Attack1));
        animate(&mut f, DEFAULT_FRAME_HOLD);
        assert!(f.switch_state(FighterState::Run));
    }

    #[test]
    fn test_leaving_attack_clears_attacking_flag() {
        let mut f = fighter();
        f.attack();
        assert!(f.is_attacking);
        play_to_last_frame(&mut f);
        f.switch_state(FighterState::Idle);
        assert!(!f.is_attacking);
    }

    // ==================== ATTACK ====================

    #[test]
    fn test_attack_sets_flag_and_state() {
        let mut f = fighter();
        f.attack();
        assert_eq!(f.state(), FighterState::Attack1);
        assert!(f.is_attacking);
        assert_eq!(f.current_frame(), 0);
    }

    #[test]
    fn test_attack_during_hit_stun_does_not_arm() {
        let mut f = fighter();
        f.take_hit();
        f.attack();
        assert_eq!(f.state(), FighterState::TakeHit);
        assert!(!f.is_attacking);
    }

    #[test]
    fn test_attack_frame_reached_only_in_attack_state() {
        let mut f = fighter();
        animate(&mut f, DEFAULT_FRAME_HOLD * 4);
        assert_eq!(f.current_frame(), 4);
        assert!(!f.attack_frame_reached());

        f.attack();
        animate(&mut f, DEFAULT_FRAME_HOLD * 4);
        assert!(f.attack_frame_reached());
    }

    // ==================== TAKE HIT / DEATH ====================

    #[test]
    fn test_take_hit_subtracts_twenty() {
        let mut f = fighter();
        assert_eq!(f.take_hit(), 80);
        assert_eq!(f.state(), FighterState::TakeHit);
    }

    #[test]
    fn test_take_hit_without_clamp() {
        let mut f = fighter();
        f.health = 10;
        assert_eq!(f.take_hit(), -10);
        assert_eq!(f.state(), FighterState::Death);
        assert!(approx_eq(f.health_percent(), 0.0));
    }

    #[test]
    fn test_fatal_hit_requests_death() {
        let mut f = fighter();
        f.health = 20;
        f.take_hit();
        assert_eq!(f.health, 0);
        assert_eq!(f.state(), FighterState::Death);
        assert!(!f.is_dead());
    }

    #[test]
    fn test_death_becomes_terminal_after_last_frame() {
        let mut f = fighter();
        f.health = 20;
        f.take_hit();
        play_to_last_frame(&mut f);
        assert!(!f.is_dead());

        assert!(!f.switch_state(FighterState::Idle));
        assert!(f.is_dead());
        assert_eq!(f.state(), FighterState::Death);

        let frame = f.current_frame();
        animate(&mut f, DEFAULT_FRAME_HOLD * 4);
        assert_eq!(f.current_frame(), frame);

        for target in FighterState::ALL {
            assert!(!f.switch_state(target));
        }
    }

    #[test]
    fn test_dead_fighter_ignores_input() {
        let mut f = fighter();
        f.health = 20;
        f.take_hit();
        play_to_last_frame(&mut f);
        f.switch_state(FighterState::Idle);
        assert!(f.is_dead());

        f.attack();
        assert!(!f.is_attacking);
        f.jump(20.0);
        assert!(approx_eq(f.velocity.y, 0.0));
        f.last_direction = Direction::Right;
        f.steer(false, true, 5.0);
        assert!(approx_eq(f.velocity.x, 0.0));
    }

    // ==================== STEERING ====================

    #[test]
    fn test_steer_follows_last_direction() {
        let mut f = fighter();
        f.last_direction = Direction::Left;
        f.steer(true, true, 5.0);
        assert!(approx_eq(f.velocity.x, -5.0));
        assert_eq!(f.state(), FighterState::Run);

        f.last_direction = Direction::Right;
        f.steer(true, true, 5.0);
        assert!(approx_eq(f.velocity.x, 5.0));
    }

    #[test]
    fn test_steer_idles_when_last_direction_released() {
        let mut f = fighter();
        f.last_direction = Direction::Right;
        f.steer(true, false, 5.0);
        assert!(approx_eq(f.velocity.x, 0.0));
        assert_eq!(f.state(), FighterState::Idle);
    }

    #[test]
    fn test_vertical_motion_overrides_run() {
        let mut f = fighter();
        f.last_direction = Direction::Right;
        f.velocity.y = -20.0;
        f.steer(false, true, 5.0);
        assert_eq!(f.state(), FighterState::Jump);
        assert!(approx_eq(f.velocity.x, 5.0));

        f.velocity.y = 3.0;
        f.steer(false, true, 5.0);
        assert_eq!(f.state(), FighterState::Fall);
    }

    // ==================== PHYSICS ====================

    #[test]
    fn test_resting_tick_is_idempotent() {
        let arena = Arena::default();
        let mut f = fighter();
        for _ in 0..3 {
            f.step_physics(&arena);
            assert!(approx_eq(f.position().y, 330.0));
            assert!(approx_eq(f.velocity.y, 0.0));
        }
    }

    #[test]
    fn test_airborne_gravity_accumulates() {
        let arena = Arena::default();
        let mut f = fighter();
        f.set_position(Vector::new(0.0, 0.0));
        f.step_physics(&arena);
        assert!(approx_eq(f.velocity.y, 0.7));
        f.step_physics(&arena);
        assert!(approx_eq(f.position().y, 0.7));
        assert!(approx_eq(f.velocity.y, 1.4));
    }

    #[test]
    fn test_jump_leaves_ground_and_lands() {
        let arena = Arena::default();
        let mut f = fighter();
        f.jump(20.0);
        f.step_physics(&arena);
        assert!(approx_eq(f.position().y, 310.0));
        assert!(approx_eq(f.velocity.y, -19.3));

        let mut ticks = 0;
        while f.position().y < 330.0 || f.velocity.y != 0.0 {
            f.step_physics(&arena);
            ticks += 1;
            assert!(ticks < 200, "fighter never landed");
        }
        assert!(approx_eq(f.position().y, 330.0));
    }

    #[test]
    fn test_hit_box_follows_before_integration() {
        let arena = Arena::default();
        let mut f = fighter();
        f.velocity.x = 5.0;
        f.step_physics(&arena);
        assert_eq!(f.hit_box.position, Vector::new(100.0, 380.0));
        assert!(approx_eq(f.position().x, 5.0));
        f.step_physics(&arena);
        assert_eq!(f.hit_box.position, Vector::new(105.0, 380.0));
    }

    #[test]
    fn test_slot_helpers() {
        assert_eq!(Slot::One.opponent(), Slot::Two);
        assert_eq!(Slot::Two.index(), 1);
        assert_eq!(Slot::One.to_string(), "Player 1");
    }
}
