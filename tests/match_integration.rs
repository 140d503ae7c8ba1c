//! Match integration tests: full ticks through the schedule, headless.

use spriteduel::components::animation::DEFAULT_FRAME_HOLD;
use spriteduel::components::fighter::Slot;
use spriteduel::components::fighterstate::FighterState;
use spriteduel::components::geometry::Vector;
use spriteduel::error::FightError;
use spriteduel::events::hud::{HudEvent, HudLog};
use spriteduel::events::input::QueuedInput;
use spriteduel::game::Match;
use spriteduel::resources::gameconfig::GameConfig;
use spriteduel::resources::matchstatus::Outcome;
use spriteduel::resources::roster::Roster;
use spriteduel::resources::sheetloader::FixedSizeLoader;
use spriteduel::surface::{DrawCommand, RecordingSurface};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Harness {
    duel: Match,
    input: QueuedInput,
    surface: RecordingSurface,
    hud: HudLog,
}

impl Harness {
    fn new(config: GameConfig) -> Self {
        let mut loader = FixedSizeLoader::unloaded();
        let duel = Match::new(&config, &Roster::default(), &mut loader).unwrap();
        Harness {
            duel,
            input: QueuedInput::new(),
            surface: RecordingSurface::new(1024.0, 576.0).unwrap(),
            hud: HudLog::new(),
        }
    }

    fn stock() -> Self {
        Self::new(GameConfig::new())
    }

    fn tick(&mut self) -> bool {
        self.surface.clear();
        self.duel
            .tick(&mut self.input, &mut self.surface, &mut self.hud)
    }

    fn ticks(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Put both fighters on the ground at the given x positions.
    fn place(&mut self, x_one: f32, x_two: f32) {
        for (slot, x) in [(Slot::One, x_one), (Slot::Two, x_two)] {
            let mut fighter = self.duel.fighter_mut(slot).unwrap();
            fighter.set_position(Vector::new(x, 330.0));
            fighter.velocity = Vector::ZERO;
        }
    }

    fn position(&self, slot: Slot) -> Vector {
        self.duel.fighter(slot).unwrap().position()
    }
}

// ==================== SETUP ====================

#[test]
fn test_wrong_fighter_count_fails_fast() {
    let mut roster = Roster::default();
    roster.fighters.truncate(1);
    let mut loader = FixedSizeLoader::unloaded();
    let err = Match::new(&GameConfig::new(), &roster, &mut loader).err().unwrap();
    assert!(matches!(err, FightError::InvalidConfiguration(_)));
}

#[test]
fn test_zero_area_arena_fails_fast() {
    let config = GameConfig {
        window_height: 0,
        ..GameConfig::new()
    };
    let mut loader = FixedSizeLoader::unloaded();
    let err = Match::new(&config, &Roster::default(), &mut loader).err().unwrap();
    assert!(matches!(err, FightError::InvalidConfiguration(_)));
}

#[test]
fn test_fighters_start_at_roster_positions() {
    let h = Harness::stock();
    assert_eq!(h.position(Slot::One), Vector::new(0.0, 0.0));
    assert_eq!(h.position(Slot::Two), Vector::new(400.0, 100.0));
    assert!(h.duel.is_running());
    assert_eq!(h.duel.remaining_seconds(), 60);
}

// ==================== PHYSICS ====================

#[test]
fn test_fighters_fall_and_rest_on_ground() {
    let mut h = Harness::stock();
    h.ticks(120);
    for slot in [Slot::One, Slot::Two] {
        let fighter = h.duel.fighter(slot).unwrap();
        assert!(approx_eq(fighter.position().y, 330.0), "{slot} at {:?}", fighter.position());
        assert!(approx_eq(fighter.velocity.y, 0.0));
        assert_eq!(fighter.state(), FighterState::Idle);
    }
}

#[test]
fn test_resting_tick_keeps_fighter_in_place() {
    let mut h = Harness::stock();
    h.place(0.0, 400.0);
    h.tick();
    assert_eq!(h.position(Slot::One), Vector::new(0.0, 330.0));
    let fighter = h.duel.fighter(Slot::One).unwrap();
    assert!(approx_eq(fighter.velocity.y, 0.0));
    assert_eq!(fighter.hit_box.position, Vector::new(100.0, 380.0));
}

// ==================== INPUT ====================

#[test]
fn test_held_direction_runs_and_release_stops() {
    let mut h = Harness::stock();
    h.place(100.0, 600.0);
    h.input.press("d");
    h.ticks(10);
    assert!(approx_eq(h.position(Slot::One).x, 150.0));
    assert_eq!(h.duel.fighter(Slot::One).unwrap().state(), FighterState::Run);

    h.input.release("d");
    h.ticks(5);
    assert!(approx_eq(h.position(Slot::One).x, 150.0));
    assert_eq!(h.duel.fighter(Slot::One).unwrap().state(), FighterState::Idle);
}

#[test]
fn test_most_recent_direction_wins() {
    let mut h = Harness::stock();
    h.place(100.0, 600.0);
    h.input.press("ArrowRight").press("ArrowLeft");
    h.tick();
    assert!(approx_eq(h.position(Slot::Two).x, 595.0));

    h.input.release("ArrowLeft");
    h.tick();
    assert!(approx_eq(h.position(Slot::Two).x, 595.0));
}

#[test]
fn test_jump_rises_then_lands() {
    let mut h = Harness::stock();
    h.place(100.0, 600.0);
    h.input.press("w");
    h.tick();
    let fighter = h.duel.fighter(Slot::One).unwrap();
    assert_eq!(fighter.state(), FighterState::Jump);
    assert!(approx_eq(fighter.position().y, 310.0));

    h.input.release("w");
    h.ticks(120);
    let fighter = h.duel.fighter(Slot::One).unwrap();
    assert!(approx_eq(fighter.position().y, 330.0));
    assert_eq!(fighter.state(), FighterState::Idle);
}

// ==================== COMBAT ====================

#[test]
fn test_attack_flag_clears_exactly_once_on_active_frame() {
    let mut h = Harness::stock();
    h.place(100.0, 900.0);
    h.input.press(" ");

    let mut transitions = Vec::new();
    let mut was_attacking = false;
    for tick in 1..=40u32 {
        h.tick();
        let attacking = h.duel.fighter(Slot::One).unwrap().is_attacking;
        if was_attacking && !attacking {
            transitions.push(tick);
        }
        was_attacking = attacking;
    }
    assert_eq!(transitions, vec![DEFAULT_FRAME_HOLD * 4]);
    assert_eq!(h.duel.fighter(Slot::Two).unwrap().health, 100);
}

#[test]
fn test_hit_reduces_health_and_updates_hud() {
    let mut h = Harness::stock();
    h.place(200.0, 300.0);
    h.input.press(" ");
    h.ticks(DEFAULT_FRAME_HOLD * 4);

    let defender = h.duel.fighter(Slot::Two).unwrap();
    assert_eq!(defender.health, 80);
    assert_eq!(defender.state(), FighterState::TakeHit);
    assert_eq!(h.hud.health, [100.0, 80.0]);
    assert!(h.duel.is_running());
}

#[test]
fn test_knockout_ends_match_and_stops_countdown() {
    let mut h = Harness::stock();
    h.place(200.0, 300.0);
    h.duel.fighter_mut(Slot::Two).unwrap().health = 20;
    h.input.press(" ");

    let mut ticks = 0;
    while h.tick() {
        ticks += 1;
        assert!(ticks < 100, "no knock-out");
    }
    assert_eq!(h.duel.outcome(), Some(Outcome::Winner(Slot::One)));
    assert_eq!(h.hud.outcome, Some(Outcome::Winner(Slot::One)));
    assert_eq!(h.duel.fighter(Slot::Two).unwrap().state(), FighterState::Death);

    h.duel.advance_clock(5.0, &mut h.hud);
    assert_eq!(h.duel.remaining_seconds(), 60);
    assert!(!h.hud.history.iter().any(|e| matches!(e, HudEvent::Timer(_))));

    let frames = h.duel.frame_count();
    assert!(!h.tick());
    assert_eq!(h.duel.frame_count(), frames);
}

#[test]
fn test_enemy_strikes_with_its_own_active_frame() {
    let mut h = Harness::stock();
    h.place(200.0, 300.0);
    h.input.press("ArrowDown");
    h.ticks(DEFAULT_FRAME_HOLD * 2);
    assert_eq!(h.duel.fighter(Slot::One).unwrap().health, 80);
}

// ==================== COUNTDOWN ====================

#[test]
fn test_first_second_elapses_before_decrement() {
    let mut h = Harness::stock();
    h.duel.advance_clock(0.5, &mut h.hud);
    assert!(h.hud.timer.is_none());
    h.duel.advance_clock(0.5, &mut h.hud);
    assert_eq!(h.hud.timer, Some(59));
}

#[test]
fn test_timer_expiry_with_equal_health_is_tie() {
    let config = GameConfig {
        duration: 2,
        ..GameConfig::new()
    };
    let mut h = Harness::new(config);
    h.ticks(10);
    h.duel.advance_clock(1.0, &mut h.hud);
    assert!(h.duel.is_running());
    h.duel.advance_clock(1.0, &mut h.hud);

    assert_eq!(h.duel.outcome(), Some(Outcome::Tie));
    assert_eq!(
        h.hud.history,
        vec![
            HudEvent::Timer(1),
            HudEvent::Timer(0),
            HudEvent::Outcome(Outcome::Tie)
        ]
    );
    assert_eq!(Outcome::Tie.to_string(), "Tie");
    assert!(!h.tick());
}

#[test]
fn test_timer_expiry_favours_healthier_fighter() {
    let config = GameConfig {
        duration: 1,
        ..GameConfig::new()
    };
    let mut h = Harness::new(config);
    h.duel.fighter_mut(Slot::One).unwrap().health = 40;
    h.duel.timer_tick(&mut h.hud);
    assert_eq!(h.duel.outcome(), Some(Outcome::Winner(Slot::Two)));
    assert_eq!(h.hud.outcome.unwrap().to_string(), "Player 2 Wins");
}

#[test]
fn test_zero_second_match_ends_on_first_clock_tick() {
    let config = GameConfig {
        duration: 0,
        ..GameConfig::new()
    };
    let mut h = Harness::new(config);
    h.duel.advance_clock(10.0, &mut h.hud);
    assert!(!h.duel.is_running());
    assert_eq!(h.duel.outcome(), Some(Outcome::Tie));
    assert_eq!(h.hud.history, vec![HudEvent::Outcome(Outcome::Tie)]);
}

#[test]
fn test_huge_clock_delta_runs_out_the_timer() {
    let mut h = Harness::stock();
    h.duel.advance_clock(1.0e8, &mut h.hud);
    assert_eq!(h.duel.remaining_seconds(), 0);
    assert_eq!(h.hud.timer, Some(0));
    assert_eq!(h.duel.outcome(), Some(Outcome::Tie));
}

// ==================== RENDERING ====================

#[test]
fn test_render_order_scenery_then_fighters() {
    let mut h = Harness::stock();
    h.tick();
    let commands = h.surface.commands();
    assert_eq!(commands.len(), 6);
    assert!(matches!(commands[0], DrawCommand::Fill { .. }));
    let keys: Vec<&str> = commands[1..]
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Image { key, .. } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(keys.len(), 4);
    assert!(keys[0].ends_with("background.png"));
    assert!(keys[1].ends_with("shop.png"));
    assert!(keys[2].contains("samuraiMack"));
    assert!(keys[3].contains("kenji"));
    assert!(matches!(commands[3], DrawCommand::Fill { .. }));
}

#[test]
fn test_debug_toggle_outlines_boxes() {
    let mut h = Harness::stock();
    assert!(h.duel.toggle_debug());
    h.tick();
    let strokes = h
        .surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
        .count();
    assert_eq!(strokes, 4);

    assert!(!h.duel.toggle_debug());
    h.tick();
    assert!(
        !h.surface
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Stroke { .. }))
    );
}

#[test]
fn test_render_after_match_end_still_draws() {
    let config = GameConfig {
        duration: 1,
        ..GameConfig::new()
    };
    let mut h = Harness::new(config);
    h.duel.advance_clock(1.0, &mut h.hud);
    assert!(!h.duel.is_running());

    h.surface.clear();
    h.duel.render(&mut h.surface);
    assert_eq!(h.surface.commands().len(), 6);
}
