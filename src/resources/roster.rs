//! Fighter and scenery definitions.
//!
//! A roster is a JSON document describing the two fighters (art, placement,
//! hit box, key bindings) and the scenery layers behind them. The built-in
//! [`Roster::default`] is the stock Samurai Mack vs Kenji match.
//!
//! ```json
//! {
//!   "fighters": [
//!     {
//!       "name": "Samurai Mack",
//!       "position": {"x": 0.0, "y": 0.0},
//!       "offset": {"x": 215.0, "y": 157.0},
//!       "scale": 2.5,
//!       "hit_box": {"offset": {"x": 100.0, "y": 50.0}, "width": 160.0, "height": 50.0},
//!       "active_frame": 4,
//!       "sheets": {"idle": {"path": "./assets/img/samuraiMack/Idle.png", "frames": 8}, "...": {}},
//!       "controls": {"left": "a", "right": "d", "jump": "w", "attack": " "}
//!     }
//!   ],
//!   "scenery": [{"kind": "rect", "color": {"r": 0, "g": 0, "b": 0, "a": 255}, "z": 0}]
//! }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::components::animation::Animation;
use crate::components::fighter::Fighter;
use crate::components::fighterstate::{AnimatedSheet, StateBank};
use crate::components::geometry::{Size, Vector};
use crate::components::hitbox::HitBox;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::error::FightError;
use crate::resources::arena::Arena;
use crate::resources::sheetloader::SheetLoader;
use crate::surface::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDef {
    pub path: String,
    pub frames: usize,
}

impl SheetDef {
    fn new(path: impl Into<String>, frames: usize) -> Self {
        SheetDef {
            path: path.into(),
            frames,
        }
    }

    fn build(&self, loader: &mut dyn SheetLoader) -> Result<AnimatedSheet, FightError> {
        AnimatedSheet::new(loader.load(&self.path), self.frames)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSheets {
    pub idle: SheetDef,
    pub run: SheetDef,
    pub jump: SheetDef,
    pub fall: SheetDef,
    pub attack1: SheetDef,
    #[serde(rename = "takeHit")]
    pub take_hit: SheetDef,
    pub death: SheetDef,
}

impl StateSheets {
    /// Conventional file names under `dir`, with per-state frame counts
    /// in `idle, run, jump, fall, attack1, takeHit, death` order.
    fn in_dir(dir: &str, take_hit_file: &str, frames: [usize; 7]) -> Self {
        let path = |file: &str| format!("{dir}/{file}.png");
        StateSheets {
            idle: SheetDef::new(path("Idle"), frames[0]),
            run: SheetDef::new(path("Run"), frames[1]),
            jump: SheetDef::new(path("Jump"), frames[2]),
            fall: SheetDef::new(path("Fall"), frames[3]),
            attack1: SheetDef::new(path("Attack1"), frames[4]),
            take_hit: SheetDef::new(path(take_hit_file), frames[5]),
            death: SheetDef::new(path("Death"), frames[6]),
        }
    }
}

/// Key identifiers for one fighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub attack: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterDef {
    pub name: String,
    pub position: Vector,
    /// Pixels between the art's top-left corner and the body.
    pub offset: Vector,
    pub scale: f32,
    pub hit_box: HitBox,
    /// Attack animation frame on which the hit box is live.
    pub active_frame: usize,
    pub sheets: StateSheets,
    pub controls: Controls,
}

impl FighterDef {
    pub fn build(&self, loader: &mut dyn SheetLoader) -> Result<Fighter, FightError> {
        let sheets = &self.sheets;
        let states = StateBank {
            idle: sheets.idle.build(loader)?,
            run: sheets.run.build(loader)?,
            jump: sheets.jump.build(loader)?,
            fall: sheets.fall.build(loader)?,
            attack1: sheets.attack1.build(loader)?,
            take_hit: sheets.take_hit.build(loader)?,
            death: sheets.death.build(loader)?,
        };
        if self.active_frame >= states.attack1.frames.get() {
            return Err(FightError::InvalidConfiguration(format!(
                "{}: active frame {} is past the {}-frame attack",
                self.name, self.active_frame, states.attack1.frames
            )));
        }
        Ok(
            Fighter::new(&self.name, self.position, states, self.hit_box, self.active_frame)
                .with_render(self.offset, self.scale),
        )
    }
}

fn default_scale() -> f32 {
    1.0
}

fn default_frames() -> usize {
    1
}

/// One scenery layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerDef {
    /// Flat colour fill; covers the whole arena when `size` is omitted.
    Rect {
        #[serde(default)]
        position: Vector,
        #[serde(default)]
        size: Option<Size>,
        color: Color,
        z: i32,
    },
    /// Image, animated when `frames` is above one.
    Picture {
        path: String,
        #[serde(default)]
        position: Vector,
        #[serde(default = "default_scale")]
        scale: f32,
        #[serde(default = "default_frames")]
        frames: usize,
        z: i32,
    },
}

impl LayerDef {
    pub fn build(
        &self,
        arena: &Arena,
        loader: &mut dyn SheetLoader,
    ) -> Result<(Sprite, ZIndex), FightError> {
        match self {
            LayerDef::Rect {
                position,
                size,
                color,
                z,
            } => {
                let size = size.unwrap_or(Size::new(arena.width, arena.height));
                Ok((Sprite::solid(*position, size, *color), ZIndex(*z)))
            }
            LayerDef::Picture {
                path,
                position,
                scale,
                frames,
                z,
            } => {
                let sprite = Sprite::new(*position, loader.load(path)).with_scale(*scale);
                let sprite = match frames {
                    0 => {
                        return Err(FightError::InvalidConfiguration(format!(
                            "layer '{path}' must have at least one frame"
                        )));
                    }
                    1 => sprite,
                    n => sprite.with_animation(Animation::new(*n)?),
                };
                Ok((sprite, ZIndex(*z)))
            }
        }
    }
}

/// Everything needed to set up a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub fighters: Vec<FighterDef>,
    #[serde(default)]
    pub scenery: Vec<LayerDef>,
}

impl Default for Roster {
    fn default() -> Self {
        let samurai = FighterDef {
            name: "Samurai Mack".to_string(),
            position: Vector::new(0.0, 0.0),
            offset: Vector::new(215.0, 157.0),
            scale: 2.5,
            hit_box: HitBox::new(Vector::new(100.0, 50.0), 160.0, 50.0),
            active_frame: 4,
            sheets: StateSheets::in_dir(
                "./assets/img/samuraiMack",
                "Take Hit - white silhouette",
                [8, 8, 2, 2, 6, 4, 6],
            ),
            controls: Controls {
                left: "a".to_string(),
                right: "d".to_string(),
                jump: "w".to_string(),
                attack: " ".to_string(),
            },
        };
        let kenji = FighterDef {
            name: "Kenji".to_string(),
            position: Vector::new(400.0, 100.0),
            offset: Vector::new(215.0, 167.0),
            scale: 2.5,
            hit_box: HitBox::new(Vector::new(-170.0, 50.0), 170.0, 50.0),
            active_frame: 2,
            sheets: StateSheets::in_dir("./assets/img/kenji", "Take hit", [4, 8, 2, 2, 4, 3, 7]),
            controls: Controls {
                left: "ArrowLeft".to_string(),
                right: "ArrowRight".to_string(),
                jump: "ArrowUp".to_string(),
                attack: "ArrowDown".to_string(),
            },
        };
        let scenery = vec![
            LayerDef::Rect {
                position: Vector::ZERO,
                size: None,
                color: Color::BLACK,
                z: 0,
            },
            LayerDef::Picture {
                path: "./assets/img/background.png".to_string(),
                position: Vector::ZERO,
                scale: 1.0,
                frames: 1,
                z: 1,
            },
            LayerDef::Picture {
                path: "./assets/img/shop.png".to_string(),
                position: Vector::new(600.0, 128.0),
                scale: 2.75,
                frames: 6,
                z: 2,
            },
            LayerDef::Rect {
                position: Vector::ZERO,
                size: None,
                color: Color::WHITE.with_opacity(0.15),
                z: 3,
            },
        ];
        Roster {
            fighters: vec![samurai, kenji],
            scenery,
        }
    }
}

impl Roster {
    pub fn from_json_str(json: &str) -> Result<Self, FightError> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FightError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let roster = Self::from_json_str(&json)?;
        info!(
            "Loaded roster from {:?}: {} vs {}",
            path, roster.fighters[0].name, roster.fighters[1].name
        );
        Ok(roster)
    }

    pub fn to_json(&self) -> Result<String, FightError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A match is always exactly two fighters.
    pub fn validate(&self) -> Result<(), FightError> {
        if self.fighters.len() != 2 {
            return Err(FightError::InvalidConfiguration(format!(
                "a match needs exactly two fighters, roster has {}",
                self.fighters.len()
            )));
        }
        Ok(())
    }
}
