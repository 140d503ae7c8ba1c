//! ECS resources and match setup data.
//!
//! Overview
//! - `arena` – playfield size and physics constants
//! - `countdown` – whole-second match timer
//! - `debugmode` – presence toggles body and hit box outlines
//! - `gameconfig` – INI-backed settings
//! - `input` – key binding table and pending key events
//! - `matchstatus` – fighting or over, with the outcome
//! - `roster` – JSON fighter and scenery definitions
//! - `sheetloader` – image path to sprite sheet resolution
//! - `texturestore` – raylib textures keyed by path (feature `window`)
//! - `worldtime` – wall-clock time and frame count
pub mod arena;
pub mod countdown;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod matchstatus;
pub mod roster;
pub mod sheetloader;
#[cfg(feature = "window")]
pub mod texturestore;
pub mod worldtime;
