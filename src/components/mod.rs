//! ECS components and the value types they are built from.
//!
//! Submodules overview:
//! - [`geometry`] – vectors, sizes and rectangles with the overlap test
//! - [`animation`] – frame cycler with a fixed frame hold
//! - [`composable`] – named container of updatable sub-components
//! - [`drawable`] – the draw capability and its rectangle/picture shapes
//! - [`sprite`] – positioned, optionally animated drawable
//! - [`hitbox`] – melee box anchored to its owner
//! - [`fighterstate`] – visual states and the sheets backing them
//! - [`fighter`] – the fighter entity, its slot and state machine
//! - [`controller`] – held direction keys for a fighter
//! - [`zindex`] – paint order of scenery layers

pub mod animation;
pub mod composable;
pub mod controller;
pub mod drawable;
pub mod fighter;
pub mod fighterstate;
pub mod geometry;
pub mod hitbox;
pub mod sprite;
pub mod zindex;
