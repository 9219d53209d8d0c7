//! Frontline, a terminal arcade game.
//!
//! A soldier holds its ground on a fixed playfield against an enemy that
//! advances from the left with a stepped acceleration profile; one bullet
//! at a time can stop it. The library half is the simulation core and is
//! pure: no terminal, no timing, no I/O. The binary half (`main.rs` plus
//! its `display` module) owns the terminal and the frame clock.

pub mod compute;
pub mod entities;
pub mod geometry;
pub mod input;
