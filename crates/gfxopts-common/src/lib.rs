#![allow(clippy::float_cmp, clippy::new_without_default)]
// Common layer: cvars, console printing, shared definitions

pub mod q_shared;
pub mod common;
pub mod cvar;
