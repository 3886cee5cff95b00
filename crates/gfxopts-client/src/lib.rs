#![allow(clippy::float_cmp, clippy::new_without_default)]
// Client layer: key input, menu drawing and the graphics options screen

pub mod keys;
pub mod qmenu;
pub mod gfx_menu;
pub mod menu;
