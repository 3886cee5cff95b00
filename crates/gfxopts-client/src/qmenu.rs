// qmenu.rs — menu drawing primitives
// Converted from: Quake/menu.c
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

// ============================================================
// Constants
// ============================================================

/// Menus are laid out on a 320x240 virtual screen centred in the video mode.
pub const MENU_VIRTUAL_WIDTH: i32 = 320;
pub const MENU_VIRTUAL_HEIGHT: i32 = 240;

/// Width of one conchars glyph.
pub const CHAR_WIDTH: i32 = 8;

pub const SLIDER_RANGE: i32 = 10;

// conchars glyphs used by menus
pub const CHAR_SLIDER_LEFT: i32 = 128;
pub const CHAR_SLIDER_BODY: i32 = 129;
pub const CHAR_SLIDER_RIGHT: i32 = 130;
pub const CHAR_SLIDER_THUMB: i32 = 131;
pub const CHAR_CURSOR: i32 = 12;

// ============================================================
// Rendering callback trait (provided by the renderer)
// ============================================================

/// Abstraction for drawing operations needed by the menu system.
pub trait MenuRenderer {
    fn draw_char(&mut self, x: i32, y: i32, ch: i32);
    fn draw_pic(&mut self, x: i32, y: i32, pic: &str);
    fn draw_trans_pic(&mut self, x: i32, y: i32, pic: &str);
    /// Width and height of a cached picture.
    fn pic_size(&mut self, pic: &str) -> (i32, i32);
    fn sys_milliseconds(&self) -> i32;
    fn vid_width(&self) -> i32;
    fn vid_height(&self) -> i32;
}

fn menu_origin(renderer: &dyn MenuRenderer) -> (i32, i32) {
    (
        (renderer.vid_width() - MENU_VIRTUAL_WIDTH) >> 1,
        (renderer.vid_height() - MENU_VIRTUAL_HEIGHT) >> 1,
    )
}

// ============================================================
// Drawing helpers
// ============================================================

/// Draws one solid graphics character at menu coordinates.
pub fn m_draw_character(renderer: &mut dyn MenuRenderer, cx: i32, cy: i32, num: i32) {
    let (ox, oy) = menu_origin(renderer);
    renderer.draw_char(cx + ox, cy + oy, num);
}

/// Print highlighted (brown) text at menu coordinates.
pub fn m_print(renderer: &mut dyn MenuRenderer, cx: i32, cy: i32, text: &str) {
    for (i, ch) in text.bytes().enumerate() {
        m_draw_character(renderer, cx + i as i32 * CHAR_WIDTH, cy, ch as i32 + 128);
    }
}

/// Print white text at menu coordinates.
pub fn m_print_white(renderer: &mut dyn MenuRenderer, cx: i32, cy: i32, text: &str) {
    for (i, ch) in text.bytes().enumerate() {
        m_draw_character(renderer, cx + i as i32 * CHAR_WIDTH, cy, ch as i32);
    }
}

pub fn m_draw_pic(renderer: &mut dyn MenuRenderer, x: i32, y: i32, pic: &str) {
    let (ox, oy) = menu_origin(renderer);
    renderer.draw_pic(x + ox, y + oy, pic);
}

pub fn m_draw_trans_pic(renderer: &mut dyn MenuRenderer, x: i32, y: i32, pic: &str) {
    let (ox, oy) = menu_origin(renderer);
    renderer.draw_trans_pic(x + ox, y + oy, pic);
}

/// Draw a slider with its thumb at `range` (0..1) of the way along.
pub fn m_draw_slider(renderer: &mut dyn MenuRenderer, x: i32, y: i32, range: f32) {
    let range = range.clamp(0.0, 1.0);

    m_draw_character(renderer, x - CHAR_WIDTH, y, CHAR_SLIDER_LEFT);
    for i in 0..SLIDER_RANGE {
        m_draw_character(renderer, x + i * CHAR_WIDTH, y, CHAR_SLIDER_BODY);
    }
    m_draw_character(renderer, x + SLIDER_RANGE * CHAR_WIDTH, y, CHAR_SLIDER_RIGHT);
    m_draw_character(
        renderer,
        x + ((SLIDER_RANGE - 1) as f32 * CHAR_WIDTH as f32 * range) as i32,
        y,
        CHAR_SLIDER_THUMB,
    );
}

/// Blinking cursor glyph; flips every quarter second.
pub fn cursor_glyph(milliseconds: i32) -> i32 {
    CHAR_CURSOR + ((milliseconds / 250) & 1)
}

/// X position that centres `text` on the virtual screen.
pub fn centered_text_x(text: &str) -> i32 {
    (MENU_VIRTUAL_WIDTH - CHAR_WIDTH * text.len() as i32) / 2
}

// ============================================================
// Tests
// ============================================================
