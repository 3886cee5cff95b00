// gfx_menu.rs — Graphics options menu
// Converted from: Quake/gl_menu.c + gfx_menu.c
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

use gfxopts_common::common::com_dprintf;
use gfxopts_common::cvar::{CvarContext, CvarStore};
use gfxopts_common::q_shared::CvarFlags;

use crate::keys::MenuKey;
use crate::qmenu::{
    centered_text_x, cursor_glyph, m_draw_character, m_draw_pic, m_draw_slider,
    m_draw_trans_pic, m_print, m_print_white, MenuRenderer, MENU_VIRTUAL_WIDTH,
};

// ============================================================
// Value tables
// ============================================================

pub const TEXTURE_FILTER_MODES: &[&str] = &[
    "GL_NEAREST",
    "GL_NEAREST_MIPMAP_NEAREST",
    "GL_NEAREST_MIPMAP_LINEAR",
    "GL_LINEAR",
    "GL_LINEAR_MIPMAP_NEAREST",
    "GL_LINEAR_MIPMAP_LINEAR",
];

pub const PARTICLE_STYLES: &[&str] = &["None", "Smooth", "Classic"];

pub const LERP_STYLES: &[&str] = &["Off", "On (except flames)", "On (all)"];

pub const KICK_STYLES: &[&str] = &["Off", "Classic", "Smooth"];

pub const ANISOTROPY_STEPS: &[f32] = &[1.0, 2.0, 4.0, 8.0, 16.0];

pub const DEFAULT_MAX_RENDER_SCALE: i32 = 4;
pub const RENDER_SCALE_LIMIT: i32 = 16;

// ============================================================
// Sounds and layout
// ============================================================

pub const MENU_MOVE_SOUND: &str = "misc/menu1.wav";
pub const MENU_CHANGE_SOUND: &str = "misc/menu3.wav";

const PLAQUE_PIC: &str = "gfx/qplaque.lmp";
const TITLE_PIC: &str = "gfx/p_option.lmp";
const TITLE: &str = "Graphics Options";

const LABEL_X: i32 = 16;
const LABEL_WIDTH: usize = 18;
const CURSOR_X: i32 = 168;
const VALUE_X: i32 = 184;
const READOUT_X: i32 = 280;
const ROW_HEIGHT: i32 = 8;

// ============================================================
// Option descriptors
// ============================================================

/// The legal values of one option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValues {
    /// String cvar that must hold one of these names.
    Names(&'static [&'static str]),
    /// Numeric cvar holding an index into these labels.
    Labels(&'static [&'static str]),
    /// Numeric cvar that must hold one of these values, in ascending order.
    Steps(Vec<f32>),
}

impl OptionValues {
    pub fn len(&self) -> usize {
        match self {
            OptionValues::Names(v) | OptionValues::Labels(v) => v.len(),
            OptionValues::Steps(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    /// Current value printed as text.
    Text,
    /// Slider plus the raw cvar string.
    Slider,
}

/// Runs after an option writes its cvar.
pub type OnChangeFn = fn(&mut dyn CvarStore);

/// One row of the menu.
#[derive(Clone)]
pub struct OptionDescriptor {
    pub label: &'static str,
    pub cvar: &'static str,
    pub values: OptionValues,
    pub style: OptionStyle,
    pub on_change: Option<OnChangeFn>,
}

/// Next index in a `len`-long sequence, wrapping at both ends.
/// A value that was not found (`None`) restarts at the first index.
pub fn cycle_index(current: Option<usize>, len: usize, dir: i32) -> usize {
    let Some(i) = current else {
        return 0;
    };

    let next = i as i64 + dir as i64;
    if next >= len as i64 {
        0
    } else if next < 0 {
        len.saturating_sub(1)
    } else {
        next as usize
    }
}

impl OptionDescriptor {
    /// Index of the cvar's current value, or None if it is not a legal one.
    pub fn current_index(&self, cvars: &dyn CvarStore) -> Option<usize> {
        match &self.values {
            OptionValues::Names(names) => {
                let current = cvars.variable_string(self.cvar);
                names.iter().position(|n| *n == current)
            }
            OptionValues::Labels(labels) => {
                let v = cvars.variable_value(self.cvar);
                (0..labels.len()).find(|&i| i as f32 == v)
            }
            OptionValues::Steps(steps) => {
                let v = cvars.variable_value(self.cvar);
                steps.iter().position(|&s| s == v)
            }
        }
    }

    /// Write the value at `index` and run the change hook.
    pub fn set_index(&self, cvars: &mut dyn CvarStore, index: usize) {
        match &self.values {
            OptionValues::Names(names) => cvars.set(self.cvar, names[index]),
            OptionValues::Labels(_) => cvars.set_value(self.cvar, index as f32),
            OptionValues::Steps(steps) => cvars.set_value(self.cvar, steps[index]),
        }

        if let Some(on_change) = self.on_change {
            on_change(cvars);
        }
    }

    /// Move the cvar one legal value in `dir` (-1 or 1), wrapping around.
    /// Returns the new index.
    pub fn cycle(&self, cvars: &mut dyn CvarStore, dir: i32) -> usize {
        let current = self.current_index(cvars);
        if current.is_none() {
            com_dprintf(&format!(
                "{}: \"{}\" is not a menu choice, resetting\n",
                self.cvar,
                cvars.variable_string(self.cvar)
            ));
        }

        let next = cycle_index(current, self.values.len(), dir);
        self.set_index(cvars, next);
        next
    }

    /// Text shown in the value column of a text row.
    pub fn value_text(&self, cvars: &dyn CvarStore) -> String {
        match &self.values {
            OptionValues::Labels(labels) => match self.current_index(cvars) {
                Some(i) => labels[i].to_string(),
                None => cvars.variable_string(self.cvar),
            },
            _ => cvars.variable_string(self.cvar),
        }
    }

    /// Slider position: the value normalized linearly over the step range.
    pub fn slider_fraction(&self, cvars: &dyn CvarStore) -> f32 {
        let OptionValues::Steps(steps) = &self.values else {
            return 0.0;
        };
        let (Some(&first), Some(&last)) = (steps.first(), steps.last()) else {
            return 0.0;
        };
        if last == first {
            return 0.0;
        }

        let v = cvars.variable_value(self.cvar);
        ((v - first) / (last - first)).clamp(0.0, 1.0)
    }
}

// ============================================================
// Option table
// ============================================================

/// Model interpolation also drives movement interpolation. Follows the
/// stored value, which a protected or latched cvar may not have taken.
fn sync_lerp_move(cvars: &mut dyn CvarStore) {
    let lerp = cvars.variable_value("r_lerpmodels");
    cvars.set_value("r_lerpmove", if lerp == 0.0 { 0.0 } else { 1.0 });
}

/// Render scale steps, 1 through `max_render_scale` clamped to
/// 1..=`RENDER_SCALE_LIMIT`.
pub fn render_scale_steps(max_render_scale: i32) -> Vec<f32> {
    (1..=max_render_scale.clamp(1, RENDER_SCALE_LIMIT)).map(|v| v as f32).collect()
}

/// Which set of rows the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GfxMenuLayout {
    /// Filter, anisotropy, particles, interpolation, render scale.
    Classic,
    /// Classic plus the recoil kick row.
    #[default]
    Extended,
}

/// What happens to the cursor when the screen is entered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    #[default]
    Retain,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfxMenuConfig {
    pub layout: GfxMenuLayout,
    pub max_render_scale: i32,
    pub cursor_policy: CursorPolicy,
}

impl Default for GfxMenuConfig {
    fn default() -> Self {
        Self {
            layout: GfxMenuLayout::default(),
            max_render_scale: DEFAULT_MAX_RENDER_SCALE,
            cursor_policy: CursorPolicy::default(),
        }
    }
}

/// Build the rows for a configuration.
pub fn gfx_options(config: &GfxMenuConfig) -> Vec<OptionDescriptor> {
    let mut options = vec![
        OptionDescriptor {
            label: "Filter mode",
            cvar: "gl_texturemode",
            values: OptionValues::Names(TEXTURE_FILTER_MODES),
            style: OptionStyle::Text,
            on_change: None,
        },
        OptionDescriptor {
            label: "Anisotropy",
            cvar: "gl_texture_anisotropy",
            values: OptionValues::Steps(ANISOTROPY_STEPS.to_vec()),
            style: OptionStyle::Slider,
            on_change: None,
        },
        OptionDescriptor {
            label: "Particles",
            cvar: "r_particles",
            values: OptionValues::Labels(PARTICLE_STYLES),
            style: OptionStyle::Text,
            on_change: None,
        },
        OptionDescriptor {
            label: "Interpolate",
            cvar: "r_lerpmodels",
            values: OptionValues::Labels(LERP_STYLES),
            style: OptionStyle::Text,
            on_change: Some(sync_lerp_move),
        },
    ];

    if config.layout == GfxMenuLayout::Extended {
        options.push(OptionDescriptor {
            label: "Recoil kick",
            cvar: "v_gunkick",
            values: OptionValues::Labels(KICK_STYLES),
            style: OptionStyle::Text,
            on_change: None,
        });
    }

    options.push(OptionDescriptor {
        label: "Render scale",
        cvar: "r_scale",
        values: OptionValues::Steps(render_scale_steps(config.max_render_scale)),
        style: OptionStyle::Slider,
        on_change: None,
    });

    options
}

/// Register the cvars the menu edits. Existing values are kept.
pub fn register_gfx_cvars(cvars: &mut CvarContext) {
    const DEFAULTS: &[(&str, &str)] = &[
        ("gl_texturemode", "GL_LINEAR_MIPMAP_LINEAR"),
        ("gl_texture_anisotropy", "1"),
        ("r_particles", "1"),
        ("r_lerpmodels", "1"),
        ("r_lerpmove", "1"),
        ("v_gunkick", "1"),
        ("r_scale", "1"),
    ];

    for &(name, value) in DEFAULTS {
        cvars.get(name, value, CvarFlags::ARCHIVE);
    }
}

// ============================================================
// Screen
// ============================================================

/// What the menu framework should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKeyResult {
    Sound(&'static str),
    /// Play the enter sound on the next frame.
    EnterSound,
    /// Go back to the parent options menu.
    Leave,
}

pub struct GfxMenu {
    options: Vec<OptionDescriptor>,
    cursor: usize,
    cursor_policy: CursorPolicy,
}

impl Default for GfxMenu {
    fn default() -> Self {
        Self::new(&GfxMenuConfig::default())
    }
}

impl GfxMenu {
    pub fn new(config: &GfxMenuConfig) -> Self {
        Self {
            options: gfx_options(config),
            cursor: 0,
            cursor_policy: config.cursor_policy,
        }
    }

    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Called each time the screen becomes active.
    pub fn enter(&mut self) {
        if self.cursor_policy == CursorPolicy::Reset {
            self.cursor = 0;
        }
    }

    pub fn key(&mut self, key: MenuKey, cvars: &mut dyn CvarStore) -> MenuKeyResult {
        let count = self.options.len();

        match key {
            MenuKey::Back => MenuKeyResult::Leave,
            MenuKey::Up => {
                self.cursor = if self.cursor == 0 { count - 1 } else { self.cursor - 1 };
                MenuKeyResult::Sound(MENU_MOVE_SOUND)
            }
            MenuKey::Down => {
                self.cursor += 1;
                if self.cursor >= count {
                    self.cursor = 0;
                }
                MenuKeyResult::Sound(MENU_MOVE_SOUND)
            }
            MenuKey::Left => {
                self.options[self.cursor].cycle(cvars, -1);
                MenuKeyResult::Sound(MENU_CHANGE_SOUND)
            }
            MenuKey::Right => {
                self.options[self.cursor].cycle(cvars, 1);
                MenuKeyResult::Sound(MENU_CHANGE_SOUND)
            }
            MenuKey::Confirm => {
                self.options[self.cursor].cycle(cvars, 1);
                MenuKeyResult::EnterSound
            }
        }
    }

    pub fn draw(&self, renderer: &mut dyn MenuRenderer, cvars: &dyn CvarStore) {
        let mut y = 4;

        m_draw_trans_pic(renderer, 16, y, PLAQUE_PIC);
        let (w, _h) = renderer.pic_size(TITLE_PIC);
        m_draw_pic(renderer, (MENU_VIRTUAL_WIDTH - w) / 2, y, TITLE_PIC);

        y += 28;
        m_print_white(renderer, centered_text_x(TITLE), y, TITLE);

        y += 16;
        let glyph = cursor_glyph(renderer.sys_milliseconds());

        for (i, option) in self.options.iter().enumerate() {
            m_print(renderer, LABEL_X, y, &format!("{:>width$}", option.label, width = LABEL_WIDTH));

            match option.style {
                OptionStyle::Text => {
                    m_print(renderer, VALUE_X, y, &option.value_text(cvars));
                }
                OptionStyle::Slider => {
                    m_draw_slider(renderer, VALUE_X, y, option.slider_fraction(cvars));
                    m_print(renderer, READOUT_X, y, &cvars.variable_string(option.cvar));
                }
            }

            if self.cursor == i {
                m_draw_character(renderer, CURSOR_X, y, glyph);
            }

            y += ROW_HEIGHT;
        }
    }
}

// ============================================================
// Tests
// ============================================================
