// menu.rs — Menu state and screen switching
// Converted from: Quake/menu.c + gl_menu.c
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

use parking_lot::Mutex;

use gfxopts_common::cvar::CvarStore;

use crate::gfx_menu::{GfxMenu, GfxMenuConfig, MenuKeyResult};
use crate::keys::{key_keynum_to_string, MenuKey};
use crate::qmenu::MenuRenderer;

// ============================================================
// Collaborators
// ============================================================

/// Fire-and-forget UI sounds.
pub trait MenuSound {
    fn start_local_sound(&mut self, name: &str);
}

/// Input grabbing control.
pub trait MenuInput {
    fn is_windowed(&self) -> bool;
    /// Stop capturing the mouse; `free_cursor` also shows the OS cursor.
    fn deactivate(&mut self, free_cursor: bool);
}

pub const MENU_ENTER_SOUND: &str = "misc/menu2.wav";

// ============================================================
// State
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Off,
    Options,
    GfxOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyDest {
    #[default]
    Game,
    Console,
    Menu,
}

pub struct MenuSystem {
    pub state: MenuState,
    pub key_dest: KeyDest,
    /// Play the enter sound on the next draw.
    pub entersound: bool,
    pub gfx: GfxMenu,
}

impl MenuSystem {
    pub fn new(config: &GfxMenuConfig) -> Self {
        Self {
            state: MenuState::Off,
            key_dest: KeyDest::Game,
            entersound: false,
            gfx: GfxMenu::new(config),
        }
    }

    fn switch_to(&mut self, state: MenuState) {
        log::debug!("menu: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Open the graphics options screen.
    pub fn menu_gfx_f(&mut self, input: &mut dyn MenuInput) {
        let windowed = input.is_windowed();
        input.deactivate(windowed);
        self.key_dest = KeyDest::Menu;
        self.switch_to(MenuState::GfxOptions);
        self.entersound = true;
        self.gfx.enter();
    }

    /// Return to the parent options screen. Its contents live elsewhere.
    pub fn menu_options_f(&mut self) {
        self.key_dest = KeyDest::Menu;
        self.switch_to(MenuState::Options);
        self.entersound = true;
    }

    pub fn force_menu_off(&mut self) {
        self.switch_to(MenuState::Off);
        self.key_dest = KeyDest::Game;
        self.entersound = false;
    }

    pub fn keydown(&mut self, key: i32, cvars: &mut dyn CvarStore, sound: &mut dyn MenuSound) {
        if self.state != MenuState::GfxOptions {
            return;
        }
        let Some(menu_key) = MenuKey::from_keynum(key) else {
            log::trace!("gfx menu: ignoring {}", key_keynum_to_string(key));
            return;
        };

        match self.gfx.key(menu_key, cvars) {
            MenuKeyResult::Sound(name) => sound.start_local_sound(name),
            MenuKeyResult::EnterSound => self.entersound = true,
            MenuKeyResult::Leave => self.menu_options_f(),
        }
    }

    pub fn draw(&mut self, renderer: &mut dyn MenuRenderer, cvars: &dyn CvarStore, sound: &mut dyn MenuSound) {
        if self.state == MenuState::Off || self.key_dest != KeyDest::Menu {
            return;
        }

        if self.state == MenuState::GfxOptions {
            self.gfx.draw(renderer, cvars);
        }

        if self.entersound {
            sound.start_local_sound(MENU_ENTER_SOUND);
            self.entersound = false;
        }
    }
}

impl Default for MenuSystem {
    fn default() -> Self {
        Self::new(&GfxMenuConfig::default())
    }
}

// ============================================================
// Global instance
// ============================================================

static MENU: Mutex<Option<MenuSystem>> = Mutex::new(None);

pub fn m_init(config: &GfxMenuConfig) {
    *MENU.lock() = Some(MenuSystem::new(config));
}

pub fn m_shutdown() {
    *MENU.lock() = None;
}

/// Access the global menu system with a closure. Returns None if not initialized.
pub fn with_menu<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut MenuSystem) -> R,
{
    MENU.lock().as_mut().map(f)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{K_DOWNARROW, K_ENTER, K_ESCAPE, K_RIGHTARROW, K_TAB, K_UPARROW};
    use crate::qmenu::tests::MockRenderer;
    use crate::gfx_menu::{register_gfx_cvars, MENU_CHANGE_SOUND, MENU_MOVE_SOUND};
    use gfxopts_common::cvar::{with_cvar_ctx, cvar_init, CvarContext};

    #[derive(Default)]
    struct MockSound {
        played: Vec<String>,
    }

    impl MenuSound for MockSound {
        fn start_local_sound(&mut self, name: &str) {
            self.played.push(name.to_string());
        }
    }

    #[derive(Default)]
    struct MockInput {
        windowed: bool,
        deactivated: Vec<bool>,
    }

    impl MenuInput for MockInput {
        fn is_windowed(&self) -> bool {
            self.windowed
        }
        fn deactivate(&mut self, free_cursor: bool) {
            self.deactivated.push(free_cursor);
        }
    }

    fn setup() -> (MenuSystem, CvarContext, MockSound) {
        let mut cvars = CvarContext::new();
        register_gfx_cvars(&mut cvars);
        (MenuSystem::default(), cvars, MockSound::default())
    }

    #[test]
    fn test_enter_gfx_menu() {
        let (mut m, _cvars, _sound) = setup();
        let mut input = MockInput { windowed: true, ..Default::default() };
        m.menu_gfx_f(&mut input);

        assert_eq!(m.state, MenuState::GfxOptions);
        assert_eq!(m.key_dest, KeyDest::Menu);
        assert!(m.entersound);
        assert_eq!(input.deactivated, vec![true]);
    }

    #[test]
    fn test_enter_fullscreen_keeps_cursor_hidden() {
        let (mut m, _cvars, _sound) = setup();
        let mut input = MockInput::default();
        m.menu_gfx_f(&mut input);
        assert_eq!(input.deactivated, vec![false]);
    }

    #[test]
    fn test_enter_sound_plays_once_on_draw() {
        let (mut m, cvars, mut sound) = setup();
        m.menu_gfx_f(&mut MockInput::default());

        let mut r = MockRenderer::new();
        m.draw(&mut r, &cvars, &mut sound);
        m.draw(&mut r, &cvars, &mut sound);
        assert_eq!(sound.played, vec![MENU_ENTER_SOUND.to_string()]);
        assert!(!r.chars.is_empty());
    }

    #[test]
    fn test_keys_play_feedback_sounds() {
        let (mut m, mut cvars, mut sound) = setup();
        m.menu_gfx_f(&mut MockInput::default());
        m.entersound = false;

        m.keydown(K_DOWNARROW, &mut cvars, &mut sound);
        m.keydown(K_RIGHTARROW, &mut cvars, &mut sound);
        m.keydown(K_TAB, &mut cvars, &mut sound);

        assert_eq!(sound.played, vec![MENU_MOVE_SOUND.to_string(), MENU_CHANGE_SOUND.to_string()]);
        assert_eq!(m.gfx.cursor(), 1);
        assert_eq!(cvars.variable_value("gl_texture_anisotropy"), 2.0);
    }

    #[test]
    fn test_confirm_sets_entersound() {
        let (mut m, mut cvars, mut sound) = setup();
        m.menu_gfx_f(&mut MockInput::default());
        m.entersound = false;

        m.keydown(K_ENTER, &mut cvars, &mut sound);
        assert!(m.entersound);
        assert!(sound.played.is_empty());
        assert_eq!(cvars.variable_string("gl_texturemode"), "GL_NEAREST");
    }

    #[test]
    fn test_escape_returns_to_options() {
        let (mut m, mut cvars, mut sound) = setup();
        m.menu_gfx_f(&mut MockInput::default());
        m.keydown(K_ESCAPE, &mut cvars, &mut sound);

        assert_eq!(m.state, MenuState::Options);
        assert_eq!(m.key_dest, KeyDest::Menu);

        // keys no longer reach the graphics screen
        m.keydown(K_UPARROW, &mut cvars, &mut sound);
        assert_eq!(m.gfx.cursor(), 0);
    }

    #[test]
    fn test_cursor_retained_across_visits() {
        let (mut m, mut cvars, mut sound) = setup();
        let mut input = MockInput::default();
        m.menu_gfx_f(&mut input);
        m.keydown(K_UPARROW, &mut cvars, &mut sound);
        m.keydown(K_ESCAPE, &mut cvars, &mut sound);
        m.menu_gfx_f(&mut input);
        assert_eq!(m.gfx.cursor(), m.gfx.options().len() - 1);
    }

    #[test]
    fn test_force_menu_off() {
        let (mut m, cvars, mut sound) = setup();
        m.menu_gfx_f(&mut MockInput::default());
        m.force_menu_off();
        assert_eq!(m.state, MenuState::Off);
        assert_eq!(m.key_dest, KeyDest::Game);

        let mut r = MockRenderer::new();
        m.draw(&mut r, &cvars, &mut sound);
        assert!(r.chars.is_empty());
        assert!(sound.played.is_empty());
    }

    #[test]
    fn test_global_menu_with_global_cvars() {
        cvar_init();
        with_cvar_ctx(register_gfx_cvars);
        m_init(&GfxMenuConfig::default());

        let mut sound = MockSound::default();
        with_menu(|m| m.menu_gfx_f(&mut MockInput::default()));
        with_menu(|m| {
            with_cvar_ctx(|cvars| {
                m.keydown(K_DOWNARROW, cvars, &mut sound);
                m.keydown(K_RIGHTARROW, cvars, &mut sound);
            })
        });

        let aniso = with_cvar_ctx(|c| c.variable_value("gl_texture_anisotropy"));
        assert_eq!(aniso, Some(2.0));
        assert_eq!(with_menu(|m| m.gfx.cursor()), Some(1));

        m_shutdown();
        assert!(with_menu(|m| m.state).is_none());
    }
}
