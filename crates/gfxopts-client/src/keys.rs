// keys.rs — key numbers and menu key translation
// Converted from: Quake/keys.c + keys.h
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

// ============================================================
// Key constants
// ============================================================

pub const K_TAB: i32 = 9;
pub const K_ENTER: i32 = 13;
pub const K_ESCAPE: i32 = 27;
pub const K_UPARROW: i32 = 128;
pub const K_DOWNARROW: i32 = 129;
pub const K_LEFTARROW: i32 = 130;
pub const K_RIGHTARROW: i32 = 131;

pub const K_KP_UPARROW: i32 = 161;
pub const K_KP_LEFTARROW: i32 = 163;
pub const K_KP_RIGHTARROW: i32 = 165;
pub const K_KP_DOWNARROW: i32 = 167;
pub const K_KP_ENTER: i32 = 169;

pub const K_MOUSE1: i32 = 200;

// gamepad face buttons
pub const K_ABUTTON: i32 = 243;
pub const K_BBUTTON: i32 = 244;

// ============================================================
// Key name table
// ============================================================

struct KeyName {
    name: &'static str,
    keynum: i32,
}

static KEYNAMES: &[KeyName] = &[
    KeyName { name: "TAB", keynum: K_TAB },
    KeyName { name: "ENTER", keynum: K_ENTER },
    KeyName { name: "ESCAPE", keynum: K_ESCAPE },
    KeyName { name: "UPARROW", keynum: K_UPARROW },
    KeyName { name: "DOWNARROW", keynum: K_DOWNARROW },
    KeyName { name: "LEFTARROW", keynum: K_LEFTARROW },
    KeyName { name: "RIGHTARROW", keynum: K_RIGHTARROW },
    KeyName { name: "KP_UPARROW", keynum: K_KP_UPARROW },
    KeyName { name: "KP_LEFTARROW", keynum: K_KP_LEFTARROW },
    KeyName { name: "KP_RIGHTARROW", keynum: K_KP_RIGHTARROW },
    KeyName { name: "KP_DOWNARROW", keynum: K_KP_DOWNARROW },
    KeyName { name: "KP_ENTER", keynum: K_KP_ENTER },
    KeyName { name: "MOUSE1", keynum: K_MOUSE1 },
    KeyName { name: "ABUTTON", keynum: K_ABUTTON },
    KeyName { name: "BBUTTON", keynum: K_BBUTTON },
];

/// Returns a string for the given keynum.
pub fn key_keynum_to_string(keynum: i32) -> String {
    if keynum == -1 {
        return "<KEY NOT FOUND>".to_string();
    }
    if keynum > 32 && keynum < 127 {
        return String::from(keynum as u8 as char);
    }

    KEYNAMES
        .iter()
        .find(|kn| kn.keynum == keynum)
        .map_or_else(|| "<UNKNOWN KEYNUM>".to_string(), |kn| kn.name.to_string())
}

// ============================================================
// Menu keys
// ============================================================

/// The logical inputs a menu screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
}

impl MenuKey {
    /// Map a raw key number to a menu key. Keys menus ignore map to None.
    pub fn from_keynum(key: i32) -> Option<MenuKey> {
        match key {
            K_UPARROW | K_KP_UPARROW => Some(MenuKey::Up),
            K_DOWNARROW | K_KP_DOWNARROW => Some(MenuKey::Down),
            K_LEFTARROW | K_KP_LEFTARROW => Some(MenuKey::Left),
            K_RIGHTARROW | K_KP_RIGHTARROW => Some(MenuKey::Right),
            K_ENTER | K_KP_ENTER | K_ABUTTON => Some(MenuKey::Confirm),
            K_ESCAPE | K_BBUTTON => Some(MenuKey::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_keynum_to_string() {
        assert_eq!(key_keynum_to_string(K_ESCAPE), "ESCAPE");
        assert_eq!(key_keynum_to_string(b'x' as i32), "x");
        assert_eq!(key_keynum_to_string(-1), "<KEY NOT FOUND>");
        assert_eq!(key_keynum_to_string(250), "<UNKNOWN KEYNUM>");
    }

    #[test]
    fn test_menu_key_arrows_and_keypad() {
        assert_eq!(MenuKey::from_keynum(K_UPARROW), Some(MenuKey::Up));
        assert_eq!(MenuKey::from_keynum(K_KP_UPARROW), Some(MenuKey::Up));
        assert_eq!(MenuKey::from_keynum(K_DOWNARROW), Some(MenuKey::Down));
        assert_eq!(MenuKey::from_keynum(K_KP_DOWNARROW), Some(MenuKey::Down));
        assert_eq!(MenuKey::from_keynum(K_LEFTARROW), Some(MenuKey::Left));
        assert_eq!(MenuKey::from_keynum(K_KP_LEFTARROW), Some(MenuKey::Left));
        assert_eq!(MenuKey::from_keynum(K_RIGHTARROW), Some(MenuKey::Right));
        assert_eq!(MenuKey::from_keynum(K_KP_RIGHTARROW), Some(MenuKey::Right));
    }

    #[test]
    fn test_menu_key_confirm_and_back() {
        assert_eq!(MenuKey::from_keynum(K_ENTER), Some(MenuKey::Confirm));
        assert_eq!(MenuKey::from_keynum(K_KP_ENTER), Some(MenuKey::Confirm));
        assert_eq!(MenuKey::from_keynum(K_ABUTTON), Some(MenuKey::Confirm));
        assert_eq!(MenuKey::from_keynum(K_ESCAPE), Some(MenuKey::Back));
        assert_eq!(MenuKey::from_keynum(K_BBUTTON), Some(MenuKey::Back));
    }

    #[test]
    fn test_menu_key_ignored() {
        assert_eq!(MenuKey::from_keynum(K_TAB), None);
        assert_eq!(MenuKey::from_keynum(b'a' as i32), None);
        assert_eq!(MenuKey::from_keynum(K_MOUSE1), None);
    }
}
