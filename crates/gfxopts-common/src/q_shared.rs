// q_shared.rs — definitions shared by the common and client layers
// Converted from: Quake/cvar.h
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

// ============================================================
// Cvar flags
// ============================================================

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CvarFlags: u32 {
        /// Saved to the config file by the host.
        const ARCHIVE = 0x01;
        /// Cannot be changed from the console.
        const NOSET   = 0x08;
        /// Changes wait until the next map while a server is running.
        const LATCH   = 0x10;
    }
}

/// Format a float the way the console shows cvar values:
/// integral values print without a fractional part.
pub fn format_cvar_value(value: f32) -> String {
    if value == (value as i32) as f32 {
        format!("{}", value as i32)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral() {
        assert_eq!(format_cvar_value(16.0), "16");
        assert_eq!(format_cvar_value(0.0), "0");
        assert_eq!(format_cvar_value(-2.0), "-2");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_cvar_value(0.5), "0.5");
    }

    #[test]
    fn test_cvar_flags_combine() {
        let flags = CvarFlags::ARCHIVE | CvarFlags::LATCH;
        assert!(flags.contains(CvarFlags::ARCHIVE));
        assert!(!flags.contains(CvarFlags::NOSET));
    }
}
