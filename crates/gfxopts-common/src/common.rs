// common.rs — console printing and developer logging
// Converted from: Quake/common.c
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

// ============================================================
// Redirect buffer for Com_Printf
// ============================================================

static RD_BUFFER: Mutex<Option<String>> = Mutex::new(None);

static DEVELOPER: AtomicBool = AtomicBool::new(false);

/// Begin redirecting printf output into a buffer.
pub fn com_begin_redirect() {
    *RD_BUFFER.lock() = Some(String::new());
}

/// End redirect and return the captured output.
pub fn com_end_redirect() -> Option<String> {
    RD_BUFFER.lock().take()
}

// ============================================================
// Com_Printf / Com_DPrintf
// ============================================================

/// General-purpose print function. Prints to stdout, or appends to the
/// redirect buffer while one is active.
pub fn com_printf(msg: &str) {
    {
        let mut buf = RD_BUFFER.lock();
        if let Some(ref mut s) = *buf {
            s.push_str(msg);
            return;
        }
    }
    print!("{}", msg);
}

/// Enable or disable console echo of developer messages.
pub fn com_set_developer(enabled: bool) {
    DEVELOPER.store(enabled, Ordering::Relaxed);
}

pub fn com_developer() -> bool {
    DEVELOPER.load(Ordering::Relaxed)
}

/// Developer-only print. Always goes to the log facade; echoed to the
/// console only in developer mode.
pub fn com_dprintf(msg: &str) {
    log::debug!("{}", msg.trim_end());
    if !com_developer() {
        return;
    }
    com_printf(msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    // The redirect buffer and developer flag are process globals, so
    // everything touching them runs in one test.
    #[test]
    fn test_redirect_and_developer() {
        com_begin_redirect();
        com_printf("hello world\n");
        com_dprintf("hidden\n");
        com_set_developer(true);
        com_dprintf("shown\n");
        com_set_developer(false);
        let out = com_end_redirect().unwrap();
        assert!(out.contains("hello world\n"));
        assert!(out.contains("shown\n"));
        assert!(!out.contains("hidden"));
        assert!(com_end_redirect().is_none());
    }
}
