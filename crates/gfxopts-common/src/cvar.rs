// cvar.rs — dynamic variable tracking
// Converted from: Quake/cvar.c + cvar.h
//
// Copyright (C) 1996-2001 Id Software, Inc.
// Copyright (C) 2002-2009 John Fitzgibbons and others
// Copyright (C) 2007-2008 Kristian Duske
// Copyright (C) 2010-2014 QuakeSpasm developers
// Copyright (C) 2020 Daniel Abbott
// Licensed under the GNU General Public License v2

use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;

use crate::common::{com_dprintf, com_printf};
use crate::q_shared::{format_cvar_value, CvarFlags};

/// A console variable.
#[derive(Clone, Debug)]
pub struct Cvar {
    pub name: String,
    pub string: String,
    pub latched_string: Option<String>,
    pub flags: CvarFlags,
    pub modified: bool,
    pub value: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CvarError {
    #[error("{0} is write protected.")]
    WriteProtected(String),
}

/// Read/write access to named configuration variables.
///
/// Menu code only ever talks to this trait so it can run against a bare
/// `CvarContext` in tests or the engine's global one at runtime.
pub trait CvarStore {
    /// String value of a cvar, "" if it does not exist.
    fn variable_string(&self, name: &str) -> String;
    /// Float value of a cvar, 0 if it does not exist.
    fn variable_value(&self, name: &str) -> f32;
    fn set(&mut self, name: &str, value: &str);
    fn set_value(&mut self, name: &str, value: f32);
}

/// The full cvar system context.
#[derive(Default)]
pub struct CvarContext {
    pub cvar_vars: Vec<Cvar>,
    cvar_index: HashMap<String, usize>,
    /// Nonzero while a server is running; latched cvars defer changes.
    pub server_state: i32,
}

fn parse_value(s: &str) -> f32 {
    s.trim().parse::<f32>().unwrap_or(0.0)
}

fn store_value(var: &mut Cvar, value: &str) {
    if value == var.string {
        return;
    }

    var.modified = true;
    var.string = value.to_string();
    var.value = parse_value(value);
    com_dprintf(&format!("\"{}\" set to \"{}\"\n", var.name, value));
}

impl CvarContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_var_index(&self, name: &str) -> Option<usize> {
        self.cvar_index.get(name).copied()
    }

    pub fn find_var(&self, name: &str) -> Option<&Cvar> {
        self.cvar_index.get(name).map(|&idx| &self.cvar_vars[idx])
    }

    /// Get or create a cvar. If it already exists, the value is not changed
    /// but flags are OR'd in.
    pub fn get(&mut self, name: &str, value: &str, flags: CvarFlags) -> usize {
        if let Some(&idx) = self.cvar_index.get(name) {
            self.cvar_vars[idx].flags |= flags;
            return idx;
        }

        let idx = self.cvar_vars.len();
        self.cvar_vars.push(Cvar {
            name: name.to_string(),
            string: value.to_string(),
            latched_string: None,
            flags,
            modified: true,
            value: parse_value(value),
        });
        self.cvar_index.insert(name.to_string(), idx);
        idx
    }

    /// Set a cvar value, respecting NOSET and LATCH.
    pub fn try_set(&mut self, name: &str, value: &str) -> Result<usize, CvarError> {
        let Some(idx) = self.find_var_index(name) else {
            return Ok(self.get(name, value, CvarFlags::empty()));
        };
        let server_state = self.server_state;
        let var = &mut self.cvar_vars[idx];

        if var.flags.contains(CvarFlags::NOSET) {
            return Err(CvarError::WriteProtected(var.name.clone()));
        }

        if var.flags.contains(CvarFlags::LATCH) {
            match var.latched_string {
                Some(ref latched) if latched == value => return Ok(idx),
                None if var.string == value => return Ok(idx),
                _ => {}
            }

            if server_state != 0 {
                com_printf(&format!("{} will be changed for next game.\n", name));
                var.latched_string = Some(value.to_string());
            } else {
                var.string = value.to_string();
                var.value = parse_value(value);
            }
            return Ok(idx);
        }

        store_value(var, value);
        Ok(idx)
    }

    /// Force-set a cvar value (ignores NOSET and LATCH).
    pub fn force_set(&mut self, name: &str, value: &str) -> usize {
        let Some(idx) = self.find_var_index(name) else {
            return self.get(name, value, CvarFlags::empty());
        };
        let var = &mut self.cvar_vars[idx];
        var.latched_string = None;
        store_value(var, value);
        idx
    }

    /// Apply all latched variable changes.
    pub fn get_latched_vars(&mut self) {
        for var in &mut self.cvar_vars {
            if let Some(latched) = var.latched_string.take() {
                var.value = parse_value(&latched);
                var.string = latched;
                var.modified = true;
            }
        }
    }
}

impl CvarStore for CvarContext {
    fn variable_string(&self, name: &str) -> String {
        self.find_var(name).map_or(String::new(), |v| v.string.clone())
    }

    fn variable_value(&self, name: &str) -> f32 {
        self.find_var(name).map_or(0.0, |v| v.value)
    }

    fn set(&mut self, name: &str, value: &str) {
        if let Err(e) = self.try_set(name, value) {
            com_printf(&format!("{}\n", e));
        }
    }

    fn set_value(&mut self, name: &str, value: f32) {
        let s = format_cvar_value(value);
        CvarStore::set(self, name, &s);
    }
}

// ============================================================
// Global singleton
// ============================================================

static CVAR_CTX: Mutex<Option<CvarContext>> = Mutex::new(None);

pub fn cvar_init() {
    *CVAR_CTX.lock() = Some(CvarContext::new());
}

pub fn cvar_shutdown() {
    *CVAR_CTX.lock() = None;
}

/// Access the global cvar context with a closure. Returns None if not initialized.
pub fn with_cvar_ctx<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut CvarContext) -> R,
{
    CVAR_CTX.lock().as_mut().map(f)
}

// ============================================================
// Tests
// ============================================================
