//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // Set the env var so supports-color picks it up for all subsequent calls.
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

// Ice (branches, ids): #7CB4C8
const ICE: (u8, u8, u8) = (124, 180, 200);

// Aurora (active, on track): #6B8F5E
const AURORA: (u8, u8, u8) = (107, 143, 94);

// Copper (paused, drift, overrun): #C49A5C
const COPPER: (u8, u8, u8) = (196, 154, 92);

// Ember (errors): #B87060
const EMBER: (u8, u8, u8) = (184, 112, 96);

// Muted (hints, secondary info): #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

pub fn ice(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(ICE.0, ICE.1, ICE.2))
        .to_string()
}

pub fn aurora(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(AURORA.0, AURORA.1, AURORA.2))
        .to_string()
}

pub fn copper(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(COPPER.0, COPPER.1, COPPER.2))
        .to_string()
}

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}

/// Color-code a session status value (active/paused).
pub fn status(status_str: &str) -> String {
    match status_str {
        "active" => aurora(status_str),
        "paused" => copper(status_str),
        _ => status_str.to_string(),
    }
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    text.if_supports_color(owo_colors::Stream::Stderr, |t| {
        t.truecolor(EMBER.0, EMBER.1, EMBER.2)
    })
    .to_string()
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    text.if_supports_color(owo_colors::Stream::Stderr, |t| {
        t.truecolor(COPPER.0, COPPER.1, COPPER.2)
    })
    .to_string()
}
