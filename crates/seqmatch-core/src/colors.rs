//! ANSI color codes for dumps and traces.
//!
//! Three semantic colors plus a dim modifier:
//! - Blue: state ids
//! - Green: accepted tests, the terminal state, a successful match
//! - Red: rejected tests, dead frontiers, a failed match
//! - Dim: ignored elements, structure

/// ANSI color palette. Uses only the standard 16-color codes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Plain output; every code is empty.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Pick green or red depending on `ok`.
    pub fn verdict(&self, ok: bool) -> &'static str {
        if ok { self.green } else { self.red }
    }
}
