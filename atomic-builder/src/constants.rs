//! `$START` / `$END` substitution.

use atomic_model::{CssValue, GlobalSettings};

pub const START_TOKEN: &str = "$START";
pub const END_TOKEN: &str = "$END";

/// The literals substituted for the two reserved tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constants {
    start: String,
    end: String,
}

impl Constants {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn from_settings(settings: &GlobalSettings) -> Self {
        Self::new(settings.start(), settings.end())
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Replaces every `$START` and `$END` in `input` in a single pass, so a
    /// literal that itself contains a token is not expanded again.
    pub fn place_constants(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if let Some(after) = tail.strip_prefix(START_TOKEN) {
                out.push_str(&self.start);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(END_TOKEN) {
                out.push_str(&self.end);
                rest = after;
            } else {
                out.push('$');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }

    /// Substitutes inside text values; numbers pass through unchanged.
    pub fn place_value(&self, value: &CssValue) -> CssValue {
        match value {
            CssValue::Text(text) => CssValue::Text(self.place_constants(text)),
            CssValue::Number(_) => value.clone(),
        }
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::from_settings(&GlobalSettings::default())
    }
}
