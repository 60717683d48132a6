use colored::Colorize;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::Context;
use rustyline_derive::{Completer, Helper, Validator};
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

/// Lines starting with this are described instead of rolled
pub(crate) const DESCRIBE_SIGIL: char = '?';

#[derive(Helper, Completer, Validator)]
pub(crate) struct ReplHelper {
    pub(crate) colored: String,
}

impl ReplHelper {
    fn notation(line: &str) -> &str {
        line.strip_prefix(DESCRIBE_SIGIL).unwrap_or(line)
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    // plain words description of what is being typed
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() || line.trim().is_empty() {
            return None;
        }
        miniroll_lib::describe(Self::notation(line))
            .ok()
            .map(|description| format!("  {description}"))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let notation = Self::notation(line);
        if notation.trim().is_empty() || miniroll_lib::parse(notation).is_ok() {
            Borrowed(line)
        } else {
            Owned(line.red().to_string())
        }
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        true
    }
}
