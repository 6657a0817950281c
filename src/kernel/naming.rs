//! Collision-free names for duplicated items.
//!
//! Resolution order:
//! 1. a leading number (`01_Audio`) is incremented, keeping its zero padding;
//! 2. otherwise a trailing number (`SHOT_01`) is incremented the same way;
//! 3. otherwise a counter suffix is appended, whose shape depends on
//!    [`SuffixStyle`].
//!
//! Every candidate is checked case-insensitively against the sibling names
//! and the counter keeps climbing until one is free.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(_?)(.*)$").expect("valid leading-number regex"));

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)(_?)([0-9]+)$").expect("valid trailing-number regex"));

static TRAILING_NUMBER_SPACED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)([ _]?)([0-9]+)$").expect("valid spaced trailing-number regex")
});

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixStyle {
    /// `notes` -> `notes_01`, `notes_02`, ...
    #[default]
    Underscore,
    /// `Item 2` -> `Item 3`; `notes` -> `notes 2`, `notes 3`, ...
    Space,
}

pub fn generate_incremented_name<S: AsRef<str>>(
    base_name: &str,
    sibling_names: &[S],
    style: SuffixStyle,
) -> String {
    let taken: FxHashSet<String> = sibling_names
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect();
    let is_free = |candidate: &str| !taken.contains(&candidate.to_lowercase());

    if let Some(caps) = LEADING_NUMBER.captures(base_name) {
        let (digits, separator, rest) = (&caps[1], &caps[2], &caps[3]);
        if let Some(start) = next_number(digits) {
            let width = digits.len();
            return first_free(start, &is_free, |n| {
                format!("{n:0width$}{separator}{rest}")
            });
        }
    }

    let trailing = match style {
        SuffixStyle::Underscore => &*TRAILING_NUMBER,
        SuffixStyle::Space => &*TRAILING_NUMBER_SPACED,
    };
    if let Some(caps) = trailing.captures(base_name) {
        let (prefix, separator, digits) = (&caps[1], &caps[2], &caps[3]);
        if let Some(start) = next_number(digits) {
            let width = digits.len();
            return first_free(start, &is_free, |n| {
                format!("{prefix}{separator}{n:0width$}")
            });
        }
    }

    match style {
        SuffixStyle::Underscore => first_free(1, &is_free, |n| format!("{base_name}_{n:02}")),
        SuffixStyle::Space => first_free(2, &is_free, |n| format!("{base_name} {n}")),
    }
}

fn next_number(digits: &str) -> Option<u128> {
    digits.parse::<u128>().ok()?.checked_add(1)
}

fn first_free(
    start: u128,
    is_free: &impl Fn(&str) -> bool,
    render: impl Fn(u128) -> String,
) -> String {
    let mut counter = start;
    loop {
        let candidate = render(counter);
        if is_free(&candidate) {
            return candidate;
        }
        match counter.checked_add(1) {
            Some(next) => counter = next,
            None => return candidate,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/naming.rs"]
mod tests;
