use crate::artifacts::diff::config::{Granularity, Normalization};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub type Token = String;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("line break pattern is valid"));
static WORD_OR_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+|\s+").expect("word pattern is valid"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("blank run pattern is valid"));

/// Applies the normalization flags to the whole input at once.
///
/// Whitespace folding turns every run of spaces/tabs into a single space and
/// trims the result; case folding lowercases it. Tokens are later compared
/// against this text, not against the original input.
pub fn normalize(text: &str, normalization: Normalization) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(text);

    if normalization.contains(Normalization::IGNORE_WHITESPACE) {
        let folded = BLANK_RUN.replace_all(&text, " ");
        text = Cow::Owned(folded.trim().to_string());
    }

    if normalization.contains(Normalization::IGNORE_CASE) {
        text = Cow::Owned(text.to_lowercase());
    }

    text
}

/// Splits already normalized text into tokens.
///
/// Every mode is lossless: joining line tokens with `\n` (or the other modes
/// with nothing) gives the input back, modulo `\r\n` becoming `\n`. The
/// empty string has no tokens at all.
pub fn split(text: &str, granularity: Granularity) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    match granularity {
        Granularity::Line => split_lines(text).into_iter().map(String::from).collect(),
        Granularity::Word => WORD_OR_GAP
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        Granularity::Char => text.chars().map(String::from).collect(),
    }
}

pub fn tokenize(text: &str, granularity: Granularity, normalization: Normalization) -> Vec<Token> {
    split(&normalize(text, normalization), granularity)
}

/// Line view of arbitrary text, keeping the trailing empty line after a final newline.
fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}
