use super::tokenizer::tokenize;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target naming convention for object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Camel,
    Snake,
    Kebab,
    Pascal,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Camel, Style::Snake, Style::Kebab, Style::Pascal];

    /// Rename a single key into this style.
    pub fn convert(self, key: &str) -> String {
        join(&tokenize(key), self)
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" => Ok(Style::Camel),
            "snake" => Ok(Style::Snake),
            "kebab" => Ok(Style::Kebab),
            "pascal" => Ok(Style::Pascal),
            _ => Err(Error::InvalidStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Camel => write!(f, "camel"),
            Style::Snake => write!(f, "snake"),
            Style::Kebab => write!(f, "kebab"),
            Style::Pascal => write!(f, "pascal"),
        }
    }
}

/// Join lowercase words into a key of the given style.
pub fn join<S: AsRef<str>>(words: &[S], style: Style) -> String {
    match style {
        Style::Snake => join_lower(words, "_"),
        Style::Kebab => join_lower(words, "-"),
        Style::Pascal => words.iter().map(|w| capitalize(w.as_ref())).collect(),
        Style::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    w.as_ref().to_ascii_lowercase()
                } else {
                    capitalize(w.as_ref())
                }
            })
            .collect(),
    }
}

fn join_lower<S: AsRef<str>>(words: &[S], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
    }
}
