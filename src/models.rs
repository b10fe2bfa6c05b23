use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The fixed set of prompt groupings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Writing,
    Drawing,
    Business,
    Coding,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Writing,
        Category::Drawing,
        Category::Business,
        Category::Coding,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Writing => "writing",
            Category::Drawing => "drawing",
            Category::Business => "business",
            Category::Coding => "coding",
        }
    }

    /// Capitalised name used for tabs and badges.
    pub fn label(self) -> &'static str {
        match self {
            Category::Writing => "Writing",
            Category::Drawing => "Drawing",
            Category::Business => "Business",
            Category::Coding => "Coding",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a saved favorite. Stored either as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FavoriteId {
    Number(i64),
    Text(String),
}

impl FavoriteId {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FavoriteId::Number(n) => Some(*n),
            FavoriteId::Text(_) => None,
        }
    }
}

impl From<i64> for FavoriteId {
    fn from(n: i64) -> Self {
        FavoriteId::Number(n)
    }
}

impl From<i32> for FavoriteId {
    fn from(n: i32) -> Self {
        FavoriteId::Number(n.into())
    }
}

impl From<&str> for FavoriteId {
    fn from(s: &str) -> Self {
        FavoriteId::Text(s.to_string())
    }
}

impl FromStr for FavoriteId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => FavoriteId::Number(n),
            Err(_) => FavoriteId::Text(s.to_string()),
        })
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoriteId::Number(n) => write!(f, "{}", n),
            FavoriteId::Text(s) => f.write_str(s),
        }
    }
}

/// A favorite as handed to the store; the timestamp is filled in when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFavorite {
    pub id: FavoriteId,
    pub category: Category,
    pub text: String,
    pub timestamp: Option<i64>,
}

impl NewFavorite {
    pub fn new(id: impl Into<FavoriteId>, category: Category, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            text: text.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A persisted favorite. `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub category: Category,
    pub text: String,
    pub timestamp: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Idea,
    Favorites,
}

/// Short-lived confirmation shown in place of a button label ("Copied!", "Saved!").
pub struct Flash {
    pub text: String,
    pub until: Instant,
}

impl Flash {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            until: Instant::now() + duration,
        }
    }

    pub fn is_active(&self) -> bool {
        Instant::now() < self.until
    }
}
