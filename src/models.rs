use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

const MAX_LEAGUE_LEN: usize = 64;
const MAX_SEGMENT_LEN: usize = 128;

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_slug(s: &str, max_len: usize) -> bool {
    !s.is_empty() && s.len() <= max_len && s.chars().all(is_slug_char)
}

/// League slug as used by the upstream site, e.g. `premier-league`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LeagueId {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_slug(s, MAX_LEAGUE_LEN) {
            Ok(LeagueId(s.to_string()))
        } else {
            Err(ParseStringError)
        }
    }
}

impl Display for LeagueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Multi segment match slug, e.g. `premier-league/arsenal-vs-chelsea`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchPath(String);

impl MatchPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MatchPath {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `.` and `..` are already rejected by the slug charset
        if s.split('/').all(|segment| is_slug(segment, MAX_SEGMENT_LEN)) {
            Ok(MatchPath(s.to_string()))
        } else {
            Err(ParseStringError)
        }
    }
}

impl Display for MatchPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type MatchId = u64;

/// Identifies one match: slug path plus the numeric id the site appends to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchKey(pub MatchPath, pub MatchId);

impl FromStr for MatchKey {
    type Err = ParseStringError;

    /// Parses `<match path>/<id>`, the tail of a match details route.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, id) = s.trim_matches('/').rsplit_once('/').ok_or(ParseStringError)?;
        let id = id.parse::<MatchId>().map_err(|_| ParseStringError)?;
        Ok(MatchKey(path.parse()?, id))
    }
}

impl Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StringOrNum {
    String(String),
    Number(i16),
}
