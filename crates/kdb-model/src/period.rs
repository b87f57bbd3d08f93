//! Schedule (曜時限) tokens: weekday/slot pairs and the non-scheduled markers.
//!
//! A decoded schedule is a [`PeriodSet`]: a set of [`PeriodToken`]s with a
//! canonical order, so two decodings compare equal regardless of the order
//! the notation listed them in.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// Day of the week as written in the catalog (`月` through `日`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn glyph(&self) -> char {
        match self {
            Weekday::Mon => '月',
            Weekday::Tue => '火',
            Weekday::Wed => '水',
            Weekday::Thu => '木',
            Weekday::Fri => '金',
            Weekday::Sat => '土',
            Weekday::Sun => '日',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        Weekday::ALL.into_iter().find(|day| day.glyph() == glyph)
    }
}

/// Keyword meaning the course has no fixed weekly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpecialMarker {
    /// 応談: scheduled by arrangement with the instructor.
    ByArrangement,
    /// 随時: any time.
    Anytime,
    /// 集中: intensive block.
    Intensive,
}

impl SpecialMarker {
    pub const ALL: [SpecialMarker; 3] = [
        SpecialMarker::ByArrangement,
        SpecialMarker::Anytime,
        SpecialMarker::Intensive,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            SpecialMarker::ByArrangement => "応談",
            SpecialMarker::Anytime => "随時",
            SpecialMarker::Intensive => "集中",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        SpecialMarker::ALL
            .into_iter()
            .find(|marker| marker.keyword() == keyword)
    }
}

/// Teaching period within a day, `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 8;

    pub fn new(value: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::new(value).ok_or_else(|| format!("period slot out of range: {value}"))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One decoded schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodToken {
    /// A regular weekday period, e.g. `月1`.
    Slot { day: Weekday, slot: Slot },
    /// A bare marker with no sub-period, e.g. `応談`.
    Marker(SpecialMarker),
    /// A marker with an explicit sub-period, e.g. `応談7`.
    MarkerSlot { marker: SpecialMarker, slot: Slot },
}

impl PeriodToken {
    pub fn slot(day: Weekday, slot: Slot) -> Self {
        PeriodToken::Slot { day, slot }
    }

    pub fn marker(marker: SpecialMarker) -> Self {
        PeriodToken::Marker(marker)
    }

    pub fn marker_slot(marker: SpecialMarker, slot: Slot) -> Self {
        PeriodToken::MarkerSlot { marker, slot }
    }

    /// Weekday tokens first (by day, then slot), then each marker followed
    /// by its sub-periods.
    fn sort_key(&self) -> (u8, u8, u8) {
        match self {
            PeriodToken::Slot { day, slot } => (0, *day as u8, slot.get()),
            PeriodToken::Marker(marker) => (1, *marker as u8, 0),
            PeriodToken::MarkerSlot { marker, slot } => (1, *marker as u8, slot.get()),
        }
    }
}

impl Ord for PeriodToken {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for PeriodToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodToken::Slot { day, slot } => write!(f, "{}{slot}", day.glyph()),
            PeriodToken::Marker(marker) => f.write_str(marker.keyword()),
            PeriodToken::MarkerSlot { marker, slot } => write!(f, "{}{slot}", marker.keyword()),
        }
    }
}

impl FromStr for PeriodToken {
    type Err = NotationError;

    /// Parses exactly one rendered token (`月1`, `応談`, `応談7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || NotationError::MalformedPeriodNotation(s.to_string());
        let parse_slot = |rest: &str| {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => ch
                    .to_digit(10)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .and_then(Slot::new),
                _ => None,
            }
        };

        for marker in SpecialMarker::ALL {
            if let Some(rest) = s.strip_prefix(marker.keyword()) {
                if rest.is_empty() {
                    return Ok(PeriodToken::Marker(marker));
                }
                let slot = parse_slot(rest).ok_or_else(malformed)?;
                return Ok(PeriodToken::MarkerSlot { marker, slot });
            }
        }

        let mut chars = s.chars();
        let day = chars
            .next()
            .and_then(Weekday::from_glyph)
            .ok_or_else(malformed)?;
        let slot = parse_slot(chars.as_str()).ok_or_else(malformed)?;
        Ok(PeriodToken::Slot { day, slot })
    }
}

impl From<PeriodToken> for String {
    fn from(token: PeriodToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for PeriodToken {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Set of decoded schedule entries in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodSet(BTreeSet<PeriodToken>);

impl PeriodSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the token was already present.
    pub fn insert(&mut self, token: PeriodToken) -> bool {
        self.0.insert(token)
    }

    pub fn contains(&self, token: &PeriodToken) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, PeriodToken> {
        self.0.iter()
    }

    /// Tokens rendered as the catalog writes them, in canonical order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for PeriodSet {
    /// Space-separated canonical rendering; the schedule parser reads it back
    /// to the same set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl FromIterator<PeriodToken> for PeriodSet {
    fn from_iter<I: IntoIterator<Item = PeriodToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<PeriodToken> for PeriodSet {
    fn extend<I: IntoIterator<Item = PeriodToken>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PeriodSet {
    type Item = PeriodToken;
    type IntoIter = btree_set::IntoIter<PeriodToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PeriodSet {
    type Item = &'a PeriodToken;
    type IntoIter = btree_set::Iter<'a, PeriodToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
