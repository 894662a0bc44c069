//! Trust-time zone classification
//!
//! A zone summarizes where a game sits in (confidence, hours) space:
//!
//! ```text
//!  confidence
//!      ^
//!  3.5 |  Earned Time          .            Verified Epic (> 3.0, > 40h)
//!      |  (< 15h)              .
//!  3.0 |.......................................................
//!  2.5 |                       Uncertain Grind (> 30h)
//!  2.0 |                                 False Epic (> 50h)
//!      +-------------------------------------------------------> hours
//! ```
//!
//! Rules are applied in a fixed order and each match overwrites the previous
//! label, so the last matching rule wins. Only "Uncertain Grind" and
//! "False Epic" overlap: a game with confidence below 2.0 and more than 50
//! hours satisfies both and ends up as "False Epic".

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Zone {
    #[serde(rename = "Earned Time")]
    EarnedTime,
    #[serde(rename = "Uncertain Grind")]
    UncertainGrind,
    #[serde(rename = "False Epic")]
    FalseEpic,
    #[serde(rename = "Verified Epic")]
    VerifiedEpic,
    Unknown,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl Zone {
    pub const ALL: [Self; 5] = [
        Self::EarnedTime,
        Self::UncertainGrind,
        Self::FalseEpic,
        Self::VerifiedEpic,
        Self::Unknown,
    ];

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::EarnedTime => "Earned Time",
            Self::UncertainGrind => "Uncertain Grind",
            Self::FalseEpic => "False Epic",
            Self::VerifiedEpic => "Verified Epic",
            Self::Unknown => "Unknown",
        }
    }
}

/// A predicate over (`confidence_score`, `main_story_hours`) and the zone it assigns.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRule {
    pub zone: Zone,
    pub matches: fn(f64, f64) -> bool,
}

/// Zone rules in application order.
///
/// The overlap between the second and third rule looks unintended, but the
/// overwrite order is kept so that classifications stay comparable with
/// previously published numbers.
pub const ZONE_RULES: [ZoneRule; 4] = [
    ZoneRule {
        zone: Zone::EarnedTime,
        matches: |confidence, hours| confidence > 3.5 && hours < 15.0,
    },
    ZoneRule {
        zone: Zone::UncertainGrind,
        matches: |confidence, hours| confidence < 2.5 && hours > 30.0,
    },
    ZoneRule {
        zone: Zone::FalseEpic,
        matches: |confidence, hours| confidence < 2.0 && hours > 50.0,
    },
    ZoneRule {
        zone: Zone::VerifiedEpic,
        matches: |confidence, hours| confidence > 3.0 && hours > 40.0,
    },
];

/// Classifies a game by sequential overwrite over [`ZONE_RULES`].
///
/// ```
/// use timerespect_analysis::zone::{Zone, classify};
///
/// assert_eq!(classify(4.0, 10.0), Zone::EarnedTime);
/// assert_eq!(classify(2.2, 35.0), Zone::UncertainGrind);
/// assert_eq!(classify(1.5, 60.0), Zone::FalseEpic);
/// assert_eq!(classify(3.2, 45.0), Zone::VerifiedEpic);
/// assert_eq!(classify(3.0, 20.0), Zone::Unknown);
/// ```
#[must_use]
pub fn classify(confidence_score: f64, main_story_hours: f64) -> Zone {
    ZONE_RULES.iter().fold(Zone::Unknown, |zone, rule| {
        if (rule.matches)(confidence_score, main_story_hours) {
            rule.zone
        } else {
            zone
        }
    })
}
