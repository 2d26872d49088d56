//! Flavour archetypes - the fixed personality taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight flavour archetypes assigned by the classifier.
///
/// The taxonomy is a designer-authored rule set, fixed at compile time.
/// Declaration order is load-bearing: the classifier breaks score ties in
/// favour of the earlier-declared archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Intense and indulgent; goes all in.
    Chocolate,
    /// Steady and classic; the fallback template archetype.
    Vanilla,
    /// Sweet and openly romantic.
    Strawberry,
    /// Warm, slow to build, hard to shake.
    Caramel,
    /// Grounded and deliberate; shows love through doing.
    Coffee,
    /// Fresh and independent; needs room to breathe.
    Mint,
    /// Fiery and unpredictable.
    Chilli,
    /// Hard shell, soft centre.
    Coconut,
}

impl Archetype {
    /// All archetypes in declaration order. Tie-breaks resolve to the
    /// earliest entry in this list.
    pub const ALL: [Archetype; 8] = [
        Archetype::Chocolate,
        Archetype::Vanilla,
        Archetype::Strawberry,
        Archetype::Caramel,
        Archetype::Coffee,
        Archetype::Mint,
        Archetype::Chilli,
        Archetype::Coconut,
    ];

    /// The archetype whose templates serve as the fallback when a template
    /// lookup misses.
    pub const DEFAULT: Archetype = Archetype::Vanilla;

    /// The ordered pattern tokens this archetype resonates with.
    ///
    /// The classifier scores an answer set by counting how many chosen
    /// option values appear in this list.
    pub fn pattern_tokens(&self) -> &'static [&'static str] {
        match self {
            Archetype::Chocolate => &[
                "passionate_debate",
                "all_in_fast",
                "touch",
                "late_night_party",
                "constant",
                "love_surprises",
            ],
            Archetype::Vanilla => &[
                "keep_the_peace",
                "steady",
                "quality_time",
                "cozy_night_in",
                "prefer_plans",
                "small_circle",
            ],
            Archetype::Strawberry => &[
                "quick_apology",
                "words",
                "love_surprises",
                "brunch_with_friends",
                "bursts",
                "slow_burn",
            ],
            Archetype::Caramel => &[
                "slow_burn",
                "acts",
                "cozy_night_in",
                "homebody",
                "talk_it_out",
                "minimal",
            ],
            Archetype::Coffee => &[
                "talk_it_out",
                "steady",
                "acts",
                "quiet_hike",
                "minimal",
                "prefer_plans",
            ],
            Archetype::Mint => &[
                "need_space",
                "lone_wolf",
                "quiet_hike",
                "minimal",
                "depends_on_mood",
                "slow_burn",
            ],
            Archetype::Chilli => &[
                "passionate_debate",
                "hot_and_cold",
                "spontaneous_trip",
                "late_night_party",
                "memes",
                "love_surprises",
            ],
            Archetype::Coconut => &[
                "need_space",
                "small_circle",
                "gifts",
                "homebody",
                "bursts",
                "keep_the_peace",
            ],
        }
    }

    /// Returns the string representation for storage and fingerprinting.
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Chocolate => "chocolate",
            Archetype::Vanilla => "vanilla",
            Archetype::Strawberry => "strawberry",
            Archetype::Caramel => "caramel",
            Archetype::Coffee => "coffee",
            Archetype::Mint => "mint",
            Archetype::Chilli => "chilli",
            Archetype::Coconut => "coconut",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chocolate" => Ok(Archetype::Chocolate),
            "vanilla" => Ok(Archetype::Vanilla),
            "strawberry" => Ok(Archetype::Strawberry),
            "caramel" => Ok(Archetype::Caramel),
            "coffee" => Ok(Archetype::Coffee),
            "mint" => Ok(Archetype::Mint),
            "chilli" => Ok(Archetype::Chilli),
            "coconut" => Ok(Archetype::Coconut),
            _ => Err(format!("Unknown archetype: {}", s)),
        }
    }
}
