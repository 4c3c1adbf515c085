//! Base enhancement types
//!
//! The closed vocabulary used to identify what is being added to an ability
//! card. Each variant has a stable index which doubles as its row in the
//! base cost table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EnhancementError;

/// A base enhancement that can be applied to one action line of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EnhancementType {
    Move,
    Jump,
    Attack,
    Range,
    Target,
    AddAttackHex,
    Heal,
    Shield,
    Retaliate,
    Strengthen,
    Muddle,
    Disarm,
    Pierce,
    Poison,
    Wound,
    Push,
    Pull,
    Immobilize,
    Curse,
    Bless,
    SpecificElement,
    AnyElement,
    SummonsMove,
    SummonsAttack,
    SummonsRange,
    SummonsHp,
}

impl EnhancementType {
    /// Number of defined base enhancements
    pub const COUNT: usize = 26;

    /// Every base enhancement, in index order
    pub const ALL: [EnhancementType; Self::COUNT] = [
        EnhancementType::Move,
        EnhancementType::Jump,
        EnhancementType::Attack,
        EnhancementType::Range,
        EnhancementType::Target,
        EnhancementType::AddAttackHex,
        EnhancementType::Heal,
        EnhancementType::Shield,
        EnhancementType::Retaliate,
        EnhancementType::Strengthen,
        EnhancementType::Muddle,
        EnhancementType::Disarm,
        EnhancementType::Pierce,
        EnhancementType::Poison,
        EnhancementType::Wound,
        EnhancementType::Push,
        EnhancementType::Pull,
        EnhancementType::Immobilize,
        EnhancementType::Curse,
        EnhancementType::Bless,
        EnhancementType::SpecificElement,
        EnhancementType::AnyElement,
        EnhancementType::SummonsMove,
        EnhancementType::SummonsAttack,
        EnhancementType::SummonsRange,
        EnhancementType::SummonsHp,
    ];

    /// Stable numeric index (0-based)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Machine identifier, identical to the serde representation
    pub const fn identifier(self) -> &'static str {
        match self {
            EnhancementType::Move => "move",
            EnhancementType::Jump => "jump",
            EnhancementType::Attack => "attack",
            EnhancementType::Range => "range",
            EnhancementType::Target => "target",
            EnhancementType::AddAttackHex => "add_attack_hex",
            EnhancementType::Heal => "heal",
            EnhancementType::Shield => "shield",
            EnhancementType::Retaliate => "retaliate",
            EnhancementType::Strengthen => "strengthen",
            EnhancementType::Muddle => "muddle",
            EnhancementType::Disarm => "disarm",
            EnhancementType::Pierce => "pierce",
            EnhancementType::Poison => "poison",
            EnhancementType::Wound => "wound",
            EnhancementType::Push => "push",
            EnhancementType::Pull => "pull",
            EnhancementType::Immobilize => "immobilize",
            EnhancementType::Curse => "curse",
            EnhancementType::Bless => "bless",
            EnhancementType::SpecificElement => "specific_element",
            EnhancementType::AnyElement => "any_element",
            EnhancementType::SummonsMove => "summons_move",
            EnhancementType::SummonsAttack => "summons_attack",
            EnhancementType::SummonsRange => "summons_range",
            EnhancementType::SummonsHp => "summons_hp",
        }
    }

    /// Enhancements that modify a summon's printed stats
    pub const fn is_summons(self) -> bool {
        matches!(
            self,
            EnhancementType::SummonsMove
                | EnhancementType::SummonsAttack
                | EnhancementType::SummonsRange
                | EnhancementType::SummonsHp
        )
    }
}

impl TryFrom<i64> for EnhancementType {
    type Error = EnhancementError;

    /// Resolve a raw index, as stored by callers that persist the index
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(EnhancementError::UnknownType(value))
    }
}

/// Lowercase, with spaces and dashes folded to underscores
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for EnhancementType {
    type Err = EnhancementError;

    /// Accepts the identifier (`summons_hp`) or the display title (`Summons HP`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.identifier() == wanted || normalize(e.title()) == wanted)
            .ok_or_else(|| EnhancementError::UnknownTypeName(s.to_string()))
    }
}

impl fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
