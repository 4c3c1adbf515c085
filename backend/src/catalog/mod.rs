//! Enhancement Catalog
//!
//! Display text for every base enhancement plus the lookup helpers a front
//! end needs to populate a picker and map a selection back to a type.
//!
//! - **mod**: titles, descriptions and lookup maps
//! - **schema_docs**: self-documenting price schema (`ghec schema`)

pub mod schema_docs;

use std::collections::BTreeMap;

use crate::enhancement::EnhancementType;

pub use schema_docs::{
    get_price_schema, price_schema, PriceCategory, PriceElement, PriceSchemaDoc,
    PriceSchemaDocumented, SurchargeRow,
};

impl EnhancementType {
    /// Short display title
    pub const fn title(self) -> &'static str {
        match self {
            EnhancementType::Move => "Move",
            EnhancementType::Jump => "Jump",
            EnhancementType::Attack => "Attack",
            EnhancementType::Range => "Range",
            EnhancementType::Target => "Target",
            EnhancementType::AddAttackHex => "Add Hex",
            EnhancementType::Heal => "Heal",
            EnhancementType::Shield => "Shield",
            EnhancementType::Retaliate => "Retaliate",
            EnhancementType::Strengthen => "Strengthen",
            EnhancementType::Muddle => "Muddle",
            EnhancementType::Disarm => "Disarm",
            EnhancementType::Pierce => "Pierce",
            EnhancementType::Poison => "Poison",
            EnhancementType::Wound => "Wound",
            EnhancementType::Push => "Push",
            EnhancementType::Pull => "Pull",
            EnhancementType::Immobilize => "Immobilize",
            EnhancementType::Curse => "Curse",
            EnhancementType::Bless => "Bless",
            EnhancementType::SpecificElement => "Specific Element",
            EnhancementType::AnyElement => "Any Element",
            EnhancementType::SummonsMove => "Summons Move",
            EnhancementType::SummonsAttack => "Summons Attack",
            EnhancementType::SummonsRange => "Summons Range",
            EnhancementType::SummonsHp => "Summons HP",
        }
    }

    /// One-line description of what the enhancement does
    pub const fn description(self) -> &'static str {
        match self {
            EnhancementType::Move => "adds +1 to move",
            EnhancementType::Jump => "adds jump",
            EnhancementType::Attack => "adds +1 modifier to attack",
            EnhancementType::Range => "adds +1 range to attack",
            EnhancementType::Target => "adds +1 target to attack",
            EnhancementType::AddAttackHex => "adds +1 attack hex",
            EnhancementType::Heal => "adds heal",
            EnhancementType::Shield => "adds shield",
            EnhancementType::Retaliate => "adds retaliate",
            EnhancementType::Strengthen => "adds strengthen",
            EnhancementType::Muddle => "adds muddle",
            EnhancementType::Disarm => "adds disarm",
            EnhancementType::Pierce => "adds pierce",
            EnhancementType::Poison => "adds poison",
            EnhancementType::Wound => "adds wound",
            EnhancementType::Push => "adds push",
            EnhancementType::Pull => "adds pull",
            EnhancementType::Immobilize => "adds immobilize",
            EnhancementType::Curse => "adds curse",
            EnhancementType::Bless => "adds bless",
            EnhancementType::SpecificElement => "adds specific element",
            EnhancementType::AnyElement => "adds any element",
            EnhancementType::SummonsMove => "adds +1 move to summons",
            EnhancementType::SummonsAttack => "adds +1 modifier to summons attack",
            EnhancementType::SummonsRange => "adds +1 range to summons attack",
            EnhancementType::SummonsHp => "adds +1 to summons HP",
        }
    }
}

/// Project every base enhancement, in index order
pub fn list<T>(f: impl Fn(EnhancementType) -> T) -> Vec<T> {
    EnhancementType::ALL.iter().copied().map(f).collect()
}

/// Map every base enhancement to a projection of itself
pub fn reverse_map<T>(f: impl Fn(EnhancementType) -> T) -> BTreeMap<EnhancementType, T> {
    EnhancementType::ALL.iter().map(|&e| (e, f(e))).collect()
}

/// Map a projection back to its base enhancement
///
/// The projection must be injective; on collision the later type wins.
pub fn map<T: Ord>(f: impl Fn(EnhancementType) -> T) -> BTreeMap<T, EnhancementType> {
    EnhancementType::ALL.iter().map(|&e| (f(e), e)).collect()
}

/// Title of every base enhancement
pub fn titles() -> BTreeMap<EnhancementType, &'static str> {
    reverse_map(EnhancementType::title)
}

/// Base enhancement by title
pub fn by_title() -> BTreeMap<&'static str, EnhancementType> {
    map(EnhancementType::title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_unique() {
        assert_eq!(by_title().len(), EnhancementType::COUNT);
    }

    #[test]
    fn test_descriptions_are_unique() {
        assert_eq!(map(EnhancementType::description).len(), EnhancementType::COUNT);
    }

    #[test]
    fn test_list_preserves_order() {
        assert_eq!(list(|e| e), EnhancementType::ALL.to_vec());
    }

    #[test]
    fn test_title_lookup() {
        assert_eq!(by_title().get("Add Hex"), Some(&EnhancementType::AddAttackHex));
        assert_eq!(titles()[&EnhancementType::SummonsHp], "Summons HP");
    }
}
