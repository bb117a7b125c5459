//! Weapon-type knowledge needed to read a loadout

/// Weapon types that occupy both hands
pub const TWO_HANDED_TYPES: [&str; 6] = [
    "Greatsword",
    "Hammer",
    "Longbow",
    "Rifle",
    "Shortbow",
    "Staff",
];

pub fn is_two_handed(kind: &str) -> bool {
    TWO_HANDED_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(kind))
}
