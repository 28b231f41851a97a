//! Static record corpora used across harnesses.
//!
//! Key order inside each literal is deliberately scrambled so that every
//! fixture exercises the normalizer when it is loaded back.

/// Character index, keyed by identifier.
pub const CHARACTER_INDEX: &str = r#"{"1042": "Amber", "1041": "Albedo", "1003": "Jean"}"#;

/// Weapon index as a plain list of identifiers.
pub const WEAPON_INDEX: &str = r#"["12001", "11501"]"#;

/// Character records as `(identifier, file body)`.
pub const CHARACTERS: &[(&str, &str)] = &[
    (
        "1041",
        r#"{
            "name": "Albedo",
            "rarity": "S",
            "element": "Geo",
            "stats": {"hp": 13226, "atk": 251, "def": 876},
            "skills": [
                {"name": "Abiogenesis", "cd": 4},
                {"name": "Rite of Progeniture", "cd": 12, "burst": true}
            ]
        }"#,
    ),
    (
        "1042",
        r#"{"specialty": "Bow", "name": "Amber", "rarity": "A", "faction": "Knights", "element": "Pyro"}"#,
    ),
    (
        "1003",
        r#"{"name": "Jean", "Element": "Anemo", "element": "anemo", "levels": {"90": {"rate": 10000}, "1": {"rate": 100}}}"#,
    ),
];

/// Weapon records as `(identifier, file body)`.
pub const WEAPONS: &[(&str, &str)] = &[
    (
        "12001",
        r#"{"rand_property": {"value": 1200, "name": "ATK%"}, "base_property": {"value": 42, "name": "Base ATK"}, "stars": {"5": 1.5, "1": 1.0}}"#,
    ),
    (
        "11501",
        r#"{"name": "Aquila Favonia", "levels": {"10": {"rate": 12000}, "1": {"rate": 10000}}}"#,
    ),
];

/// Recursive-ordering example and its exact normalized serialisation.
pub const NESTED_INPUT: &str = r#"{"b": {"z":1,"a":2}, "a": [ {"y":1,"x":2} ]}"#;
pub const NESTED_NORMALIZED: &str = r#"{"a":[{"x":2,"y":1}],"b":{"a":2,"z":1}}"#;

/// Not well-formed JSON.
pub const MALFORMED: &str = r#"{"a": }"#;
