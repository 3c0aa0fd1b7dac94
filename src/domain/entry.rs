//! Catalog entry model and the fixed tier vocabulary.
//!
//! A [`CatalogEntry`] is one product record from the catalog file. Its `tier`
//! field is decoded into a [`TierSlot`], which is either one of the five ranked
//! [`Tier`]s or the raw string of an out-of-vocabulary value. Unranked entries
//! stay in the loaded catalog but never appear on the board.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the five fixed rank buckets, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Self; 5] = [Self::S, Self::A, Self::B, Self::C, Self::D];

    /// Returns the label used in the catalog file and on screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parses a tier label.
    ///
    /// Matching is exact: tier values are a controlled vocabulary, so `"s"` is
    /// not the same as `"S"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierlist::domain::Tier;
    ///
    /// assert_eq!(Tier::from_label("A"), Some(Tier::A));
    /// assert_eq!(Tier::from_label("a"), None);
    /// assert_eq!(Tier::from_label("F"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }

    /// Zero-based position of the tier in display order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tier below this one, wrapping from `D` back to `S`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tier above this one, wrapping from `S` to `D`.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The decoded `tier` field of a catalog entry.
///
/// Serialized as the plain string from the data file, so a catalog round-trips
/// unchanged even when it contains tiers outside `S..D`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TierSlot {
    /// A recognized tier.
    Ranked(Tier),
    /// Any other value, kept verbatim. Never placed in a bucket.
    Unranked(String),
}

impl TierSlot {
    /// Returns the ranked tier, if any.
    #[must_use]
    pub const fn tier(&self) -> Option<Tier> {
        match self {
            Self::Ranked(tier) => Some(*tier),
            Self::Unranked(_) => None,
        }
    }
}

impl Default for TierSlot {
    fn default() -> Self {
        Self::Unranked(String::new())
    }
}

impl From<String> for TierSlot {
    fn from(raw: String) -> Self {
        Tier::from_label(&raw).map_or(Self::Unranked(raw), Self::Ranked)
    }
}

impl From<TierSlot> for String {
    fn from(slot: TierSlot) -> Self {
        match slot {
            TierSlot::Ranked(tier) => tier.label().to_string(),
            TierSlot::Unranked(raw) => raw,
        }
    }
}

/// Position given to entries whose `tierPosition` is missing.
///
/// Places them after every positioned entry in the same tier.
const fn unplaced_position() -> f64 {
    f64::MAX
}

// Catalog files use `null` as freely as a missing key; both decode to defaults.

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn tier_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<TierSlot, D::Error> {
    string_or_null(deserializer).map(TierSlot::from)
}

fn position_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Option::<f64>::deserialize(deserializer).map(|position| position.unwrap_or_else(unplaced_position))
}

/// One product record from the catalog.
///
/// Field names follow the camelCase keys of the catalog file. The `type` key
/// is exposed as `category` since `type` is reserved in Rust. Display
/// attributes are opaque to the board builder and default to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique display name, also the stable key for selection and rendering.
    pub name: String,

    /// Free-text category label, matched case-insensitively against filter codes.
    #[serde(rename = "type", default, deserialize_with = "string_or_null")]
    pub category: String,

    /// Rank bucket.
    #[serde(default, deserialize_with = "tier_or_null")]
    pub tier: TierSlot,

    /// Sub-rank within the tier, ascending.
    #[serde(default = "unplaced_position", deserialize_with = "position_or_null")]
    pub tier_position: f64,

    #[serde(default, deserialize_with = "string_or_null")]
    pub image_path: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub video_url: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub purchase_link: String,

    /// Review date as written in the catalog, usually `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "string_or_null")]
    pub review_date: String,
}

impl CatalogEntry {
    /// Creates an entry with the fields the board builder looks at.
    ///
    /// Display attributes are left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierlist::domain::{CatalogEntry, Tier};
    ///
    /// let entry = CatalogEntry::new("Rock 5B", "sbc", "S", 1.0);
    /// assert_eq!(entry.tier.tier(), Some(Tier::S));
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        tier: impl Into<String>,
        tier_position: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            tier: TierSlot::from(tier.into()),
            tier_position,
            image_path: String::new(),
            video_url: String::new(),
            purchase_link: String::new(),
            review_date: String::new(),
        }
    }

    /// Returns the ranked tier, or `None` for out-of-vocabulary values.
    #[must_use]
    pub const fn tier(&self) -> Option<Tier> {
        self.tier.tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_navigation_wraps() {
        assert_eq!(Tier::D.next(), Tier::S);
        assert_eq!(Tier::S.previous(), Tier::D);
        assert_eq!(Tier::B.next(), Tier::C);
    }

    #[test]
    fn deserializes_catalog_record() {
        let json = r#"{
            "name": "Orange Pi 5",
            "type": "SBC",
            "tier": "A",
            "tierPosition": 2,
            "imagePath": "images/opi5.webp",
            "videoUrl": "https://youtu.be/abc",
            "purchaseLink": "https://shop.example/opi5",
            "reviewDate": "2024-01-05"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "Orange Pi 5");
        assert_eq!(entry.category, "SBC");
        assert_eq!(entry.tier(), Some(Tier::A));
        assert!((entry.tier_position - 2.0).abs() < f64::EPSILON);
        assert_eq!(entry.review_date, "2024-01-05");
    }

    #[test]
    fn unknown_tier_is_kept_verbatim() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name": "Z", "type": "sbc", "tier": "F", "tierPosition": 0}"#)
                .unwrap();
        assert_eq!(entry.tier, TierSlot::Unranked("F".to_string()));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["tier"], "F");
    }

    #[test]
    fn lowercase_tier_is_not_ranked() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name": "Z", "tier": "s", "tierPosition": 0}"#).unwrap();
        assert_eq!(entry.tier(), None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let entry: CatalogEntry = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(entry.category, "");
        assert_eq!(entry.tier(), None);
        assert!(entry.tier_position > 1.0e300);
        assert!(entry.video_url.is_empty());
    }

    #[test]
    fn null_fields_decode_like_missing_ones() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{"name": "Mystery", "type": null, "tier": "B", "tierPosition": null,
                "imagePath": null, "videoUrl": null, "purchaseLink": null, "reviewDate": null}"#,
        )
        .unwrap();
        assert_eq!(entry.category, "");
        assert_eq!(entry.tier(), Some(Tier::B));
        assert!((entry.tier_position - f64::MAX).abs() < f64::EPSILON);
        assert!(entry.video_url.is_empty());
        assert!(entry.review_date.is_empty());
    }

    #[test]
    fn null_tier_is_unranked() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name": "Z", "tier": null, "tierPosition": 1}"#).unwrap();
        assert_eq!(entry.tier(), None);
    }
}
