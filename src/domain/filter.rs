//! The fixed category filter vocabulary.
//!
//! Filter labels are what the user sees (`SBCs`, `DevBoards`, ...). Each maps
//! to exactly one machine code that is compared, case-insensitively, with an
//! entry's `type`. [`FilterLabel::All`] is special: it disables filtering rather
//! than matching a literal `"all"` category.

use crate::domain::error::TierListError;
use std::fmt;
use std::str::FromStr;

/// A human-facing category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterLabel {
    #[default]
    All,
    Sbcs,
    Esbcs,
    Esbs,
    DevBoards,
}

impl FilterLabel {
    /// All labels in the order they appear in the filter bar.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Sbcs,
        Self::Esbcs,
        Self::Esbs,
        Self::DevBoards,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Sbcs => "SBCs",
            Self::Esbcs => "eSBCs",
            Self::Esbs => "ESBs",
            Self::DevBoards => "DevBoards",
        }
    }

    /// Machine category code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Sbcs => "sbc",
            Self::Esbcs => "esbc",
            Self::Esbs => "esb",
            Self::DevBoards => "devboard",
        }
    }

    /// Looks up a label by its exact display text.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.label() == label)
    }

    /// Looks up a label by its machine code, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierlist::domain::FilterLabel;
    ///
    /// assert_eq!(FilterLabel::from_code("ESBC"), Some(FilterLabel::Esbcs));
    /// assert_eq!(FilterLabel::from_code("laptop"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.code().eq_ignore_ascii_case(code))
    }

    /// Returns whether an entry with the given `type` passes this filter.
    ///
    /// `All` passes everything. Other labels compare the lower-cased category
    /// with the lower-cased machine code for exact equality.
    #[must_use]
    pub fn matches(self, category: &str) -> bool {
        match self {
            Self::All => true,
            other => category.to_lowercase() == other.code().to_lowercase(),
        }
    }

    /// Zero-based position in the filter bar.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next label in bar order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous label in bar order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FilterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterLabel {
    type Err = TierListError;

    /// Accepts either the display label or the machine code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_label(trimmed)
            .or_else(|| Self::from_code(trimmed))
            .ok_or_else(|| TierListError::UnknownFilter(trimmed.to_string()))
    }
}
