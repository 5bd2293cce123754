use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while resolving a category from raw text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    #[error("unknown unit category: {0}")]
    Unknown(String),
}

//
// ─── CATEGORY ID ──────────────────────────────────────────────────────────────
//

/// The four drill categories, each with its own unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Length,
    Weight,
    Volume,
    Area,
}

impl CategoryId {
    /// All categories, in table order.
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Length,
        CategoryId::Weight,
        CategoryId::Volume,
        CategoryId::Area,
    ];

    /// Stable lowercase identifier, matching the presentation boundary.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Length => "length",
            CategoryId::Weight => "weight",
            CategoryId::Volume => "volume",
            CategoryId::Area => "area",
        }
    }

    /// Human-readable label for this category.
    #[must_use]
    pub fn label(self) -> &'static str {
        UnitCategory::get(self).label
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(CategoryId::Length),
            "weight" => Ok(CategoryId::Weight),
            "volume" => Ok(CategoryId::Volume),
            "area" => Ok(CategoryId::Area),
            other => Err(CategoryParseError::Unknown(other.to_owned())),
        }
    }
}

//
// ─── UNIT CATEGORY ────────────────────────────────────────────────────────────
//

/// Static conversion table for one category.
///
/// Each category lists its units in ascending order of magnitude together
/// with the scale factor from that unit to the category base unit (the first
/// entry). Factors are exact powers of ten, so every conversion reduces to a
/// single multiply and divide against the base.
///
/// `disallowed_pairs` lists unordered unit pairs the random sampler must
/// avoid because the scale gap makes them useless as practice questions.
#[derive(Debug)]
pub struct UnitCategory {
    id: CategoryId,
    label: &'static str,
    units: &'static [&'static str],
    to_base: &'static [f64],
    disallowed_pairs: &'static [(&'static str, &'static str)],
}

static LENGTH: UnitCategory = UnitCategory {
    id: CategoryId::Length,
    label: "長さ",
    units: &["mm", "cm", "m", "km"],
    to_base: &[1.0, 10.0, 1_000.0, 1_000_000.0],
    disallowed_pairs: &[],
};

static WEIGHT: UnitCategory = UnitCategory {
    id: CategoryId::Weight,
    label: "重さ",
    units: &["mg", "g", "kg", "t"],
    to_base: &[1.0, 1_000.0, 1_000_000.0, 1_000_000_000.0],
    disallowed_pairs: &[],
};

// The mm3/m3 pair spans nine orders of magnitude and is skipped when
// sampling random questions.
static VOLUME: UnitCategory = UnitCategory {
    id: CategoryId::Volume,
    label: "体積",
    units: &["mm3", "cm3", "m3", "L", "dL"],
    to_base: &[1.0, 1_000.0, 1_000_000_000.0, 1_000_000.0, 100_000.0],
    disallowed_pairs: &[("mm3", "m3")],
};

static AREA: UnitCategory = UnitCategory {
    id: CategoryId::Area,
    label: "面積",
    units: &["mm2", "cm2", "m2", "a", "ha"],
    to_base: &[1.0, 100.0, 1_000_000.0, 100_000_000.0, 10_000_000_000.0],
    disallowed_pairs: &[],
};

impl UnitCategory {
    /// Looks up the static table for a category.
    #[must_use]
    pub fn get(id: CategoryId) -> &'static UnitCategory {
        match id {
            CategoryId::Length => &LENGTH,
            CategoryId::Weight => &WEIGHT,
            CategoryId::Volume => &VOLUME,
            CategoryId::Area => &AREA,
        }
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unit symbols in table order.
    #[must_use]
    pub fn units(&self) -> &'static [&'static str] {
        self.units
    }

    /// Scale factor from `unit` to the category base unit, if `unit` belongs
    /// to this category.
    #[must_use]
    pub fn to_base(&self, unit: &str) -> Option<f64> {
        let idx = self.units.iter().position(|u| *u == unit)?;
        Some(self.to_base[idx])
    }

    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains(&unit)
    }

    /// Unordered unit pairs excluded from random sampling.
    #[must_use]
    pub fn disallowed_pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.disallowed_pairs
    }

    /// Returns true if `{a, b}` matches a disallowed pair in either order.
    #[must_use]
    pub fn is_disallowed_pair(&self, a: &str, b: &str) -> bool {
        self.disallowed_pairs
            .iter()
            .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
    }
}
