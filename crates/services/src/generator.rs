//! Random problem generation.
//!
//! All sampling goes through an injected [`rand::Rng`] so generation is
//! deterministic under a seeded rng in tests.

use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use drill_core::convert::ConvertError;
use drill_core::model::{CategoryId, CategoryParseError, Problem, ProblemError, UnitCategory};

/// Retry cap when sampling a unit pair. After this many rejected draws the
/// last sampled pair is accepted as-is, even if degenerate. Best-effort by
/// design, not a hard guarantee.
const MAX_PAIR_ATTEMPTS: u32 = 10;

//
// ─── CATEGORY SELECTOR ────────────────────────────────────────────────────────
//

/// Which category to draw a question from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySelector {
    /// Pick uniformly at random among all categories.
    #[default]
    Any,
    /// Restrict generation to one category.
    Only(CategoryId),
}

impl FromStr for CategorySelector {
    type Err = CategoryParseError;

    /// Parses the presentation layer's selector choice: `"all"` means any
    /// category, anything else must be a category id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategorySelector::Any);
        }
        Ok(CategorySelector::Only(s.parse()?))
    }
}

//
// ─── GENERATION ───────────────────────────────────────────────────────────────
//

/// Errors emitted while generating a random problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Generates a random conversion problem.
///
/// Picks a category per `selector`, then draws `from`/`to` independently and
/// uniformly from the category's unit list until they differ and the pair is
/// not disallowed, capped at 10 attempts. The magnitude is uniform in
/// `[1, 100)`, rounded to 2 decimal places.
///
/// # Errors
///
/// Returns `GenerateError::Convert` if the sampled units fail conversion;
/// with units drawn from the catalog itself this does not happen in
/// practice.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    selector: CategorySelector,
) -> Result<Problem, GenerateError> {
    let category = match selector {
        CategorySelector::Any => CategoryId::ALL[rng.random_range(0..CategoryId::ALL.len())],
        CategorySelector::Only(id) => id,
    };
    let cat = UnitCategory::get(category);
    let units = cat.units();

    let mut from;
    let mut to;
    let mut attempts = 0;
    loop {
        from = units[rng.random_range(0..units.len())];
        to = units[rng.random_range(0..units.len())];
        attempts += 1;
        if (from != to && !cat.is_disallowed_pair(from, to)) || attempts >= MAX_PAIR_ATTEMPTS {
            break;
        }
    }

    let value = round_to_cents(rng.random_range(1.0..100.0));
    Ok(Problem::from_sampled(value, from, to, category)?)
}

/// Builds a problem directly from caller-specified inputs, for the custom
/// question mode. No randomness involved.
///
/// # Errors
///
/// Returns `ProblemError::InvalidInput` if `value` is negative or not
/// finite, `ProblemError::SameUnit` if the units are equal, and
/// `ProblemError::InvalidUnit` if either unit is not in `category`.
pub fn generate_explicit(
    value: f64,
    from: &str,
    to: &str,
    category: CategoryId,
) -> Result<Problem, ProblemError> {
    Problem::new(value, from, to, category)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generation_is_deterministic_under_a_seed() {
        let a = generate(&mut StdRng::seed_from_u64(7), CategorySelector::Any).unwrap();
        let b = generate(&mut StdRng::seed_from_u64(7), CategorySelector::Any).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn respects_the_category_restriction() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let problem = generate(&mut rng, CategorySelector::Only(CategoryId::Weight)).unwrap();
            assert_eq!(problem.category(), CategoryId::Weight);
        }
    }

    #[test]
    fn units_come_from_the_selected_category() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let problem = generate(&mut rng, CategorySelector::Any).unwrap();
            let cat = UnitCategory::get(problem.category());
            assert!(cat.contains(problem.from_unit()));
            assert!(cat.contains(problem.to_unit()));
            assert_ne!(problem.from_unit(), problem.to_unit());
        }
    }

    #[test]
    fn value_is_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let problem = generate(&mut rng, CategorySelector::Any).unwrap();
            let value = problem.value();
            // 99.995+ rounds up to 100.00, so the upper bound is inclusive.
            assert!((1.0..=100.0).contains(&value), "value {value} out of range");
            assert_eq!(round_to_cents(value), value, "value {value} not rounded");
        }
    }

    #[test]
    fn volume_never_pairs_mm3_with_m3() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            let problem = generate(&mut rng, CategorySelector::Only(CategoryId::Volume)).unwrap();
            let pair = (problem.from_unit(), problem.to_unit());
            assert_ne!(pair, ("mm3", "m3"));
            assert_ne!(pair, ("m3", "mm3"));
        }
    }

    #[test]
    fn answer_matches_a_direct_conversion() {
        let mut rng = StdRng::seed_from_u64(5);
        let problem = generate(&mut rng, CategorySelector::Any).unwrap();
        let expected = drill_core::convert(
            problem.value(),
            problem.from_unit(),
            problem.to_unit(),
            problem.category(),
        )
        .unwrap();
        assert_eq!(problem.answer(), expected);
    }

    #[test]
    fn explicit_generation_validates_inputs() {
        assert_eq!(
            generate_explicit(-1.0, "m", "km", CategoryId::Length),
            Err(ProblemError::InvalidInput)
        );
        assert_eq!(
            generate_explicit(5.0, "m", "m", CategoryId::Length),
            Err(ProblemError::SameUnit)
        );
        assert!(matches!(
            generate_explicit(5.0, "m", "furlong", CategoryId::Length),
            Err(ProblemError::InvalidUnit(_))
        ));

        let problem = generate_explicit(5.0, "km", "m", CategoryId::Length).unwrap();
        assert_eq!(problem.answer(), 5000.0);
    }

    #[test]
    fn selector_parses_from_boundary_text() {
        assert_eq!("all".parse::<CategorySelector>(), Ok(CategorySelector::Any));
        assert_eq!(
            "area".parse::<CategorySelector>(),
            Ok(CategorySelector::Only(CategoryId::Area))
        );
        assert!("metric".parse::<CategorySelector>().is_err());
    }

    #[test]
    fn cents_rounding() {
        assert_eq!(round_to_cents(12.3456), 12.35);
        assert_eq!(round_to_cents(1.0), 1.0);
    }
}
