//! Fraction expansion: `1/d … d/d` as percentage utilities.

use crate::pattern::{PatternFields, ValueSelection};
use crate::writer::RuleWriter;
use atomic_model::{AtomicError, AtomicResult, BuildTree, CssValue, FractionRule, PatternRule};

/// Decimal places kept in generated percentages.
const PERCENT_PRECISION: usize = 4;

/// Formats `numerator / denominator * 100` as a percentage, rounded to four
/// decimals with trailing zeros dropped.
fn format_percentage(numerator: u32, denominator: u32) -> String {
    let percent = f64::from(numerator) / f64::from(denominator) * 100.0;
    let formatted = format!("{percent:.PERCENT_PRECISION$}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

impl RuleWriter<'_> {
    /// Writes one rule per numerator `1..=denominator` for every property.
    /// The suffix is `n/d`, escaped downstream to `n\/d`.
    pub fn add_fraction_rules(
        &self,
        fraction: &FractionRule,
        fields: &PatternFields<'_>,
        break_points: &[String],
    ) -> AtomicResult<BuildTree> {
        let denominator = fraction.denominator;
        if denominator == 0 {
            return Err(AtomicError::shape(format!(
                "fraction denominator of pattern '{}' must be a positive integer",
                fields.id
            )));
        }
        fields.validate()?;

        (1..=denominator)
            .map(|numerator| {
                let rule = PatternRule::new(
                    format!("{numerator}/{denominator}"),
                    vec![CssValue::Text(format_percentage(numerator, denominator))],
                );
                self.add_pattern_rule(&rule, fields, ValueSelection::Own, break_points)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_percentages_have_no_decimals() {
        assert_eq!(format_percentage(1, 2), "50%");
        assert_eq!(format_percentage(4, 4), "100%");
        assert_eq!(format_percentage(1, 5), "20%");
    }

    #[test]
    fn repeating_decimals_round_to_four_places() {
        assert_eq!(format_percentage(1, 3), "33.3333%");
        assert_eq!(format_percentage(2, 3), "66.6667%");
        assert_eq!(format_percentage(1, 6), "16.6667%");
    }

    #[test]
    fn short_decimals_drop_trailing_zeros() {
        assert_eq!(format_percentage(1, 8), "12.5%");
        assert_eq!(format_percentage(1, 16), "6.25%");
    }
}
