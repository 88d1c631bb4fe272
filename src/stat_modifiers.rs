use serde::{Deserialize, Serialize};

/// A `(multiply, add)` pair attached to a stat.
///
/// All modifiers on a stat fold into a single multiplier, see [`calculate_multiplier`].
/// Modifiers are plain values: the stat keeps a copy, and removing one removes the first
/// modifier that compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    #[serde(default = "neutral_multiply")]
    pub multiply_value: f32,
    #[serde(default)]
    pub add_value: f32,
}

fn neutral_multiply() -> f32 {
    1.0
}

impl StatModifier {
    pub fn new(multiply_value: f32, add_value: f32) -> Self {
        Self { multiply_value, add_value }
    }

    /// A modifier that only scales.
    pub fn multiply(multiply_value: f32) -> Self {
        Self { multiply_value, add_value: 0.0 }
    }

    /// A modifier that only adds to the multiplier.
    pub fn add(add_value: f32) -> Self {
        Self { multiply_value: 1.0, add_value }
    }
}

impl Default for StatModifier {
    fn default() -> Self {
        Self { multiply_value: 1.0, add_value: 0.0 }
    }
}

/// Folds modifiers into one multiplier: product of every `multiply_value` plus the sum of
/// every `add_value`. An empty list is exactly `1.0`.
pub fn calculate_multiplier(modifiers: &[StatModifier]) -> f32 {
    if modifiers.is_empty() {
        return 1.0;
    }

    let (product, sum) = modifiers.iter().fold((1.0, 0.0), |(product, sum), modifier| {
        (product * modifier.multiply_value, sum + modifier.add_value)
    });

    product + sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_multiplier_is_one() {
        assert_eq!(calculate_multiplier(&[]), 1.0);
    }

    #[test]
    fn test_product_plus_sum() {
        let modifiers = [StatModifier::new(2.0, 0.0), StatModifier::new(1.0, 3.0)];
        assert_eq!(calculate_multiplier(&modifiers), 5.0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = [
            StatModifier::multiply(2.0),
            StatModifier::add(0.5),
            StatModifier::new(3.0, 1.0),
        ];
        let mut backward = forward;
        backward.reverse();
        assert_eq!(calculate_multiplier(&forward), calculate_multiplier(&backward));
        assert_eq!(calculate_multiplier(&forward), 7.5);
    }

    #[test]
    fn test_single_neutral_modifier() {
        assert_eq!(calculate_multiplier(&[StatModifier::default()]), 1.0);
    }

    #[test]
    fn test_add_only_modifier_is_offset_from_one() {
        // product of the lone modifier is 1, so the add lands on top of it
        assert_eq!(calculate_multiplier(&[StatModifier::add(-1.0)]), 0.0);
    }
}
