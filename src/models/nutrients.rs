use std::iter::Sum;
use std::ops::{Add, Div, Mul};

use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Carbohydrate, protein and fat grams plus calories.
///
/// Calories are tracked on their own and are not derived from the macro
/// grams, since label calories rarely match the 4/4/9 estimate exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientValue {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
}

impl NutrientValue {
    pub fn new(carbs: f64, protein: f64, fat: f64, calories: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
            calories,
        }
    }

    /// Calories implied by the macro grams (4/4/9 kcal per gram).
    #[inline]
    pub fn macro_calories(&self) -> f64 {
        self.carbs_calories() + self.protein_calories() + self.fat_calories()
    }

    #[inline]
    pub fn carbs_calories(&self) -> f64 {
        self.carbs * KCAL_PER_G_CARBS
    }

    #[inline]
    pub fn protein_calories(&self) -> f64 {
        self.protein * KCAL_PER_G_PROTEIN
    }

    #[inline]
    pub fn fat_calories(&self) -> f64 {
        self.fat * KCAL_PER_G_FAT
    }

    /// Mean of the given values: sum then divide by count.
    ///
    /// Returns `None` for an empty slice.
    pub fn average(values: &[NutrientValue]) -> Option<NutrientValue> {
        if values.is_empty() {
            return None;
        }
        let total: NutrientValue = values.iter().copied().sum();
        Some(total / values.len() as f64)
    }
}

impl Add for NutrientValue {
    type Output = NutrientValue;

    fn add(self, other: NutrientValue) -> NutrientValue {
        NutrientValue {
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            calories: self.calories + other.calories,
        }
    }
}

impl Mul<f64> for NutrientValue {
    type Output = NutrientValue;

    fn mul(self, factor: f64) -> NutrientValue {
        NutrientValue {
            carbs: self.carbs * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            calories: self.calories * factor,
        }
    }
}

impl Div<f64> for NutrientValue {
    type Output = NutrientValue;

    fn div(self, divisor: f64) -> NutrientValue {
        NutrientValue {
            carbs: self.carbs / divisor,
            protein: self.protein / divisor,
            fat: self.fat / divisor,
            calories: self.calories / divisor,
        }
    }
}

impl Sum for NutrientValue {
    fn sum<I: Iterator<Item = NutrientValue>>(iter: I) -> NutrientValue {
        iter.fold(NutrientValue::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_two() {
        let values = [
            NutrientValue::new(10.0, 0.0, 0.0, 40.0),
            NutrientValue::new(0.0, 10.0, 0.0, 40.0),
        ];
        let avg = NutrientValue::average(&values).unwrap();
        assert_eq!(avg, NutrientValue::new(5.0, 5.0, 0.0, 40.0));
    }

    #[test]
    fn test_average_empty_is_none() {
        assert!(NutrientValue::average(&[]).is_none());
    }

    #[test]
    fn test_average_matches_sum_over_len() {
        let values = [
            NutrientValue::new(12.5, 3.0, 1.0, 80.0),
            NutrientValue::new(0.0, 22.0, 4.5, 130.0),
            NutrientValue::new(30.0, 2.0, 0.5, 135.0),
        ];
        let sum: NutrientValue = values.iter().copied().sum();
        let expected = sum / 3.0;

        let mut reversed = values;
        reversed.reverse();

        let avg = NutrientValue::average(&values).unwrap();
        let avg_rev = NutrientValue::average(&reversed).unwrap();
        for (a, b) in [
            (avg.carbs, expected.carbs),
            (avg.protein, expected.protein),
            (avg.fat, expected.fat),
            (avg.calories, expected.calories),
            (avg_rev.calories, expected.calories),
        ] {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scale() {
        let v = NutrientValue::new(10.0, 5.0, 2.0, 78.0) * 2.0;
        assert_eq!(v, NutrientValue::new(20.0, 10.0, 4.0, 156.0));
    }

    #[test]
    fn test_macro_calories() {
        let v = NutrientValue::new(10.0, 10.0, 10.0, 0.0);
        assert!((v.macro_calories() - 170.0).abs() < 0.001);
    }
}
