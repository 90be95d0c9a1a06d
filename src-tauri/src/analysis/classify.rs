use serde::Serialize;

/// Three-level classification of a breakdown percentage. Band boundaries are
/// inclusive on their lower bound: 80.0 is High, 79.99 is Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatBand {
    High,
    Medium,
    Low,
}

impl HeatBand {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            HeatBand::High
        } else if percentage >= 50.0 {
            HeatBand::Medium
        } else {
            HeatBand::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            HeatBand::High => "#22c55e",
            HeatBand::Medium => "#f59e0b",
            HeatBand::Low => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRating {
    pub percentage: f64,
    pub band: HeatBand,
}

/// Rates one scoring category. `None` when `max` is not a positive finite
/// number; a valid payload never has such a category, so callers skip it.
pub fn classify(score: f64, max: f64) -> Option<CategoryRating> {
    if !(max > 0.0) || !max.is_finite() {
        return None;
    }
    let percentage = score / max * 100.0;
    Some(CategoryRating {
        percentage,
        band: HeatBand::for_percentage(percentage),
    })
}

/// `"keyword_density"` -> `"KEYWORD DENSITY"` (breakdown panel labels).
pub fn display_label(key: &str) -> String {
    key.replace(['_', '-'], " ").to_uppercase()
}

/// `"keyword_density"` -> `"Keyword Density"` (chart axis labels).
pub fn axis_label(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_linear_in_score() {
        let rating = classify(8.0, 10.0).unwrap();
        assert_eq!(rating.percentage, 80.0);
        let rating = classify(3.0, 12.0).unwrap();
        assert_eq!(rating.percentage, 25.0);
    }

    #[test]
    fn band_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(classify(80.0, 100.0).unwrap().band, HeatBand::High);
        assert_eq!(classify(79.99, 100.0).unwrap().band, HeatBand::Medium);
        assert_eq!(classify(50.0, 100.0).unwrap().band, HeatBand::Medium);
        assert_eq!(classify(49.99, 100.0).unwrap().band, HeatBand::Low);
        assert_eq!(classify(0.0, 100.0).unwrap().band, HeatBand::Low);
    }

    #[test]
    fn non_positive_max_is_rejected() {
        assert!(classify(5.0, 0.0).is_none());
        assert!(classify(5.0, -1.0).is_none());
        assert!(classify(5.0, f64::NAN).is_none());
    }

    #[test]
    fn labels_use_two_distinct_formats() {
        assert_eq!(display_label("keyword_density"), "KEYWORD DENSITY");
        assert_eq!(axis_label("keyword_density"), "Keyword Density");
        assert_eq!(axis_label("contact_info"), "Contact Info");
        assert_eq!(display_label("action-verbs"), "ACTION VERBS");
    }
}
