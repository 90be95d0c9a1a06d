use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

use crate::analysis::classify::{axis_label, classify, display_label};
use crate::models::resume::RuleCategory;

pub const PROFILE_AXIS_MAX: f64 = 100.0;
pub const PROFILE_TICK_STEP: f64 = 20.0;

const PROFILE_ACCENT: &str = "#6366f1";

/// One category of the trend chart. `label` is the Title Case axis form;
/// `panel_label` is the uppercase form the breakdown panel prints beside it.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub panel_label: String,
    pub value: f64,
    pub color: String,
    pub tooltip: String,
}

/// Multi-axis profile of the same percentages, drawn as a closed polygon in a
/// single accent color on a fixed 0-100 scale.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub axis_max: f64,
    pub tick_step: f64,
    pub color: String,
    pub closed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownCharts {
    pub trend: Vec<TrendPoint>,
    pub profile: ProfileSeries,
}

/// Rebuilds both chart series from scratch. Axis and label order follow the
/// breakdown's own iteration order, so the two series always line up.
pub fn build_breakdown_charts(breakdown: &IndexMap<String, RuleCategory>) -> BreakdownCharts {
    let mut trend = Vec::with_capacity(breakdown.len());
    let mut labels = Vec::with_capacity(breakdown.len());
    let mut values = Vec::with_capacity(breakdown.len());

    for (key, category) in breakdown {
        let Some(rating) = classify(category.score, category.max) else {
            warn!(
                "skipping breakdown category {key}: max {} is not positive",
                category.max
            );
            continue;
        };

        let label = axis_label(key);
        trend.push(TrendPoint {
            label: label.clone(),
            panel_label: display_label(key),
            value: rating.percentage,
            color: rating.band.color().to_string(),
            tooltip: format!(
                "{:.1}% ({}/{})",
                rating.percentage, category.score, category.max
            ),
        });
        labels.push(label);
        values.push(rating.percentage);
    }

    BreakdownCharts {
        trend,
        profile: ProfileSeries {
            labels,
            values,
            axis_max: PROFILE_AXIS_MAX,
            tick_step: PROFILE_TICK_STEP,
            color: PROFILE_ACCENT.to_string(),
            closed: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(entries: &[(&str, f64, f64)]) -> IndexMap<String, RuleCategory> {
        entries
            .iter()
            .map(|(key, score, max)| {
                (
                    key.to_string(),
                    RuleCategory {
                        score: *score,
                        max: *max,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn both_series_share_order_and_values() {
        let charts = build_breakdown_charts(&breakdown(&[
            ("contact_info", 8.0, 10.0),
            ("standard_sections", 9.0, 15.0),
            ("action_verbs", 4.0, 10.0),
        ]));

        let trend_labels: Vec<&str> = charts.trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            trend_labels,
            ["Contact Info", "Standard Sections", "Action Verbs"]
        );
        assert_eq!(charts.profile.labels, trend_labels);
        assert_eq!(charts.profile.values, vec![80.0, 60.0, 40.0]);
        assert_eq!(
            charts.trend.iter().map(|p| p.value).collect::<Vec<_>>(),
            charts.profile.values
        );
    }

    #[test]
    fn trend_points_carry_band_colors_and_raw_pair_tooltips() {
        let charts = build_breakdown_charts(&breakdown(&[
            ("contact_info", 8.0, 10.0),
            ("standard_sections", 9.0, 15.0),
            ("action_verbs", 4.0, 10.0),
        ]));

        assert_eq!(charts.trend[0].color, "#22c55e");
        assert_eq!(charts.trend[1].color, "#f59e0b");
        assert_eq!(charts.trend[2].color, "#ef4444");
        assert_eq!(charts.trend[0].tooltip, "80.0% (8/10)");
    }

    #[test]
    fn trend_points_carry_both_label_forms() {
        let charts = build_breakdown_charts(&breakdown(&[("keyword_density", 8.0, 10.0)]));
        assert_eq!(charts.trend[0].label, "Keyword Density");
        assert_eq!(charts.trend[0].panel_label, "KEYWORD DENSITY");
    }

    #[test]
    fn profile_axis_is_fixed_zero_to_hundred() {
        let charts = build_breakdown_charts(&breakdown(&[("contact_info", 8.0, 10.0)]));
        assert_eq!(charts.profile.axis_max, 100.0);
        assert_eq!(charts.profile.tick_step, 20.0);
        assert!(charts.profile.closed);
    }

    #[test]
    fn zero_max_category_is_skipped_not_fatal() {
        let charts = build_breakdown_charts(&breakdown(&[
            ("broken", 5.0, 0.0),
            ("contact_info", 8.0, 10.0),
        ]));
        assert_eq!(charts.trend.len(), 1);
        assert_eq!(charts.profile.labels, ["Contact Info"]);
    }

    #[test]
    fn empty_breakdown_yields_empty_series() {
        let charts = build_breakdown_charts(&IndexMap::new());
        assert!(charts.trend.is_empty());
        assert!(charts.profile.values.is_empty());
    }
}
