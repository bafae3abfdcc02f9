use crate::catalog::model::{
    ControlStatus, Framework, ImplementationGroup, SecurityControl, MAX_SCORE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupProgress {
    pub group: ImplementationGroup,
    pub name: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusShare {
    pub status: ControlStatus,
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryProgress {
    pub name: String,
    pub implementation: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameworkCoverage {
    pub framework: Framework,
    pub control_count: usize,
}

// Ties go toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn round_one_decimal(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}

fn percentage(numerator: f64, denominator: f64) -> u32 {
    if denominator <= 0.0 {
        return 0;
    }
    round_half_up(numerator / denominator * 100.0).max(0.0) as u32
}

// Unscored controls count as 0 here.
fn progress<'a>(controls: impl Iterator<Item = &'a SecurityControl>) -> u32 {
    let (count, total) = controls.fold((0u32, 0.0), |(count, total), c| {
        (count + 1, total + c.score_or_zero())
    });
    percentage(total, f64::from(count) * f64::from(MAX_SCORE))
}

// Unscored controls are left out of both sums.
fn average_score<'a>(controls: impl Iterator<Item = &'a SecurityControl>) -> f64 {
    let (scored, total) = controls
        .filter_map(SecurityControl::score_value)
        .fold((0u32, 0.0), |(n, sum), s| (n + 1, sum + s));
    if scored == 0 {
        return 0.0;
    }
    let max = f64::from(MAX_SCORE);
    round_one_decimal(total / (f64::from(scored) * max) * max)
}

pub fn overall_score(controls: &[SecurityControl]) -> f64 {
    average_score(controls.iter())
}

pub fn framework_score(controls: &[SecurityControl], framework: Framework) -> f64 {
    average_score(controls.iter().filter(|c| c.framework == Some(framework)))
}

pub fn implementation_group_progress(controls: &[SecurityControl]) -> Vec<GroupProgress> {
    ImplementationGroup::ALL
        .into_iter()
        .map(|group| GroupProgress {
            group,
            name: group.label().to_string(),
            percentage: progress(
                controls
                    .iter()
                    .filter(|c| c.implementation_level == Some(group)),
            ),
        })
        .collect()
}

// Each share is rounded on its own; the four values can miss 100 by up to 3.
pub fn status_distribution(controls: &[SecurityControl]) -> Vec<StatusShare> {
    let total = controls.len() as f64;
    ControlStatus::ALL
        .into_iter()
        .map(|status| {
            let count = controls.iter().filter(|c| c.status == status).count();
            StatusShare {
                status,
                name: status.label().to_string(),
                value: percentage(count as f64, total),
            }
        })
        .collect()
}

pub fn category_progress(controls: &[SecurityControl]) -> Vec<CategoryProgress> {
    let mut categories: Vec<&str> = Vec::new();
    for control in controls {
        if !categories.contains(&control.category.as_str()) {
            categories.push(&control.category);
        }
    }
    categories
        .into_iter()
        .map(|name| CategoryProgress {
            name: name.to_string(),
            implementation: progress(controls.iter().filter(|c| c.category == name)),
        })
        .collect()
}

// `CIS-5.1` rolls up into `CIS 5`.
pub fn cis_control_progress(controls: &[SecurityControl]) -> Vec<CategoryProgress> {
    let mut numbers: Vec<u32> = controls
        .iter()
        .filter(|c| c.framework == Some(Framework::CIS))
        .filter_map(|c| cis_control_number(&c.id))
        .collect();
    numbers.sort_unstable();
    numbers.dedup();

    numbers
        .into_iter()
        .map(|number| CategoryProgress {
            name: format!("CIS {}", number),
            implementation: progress(controls.iter().filter(|c| {
                c.framework == Some(Framework::CIS) && cis_control_number(&c.id) == Some(number)
            })),
        })
        .collect()
}

fn cis_control_number(id: &str) -> Option<u32> {
    let rest = id.strip_prefix("CIS-")?;
    rest.split('.').next()?.parse().ok()
}

pub fn framework_coverage(controls: &[SecurityControl]) -> Vec<FrameworkCoverage> {
    Framework::ALL
        .into_iter()
        .map(|framework| FrameworkCoverage {
            framework,
            control_count: controls
                .iter()
                .filter(|c| c.framework == Some(framework))
                .count(),
        })
        .collect()
}
