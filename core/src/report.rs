use crate::catalog::model::{score_label, Framework, SecurityControl};
use crate::error::CoreResult;
use crate::metrics::{self, FrameworkCoverage, GroupProgress, StatusShare};
use crate::persistence::transfer::format_date;
use serde::Serialize;
use time::Date;

const NAME_WIDTH: usize = 40;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub score: String,
    pub status: String,
    pub level: String,
    pub nist_mapping: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySection {
    pub category: String,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameworkSection {
    pub framework: Option<Framework>,
    pub title: String,
    pub categories: Vec<CategorySection>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssessmentReport {
    pub generated_on: String,
    pub coverage: Vec<FrameworkCoverage>,
    pub overall_score: f64,
    pub status_distribution: Vec<StatusShare>,
    pub group_progress: Vec<GroupProgress>,
    pub sections: Vec<FrameworkSection>,
}

impl AssessmentReport {
    pub fn build(controls: &[SecurityControl], generated_on: Date) -> CoreResult<Self> {
        let sections = Framework::ALL
            .into_iter()
            .map(Some)
            .chain([None])
            .map(|framework| build_section(controls, framework))
            .filter(|section| !section.categories.is_empty())
            .collect();
        Ok(Self {
            generated_on: format_date(generated_on)?,
            coverage: metrics::framework_coverage(controls),
            overall_score: metrics::overall_score(controls),
            status_distribution: metrics::status_distribution(controls),
            group_progress: metrics::implementation_group_progress(controls),
            sections,
        })
    }
}

fn build_section(controls: &[SecurityControl], framework: Option<Framework>) -> FrameworkSection {
    let in_framework: Vec<&SecurityControl> = controls
        .iter()
        .filter(|c| c.framework == framework)
        .collect();
    let mut names: Vec<&str> = in_framework.iter().map(|c| c.category.as_str()).collect();
    names.sort();
    names.dedup();

    let categories = names
        .into_iter()
        .map(|category| CategorySection {
            category: category.to_string(),
            rows: in_framework
                .iter()
                .filter(|c| c.category == category)
                .map(|c| report_row(c))
                .collect(),
        })
        .collect();

    FrameworkSection {
        framework,
        title: match framework {
            Some(fw) => format!("{} Assessment", fw.display_name()),
            None => "Unassigned Controls".to_string(),
        },
        categories,
    }
}

fn report_row(control: &SecurityControl) -> ReportRow {
    ReportRow {
        id: control.id.clone(),
        name: truncate_name(&control.name),
        score: score_label(control.score_value()),
        status: control.status.label().to_string(),
        level: control
            .implementation_level
            .map(|level| level.as_str().to_string())
            .unwrap_or_default(),
        nist_mapping: control.nist_mapping.join(", "),
    }
}

pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

pub fn render_report_markdown(report: &AssessmentReport) -> String {
    let mut out = Vec::new();
    out.push("# Security Controls Assessment Report".to_string());
    out.push("".to_string());
    out.push(format!("Generated on: {}", report.generated_on));
    out.push("".to_string());

    out.push("## Framework Coverage".to_string());
    out.push("".to_string());
    for c in &report.coverage {
        out.push(format!(
            "- {}: {} controls",
            c.framework.display_name(),
            c.control_count
        ));
    }
    out.push("".to_string());

    out.push("## Overall Assessment Score".to_string());
    out.push("".to_string());
    out.push(format!("{}/5", report.overall_score));
    out.push("".to_string());

    out.push("## Implementation Status".to_string());
    out.push("".to_string());
    out.push("| Status | Percentage |".to_string());
    out.push("|---|---|".to_string());
    for s in &report.status_distribution {
        out.push(format!("| {} | {}% |", s.name, s.value));
    }
    out.push("".to_string());

    out.push("## Implementation Group Progress".to_string());
    out.push("".to_string());
    out.push("| Group | Progress |".to_string());
    out.push("|---|---|".to_string());
    for g in &report.group_progress {
        out.push(format!("| {} | {}% |", g.name, g.percentage));
    }
    out.push("".to_string());

    for section in &report.sections {
        out.push(format!("## {}", section.title));
        out.push("".to_string());
        for cat in &section.categories {
            out.push(format!("### {}", cat.category));
            out.push("".to_string());
            out.push("| ID | Control | Score | Status | Level | NIST Mapping |".to_string());
            out.push("|---|---|---|---|---|---|".to_string());
            for row in &cat.rows {
                out.push(format!(
                    "| {} | {} | {} | {} | {} | {} |",
                    row.id, row.name, row.score, row.status, row.level, row.nist_mapping
                ));
            }
            out.push("".to_string());
        }
    }
    out.join("\n")
}

pub fn render_controls_csv(report: &AssessmentReport) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record([
        "framework",
        "category",
        "id",
        "control",
        "score",
        "status",
        "level",
        "nist_mapping",
    ])?;
    for section in &report.sections {
        for cat in &section.categories {
            for row in &cat.rows {
                wtr.write_record([
                    section.framework.map(Framework::as_str).unwrap_or(""),
                    cat.category.as_str(),
                    row.id.as_str(),
                    row.name.as_str(),
                    row.score.as_str(),
                    row.status.as_str(),
                    row.level.as_str(),
                    row.nist_mapping.as_str(),
                ])?;
            }
        }
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}
