use assessment_core::catalog::model::{score_label, ControlStatus, Framework};
use assessment_core::catalog::Catalog;
use assessment_core::persistence::transfer::parse_date;
use assessment_core::report::{
    render_controls_csv, render_report_markdown, truncate_name, AssessmentReport,
};

#[test]
fn score_labels_cover_the_maturity_scale() {
    assert_eq!(score_label(None), "Not Scored");
    assert_eq!(score_label(Some(0.0)), "Not Implemented (0)");
    assert_eq!(score_label(Some(3.0)), "Defined (3)");
    assert_eq!(score_label(Some(5.0)), "Optimized (5)");
    assert_eq!(score_label(Some(7.0)), "Score: 7");
    assert_eq!(score_label(Some(3.5)), "Score: 3.5");
}

#[test]
fn long_names_are_truncated_to_forty_chars() {
    let name = "Perform Automated Vulnerability Scans of Externally-Exposed Enterprise Assets";
    let short = truncate_name(name);
    assert_eq!(short, "Perform Automated Vulnerability Scans of...");
    assert_eq!(truncate_name("Account Management"), "Account Management");
}

#[test]
fn report_groups_by_framework_then_sorted_category() {
    let mut controls = Catalog::builtin().defaults();
    controls[0].score = Some(5u8.into());
    controls[0].status = ControlStatus::Implemented;
    let report = AssessmentReport::build(&controls, parse_date("2025-06-30").unwrap()).unwrap();

    assert_eq!(report.generated_on, "2025-06-30");
    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.sections[0].framework, Some(Framework::CIS));
    assert_eq!(report.sections[1].framework, Some(Framework::NIST));

    let cats: Vec<&str> = report.sections[0]
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    let mut sorted = cats.clone();
    sorted.sort();
    assert_eq!(cats, sorted);

    let rows: usize = report
        .sections
        .iter()
        .flat_map(|s| s.categories.iter())
        .map(|c| c.rows.len())
        .sum();
    assert_eq!(rows, controls.len());

    let first = report.sections[0]
        .categories
        .iter()
        .flat_map(|c| c.rows.iter())
        .find(|r| r.id == "CIS-1.1")
        .unwrap();
    assert_eq!(first.score, "Optimized (5)");
    assert_eq!(first.status, "Implemented");
    assert_eq!(first.nist_mapping, "CM-8, PM-5");
}

#[test]
fn markdown_report_has_summary_blocks() {
    let controls = Catalog::builtin().defaults();
    let report = AssessmentReport::build(&controls, parse_date("2025-06-30").unwrap()).unwrap();
    let md = render_report_markdown(&report);
    assert!(md.starts_with("# Security Controls Assessment Report\n"));
    assert!(md.contains("- CIS Controls: 42 controls"));
    assert!(md.contains("- NIST 800-53: 34 controls"));
    assert!(md.contains("## Overall Assessment Score\n\n0/5"));
    assert!(md.contains("| Planned | 100% |"));
    assert!(md.contains("| IG1 - Basic | 0% |"));
    assert!(md.contains("## CIS Controls Assessment"));
    assert!(md.contains("## NIST 800-53 Assessment"));
}

#[test]
fn csv_has_header_and_one_row_per_control() {
    let controls = Catalog::builtin().defaults();
    let report = AssessmentReport::build(&controls, parse_date("2025-06-30").unwrap()).unwrap();
    let csv = render_controls_csv(&report).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "framework,category,id,control,score,status,level,nist_mapping"
    );
    assert_eq!(lines.len(), controls.len() + 1);
    assert!(!csv.contains("\r\n"));
}

#[test]
fn empty_assessment_still_renders() {
    let report = AssessmentReport::build(&[], parse_date("2025-06-30").unwrap()).unwrap();
    assert!(report.sections.is_empty());
    assert_eq!(report.overall_score, 0.0);
    let md = render_report_markdown(&report);
    assert!(md.contains("| Implemented | 0% |"));
}

#[test]
fn controls_without_framework_get_their_own_section() {
    let mut controls = Catalog::builtin().defaults();
    controls.truncate(2);
    controls[1].framework = None;
    controls[1].implementation_level = None;
    let report = AssessmentReport::build(&controls, parse_date("2025-06-30").unwrap()).unwrap();

    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.sections[1].framework, None);
    assert_eq!(report.sections[1].title, "Unassigned Controls");
    let row = &report.sections[1].categories[0].rows[0];
    assert_eq!(row.id, controls[1].id);
    assert_eq!(row.level, "");

    let csv = render_controls_csv(&report).unwrap();
    assert!(csv.lines().last().unwrap().starts_with(",1. Inventory"));
}
