use assessment_core::catalog::model::{
    ControlStatus, Framework, ImplementationGroup, SecurityControl,
};
use assessment_core::metrics::{
    category_progress, cis_control_progress, framework_coverage, framework_score,
    implementation_group_progress, overall_score, status_distribution,
};
use proptest::prelude::*;

fn control(
    id: &str,
    framework: Framework,
    level: ImplementationGroup,
    status: ControlStatus,
    score: Option<u8>,
) -> SecurityControl {
    SecurityControl {
        id: id.to_string(),
        name: format!("Control {}", id),
        description: String::new(),
        nist_mapping: vec![],
        implementation_level: Some(level),
        category: "General".to_string(),
        framework: Some(framework),
        status,
        score: score.map(Into::into),
        notes: None,
    }
}

fn mixed_frameworks() -> Vec<SecurityControl> {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    vec![
        control("CIS-1.1", CIS, IG1, Implemented, Some(4)),
        control("CIS-1.2", CIS, IG2, InProgress, Some(2)),
        control("NIST-AC-1", NIST, IG1, Planned, Some(0)),
        control("NIST-AC-2", NIST, IG1, Planned, Some(0)),
        control("NIST-AC-3", NIST, IG3, NotImplemented, Some(0)),
    ]
}

#[test]
fn mixed_framework_scores() {
    let controls = mixed_frameworks();
    assert_eq!(framework_score(&controls, Framework::CIS), 3.0);
    assert_eq!(framework_score(&controls, Framework::NIST), 0.0);
    assert_eq!(overall_score(&controls), 1.2);
}

#[test]
fn empty_list_yields_zero_not_nan() {
    assert_eq!(overall_score(&[]), 0.0);
    assert_eq!(framework_score(&[], Framework::CIS), 0.0);

    let statuses = status_distribution(&[]);
    assert_eq!(statuses.len(), 4);
    assert!(statuses.iter().all(|s| s.value == 0));

    let groups = implementation_group_progress(&[]);
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|g| g.percentage == 0));
}

#[test]
fn unscored_controls_are_excluded_from_average_but_count_in_progress() {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    let controls = vec![
        control("CIS-1.1", CIS, IG1, Planned, Some(4)),
        control("CIS-1.2", CIS, IG1, Planned, None),
    ];
    assert_eq!(overall_score(&controls), 4.0);
    // 4 / (2 * 5) = 40%
    assert_eq!(implementation_group_progress(&controls)[0].percentage, 40);

    let unscored = vec![control("CIS-1.2", CIS, IG1, Planned, None)];
    assert_eq!(overall_score(&unscored), 0.0);
}

#[test]
fn fractional_scores_and_missing_framework_are_tolerated() {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    let mut loose = control("CIS-4.1", CIS, IG1, Planned, None);
    loose.score = Some(serde_json::Number::from_f64(3.5).unwrap());
    loose.framework = None;
    loose.implementation_level = None;
    let controls = vec![control("CIS-1.1", CIS, IG1, Planned, Some(2)), loose];

    // (2 + 3.5) / 2 = 2.75
    assert_eq!(overall_score(&controls), 2.8);
    assert_eq!(framework_score(&controls, CIS), 2.0);
    assert_eq!(implementation_group_progress(&controls)[0].percentage, 40);
    assert_eq!(framework_coverage(&controls)[0].control_count, 1);
}

#[test]
fn overall_score_rounds_to_one_decimal() {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    let controls = vec![
        control("a", CIS, IG1, Planned, Some(1)),
        control("b", CIS, IG1, Planned, Some(2)),
        control("c", CIS, IG1, Planned, Some(2)),
    ];
    // 5 / 3 = 1.666..
    assert_eq!(overall_score(&controls), 1.7);
}

#[test]
fn group_progress_is_ordered_and_labelled() {
    let groups = implementation_group_progress(&mixed_frameworks());
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["IG1 - Basic", "IG2 - Foundational", "IG3 - Organizational"]
    );
    // IG1: 4 / 15 = 26.7 -> 27; IG2: 2 / 5 = 40; IG3: 0
    assert_eq!(groups[0].percentage, 27);
    assert_eq!(groups[1].percentage, 40);
    assert_eq!(groups[2].percentage, 0);
}

#[test]
fn status_distribution_rounds_each_bucket_independently() {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    // 1/3 each of three statuses: 33 + 33 + 33 + 0 = 99, not 100.
    let controls = vec![
        control("a", CIS, IG1, Implemented, Some(0)),
        control("b", CIS, IG1, InProgress, Some(0)),
        control("c", CIS, IG1, Planned, Some(0)),
    ];
    let shares = status_distribution(&controls);
    let values: Vec<u32> = shares.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![33, 33, 33, 0]);
    assert_eq!(values.iter().sum::<u32>(), 99);
    assert_eq!(shares[3].name, "Not Implemented");
}

#[test]
fn status_distribution_can_overshoot_100() {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    // 1/8 = 12.5 rounds up in three buckets: 13 + 13 + 13 + 63 = 102.
    let mut controls = vec![
        control("a", CIS, IG1, Implemented, Some(0)),
        control("b", CIS, IG1, InProgress, Some(0)),
        control("c", CIS, IG1, NotImplemented, Some(0)),
    ];
    for i in 0..5 {
        controls.push(control(&format!("p{}", i), CIS, IG1, Planned, Some(0)));
    }
    let sum: u32 = status_distribution(&controls).iter().map(|s| s.value).sum();
    assert_eq!(sum, 102);
}

#[test]
fn category_and_cis_rollups() {
    use ControlStatus::*;
    use Framework::*;
    use ImplementationGroup::*;
    let mut a = control("CIS-10.1", CIS, IG1, Planned, Some(5));
    a.category = "10. Malware Defenses".to_string();
    let mut b = control("CIS-2.1", CIS, IG1, Planned, Some(1));
    b.category = "2. Software Assets".to_string();
    let mut c = control("CIS-2.2", CIS, IG1, Planned, Some(3));
    c.category = "2. Software Assets".to_string();
    let mut d = control("NIST-AC-1", NIST, IG1, Planned, Some(5));
    d.category = "Access Control (AC)".to_string();
    let controls = vec![a, b, c, d];

    let categories = category_progress(&controls);
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].name, "10. Malware Defenses");
    assert_eq!(categories[0].implementation, 100);
    assert_eq!(categories[1].implementation, 40);

    let cis = cis_control_progress(&controls);
    let names: Vec<&str> = cis.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["CIS 2", "CIS 10"]);
    assert_eq!(cis[0].implementation, 40);

    let coverage = framework_coverage(&controls);
    assert_eq!(coverage[0].control_count, 3);
    assert_eq!(coverage[1].control_count, 1);
}

fn arb_control() -> impl Strategy<Value = SecurityControl> {
    (
        0u32..10_000,
        prop_oneof![Just(Framework::CIS), Just(Framework::NIST)],
        prop_oneof![
            Just(ImplementationGroup::IG1),
            Just(ImplementationGroup::IG2),
            Just(ImplementationGroup::IG3)
        ],
        prop_oneof![
            Just(ControlStatus::Implemented),
            Just(ControlStatus::InProgress),
            Just(ControlStatus::Planned),
            Just(ControlStatus::NotImplemented)
        ],
        proptest::option::of(0u8..=5),
    )
        .prop_map(|(n, framework, level, status, score)| {
            control(&format!("C-{}", n), framework, level, status, score)
        })
}

proptest! {
    #[test]
    fn prop_scores_stay_within_bounds(controls in prop::collection::vec(arb_control(), 1..60)) {
        let overall = overall_score(&controls);
        prop_assert!((0.0..=5.0).contains(&overall));
        for fw in Framework::ALL {
            let s = framework_score(&controls, fw);
            prop_assert!((0.0..=5.0).contains(&s));
        }
        for g in implementation_group_progress(&controls) {
            prop_assert!(g.percentage <= 100);
        }
    }

    #[test]
    fn prop_status_percentages_sum_near_100(controls in prop::collection::vec(arb_control(), 1..60)) {
        let sum: i64 = status_distribution(&controls).iter().map(|s| i64::from(s.value)).sum();
        prop_assert!((sum - 100).abs() <= 3, "sum was {}", sum);
    }

    #[test]
    fn prop_raising_a_score_only_moves_its_group(
        controls in prop::collection::vec(arb_control(), 1..40),
        index in any::<prop::sample::Index>(),
        target in 0u8..=5,
    ) {
        let i = index.index(controls.len());
        let before = implementation_group_progress(&controls);
        let mut raised = controls.clone();
        let old = raised[i].score_or_zero() as u8;
        raised[i].score = Some(old.max(target).into());
        let after = implementation_group_progress(&raised);

        let group = raised[i].implementation_level.unwrap();
        for (b, a) in before.iter().zip(after.iter()) {
            if b.group == group {
                prop_assert!(a.percentage >= b.percentage);
            } else {
                prop_assert_eq!(a.percentage, b.percentage);
            }
        }
    }
}
