use chrono::NaiveDate;
use graftwatch_risk::{
    assess_latest, estimate_rejection_probability_range, measurement_trends,
    months_since_transplant, next_review_date, overall_trend_direction, AlertLevel, RiskLevel,
    RiskPolicy, TrendBadgeKind, TrendDirection,
};
use graftwatch_types::Measurement;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn heart_recipient_history() -> Vec<Measurement> {
    vec![
        Measurement::new(d("2025-10-25"), 110.2, 5.5).with_outcome("Stable"),
        Measurement::new(d("2025-11-01"), 135.8, 12.3).with_outcome("Mild Rejection"),
        Measurement::new(d("2025-11-04"), 280.5, 25.7).with_outcome("Severe Rejection"),
    ]
}

#[test]
fn escalating_recipient_is_flagged_critical() {
    let history = heart_recipient_history();
    let today = d("2025-11-04");

    let assessment = assess_latest(&history).expect("non-empty history");
    assert_eq!(assessment.level, AlertLevel::Critical);
    assert_eq!(assessment.risk_level, RiskLevel::High);

    let latest = history.last().unwrap().donor_cfdna;
    assert_eq!(estimate_rejection_probability_range(latest), "85-95");
    // 25.7 > 12.3 * 1.5 = 18.45
    assert_eq!(
        overall_trend_direction(&history),
        TrendDirection::RisingRapidly
    );
    assert_eq!(next_review_date(assessment.level, today), d("2025-11-05"));
    assert_eq!(months_since_transplant(d("2024-02-20"), today), 21);

    let kinds: Vec<TrendBadgeKind> = measurement_trends(&history)
        .into_iter()
        .map(|b| b.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TrendBadgeKind::Stable,
            TrendBadgeKind::Up,
            TrendBadgeKind::Up
        ]
    );
}

#[test]
fn stable_recipient_gets_routine_cadence() {
    let history = vec![
        Measurement::new(d("2025-10-25"), 120.5, 4.2),
        Measurement::new(d("2025-11-01"), 118.3, 5.1),
        Measurement::new(d("2025-11-04"), 125.7, 4.8),
    ];
    let assessment = assess_latest(&history).unwrap();
    assert_eq!(assessment.level, AlertLevel::Stable);
    assert_eq!(estimate_rejection_probability_range(4.8), "5-10");
    assert_eq!(overall_trend_direction(&history), TrendDirection::Stable);
    assert_eq!(
        next_review_date(assessment.level, d("2025-11-04")),
        d("2025-12-04")
    );

    let texts: Vec<String> = measurement_trends(&history)
        .into_iter()
        .map(|b| b.text)
        .collect();
    assert_eq!(texts, vec!["Stable", "+21.4%", "Stable"]);
}

#[test]
fn policy_loaded_from_json_drives_the_same_questions() {
    let policy = RiskPolicy::from_json(
        r#"{ "critical_above": 30.0, "warning_above": 20.0, "review": { "warning_days": 7 } }"#,
    )
    .unwrap();
    let history = heart_recipient_history();
    let assessment = policy.assess_latest(&history).unwrap();
    assert_eq!(assessment.level, AlertLevel::Warning);
    assert_eq!(
        policy.next_review_date(assessment.level, d("2025-11-04")),
        d("2025-11-11")
    );
}
