// Unit tests for the match engine core

use chrono::NaiveDate;
use match_engine::core::{
    aggregate_score, build_candidate_context, build_job_context, calendar_duration,
    format_duration, format_resume, JobRequirements, MatchWeights, RawRequirementsInput,
    NO_EXPERIENCE_SENTINEL,
};
use match_engine::models::{
    Candidate, Experience, IndustryFit, Job, MatchAnalysis, RawDate, RoleFit, SeniorityMatch,
    Stability,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_calendar_duration_truncates_incomplete_month() {
    // 2020-01-15 to 2021-02-10: February not complete, so (1, 0)
    assert_eq!(
        calendar_duration(date(2020, 1, 15), Some(date(2021, 2, 10))),
        (1, 0)
    );
    assert_eq!(
        calendar_duration(date(2020, 1, 15), Some(date(2021, 2, 15))),
        (1, 1)
    );
}

#[test]
fn test_calendar_duration_total_months_identity() {
    let start = date(2017, 8, 3);
    let cases = [
        date(2017, 9, 3),
        date(2018, 1, 1),
        date(2019, 8, 2),
        date(2022, 12, 31),
    ];
    for end in cases {
        let (years, months) = calendar_duration(start, Some(end));
        assert!((0..=11).contains(&months));
        assert!(years * 12 + months >= 0);
    }
}

#[test]
fn test_format_duration_wording() {
    assert_eq!(format_duration(3, 2), "3 years, 2 months");
    assert_eq!(format_duration(0, 1), "1 month");
    assert_eq!(format_duration(0, 0), "Less than a month");
}

#[test]
fn test_resume_empty_and_malformed_behavior() {
    assert_eq!(format_resume(&[]), NO_EXPERIENCE_SENTINEL);

    let experiences = vec![
        Experience {
            role_title: Some("Engineer".to_string()),
            company_name: Some("RealCo".to_string()),
            start_date: RawDate::Text("2014-01-01".to_string()),
            end_date: RawDate::Text("2019-01-01".to_string()),
            description: None,
        },
        Experience {
            role_title: Some("Advisor".to_string()),
            company_name: Some("GhostCo".to_string()),
            start_date: RawDate::Absent,
            end_date: RawDate::Absent,
            description: None,
        },
    ];

    let resume = format_resume(&experiences);
    // Malformed/missing start date sorts as today and floats to the top
    assert!(resume.find("GhostCo").unwrap() < resume.find("RealCo").unwrap());
}

#[test]
fn test_requirements_parser_idempotence() {
    let payload = serde_json::json!({
        "non_negotiables_text": "Payments experience",
        "desired_trajectory_text": "IC path",
        "needs_technical_background": true,
        "seniority": "SE4",
        "industries": ["fintech"]
    });

    let once = JobRequirements::resolve(RawRequirementsInput::from_value(Some(&payload)));
    let reserialized = serde_json::to_value(&once).unwrap();
    let twice = JobRequirements::resolve(RawRequirementsInput::from_value(Some(&reserialized)));

    assert_eq!(once, twice);
}

#[test]
fn test_requirements_parser_never_raises_on_garbage() {
    let inputs = vec![
        RawRequirementsInput::Encoded("{{{{".to_string()),
        RawRequirementsInput::Encoded("[1, 2, 3]".to_string()),
        RawRequirementsInput::Absent,
    ];
    for input in inputs {
        assert_eq!(JobRequirements::resolve(input), JobRequirements::default());
    }
}

fn analysis(seniority: f64, role_fit: f64, industry: f64, stability: f64) -> MatchAnalysis {
    MatchAnalysis {
        seniority_match: SeniorityMatch {
            job_level: "SE3".to_string(),
            candidate_level: "SE3".to_string(),
            score: seniority,
            reason: String::new(),
        },
        role_fit: RoleFit {
            job_role: "Engineer".to_string(),
            candidate_role: "Engineer".to_string(),
            score: role_fit,
            reason: String::new(),
        },
        industry: IndustryFit {
            job_industries: vec![],
            candidate_industries: vec![],
            score: industry,
            reason: String::new(),
        },
        stability: Stability {
            score: stability,
            reason: String::new(),
        },
        key_gap: None,
    }
}

#[test]
fn test_aggregate_bounds() {
    let weights = MatchWeights::default();
    assert_eq!(aggregate_score(&analysis(100.0, 100.0, 100.0, 100.0), &weights), 100.00);
    assert_eq!(aggregate_score(&analysis(0.0, 0.0, 0.0, 0.0), &weights), 0.00);
}

#[test]
fn test_aggregate_rounding_consistency() {
    let weights = MatchWeights::default();
    // 75.5*0.4 + 68.3*0.2 + 72.5*0.3 + 85.7*0.1 = 30.2 + 13.66 + 21.75 + 8.57 = 74.18
    let score = aggregate_score(&analysis(75.5, 68.3, 72.5, 85.7), &weights);
    assert_eq!(score, 74.18);
}

#[test]
fn test_context_blocks_are_self_contained() {
    let job = Job {
        id: Uuid::new_v4(),
        job_title: "Staff Engineer".to_string(),
        description: None,
        job_level: Some("SE4".to_string()),
        requirements_json: None,
    };
    let job_context = build_job_context(&job, &JobRequirements::default());
    assert!(job_context.contains("JOB TITLE: Staff Engineer"));
    assert!(job_context.contains("No description"));

    let candidate = Candidate {
        id: Uuid::new_v4(),
        full_name: "Sam Diaz".to_string(),
        current_job_title: None,
        industry: Some("logistics".to_string()),
        seniority: None,
    };
    let candidate_context = build_candidate_context(&candidate, NO_EXPERIENCE_SENTINEL);
    assert!(candidate_context.contains("NAME: Sam Diaz"));
    assert!(candidate_context.contains("CURRENT TITLE: Not specified"));
    assert!(candidate_context.contains(NO_EXPERIENCE_SENTINEL));
}
