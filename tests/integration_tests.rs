// Integration tests for Roomie Algo

use roomie_algo::core::{MatchError, Matcher, RankOptions};
use roomie_algo::models::{
    CandidateProfile, Cleanliness, FindMatchesResponse, NoiseTolerance, PreferenceVector,
    QuestionnaireAnswers, SleepSchedule, SocialBehavior, StudyPreference,
};

fn vector(
    sleep_schedule: SleepSchedule,
    cleanliness: Cleanliness,
    study_preference: StudyPreference,
    social_behavior: SocialBehavior,
    noise_tolerance: NoiseTolerance,
) -> PreferenceVector {
    PreferenceVector {
        sleep_schedule,
        cleanliness,
        study_preference,
        social_behavior,
        noise_tolerance,
    }
}

fn seeker_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        sleep_schedule: Some("early".to_string()),
        cleanliness: Some("neat".to_string()),
        study_preference: Some("quiet".to_string()),
        social_behavior: Some("balanced".to_string()),
        noise_tolerance: Some("sensitive".to_string()),
    }
}

/// Seed candidate pool shared by the end-to-end tests.
fn seed_pool() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            user_id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            email: Some("priya@example.com".to_string()),
            year: "1st Year".to_string(),
            course: "Computer Science".to_string(),
            preferences: vector(
                SleepSchedule::Early,
                Cleanliness::Neat,
                StudyPreference::Quiet,
                SocialBehavior::Balanced,
                NoiseTolerance::Sensitive,
            ),
        },
        CandidateProfile {
            user_id: "2".to_string(),
            name: "Arjun Patel".to_string(),
            email: Some("arjun@example.com".to_string()),
            year: "2nd Year".to_string(),
            course: "Business Studies".to_string(),
            preferences: vector(
                SleepSchedule::Flexible,
                Cleanliness::Average,
                StudyPreference::Group,
                SocialBehavior::Extrovert,
                NoiseTolerance::Moderate,
            ),
        },
        CandidateProfile {
            user_id: "3".to_string(),
            name: "Lena Fischer".to_string(),
            email: Some("lena@example.com".to_string()),
            year: "3rd Year".to_string(),
            course: "Mechanical Engineering".to_string(),
            preferences: vector(
                SleepSchedule::Late,
                Cleanliness::Messy,
                StudyPreference::Group,
                SocialBehavior::Extrovert,
                NoiseTolerance::Tolerant,
            ),
        },
        CandidateProfile {
            user_id: "4".to_string(),
            name: "Tomás Rivera".to_string(),
            email: Some("tomas@example.com".to_string()),
            year: "2nd Year".to_string(),
            course: "Architecture".to_string(),
            preferences: vector(
                SleepSchedule::Late,
                Cleanliness::Messy,
                StudyPreference::Quiet,
                SocialBehavior::Balanced,
                NoiseTolerance::Tolerant,
            ),
        },
    ]
}

#[test]
fn test_end_to_end_ranking_over_seed_pool() {
    let matcher = Matcher::with_default_rules();

    let result = matcher
        .find_matches("seeker", &seeker_answers(), &seed_pool(), &RankOptions::default())
        .unwrap();

    assert_eq!(result.total_candidates, 4);
    assert_eq!(result.matches.len(), 4);

    // Priya shares every answer; Arjun bridges through middle values in
    // four categories; Lena opposes every extreme
    assert_eq!(result.matches[0].name, "Priya Sharma");
    assert_eq!(result.matches[0].compatibility_score, 100);
    assert_eq!(result.matches[0].shared_traits.len(), 5);

    assert_eq!(result.matches[1].name, "Arjun Patel");
    assert_eq!(result.matches[1].compatibility_score, 80);
    assert_eq!(
        result.matches[1].shared_traits,
        vec!["Early Riser", "Neat", "Balanced Social", "Noise Sensitive"]
    );

    assert_eq!(result.matches[2].name, "Tomás Rivera");
    assert_eq!(result.matches[2].compatibility_score, 40);

    assert_eq!(result.matches[3].name, "Lena Fischer");
    assert_eq!(result.matches[3].compatibility_score, 0);
    assert!(result.matches[3].shared_traits.is_empty());

    for window in result.matches.windows(2) {
        assert!(
            window[0].compatibility_score >= window[1].compatibility_score,
            "matches not sorted by score"
        );
    }
}

#[test]
fn test_min_score_threshold_drops_weak_matches() {
    let matcher = Matcher::with_default_rules();
    let opts = RankOptions {
        min_score: 50,
        max_results: None,
    };

    let result = matcher
        .find_matches("seeker", &seeker_answers(), &seed_pool(), &opts)
        .unwrap();

    assert_eq!(result.matches.len(), 2);
    for m in &result.matches {
        assert!(m.compatibility_score >= 50);
    }
    // The pool size is reported even when candidates are filtered out
    assert_eq!(result.total_candidates, 4);
}

#[test]
fn test_seeker_never_matches_themselves() {
    let matcher = Matcher::with_default_rules();
    let mut pool = seed_pool();
    pool[0].user_id = "seeker".to_string();

    let result = matcher
        .find_matches("seeker", &seeker_answers(), &pool, &RankOptions::default())
        .unwrap();

    assert!(result.matches.iter().all(|m| m.user_id != "seeker"));
    assert_eq!(result.matches.len(), 3);
}

#[test]
fn test_max_results_caps_the_ranked_list() {
    let matcher = Matcher::with_default_rules();
    let opts = RankOptions {
        min_score: 0,
        max_results: Some(2),
    };

    let result = matcher
        .find_matches("seeker", &seeker_answers(), &seed_pool(), &opts)
        .unwrap();

    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].compatibility_score, 100);
    assert_eq!(result.matches[1].compatibility_score, 80);
}

#[test]
fn test_empty_pool_yields_empty_result() {
    let matcher = Matcher::with_default_rules();

    let result = matcher
        .find_matches("seeker", &seeker_answers(), &[], &RankOptions::default())
        .unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.total_candidates, 0);
}

#[test]
fn test_incomplete_seeker_rejected_before_ranking() {
    let matcher = Matcher::with_default_rules();
    let mut answers = seeker_answers();
    answers.noise_tolerance = None;

    let err = matcher
        .find_matches("seeker", &answers, &seed_pool(), &RankOptions::default())
        .unwrap_err();

    match err {
        MatchError::Validation(validation) => {
            assert_eq!(validation.fields(), vec!["noiseTolerance"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_pool_snapshot_is_left_untouched() {
    let matcher = Matcher::with_default_rules();
    let pool = seed_pool();
    let before = serde_json::to_string(&pool).unwrap();

    let _ = matcher
        .find_matches("seeker", &seeker_answers(), &pool, &RankOptions::default())
        .unwrap();

    let after = serde_json::to_string(&pool).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_json_pool_round_trip_matches_directory_shape() {
    // A pool snapshot as the user directory would hand it over
    let pool: Vec<CandidateProfile> = serde_json::from_str(
        r#"[
            {
                "userId": "42",
                "name": "Mei Chen",
                "email": "mei@example.com",
                "year": "1st Year",
                "course": "Mathematics",
                "preferences": {
                    "sleepSchedule": "early",
                    "cleanliness": "average",
                    "studyPreference": "quiet",
                    "socialBehavior": "introvert",
                    "noiseTolerance": "sensitive"
                }
            }
        ]"#,
    )
    .unwrap();

    let matcher = Matcher::with_default_rules();
    let result = matcher
        .find_matches("seeker", &seeker_answers(), &pool, &RankOptions::default())
        .unwrap();

    let response = FindMatchesResponse {
        total_results: result.matches.len(),
        total_candidates: result.total_candidates,
        matches: result.matches,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["totalResults"], 1);
    assert_eq!(json["matches"][0]["userId"], "42");
    // cleanliness average and social introvert both bridge to the seeker
    assert_eq!(json["matches"][0]["compatibilityScore"], 100);
    assert_eq!(json["matches"][0]["sharedTraits"][1], "Neat");
}
