use std::process::ExitCode;

use roomie_algo::config::Settings;
use roomie_algo::core::{Matcher, RankOptions};
use roomie_algo::models::{CandidateProfile, FindMatchesRequest, FindMatchesResponse};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Offline match runner: scores a seeker against a candidate pool snapshot.
///
/// Usage: roomie-algo <request.json> <pool.json>
///
/// The request file holds a `FindMatchesRequest` (seeker id, questionnaire
/// answers, optional minScore/maxResults); the pool file holds an array of
/// `CandidateProfile` entries. The ranked response is printed on stdout as
/// JSON.
fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Roomie Algo matching engine...");

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        error!("usage: {} <request.json> <pool.json>", args[0]);
        return ExitCode::FAILURE;
    }

    let request: FindMatchesRequest = match read_json(&args[1]) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to read request from {}: {}", args[1], e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(errors) = request.validate() {
        error!("Invalid request: {}", errors);
        return ExitCode::FAILURE;
    }

    let pool: Vec<CandidateProfile> = match read_json(&args[2]) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to read candidate pool from {}: {}", args[2], e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize matcher with configured weights
    let weights = settings.scoring.weights.to_weights();
    let matcher = match Matcher::from_weights(weights) {
        Ok(matcher) => matcher,
        Err(e) => {
            error!("Invalid scoring configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Matcher initialized with weights: {:?}", weights);

    // Request options take precedence over configured defaults
    let defaults = settings.matching.rank_options();
    let opts = RankOptions {
        min_score: if request.min_score > 0 {
            request.min_score
        } else {
            defaults.min_score
        },
        max_results: request.max_results.or(defaults.max_results),
    };

    info!(
        "Finding matches for user: {}, pool size: {}",
        request.user_id,
        pool.len()
    );

    let ranked = match matcher.find_matches(&request.user_id, &request.answers, &pool, &opts) {
        Ok(ranked) => ranked,
        Err(e) => {
            error!("Match request rejected: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let response = FindMatchesResponse {
        total_results: ranked.matches.len(),
        total_candidates: ranked.total_candidates,
        matches: ranked.matches,
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}
