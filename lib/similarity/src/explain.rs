//! Serializable views of recommendation results
//!
//! Flat rows for tabular export plus a JSON response that carries the
//! query breakdown and summary statistics.

use crate::matcher::ScoredResult;
use crate::query::QueryVector;
use serde::Serialize;
use skillmatch_core::JobInfo;

/// One recommended posting: info columns plus `Match_Score`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow {
    #[serde(flatten)]
    pub info: JobInfo,
    /// Raw cosine score in [0, 1]
    #[serde(rename = "Match_Score")]
    pub match_score: f32,
}

impl RecommendationRow {
    /// Header of the exported table
    pub const SCORE_COLUMN: &'static str = "Match_Score";

    pub fn from_scored(result: &ScoredResult<'_>) -> Self {
        Self {
            info: result.posting.info.clone(),
            match_score: result.score,
        }
    }
}

/// A recommendation with the skills that produced its score
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedResult {
    #[serde(flatten)]
    pub row: RecommendationRow,
    /// Score as a percentage, two decimals
    pub match_percent: f32,
    pub matched_skills: Vec<String>,
}

impl ExplainedResult {
    pub fn from_scored(result: &ScoredResult<'_>) -> Self {
        Self {
            row: RecommendationRow::from_scored(result),
            match_percent: result.percent(),
            matched_skills: result.matched_skills.clone(),
        }
    }
}

/// Summary statistics for a recommendation query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendStats {
    pub catalog_size: usize,
    pub results_count: usize,
    pub best_score: f32,
    pub avg_score: f32,
}

impl RecommendStats {
    pub fn compute(results: &[ScoredResult<'_>], catalog_size: usize) -> Self {
        if results.is_empty() {
            return Self {
                catalog_size,
                results_count: 0,
                best_score: 0.0,
                avg_score: 0.0,
            };
        }

        let total: f32 = results.iter().map(|r| r.score).sum();
        let best_score = results.iter().map(|r| r.score).fold(0.0f32, f32::max);

        Self {
            catalog_size,
            results_count: results.len(),
            best_score,
            avg_score: total / results.len() as f32,
        }
    }
}

/// Full response for `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    /// Terms as entered
    pub skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub ignored_skills: Vec<String>,
    pub results: Vec<ExplainedResult>,
    pub stats: RecommendStats,
}

impl RecommendResponse {
    pub fn new(
        skills: &[String],
        query: &QueryVector,
        results: &[ScoredResult<'_>],
        catalog_size: usize,
    ) -> Self {
        Self {
            skills: skills.to_vec(),
            matched_skills: query.matched.clone(),
            ignored_skills: query.ignored.clone(),
            results: results.iter().map(ExplainedResult::from_scored).collect(),
            stats: RecommendStats::compute(results, catalog_size),
        }
    }
}
