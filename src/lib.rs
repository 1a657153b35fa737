//! # SkillMatch
//!
//! Skill-based job recommendation: rank a catalog of job postings by the
//! cosine similarity between their skill flags and a user's skill list.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! skillmatch --catalog final_data.csv --skills "Python, SQL, ML" -n 10
//! skillmatch --skills "excel, power bi" --format json
//! skillmatch --skills "java, linux" --export recommended_jobs.csv
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use skillmatch::prelude::*;
//! use std::sync::Arc;
//!
//! let vocabulary = Arc::new(SkillVocabulary::job_skills());
//! let catalog = CatalogLoader::new(vocabulary).load_path("final_data.csv").unwrap();
//!
//! let query = SkillQuery::parse("Python, SQL, ML").unwrap();
//! for result in Matcher::new(&catalog).recommend(query.terms(), 5) {
//!     println!("{} at {}: {:.2}%", result.posting.info.designation,
//!         result.posting.info.company_name, result.percent());
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`skillmatch-core`](https://docs.rs/skillmatch-core) - Vocabulary, skill vectors, postings, catalog
//! - [`skillmatch-similarity`](https://docs.rs/skillmatch-similarity) - Query encoding, top-N matcher, result views
//! - [`skillmatch-storage`](https://docs.rs/skillmatch-storage) - CSV catalog loading and result export

pub mod render;

// Re-export core types
pub use skillmatch_core::{
    Catalog, JobInfo, JobPosting, SkillVocabulary, Vector,
    Error, Result,
};

// Re-export matching
pub use skillmatch_similarity::{
    Matcher, ScoredResult, SkillQuery, QueryVector, ResultLimits,
    RecommendResponse, RecommendStats, RecommendationRow, ExplainedResult,
};

// Re-export storage
pub use skillmatch_storage::{CatalogLoader, export_to_path, to_csv_string, write_results};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, JobInfo, JobPosting, SkillVocabulary, Vector,
        Error, Result,
        Matcher, ScoredResult, SkillQuery, QueryVector, ResultLimits,
        RecommendResponse,
        CatalogLoader,
    };
}
