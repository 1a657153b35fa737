//! # SkillMatch Similarity
//!
//! Skill query encoding and cosine top-N ranking over a job [`Catalog`].
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::{Catalog, JobInfo, JobPosting, SkillVocabulary, Vector};
//! use skillmatch_similarity::{Matcher, SkillQuery};
//! use std::sync::Arc;
//!
//! let vocabulary = Arc::new(SkillVocabulary::job_skills());
//! let mut flags = vec![false; vocabulary.len()];
//! flags[vocabulary.position("python").unwrap()] = true;
//! flags[vocabulary.position("sql").unwrap()] = true;
//! let posting = JobPosting::new(0, JobInfo::default(), Vector::from_flags(&flags));
//! let catalog = Catalog::new(vocabulary, vec![posting]).unwrap();
//!
//! let query = SkillQuery::parse("Python, SQL").unwrap();
//! let results = Matcher::new(&catalog).recommend(query.terms(), 5);
//! assert_eq!(results.len(), 1);
//! assert!((results[0].score - 1.0).abs() < 1e-6);
//! ```
//!
//! [`Catalog`]: skillmatch_core::Catalog

pub mod explain;
pub mod limits;
pub mod matcher;
pub mod query;

pub use explain::{ExplainedResult, RecommendResponse, RecommendStats, RecommendationRow};
pub use limits::ResultLimits;
pub use matcher::{Matcher, ScoredResult};
pub use query::{QueryVector, SkillQuery};
