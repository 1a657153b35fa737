//! # SkillMatch Core
//!
//! Core data structures for the SkillMatch job recommender.
//!
//! - [`SkillVocabulary`] - Fixed, ordered, case-insensitive skill names
//! - [`Vector`] - Binary skill vector with cosine similarity
//! - [`JobPosting`] - A catalog row: descriptive [`JobInfo`] plus skill flags
//! - [`Catalog`] - Read-only set of postings loaded once
//!
//! ## Example
//!
//! ```rust
//! use skillmatch_core::{Catalog, JobInfo, JobPosting, SkillVocabulary, Vector};
//! use std::sync::Arc;
//!
//! let vocabulary = Arc::new(SkillVocabulary::new(["python", "sql"]).unwrap());
//! let posting = JobPosting::new(0, JobInfo::default(), Vector::from_flags(&[true, true]));
//! let catalog = Catalog::new(vocabulary, vec![posting]).unwrap();
//!
//! let query = Vector::from_flags(&[true, false]);
//! let score = catalog.get(0).unwrap().skills.cosine_similarity(&query);
//! assert!(score > 0.7);
//! ```

pub mod catalog;
pub mod error;
pub mod posting;
pub mod vector;
pub mod vocabulary;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use posting::{JobInfo, JobPosting};
pub use vector::Vector;
pub use vocabulary::SkillVocabulary;
