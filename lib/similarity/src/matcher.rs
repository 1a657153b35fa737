//! Cosine top-N matcher
//!
//! Scores every posting of a [`Catalog`] against a [`QueryVector`] and keeps
//! the best `top_n`. Ordering is by descending score; equal scores keep
//! catalog order.
//!
//! Skill vectors are binary, so cosine reduces to `k / sqrt(n * m)` with `k`
//! shared skills, `n` row skills and `m` query skills. Ranking compares those
//! integers exactly; f32 scores are only reported.

use crate::query::QueryVector;
use skillmatch_core::{Catalog, Error, JobPosting, Result};
use std::cmp::Ordering;
use tracing::debug;

/// A posting with its match score against one query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult<'a> {
    pub posting: &'a JobPosting,
    /// Cosine similarity in [0, 1]
    pub score: f32,
    /// Vocabulary skills present in both query and posting
    pub matched_skills: Vec<String>,
}

impl ScoredResult<'_> {
    /// Score as a percentage rounded to two decimals
    pub fn percent(&self) -> f32 {
        (self.score * 10_000.0).round() / 100.0
    }
}

/// Skill counts of one posting against one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Overlap {
    shared: u64,
    row: u64,
}

impl Overlap {
    fn of(query: &QueryVector, posting: &JobPosting) -> Self {
        let mut overlap = Overlap { shared: 0, row: 0 };
        for i in 0..posting.skills.dim() {
            if posting.has_skill(i) {
                overlap.row += 1;
                if query.vector.is_set(i) {
                    overlap.shared += 1;
                }
            }
        }
        overlap
    }

    /// Exact ordering of `shared / sqrt(row)`; the query size is common
    fn rank_cmp(&self, other: &Overlap) -> Ordering {
        match (self.shared, other.shared) {
            (0, 0) => Ordering::Equal,
            (0, _) => Ordering::Less,
            (_, 0) => Ordering::Greater,
            (a, b) => (a * a * other.row).cmp(&(b * b * self.row)),
        }
    }

    /// Cosine similarity; equal ratios give bit-identical scores
    fn score(&self, query_skills: u64) -> f32 {
        if self.shared == 0 {
            return 0.0;
        }
        let ratio = (self.shared * self.shared) as f64 / (self.row * query_skills) as f64;
        ratio.sqrt().min(1.0) as f32
    }
}

/// Ranks catalog postings by skill similarity
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Recommend the `top_n` postings closest to the requested skills
    ///
    /// Unknown skills are ignored. Returns `min(top_n, catalog.len())`
    /// results; with no recognised skill every score is 0 and the first
    /// rows of the catalog come back in order.
    pub fn recommend<S: AsRef<str>>(&self, skills: &[S], top_n: usize) -> Vec<ScoredResult<'a>> {
        let query = QueryVector::encode(self.catalog.vocabulary(), skills);
        if !query.ignored.is_empty() {
            debug!(ignored = ?query.ignored, "skills not in vocabulary");
        }
        self.rank(&query, top_n)
    }

    /// Recommend against an already encoded query
    ///
    /// The query must be encoded against this catalog's vocabulary.
    pub fn recommend_query(&self, query: &QueryVector, top_n: usize) -> Result<Vec<ScoredResult<'a>>> {
        let expected = self.catalog.vocabulary().len();
        if query.dim() != expected {
            return Err(Error::InvalidDimension {
                expected,
                actual: query.dim(),
            });
        }
        Ok(self.rank(query, top_n))
    }

    fn rank(&self, query: &QueryVector, top_n: usize) -> Vec<ScoredResult<'a>> {
        let query_skills = query.vector.as_slice().iter().filter(|&&x| x != 0.0).count() as u64;
        let mut scored: Vec<(&'a JobPosting, Overlap)> = self
            .catalog
            .iter()
            .map(|posting| (posting, Overlap::of(query, posting)))
            .collect();

        // sort_by is stable: ties stay in catalog order
        scored.sort_by(|a, b| b.1.rank_cmp(&a.1));
        scored.truncate(top_n);

        debug!(
            catalog_size = self.catalog.len(),
            results = scored.len(),
            best = scored.first().map(|(_, o)| o.score(query_skills)).unwrap_or(0.0),
            "scored catalog"
        );

        scored
            .into_iter()
            .map(|(posting, overlap)| ScoredResult {
                posting,
                score: overlap.score(query_skills),
                matched_skills: self.shared_skills(query, posting),
            })
            .collect()
    }

    fn shared_skills(&self, query: &QueryVector, posting: &JobPosting) -> Vec<String> {
        self.catalog
            .vocabulary()
            .iter()
            .enumerate()
            .filter(|(i, _)| query.vector.is_set(*i) && posting.has_skill(*i))
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatch_core::{JobInfo, SkillVocabulary, Vector};
    use std::sync::Arc;

    fn posting(name: &str, flags: &[bool]) -> JobPosting {
        let info = JobInfo {
            company_name: name.to_string(),
            ..JobInfo::default()
        };
        JobPosting::new(0, info, Vector::from_flags(flags))
    }

    /// Vocabulary [PYTHON, SQL, EXCEL, ML]
    fn create_test_catalog(rows: Vec<JobPosting>) -> Catalog {
        let vocab = SkillVocabulary::new(["python", "sql", "excel", "ml"]).unwrap();
        Catalog::new(Arc::new(vocab), rows).unwrap()
    }

    fn names(results: &[ScoredResult<'_>]) -> Vec<String> {
        results
            .iter()
            .map(|r| r.posting.info.company_name.clone())
            .collect()
    }

    #[test]
    fn test_exact_match_scores_one() {
        let catalog = create_test_catalog(vec![posting("a", &[true, true, false, false])]);
        let results = Matcher::new(&catalog).recommend(&["python", "sql"], 5);

        assert_eq!(results.len(), 1);
        assert!((results[0].score - 1.0).abs() < 1e-6, "got {}", results[0].score);
        assert_eq!(results[0].percent(), 100.0);
        assert_eq!(results[0].matched_skills, vec!["PYTHON", "SQL"]);
    }

    #[test]
    fn test_ranking_by_score() {
        let catalog = create_test_catalog(vec![
            posting("excel-only", &[false, false, true, false]),
            posting("python-ml", &[true, false, false, true]),
            posting("python", &[true, false, false, false]),
        ]);
        let results = Matcher::new(&catalog).recommend(&["python"], 3);

        assert_eq!(names(&results), vec!["python", "python-ml", "excel-only"]);
        assert!((results[0].score - 1.0).abs() < 1e-6);
        assert!((results[1].score - 1.0 / 2.0f32.sqrt()).abs() < 1e-6);
        assert_eq!(results[2].score, 0.0);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = create_test_catalog(vec![
            posting("first", &[true, true, false, false]),
            posting("other", &[false, false, true, false]),
            posting("second", &[true, true, false, false]),
            posting("third", &[true, true, false, false]),
        ]);
        let results = Matcher::new(&catalog).recommend(&["sql", "python"], 3);

        assert_eq!(names(&results), vec!["first", "second", "third"]);
        assert_eq!(results[0].posting.row, 0);
        assert_eq!(results[1].posting.row, 2);
        assert_eq!(results[2].posting.row, 3);
    }

    #[test]
    fn test_unknown_skills_score_zero_in_catalog_order() {
        let catalog = create_test_catalog(vec![
            posting("a", &[true, false, false, false]),
            posting("b", &[false, true, false, false]),
            posting("c", &[false, false, true, true]),
        ]);
        let results = Matcher::new(&catalog).recommend(&["COBOL"], 2);

        assert_eq!(names(&results), vec!["a", "b"]);
        assert!(results.iter().all(|r| r.score == 0.0));
        assert!(results.iter().all(|r| r.matched_skills.is_empty()));
    }

    #[test]
    fn test_empty_request() {
        let catalog = create_test_catalog(vec![
            posting("a", &[true, false, false, false]),
            posting("b", &[false, true, false, false]),
        ]);
        let empty: [&str; 0] = [];
        let results = Matcher::new(&catalog).recommend(&empty, 5);

        assert_eq!(names(&results), vec!["a", "b"]);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_result_count_is_min_of_n_and_catalog() {
        let catalog = create_test_catalog(vec![
            posting("a", &[true, false, false, false]),
            posting("b", &[false, true, false, false]),
            posting("c", &[false, false, true, false]),
        ]);
        let matcher = Matcher::new(&catalog);

        assert_eq!(matcher.recommend(&["python"], 5).len(), 3);
        assert_eq!(matcher.recommend(&["python"], 2).len(), 2);
        assert_eq!(matcher.recommend(&["python"], 0).len(), 0);
    }

    #[test]
    fn test_row_without_skills_scores_zero() {
        let catalog = create_test_catalog(vec![
            posting("blank", &[false, false, false, false]),
            posting("ml", &[false, false, false, true]),
        ]);
        let results = Matcher::new(&catalog).recommend(&["ml"], 2);

        assert_eq!(names(&results), vec!["ml", "blank"]);
        assert_eq!(results[1].score, 0.0);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let catalog = create_test_catalog(vec![
            posting("a", &[true, true, false, false]),
            posting("b", &[true, false, true, false]),
            posting("c", &[false, true, true, true]),
            posting("d", &[true, true, true, true]),
        ]);
        let matcher = Matcher::new(&catalog);

        let first = matcher.recommend(&["python", "excel"], 3);
        let second = matcher.recommend(&["python", "excel"], 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_in_unit_range() {
        let catalog = create_test_catalog(vec![
            posting("a", &[true, true, true, true]),
            posting("b", &[true, false, true, false]),
            posting("c", &[false, false, false, true]),
        ]);
        for result in Matcher::new(&catalog).recommend(&["python", "sql", "excel", "ml"], 10) {
            assert!((0.0..=1.0).contains(&result.score), "score {}", result.score);
        }
    }

    #[test]
    fn test_percent_rounding() {
        let catalog = create_test_catalog(vec![posting("a", &[true, true, true, false])]);
        let results = Matcher::new(&catalog).recommend(&["python"], 1);
        // 1 / sqrt(3) = 0.57735...
        assert_eq!(results[0].percent(), 57.74);
    }

    fn job_posting(name: &str, vocab: &SkillVocabulary, skills: &[&str]) -> JobPosting {
        let mut flags = vec![false; vocab.len()];
        for skill in skills {
            flags[vocab.position(skill).unwrap()] = true;
        }
        posting(name, &flags)
    }

    #[test]
    fn test_equal_ratios_tie_in_catalog_order() {
        // 1 / sqrt(1 * 3) == 3 / sqrt(9 * 3)
        let vocab = SkillVocabulary::job_skills();
        let rows = vec![
            job_posting("first", &vocab, &["python"]),
            job_posting(
                "second",
                &vocab,
                &["python", "sql", "excel", "java", "linux", "html", "css", "php", "ruby"],
            ),
        ];
        let catalog = Catalog::new(Arc::new(vocab), rows).unwrap();
        let results = Matcher::new(&catalog).recommend(&["python", "sql", "excel"], 2);

        assert_eq!(names(&results), vec!["first", "second"]);
        assert_eq!(results[0].score, results[1].score);
        assert!((results[0].score - 1.0 / 3.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_ties_across_all_row_sizes() {
        // every (shared, row) pair with the same ratio must keep catalog order
        let vocab = SkillVocabulary::job_skills();
        let skills: Vec<&str> = vocab.iter().collect();
        let query = &skills[..4];
        let mut rows = Vec::new();
        for shared in 1..=4 {
            for extra in 0..=(skills.len() - 4) {
                let mut row_skills = query[..shared].to_vec();
                row_skills.extend_from_slice(&skills[4..4 + extra]);
                let name = format!("{}-{}", shared, shared + extra);
                rows.push(job_posting(&name, &vocab, &row_skills));
            }
        }
        let catalog = Catalog::new(Arc::new(vocab.clone()), rows).unwrap();
        let results = Matcher::new(&catalog).recommend(query, catalog.len());

        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].posting.row < pair[1].posting.row, "{:?}", names(pair));
            }
        }
    }

    #[test]
    fn test_score_matches_vector_cosine() {
        let catalog = create_test_catalog(vec![
            posting("a", &[true, true, true, true]),
            posting("b", &[true, false, true, false]),
            posting("c", &[false, true, false, true]),
        ]);
        let query = QueryVector::encode(catalog.vocabulary(), &["python", "ml", "sql"]);
        for result in Matcher::new(&catalog).recommend_query(&query, 3).unwrap() {
            let expected = result.posting.skills.cosine_similarity(&query.vector);
            assert!((result.score - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_query_from_other_vocabulary_rejected() {
        let catalog = create_test_catalog(vec![posting("a", &[true, false, false, false])]);
        let query = QueryVector::encode(&SkillVocabulary::job_skills(), &["python"]);

        let err = Matcher::new(&catalog).recommend_query(&query, 5).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension {
                expected: 4,
                actual: 31
            }
        ));
    }
}
