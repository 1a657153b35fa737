use crate::{Error, JobPosting, Result, SkillVocabulary};
use std::sync::Arc;

/// Read-only catalog of job postings
///
/// Built once, then shared by reference. Every posting's skill vector has
/// the vocabulary's dimension and postings keep their load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    vocabulary: Arc<SkillVocabulary>,
    postings: Vec<JobPosting>,
}

impl Catalog {
    /// Create a catalog, checking each posting against the vocabulary
    ///
    /// Posting `row` fields are reassigned to their position so tie-breaking
    /// by catalog order is always well defined.
    pub fn new(vocabulary: Arc<SkillVocabulary>, mut postings: Vec<JobPosting>) -> Result<Self> {
        let expected = vocabulary.len();
        for (row, posting) in postings.iter_mut().enumerate() {
            if posting.skills.dim() != expected {
                return Err(Error::InvalidDimension {
                    expected,
                    actual: posting.skills.dim(),
                });
            }
            posting.row = row;
        }

        Ok(Self {
            vocabulary,
            postings,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&JobPosting> {
        self.postings.get(row)
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobPosting> {
        self.postings.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a JobPosting;
    type IntoIter = std::slice::Iter<'a, JobPosting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JobInfo, Vector};

    fn vocab() -> Arc<SkillVocabulary> {
        Arc::new(SkillVocabulary::new(["python", "sql", "excel"]).unwrap())
    }

    #[test]
    fn test_catalog_creation() {
        let postings = vec![
            JobPosting::new(7, JobInfo::default(), Vector::from_flags(&[true, false, false])),
            JobPosting::new(3, JobInfo::default(), Vector::from_flags(&[false, true, true])),
        ];
        let catalog = Catalog::new(vocab(), postings).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.vocabulary().len(), 3);
        // rows follow catalog order
        assert_eq!(catalog.get(0).unwrap().row, 0);
        assert_eq!(catalog.get(1).unwrap().row, 1);
        assert!(catalog.get(1).unwrap().has_skill(2));
    }

    #[test]
    fn test_dimension_mismatch() {
        let postings = vec![JobPosting::new(
            0,
            JobInfo::default(),
            Vector::from_flags(&[true, false]),
        )];
        let err = Catalog::new(vocab(), postings).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vocab(), Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
