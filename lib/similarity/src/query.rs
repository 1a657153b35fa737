//! Skill query parsing and encoding
//!
//! Turns free text like `"Python, SQL, ML"` into a binary [`QueryVector`]
//! over a [`SkillVocabulary`]. Terms outside the vocabulary are kept aside
//! and never affect scoring.

use skillmatch_core::{Error, Result, SkillVocabulary, Vector};

/// Skill terms as the user typed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillQuery {
    terms: Vec<String>,
}

impl SkillQuery {
    /// Split comma-separated input into trimmed, non-empty terms
    ///
    /// Blank input is [`Error::EmptySkillInput`].
    pub fn parse(input: &str) -> Result<Self> {
        let terms: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        if terms.is_empty() {
            return Err(Error::EmptySkillInput);
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn encode(&self, vocabulary: &SkillVocabulary) -> QueryVector {
        QueryVector::encode(vocabulary, &self.terms)
    }
}

/// Binary query vector plus the terms that did and did not match
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    pub vector: Vector,
    /// Vocabulary names that were requested, in vocabulary order
    pub matched: Vec<String>,
    /// Requested terms with no vocabulary entry, as typed
    pub ignored: Vec<String>,
}

impl QueryVector {
    /// Encode requested skills against the vocabulary (case-insensitive)
    pub fn encode<S: AsRef<str>>(vocabulary: &SkillVocabulary, skills: &[S]) -> Self {
        let mut vector = Vector::zeros(vocabulary.len());
        let mut ignored = Vec::new();

        for skill in skills {
            let skill = skill.as_ref();
            match vocabulary.position(skill) {
                Some(index) => vector.set(index, 1.0),
                None => {
                    if !skill.trim().is_empty() {
                        ignored.push(skill.trim().to_string());
                    }
                }
            }
        }

        let matched = vocabulary
            .names_of(&vector)
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            vector,
            matched,
            ignored,
        }
    }

    /// True when no requested term matched the vocabulary
    pub fn is_empty(&self) -> bool {
        self.vector.is_zero()
    }

    pub fn dim(&self) -> usize {
        self.vector.dim()
    }
}
