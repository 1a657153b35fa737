//! Skill vocabulary
//!
//! The fixed, ordered list of skill names that both catalog rows and queries
//! are encoded against. Position `i` of every skill vector refers to entry `i`
//! of the vocabulary.

use crate::{Error, Result, Vector};
use ahash::AHashMap;

/// Skill columns of the stock job catalog, in column order.
const JOB_SKILLS: [&str; 31] = [
    "PYTHON", "C++", "JAVA", "HADOOP", "SCALA", "FLASK", "PANDAS", "SPARK",
    "NUMPY", "PHP", "SQL", "MYSQL", "CSS", "MONGODB", "NLTK", "TENSORFLOW",
    "LINUX", "RUBY", "JAVASCRIPT", "DJANGO", "REACT", "REACTJS", "AI", "UI",
    "TABLEAU", "NODEJS", "EXCEL", "POWER BI", "SELENIUM", "HTML", "ML",
];

/// Immutable, case-insensitive, ordered skill vocabulary
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    index: AHashMap<String, usize>,
}

impl SkillVocabulary {
    /// Build a vocabulary from skill names
    ///
    /// Names are trimmed and uppercased. Blank names and names that collide
    /// after uppercasing are rejected.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills = Vec::new();
        let mut index = AHashMap::new();

        for name in names {
            let raw = name.as_ref();
            let skill = normalize(raw);
            if skill.is_empty() {
                return Err(Error::InvalidSkillName(raw.to_string()));
            }
            if index.insert(skill.clone(), skills.len()).is_some() {
                return Err(Error::DuplicateSkill(skill));
            }
            skills.push(skill);
        }

        if skills.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        Ok(Self { skills, index })
    }

    /// The stock 31-skill job vocabulary
    pub fn job_skills() -> Self {
        let skills: Vec<String> = JOB_SKILLS.iter().map(|s| s.to_string()).collect();
        let index = skills
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();
        Self { skills, index }
    }

    /// Parse a comma-separated list such as `"python, sql, power bi"`
    pub fn from_csv_list(list: &str) -> Result<Self> {
        Self::new(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skill name at `index` (uppercased)
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.skills.get(index).map(String::as_str)
    }

    /// Case-insensitive lookup of a skill's position
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&normalize(name)).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Names of the skills set in `vector`, in vocabulary order
    pub fn names_of(&self, vector: &Vector) -> Vec<&str> {
        self.iter()
            .enumerate()
            .filter(|(i, _)| vector.is_set(*i))
            .map(|(_, s)| s)
            .collect()
    }
}

impl PartialEq for SkillVocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.skills == other.skills
    }
}

impl Eq for SkillVocabulary {}

#[inline]
fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}
