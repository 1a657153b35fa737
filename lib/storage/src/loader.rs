//! CSV catalog loader
//!
//! Reads a job catalog with one row per posting. Columns are matched by
//! header name (trimmed, case-insensitive); the six info columns and every
//! vocabulary skill must be present, anything else is ignored.

use crate::csv_error;
use ahash::AHashMap;
use csv::{ReaderBuilder, StringRecord, Trim};
use skillmatch_core::{Catalog, Error, JobInfo, JobPosting, Result, SkillVocabulary, Vector};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Loads a [`Catalog`] encoded against a fixed vocabulary
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    vocabulary: Arc<SkillVocabulary>,
}

impl CatalogLoader {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Load a catalog file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = self.load_reader(file)?;

        info!(
            path = %path.display(),
            postings = catalog.len(),
            skills = self.vocabulary.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a catalog from any CSV source
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Catalog> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let layout = ColumnLayout::resolve(&headers, &self.vocabulary)?;
        debug!(columns = headers.len(), "catalog header resolved");

        let mut postings = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(csv_error)?;
            postings.push(layout.posting(row, &record, &headers)?);
        }

        Catalog::new(Arc::clone(&self.vocabulary), postings)
    }
}

/// Header positions of the columns the catalog needs
#[derive(Debug)]
struct ColumnLayout {
    info: [usize; 6],
    skills: Vec<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord, vocabulary: &SkillVocabulary) -> Result<Self> {
        let mut by_name = AHashMap::new();
        for (i, header) in headers.iter().enumerate() {
            // first occurrence wins
            by_name.entry(header.trim().to_uppercase()).or_insert(i);
        }
        let find = |name: &str| {
            by_name
                .get(&name.to_uppercase())
                .copied()
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        let mut info = [0usize; 6];
        for (slot, name) in info.iter_mut().zip(JobInfo::COLUMNS) {
            *slot = find(name)?;
        }
        let skills = vocabulary.iter().map(find).collect::<Result<Vec<_>>>()?;

        Ok(Self { info, skills })
    }

    fn posting(&self, row: usize, record: &StringRecord, headers: &StringRecord) -> Result<JobPosting> {
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        let info = JobInfo::from_values(self.info.map(field));

        let mut flags = Vec::with_capacity(self.skills.len());
        for &column in &self.skills {
            let value = record.get(column).unwrap_or_default();
            let flag = parse_flag(value).ok_or_else(|| Error::InvalidSkillFlag {
                row,
                column: headers.get(column).unwrap_or_default().to_string(),
                value: value.to_string(),
            })?;
            flags.push(flag);
        }

        Ok(JobPosting::new(row, info, Vector::from_flags(&flags)))
    }
}

/// `true`/`false` or a non-negative number (non-zero means present)
fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Some(n != 0.0),
        _ => None,
    }
}
