//! CSV export of recommendation results
//!
//! Columns are the catalog info columns followed by `Match_Score`, rows in
//! rank order.

use crate::csv_error;
use csv::Writer;
use skillmatch_core::{JobInfo, Result};
use skillmatch_similarity::{RecommendationRow, ScoredResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn write_results<W: Write>(writer: W, results: &[ScoredResult<'_>]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    let header = JobInfo::COLUMNS
        .iter()
        .copied()
        .chain(std::iter::once(RecommendationRow::SCORE_COLUMN));
    writer.write_record(header).map_err(csv_error)?;

    for result in results {
        let row = RecommendationRow::from_scored(result);
        let score = row.match_score.to_string();
        let values = row.info.values();
        writer
            .write_record(values.iter().copied().chain(std::iter::once(score.as_str())))
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Results as a CSV document
pub fn to_csv_string(results: &[ScoredResult<'_>]) -> Result<String> {
    let mut buf = Vec::new();
    write_results(&mut buf, results)?;
    String::from_utf8(buf).map_err(|e| skillmatch_core::Error::Csv(e.to_string()))
}

pub fn export_to_path<P: AsRef<Path>>(path: P, results: &[ScoredResult<'_>]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_results(file, results)?;
    info!(path = %path.display(), rows = results.len(), "results exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatch_core::{Catalog, JobPosting, SkillVocabulary, Vector};
    use skillmatch_similarity::Matcher;
    use std::sync::Arc;

    fn create_test_catalog() -> Catalog {
        let vocab = SkillVocabulary::new(["python", "sql"]).unwrap();
        let info = |company: &str| JobInfo {
            company_name: company.to_string(),
            designation: "Analyst, Data".to_string(),
            location: "Pune".to_string(),
            industry: "IT".to_string(),
            level: "Mid".to_string(),
            involvement: "Full Time".to_string(),
        };
        let rows = vec![
            JobPosting::new(0, info("Globex"), Vector::from_flags(&[false, true])),
            JobPosting::new(1, info("Acme"), Vector::from_flags(&[true, true])),
        ];
        Catalog::new(Arc::new(vocab), rows).unwrap()
    }

    #[test]
    fn test_header_and_rank_order() {
        let catalog = create_test_catalog();
        let results = Matcher::new(&catalog).recommend(&["python", "sql"], 5);
        let csv = to_csv_string(&results).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Company_Name,Designation,Location,Industry,Level,Involvement,Match_Score"
        );
        assert_eq!(lines.len(), 3);
        // fields with commas are quoted
        assert!(lines[1].starts_with("Acme,\"Analyst, Data\",Pune,IT,Mid,Full Time,"));
        assert!(lines[2].starts_with("Globex,"));
    }

    #[test]
    fn test_empty_results_write_header_only() {
        let csv = to_csv_string(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_export_to_path() {
        let catalog = create_test_catalog();
        let results = Matcher::new(&catalog).recommend(&["sql"], 1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recommended_jobs.csv");

        export_to_path(&path, &results).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "Globex");
        let score: f32 = records[0][6].parse().unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }
}
