use crate::Vector;
use serde::{Deserialize, Serialize};

/// Descriptive columns of a job posting
///
/// Field names serialize to the catalog's on-disk column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(rename = "Company_Name")]
    pub company_name: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Involvement")]
    pub involvement: String,
}

impl JobInfo {
    /// On-disk column names, in export order
    pub const COLUMNS: [&'static str; 6] = [
        "Company_Name",
        "Designation",
        "Location",
        "Industry",
        "Level",
        "Involvement",
    ];

    /// Values in [`JobInfo::COLUMNS`] order
    pub fn values(&self) -> [&str; 6] {
        [
            self.company_name.as_str(),
            self.designation.as_str(),
            self.location.as_str(),
            self.industry.as_str(),
            self.level.as_str(),
            self.involvement.as_str(),
        ]
    }

    /// Build from values in [`JobInfo::COLUMNS`] order
    pub fn from_values(values: [String; 6]) -> Self {
        let [company_name, designation, location, industry, level, involvement] = values;
        Self {
            company_name,
            designation,
            location,
            industry,
            level,
            involvement,
        }
    }
}

/// A row of the job catalog
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    /// Zero-based position in the catalog
    pub row: usize,
    pub info: JobInfo,
    /// One component per vocabulary entry
    pub skills: Vector,
}

impl JobPosting {
    #[inline]
    #[must_use]
    pub fn new(row: usize, info: JobInfo, skills: Vector) -> Self {
        Self { row, info, skills }
    }

    #[inline]
    pub fn has_skill(&self, index: usize) -> bool {
        self.skills.is_set(index)
    }
}
