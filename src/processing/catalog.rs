//! Job catalog loading and schema validation

use crate::error::{CareerMatchError, Result};
use csv::ReaderBuilder;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const JOB_TITLE: &str = "Job Title";
pub const COMPANY_NAME: &str = "Company Name";
pub const SKILLS_REQUIRED: &str = "Skills Required";

pub const REQUIRED_COLUMNS: [&str; 3] = [JOB_TITLE, COMPANY_NAME, SKILLS_REQUIRED];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Skills Required")]
    pub skills_required: String,
}

impl JobRecord {
    pub fn new(job_title: &str, company_name: &str, skills_required: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            company_name: company_name.to_string(),
            skills_required: skills_required.to_string(),
        }
    }
}

/// Read-only set of job postings, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<JobRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CareerMatchError::NotFound(format!(
                "Job dataset not found: {}",
                path.display()
            )));
        }

        let file = File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!("Loaded {} job records from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse CSV with a header row. Extra columns are ignored and missing
    /// cells read as empty strings.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|h| h == name);

        let indices = REQUIRED_COLUMNS.map(column);
        let [Some(title_idx), Some(company_idx), Some(skills_idx)] = indices else {
            let mut missing: Vec<String> = REQUIRED_COLUMNS
                .iter()
                .zip(indices.iter())
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            missing.sort();
            return Err(CareerMatchError::Schema { missing });
        };

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();

            records.push(JobRecord {
                job_title: cell(title_idx),
                company_name: cell(company_idx),
                skills_required: cell(skills_idx),
            });
        }

        debug!("Parsed {} catalog rows", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&JobRecord> {
        self.records.get(idx)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skills_column(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.skills_required.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog() {
        let data = "Job Title,Company Name,Skills Required,Salary\n\
                    Data Analyst,A,python sql,100\n\
                    Chef,B,\"cooking, baking\",50\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0], JobRecord::new("Data Analyst", "A", "python sql"));
        assert_eq!(catalog.records()[1].skills_required, "cooking, baking");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let data = "Skills Required,Job Title,Company Name\nrust,Engineer,C\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0], JobRecord::new("Engineer", "C", "rust"));
    }

    #[test]
    fn test_missing_skills_column() {
        let data = "Job Title,Company Name\nChef,B\n";
        match Catalog::from_reader(data.as_bytes()) {
            Err(CareerMatchError::Schema { missing }) => {
                assert_eq!(missing, vec!["Skills Required".to_string()]);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_columns_are_all_listed() {
        let data = "Title,Skills\nChef,cooking\n";
        match Catalog::from_reader(data.as_bytes()) {
            Err(CareerMatchError::Schema { missing }) => {
                assert_eq!(missing, vec!["Company Name", "Job Title", "Skills Required"]);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_cells_read_as_empty() {
        let data = "Job Title,Company Name,Skills Required\nChef,B,\nWaiter,C\n";
        let catalog = Catalog::from_reader(data.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].skills_required, "");
        assert_eq!(catalog.records()[1].skills_required, "");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = Catalog::from_path(Path::new("/nonexistent/jobs.csv"));
        assert!(matches!(result, Err(CareerMatchError::NotFound(_))));
    }
}
