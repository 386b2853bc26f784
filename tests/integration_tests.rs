//! Integration tests for the career matcher

use career_matcher::input::manager::InputManager;
use career_matcher::processing::recommender::CareerRecommender;
use career_matcher::processing::section_locator::SkillsLocator;
use career_matcher::{CareerMatchError, CareerPipeline, CorpusIndex, PipelineOutcome};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = "Job Title,Company Name,Skills Required\n\
                       Data Analyst,A,python sql\n\
                       Chef,B,cooking baking\n\
                       ML Engineer,C,python machine learning\n";

fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("jobs.csv");
    std::fs::write(&path, content).unwrap();
    path
}

fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap();
    path
}

#[tokio::test]
async fn test_docx_resume_end_to_end() {
    let dir = TempDir::new().unwrap();
    let index = CorpusIndex::from_csv(&write_catalog(dir.path(), CATALOG)).unwrap();
    let resume = write_docx(
        dir.path(),
        "jane.docx",
        &["Jane Doe", "Skills", "Python, SQL", "Experience", "Analyst at Acme"],
    );

    let outcome = CareerPipeline::new(&index, 2).process_path(&resume).await;

    match outcome {
        PipelineOutcome::Recommendations { skills, jobs } => {
            assert_eq!(skills, "python, sql");
            let titles: Vec<_> = jobs
                .iter()
                .map(|j| (j.job_title.as_str(), j.company_name.as_str()))
                .collect();
            assert_eq!(titles, vec![("Data Analyst", "A"), ("ML Engineer", "C")]);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_index_shared_across_resumes() {
    let dir = TempDir::new().unwrap();
    let index = CorpusIndex::from_csv(&write_catalog(dir.path(), CATALOG)).unwrap();
    let vocabulary_before = index.vocabulary().tokens().to_vec();

    let pipeline = CareerPipeline::new(&index, 5);
    let chef = write_docx(dir.path(), "chef.docx", &["Skills", "Baking, sous vide"]);
    let unknown = write_docx(dir.path(), "none.docx", &["Hobbies", "Chess"]);

    match pipeline.process_path(&chef).await {
        PipelineOutcome::Recommendations { jobs, .. } => {
            assert_eq!(jobs.len(), 3);
            assert_eq!(jobs[0].job_title, "Chef");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(pipeline.process_path(&unknown).await, PipelineOutcome::NoSkillsSection);

    // queries never grow the vocabulary
    assert_eq!(index.vocabulary().tokens(), vocabulary_before.as_slice());
}

#[test]
fn test_catalog_missing_skills_column() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "Job Title,Company Name\nChef,B\n");

    match CorpusIndex::from_csv(&path) {
        Err(CareerMatchError::Schema { missing }) => assert_eq!(missing, vec!["Skills Required"]),
        other => panic!("expected schema error, got {:?}", other.map(|i| i.len())),
    }
}

#[test]
fn test_missing_catalog_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = CorpusIndex::from_csv(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(CareerMatchError::NotFound(_))));
}

#[test]
fn test_locator_feeds_recommender() {
    let dir = TempDir::new().unwrap();
    let index = CorpusIndex::from_csv(&write_catalog(dir.path(), CATALOG)).unwrap();

    let skills = SkillsLocator::new()
        .locate("Core Competencies\nMachine Learning, Python\nAchievements\nKaggle")
        .unwrap();
    assert_eq!(skills, "machine learning, python");

    let recs = CareerRecommender::new(&index).recommend(&skills, 1);
    assert_eq!(recs[0].job_title, "ML Engineer");
}

#[tokio::test]
async fn test_input_manager_errors() {
    let dir = TempDir::new().unwrap();
    let manager = InputManager::new();

    let missing = manager.extract_text(&dir.path().join("ghost.docx")).await;
    assert!(matches!(missing, Err(CareerMatchError::NotFound(_))));

    let rtf = dir.path().join("resume.rtf");
    std::fs::write(&rtf, "{\\rtf1 Skills}").unwrap();
    let unsupported = manager.extract_text(&rtf).await;
    assert!(matches!(unsupported, Err(CareerMatchError::UnsupportedFormat(_))));
}
