use std::fs;
use tempfile::TempDir;

use faqbot_core::corpus::{load_corpus, parse_corpus, Corpus};
use faqbot_core::error::Error;
use faqbot_core::types::FaqRecord;

const NESTED: &str = r#"{
  "faqs": [
    { "category": "Jobs", "questions": [
      { "question": "How do I apply for a job?", "answer": "Use the careers portal.", "keywords": ["apply", "job"] },
      { "question": "Can I apply twice?", "answer": "Yes, after 90 days." }
    ]},
    { "category": "Leave", "questions": [
      { "question": "How many vacation days do I get?", "answer": "25 per year.", "keywords": ["vacation", "leave"] }
    ]}
  ]
}"#;

#[test]
fn nested_document_flattens_in_order() {
    let corpus = parse_corpus(NESTED).expect("parse");
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.skipped, 0);
    let questions: Vec<&str> = corpus.records.iter().map(|r| r.question.as_str()).collect();
    assert_eq!(questions, ["How do I apply for a job?", "Can I apply twice?", "How many vacation days do I get?"]);
    assert_eq!(corpus.records[0].category.as_deref(), Some("Jobs"));
    assert_eq!(corpus.records[2].category.as_deref(), Some("Leave"));
}

#[test]
fn parsed_records_match_hand_built_corpus() {
    let expected = Corpus::from_records(vec![
        FaqRecord::new("How do I apply for a job?", "Use the careers portal.")
            .with_keywords(["apply", "job"])
            .with_category("Jobs"),
        FaqRecord::new("Can I apply twice?", "Yes, after 90 days.").with_category("Jobs"),
        FaqRecord::new("How many vacation days do I get?", "25 per year.")
            .with_keywords(["vacation", "leave"])
            .with_category("Leave"),
    ]);
    let parsed = parse_corpus(NESTED).expect("parse");
    assert_eq!(parsed.records, expected.records);
    assert_eq!(parsed.skipped, expected.skipped);
}

#[test]
fn category_is_omitted_when_serializing_flat_records() {
    let flat = serde_json::to_value(FaqRecord::new("Q", "A")).expect("serialize");
    assert!(flat.get("category").is_none());
    let grouped = serde_json::to_value(FaqRecord::new("Q", "A").with_category("HR")).expect("serialize");
    assert_eq!(grouped["category"], "HR");
}

#[test]
fn missing_keywords_default_to_empty() {
    let corpus = parse_corpus(NESTED).expect("parse");
    assert!(corpus.records[1].keywords.is_empty());
    assert_eq!(corpus.records[0].keywords, ["apply", "job"]);
}

#[test]
fn flat_and_nested_documents_yield_same_records() {
    let flat = r#"{ "faqs": [
      { "question": "How do I apply for a job?", "answer": "Use the careers portal.", "keywords": ["apply", "job"] },
      { "question": "Can I apply twice?", "answer": "Yes, after 90 days." },
      { "question": "How many vacation days do I get?", "answer": "25 per year.", "keywords": ["vacation", "leave"] }
    ]}"#;
    let flat = parse_corpus(flat).expect("flat");
    let nested = parse_corpus(NESTED).expect("nested");
    let strip = |r: &FaqRecord| (r.question.clone(), r.answer.clone(), r.keywords.clone());
    assert_eq!(
        flat.records.iter().map(strip).collect::<Vec<_>>(),
        nested.records.iter().map(strip).collect::<Vec<_>>()
    );
}

#[test]
fn malformed_records_are_skipped_and_counted() {
    let doc = r#"{ "faqs": [
      { "question": "Where is the office?", "answer": "Downtown." },
      { "question": "No answer here" },
      { "answer": "No question here" },
      { "question": 42, "answer": "numeric question" },
      { "question": "   ", "answer": "blank question" },
      { "question": "Parking?", "answer": "Level B2.", "keywords": ["parking", 7, null, "car"] },
      { "category": "Broken", "questions": "not a list" }
    ]}"#;
    let corpus = parse_corpus(doc).expect("parse");
    assert_eq!(corpus.len(), 2, "only the two well-formed records survive");
    assert_eq!(corpus.skipped, 5);
    assert_eq!(corpus.records[1].keywords, ["parking", "car"], "non-string keywords are dropped");
}

#[test]
fn document_without_faqs_is_rejected() {
    let err = parse_corpus(r#"{ "questions": [] }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidCorpus(_)), "got {err:?}");
    let err = parse_corpus("not json at all").unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {err:?}");
}

#[test]
fn empty_faq_list_is_a_valid_empty_corpus() {
    let corpus = parse_corpus(r#"{ "faqs": [] }"#).expect("parse");
    assert!(corpus.is_empty());
}

#[tokio::test]
async fn load_corpus_reads_from_disk() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("faqs.json");
    fs::write(&path, NESTED).unwrap();

    let corpus = load_corpus(&path).await.expect("load");
    assert_eq!(corpus.len(), 3);
}

#[tokio::test]
async fn load_corpus_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = load_corpus(&tmp.path().join("nope.json")).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}
