use transcriptparser::{ingest_upload, TranscriptParserError};

fn read_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/testdata/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
}

#[test]
fn test_ingest_vtt_upload() {
    let content = read_fixture("sales_call.vtt");
    let normalized = ingest_upload(&content, "sales_call.vtt").unwrap();

    assert_eq!(
        normalized,
        "Hi, thanks for taking the time to chat today.\n\
         Of course, I've been curious about your product.\n\
         What does onboarding usually look like?"
    );
    assert!(!normalized.contains("-->"));
    assert!(!normalized.contains('<'));
}

#[test]
fn test_ingest_srt_upload() {
    let content = read_fixture("sales_call.srt");
    let normalized = ingest_upload(&content, "sales_call.srt").unwrap();

    assert_eq!(
        normalized,
        "Hi, thanks for taking the time to chat today.\n\
         Of course, I've been curious about your product.\n\
         What does onboarding usually look like?"
    );
    assert!(!normalized.contains('{'));
}

#[test]
fn test_ingest_plain_text_upload_is_trimmed_only() {
    let content = read_fixture("meeting_notes.txt");
    let normalized = ingest_upload(&content, "meeting_notes.txt").unwrap();

    assert_eq!(
        normalized,
        "Met with the platform team about the Q3 renewal.\n\
         Budget owner is out until Monday; follow up then."
    );
}

#[test]
fn test_ingest_rejects_unsupported_file() {
    let result = ingest_upload("anything", "report.pdf");
    match result {
        Err(TranscriptParserError::Upload(err)) => {
            assert_eq!(
                err.message,
                "Invalid file type. Please upload .txt, .vtt, .srt files."
            );
        }
        other => panic!("Expected an upload error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_ingest_rejects_missing_extension() {
    assert!(ingest_upload("anything", "transcript").is_err());
}
