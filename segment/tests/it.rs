//! End-to-end behavior of the segmentation pipeline.

use mandala_segment::{
    Classification, HardWrapper, ParagraphSplitter, Provenance, SIDE_CELL_COUNT, SegmentConfig,
    SegmentError, Thresholds, config::DEFAULT_PLACEHOLDER, segment, segment_with,
    visible_length,
};

fn paragraphs(n: usize) -> String {
    (1..=n)
        .map(|i| format!("Paragraph number {i} is short."))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn long_prose(sentences: usize) -> String {
    (0..sentences)
        .map(|i| {
            format!("Sentence {i} talks about chunk sizes and why paragraphs beat whole files.")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn always_eight_side_cells() {
    let inputs = [
        "one".to_string(),
        paragraphs(3),
        paragraphs(8),
        paragraphs(25),
        long_prose(200),
        "字".repeat(5000),
        format!("{}\n\n{}", long_prose(60), "短句。".repeat(10)),
    ];

    for input in &inputs {
        let doc = segment(input).unwrap();
        assert_eq!(doc.side_cells().count(), SIDE_CELL_COUNT);
        assert_eq!(doc.chunks.len(), SIDE_CELL_COUNT);
        assert_eq!(doc.cells.len(), SIDE_CELL_COUNT + 1);
        assert!(doc.center().is_center());
    }
}

#[test]
fn unmerged_chunks_respect_the_ceiling() {
    let t = Thresholds::DEFAULT;
    let window = HardWrapper::for_ceiling(t.hard_max()).window();
    let input = format!(
        "{}\n\n{}\n\n{}",
        long_prose(30),
        "x".repeat(3000),
        long_prose(3)
    );
    let doc = segment(&input).unwrap();

    for chunk in &doc.chunks {
        match chunk.provenance {
            Provenance::HardWrap => assert!(chunk.text.chars().count() <= window),
            Provenance::Paragraph | Provenance::Sentences => {
                assert!(chunk.visible_length <= t.hard_max());
            }
            Provenance::Merged | Provenance::Placeholder => {}
        }
    }
}

#[test]
fn padding_two_paragraphs() {
    let doc = segment("First short paragraph.\n\nSecond short paragraph.").unwrap();

    let placeholders: Vec<_> = doc
        .chunks
        .iter()
        .filter(|chunk| chunk.provenance == Provenance::Placeholder)
        .collect();
    assert_eq!(placeholders.len(), 6);
    assert!(placeholders.iter().all(|chunk| chunk.text == DEFAULT_PLACEHOLDER));
    assert_eq!(doc.chunks[0].text, "First short paragraph.");
    assert_eq!(doc.chunks[1].text, "Second short paragraph.");
    assert_eq!(doc.stats.candidate_count, 2);
}

#[test]
fn merging_ten_paragraphs() {
    let doc = segment(&paragraphs(10)).unwrap();
    let last = &doc.chunks[7];

    assert_eq!(doc.stats.candidate_count, 10);
    assert_eq!(
        last.text,
        "Paragraph number 8 is short.\n\nParagraph number 9 is short.\n\nParagraph number 10 is short."
    );
    assert_eq!(last.provenance, Provenance::Merged);
    assert_eq!(doc.chunks[6].text, "Paragraph number 7 is short.");
    assert_eq!(doc.cells[8].body, last.text);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(segment("   \n\n  "), Err(SegmentError::EmptyInput));
    assert_eq!(segment(""), Err(SegmentError::EmptyInput));
}

#[test]
fn oversize_paragraph_without_punctuation() {
    let text = "x".repeat(2000);
    let pieces = ParagraphSplitter::new(1500).pieces(&text);
    let window = HardWrapper::for_ceiling(1500).window();

    assert!(pieces.len() >= 2);
    assert!(pieces.iter().all(|p| p.text.chars().count() <= window));

    let doc = segment(&text).unwrap();
    assert_eq!(doc.stats.candidate_count, 2);
    assert_eq!(doc.chunks[0].visible_length, 1125);
    assert_eq!(doc.chunks[1].visible_length, 875);
    assert_eq!(doc.chunks[0].classification, Classification::Sweet);
}

#[test]
fn segmentation_is_idempotent() {
    let input = format!("{}\n\n{}", long_prose(40), paragraphs(12));
    let first = segment(&input).unwrap();
    let second = segment(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_markdown(), second.to_markdown());
    assert_eq!(first.report().to_string(), second.report().to_string());
}

#[test]
fn long_prose_is_regrouped_by_sentence() {
    let input = long_prose(100);
    let doc = segment(&input).unwrap();

    assert!(doc.stats.candidate_count > 1);
    let sentences = doc
        .chunks
        .iter()
        .filter(|c| c.provenance == Provenance::Sentences)
        .count();
    assert_eq!(sentences, doc.stats.candidate_count.min(SIDE_CELL_COUNT));
    assert!(doc.chunks[0].text.ends_with('.'));
    assert_eq!(doc.stats.input_visible_length, visible_length(&input));
}

#[test]
fn custom_config_drives_the_whole_run() {
    let config = SegmentConfig::builder()
        .thresholds(Thresholds::new(5, 10, 3, 12).unwrap())
        .heading("Tiny grid")
        .title_width(4)
        .build();
    let doc = segment_with("abcdefgh\n\nab", &config).unwrap();

    assert_eq!(doc.heading, "Tiny grid");
    assert_eq!(doc.chunks[0].classification, Classification::Sweet);
    assert_eq!(doc.chunks[1].classification, Classification::OutOfRange);
    assert_eq!(doc.cells[0].title, "1. abcd…");
    assert!(doc.to_markdown().starts_with("# Tiny grid\n"));
    assert!(doc.center().body.contains("5-10"));
}

#[test]
fn document_serializes_to_json() {
    let doc = segment(&paragraphs(4)).unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["cells"].as_array().unwrap().len(), 9);
    assert_eq!(json["cells"][4]["id"], "5 Core");
    assert_eq!(json["chunks"][0]["classification"], "out-of-range");
    assert_eq!(json["chunks"][7]["provenance"], "placeholder");
    assert_eq!(json["stats"]["candidate_count"], 4);

    let back: mandala_segment::GridDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}
