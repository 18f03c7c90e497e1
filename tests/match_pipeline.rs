//! End-to-end pipeline tests: JSON target lists through the matcher with the
//! stub embedder, plus the scripted-score scenario with the mock embedder.

use std::io::Write;

use semalign::{
    EmbedderConfig, Field, FieldMatcher, MatchError, MockTextEmbedder, RankingError,
    SentenceEmbedder, canonical_text, load_target_fields,
};

fn write_targets_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const TARGETS_JSON: &str = r#"[
    {"fieldHandle": "availableQuantity", "fieldLabel": "Available Quantity", "fieldType": "int",
     "fieldDescription": "Units currently available for sale"},
    {"fieldHandle": "onHandQuantity", "fieldLabel": "On Hand Quantity", "fieldType": "int"},
    {"fieldHandle": "price", "fieldLabel": "Price", "fieldType": "number"}
]"#;

#[test]
fn stub_pipeline_ranks_loaded_targets() {
    let file = write_targets_file(TARGETS_JSON);
    let targets = load_target_fields(file.path()).unwrap();
    assert_eq!(targets.len(), 3);

    let matcher = FieldMatcher::new(SentenceEmbedder::load(EmbedderConfig::stub()).unwrap());
    let input = Field::new("qtyavail", "Quantity Available", "int", None).unwrap();

    let results = matcher.find_matches(&input, &targets, 3).unwrap();
    assert_eq!(results.len(), 3);

    // Descending order, scores in the cosine range.
    for pair in results.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
    for result in &results {
        assert!(result.score() >= -1.0 && result.score() <= 1.0);
    }

    // No duplication or omission.
    let mut handles: Vec<&str> = results.iter().map(|r| r.field().handle()).collect();
    handles.sort_unstable();
    assert_eq!(handles, ["availableQuantity", "onHandQuantity", "price"]);
}

#[test]
fn candidate_identical_to_input_ranks_first_with_score_one() {
    let file = write_targets_file(TARGETS_JSON);
    let mut targets = load_target_fields(file.path()).unwrap();
    let input = Field::new("qtyavail", "Quantity Available", "int", None).unwrap();
    targets.push(input.clone());

    let matcher = FieldMatcher::new(SentenceEmbedder::load(EmbedderConfig::stub()).unwrap());
    let results = matcher.find_matches(&input, &targets, 4).unwrap();

    assert_eq!(results[0].field(), &input);
    assert!((results[0].score() - 1.0).abs() < 1e-4);
}

#[test]
fn scripted_scenario_matches_expected_order_and_scores() {
    let input = Field::new("qtyavail", "Quantity Available", "int", None).unwrap();
    let candidates = vec![
        Field::new("availableQuantity", "Available Quantity", "int", None).unwrap(),
        Field::new("onHandQuantity", "On Hand Quantity", "int", None).unwrap(),
        Field::new("price", "Price", "number", None).unwrap(),
    ];

    let unit_with_cosine = |c: f32| vec![c, (1.0 - c * c).sqrt()];
    let embedder = MockTextEmbedder::new()
        .with_vector(canonical_text(&input), vec![1.0, 0.0])
        .with_vector(canonical_text(&candidates[0]), unit_with_cosine(0.81))
        .with_vector(canonical_text(&candidates[1]), unit_with_cosine(0.728))
        .with_vector(canonical_text(&candidates[2]), unit_with_cosine(0.590));

    let matcher = FieldMatcher::new(embedder);
    let results = matcher.find_matches(&input, &candidates, 3).unwrap();

    let ranked: Vec<(&str, f32)> = results
        .iter()
        .map(|r| (r.field().handle(), r.score()))
        .collect();
    assert_eq!(ranked[0].0, "availableQuantity");
    assert_eq!(ranked[1].0, "onHandQuantity");
    assert_eq!(ranked[2].0, "price");
    assert!((ranked[0].1 - 0.81).abs() < 1e-4);
    assert!((ranked[1].1 - 0.728).abs() < 1e-4);
    assert!((ranked[2].1 - 0.590).abs() < 1e-4);
}

#[test]
fn empty_target_file_matches_to_empty_result() {
    let file = write_targets_file("[]");
    let targets = load_target_fields(file.path()).unwrap();

    let matcher = FieldMatcher::new(SentenceEmbedder::load(EmbedderConfig::stub()).unwrap());
    let input = Field::new("qtyavail", "Quantity Available", "int", None).unwrap();

    let results = matcher.find_matches(&input, &targets, 3).unwrap();
    assert!(results.is_empty());
}

#[test]
fn zero_top_k_fails_the_pipeline() {
    let matcher = FieldMatcher::new(SentenceEmbedder::load(EmbedderConfig::stub()).unwrap());
    let input = Field::new("qtyavail", "Quantity Available", "int", None).unwrap();
    let candidates = vec![Field::new("price", "Price", "number", None).unwrap()];

    let err = matcher.find_matches(&input, &candidates, 0).unwrap_err();
    assert!(matches!(
        err,
        MatchError::Ranking(RankingError::InvalidTopK { top_k: 0 })
    ));
}

#[test]
fn stub_matching_is_reproducible_across_matchers() {
    let file = write_targets_file(TARGETS_JSON);
    let targets = load_target_fields(file.path()).unwrap();
    let input = Field::new("qtyavail", "Quantity Available", "int", None).unwrap();

    let run = || {
        let matcher = FieldMatcher::new(SentenceEmbedder::load(EmbedderConfig::stub()).unwrap());
        matcher
            .find_matches(&input, &targets, 3)
            .unwrap()
            .iter()
            .map(|r| (r.field().handle().to_string(), r.score()))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}
