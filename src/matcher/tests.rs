use super::*;
use crate::canon::canonical_text;
use crate::embedding::{EmbeddingError, MockTextEmbedder};
use crate::ranking::RankingError;

fn field(handle: &str, label: &str, field_type: &str) -> Field {
    Field::new(handle, label, field_type, None).unwrap()
}

/// Unit vector whose cosine similarity to `[1, 0]` is exactly `c`.
fn unit_with_cosine(c: f32) -> Vec<f32> {
    vec![c, (1.0 - c * c).sqrt()]
}

#[test]
fn empty_candidates_return_empty_not_error() {
    // A failing embedder proves the empty case never reaches the provider.
    let matcher = FieldMatcher::new(MockTextEmbedder::failing());
    let input = field("qtyavail", "Quantity Available", "int");
    let results = matcher.find_matches(&input, &[], 3).unwrap();
    assert!(results.is_empty());
}

#[test]
fn zero_top_k_errors_even_with_empty_candidates() {
    let matcher = FieldMatcher::new(MockTextEmbedder::new());
    let input = field("qtyavail", "Quantity Available", "int");
    let err = matcher.find_matches(&input, &[], 0).unwrap_err();
    assert!(matches!(
        err,
        MatchError::Ranking(RankingError::InvalidTopK { top_k: 0 })
    ));
}

#[test]
fn ranks_candidates_by_scripted_similarity() {
    let input = field("qtyavail", "Quantity Available", "int");
    let candidates = vec![
        field("availableQuantity", "Available Quantity", "int"),
        field("onHandQuantity", "On Hand Quantity", "int"),
        field("price", "Price", "number"),
    ];

    let embedder = MockTextEmbedder::new()
        .with_vector(canonical_text(&input), vec![1.0, 0.0])
        .with_vector(canonical_text(&candidates[0]), unit_with_cosine(0.81))
        .with_vector(canonical_text(&candidates[1]), unit_with_cosine(0.728))
        .with_vector(canonical_text(&candidates[2]), unit_with_cosine(0.590));

    let matcher = FieldMatcher::new(embedder);
    let results = matcher.find_matches(&input, &candidates, 3).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].field().handle(), "availableQuantity");
    assert_eq!(results[1].field().handle(), "onHandQuantity");
    assert_eq!(results[2].field().handle(), "price");
    assert!((results[0].score() - 0.81).abs() < 1e-4);
    assert!((results[1].score() - 0.728).abs() < 1e-4);
    assert!((results[2].score() - 0.590).abs() < 1e-4);
}

#[test]
fn top_k_beyond_candidate_count_returns_all_ranked() {
    let input = field("qtyavail", "Quantity Available", "int");
    let candidates = vec![
        field("price", "Price", "number"),
        field("availableQuantity", "Available Quantity", "int"),
    ];

    let embedder = MockTextEmbedder::new()
        .with_vector(canonical_text(&input), vec![1.0, 0.0])
        .with_vector(canonical_text(&candidates[0]), unit_with_cosine(0.2))
        .with_vector(canonical_text(&candidates[1]), unit_with_cosine(0.9));

    let matcher = FieldMatcher::new(embedder);
    let results = matcher.find_matches(&input, &candidates, 10).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].field().handle(), "availableQuantity");
    assert_eq!(results[1].field().handle(), "price");
}

#[test]
fn tied_scores_preserve_candidate_order() {
    let input = field("qtyavail", "Quantity Available", "int");
    let candidates = vec![
        field("stockLevel", "Stock Level", "int"),
        field("inventoryCount", "Inventory Count", "int"),
    ];

    let shared = unit_with_cosine(0.75);
    let embedder = MockTextEmbedder::new()
        .with_vector(canonical_text(&input), vec![1.0, 0.0])
        .with_vector(canonical_text(&candidates[0]), shared.clone())
        .with_vector(canonical_text(&candidates[1]), shared);

    let matcher = FieldMatcher::new(embedder);
    let results = matcher.find_matches(&input, &candidates, 2).unwrap();

    assert_eq!(results[0].field().handle(), "stockLevel");
    assert_eq!(results[1].field().handle(), "inventoryCount");
    assert_eq!(results[0].score(), results[1].score());
}

#[test]
fn embedding_failure_propagates() {
    let matcher = FieldMatcher::new(MockTextEmbedder::failing());
    let input = field("qtyavail", "Quantity Available", "int");
    let candidates = vec![field("price", "Price", "number")];
    let err = matcher.find_matches(&input, &candidates, 3).unwrap_err();
    assert!(matches!(
        err,
        MatchError::Embedding(EmbeddingError::InferenceFailed { .. })
    ));
}

#[test]
fn results_borrow_the_given_candidates() {
    let input = field("qtyavail", "Quantity Available", "int");
    let candidates = vec![field("price", "Price", "number")];
    let embedder = MockTextEmbedder::new()
        .with_vector(canonical_text(&input), vec![1.0, 0.0])
        .with_vector(canonical_text(&candidates[0]), unit_with_cosine(0.5));

    let matcher = FieldMatcher::new(embedder);
    let results = matcher.find_matches(&input, &candidates, 1).unwrap();
    assert!(std::ptr::eq(results[0].field(), &candidates[0]));
}
