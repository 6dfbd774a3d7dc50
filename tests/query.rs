//! Search/filter/order policy tests

use docsearch::{Document, DocumentPredicate, DocumentQueryService};
use uuid::Uuid;

fn doc(name: Option<&str>, content: Option<&str>) -> Document {
  Document {
    id: Uuid::new_v4(),
    name: name.map(String::from),
    content: content.map(String::from),
    modified_date: None,
    size: content.map_or(0, |c| c.len() as u64),
  }
}

fn names(docs: &[Document]) -> Vec<&str> {
  docs.iter().map(|d| d.name.as_deref().unwrap_or("")).collect()
}

fn sample() -> Vec<Document> {
  vec![
    doc(Some("Alpha Report"), Some("budget")),
    doc(Some("beta notes"), Some("Alpha mentioned")),
  ]
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_term_matches_name_and_content() {
  let result = DocumentQueryService::new().query("alpha", sample());
  assert_eq!(names(&result), vec!["Alpha Report", "beta notes"]);
}

#[test]
fn test_term_without_matches_is_empty() {
  let result = DocumentQueryService::new().query("zzz", sample());
  assert!(result.is_empty());
}

#[test]
fn test_term_matches_content_only() {
  let result = DocumentQueryService::new().query("BUDGET", sample());
  assert_eq!(names(&result), vec!["Alpha Report"]);
}

// =============================================================================
// Empty Term
// =============================================================================

#[test]
fn test_empty_term_returns_all_sorted() {
  let docs = vec![
    doc(Some("delta"), None),
    doc(Some("Charlie"), None),
    doc(Some("alpha"), None),
    doc(Some("Bravo"), None),
  ];
  let result = DocumentQueryService::new().query("", docs.clone());
  assert_eq!(result.len(), docs.len());
  // Ordinal comparison: uppercase sorts before lowercase
  assert_eq!(names(&result), vec!["Bravo", "Charlie", "alpha", "delta"]);
  for d in &docs {
    assert!(result.iter().any(|r| r.id == d.id));
  }
}

#[test]
fn test_empty_input() {
  assert!(DocumentQueryService::new().query("", Vec::new()).is_empty());
  assert!(DocumentQueryService::new().query("a", Vec::new()).is_empty());
}

#[test]
fn test_whitespace_term_is_a_real_search() {
  let docs = vec![doc(Some("one"), None), doc(Some("two words"), None)];
  let result = DocumentQueryService::new().query(" ", docs);
  assert_eq!(names(&result), vec!["two words"]);
}

// =============================================================================
// Absent Fields
// =============================================================================

#[test]
fn test_absent_name_sorts_first() {
  let docs = vec![
    doc(Some("b"), None),
    doc(None, Some("no name")),
    doc(Some("a"), None),
  ];
  let result = DocumentQueryService::new().query("", docs);
  assert!(result[0].name.is_none());
  assert_eq!(result[1].name.as_deref(), Some("a"));
  assert_eq!(result[2].name.as_deref(), Some("b"));
}

#[test]
fn test_absent_name_ties_with_empty_name() {
  let first = doc(None, None);
  let second = doc(Some(""), None);
  let result = DocumentQueryService::new().query("", vec![first.clone(), second.clone()]);
  assert_eq!(result[0].id, first.id);
  assert_eq!(result[1].id, second.id);
}

#[test]
fn test_absent_fields_never_match() {
  let docs = vec![doc(None, None), doc(None, Some("none here"))];
  let result = DocumentQueryService::new().query("none", docs);
  assert_eq!(result.len(), 1);
  assert_eq!(result[0].content.as_deref(), Some("none here"));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_every_result_contains_term() {
  let docs = vec![
    doc(Some("Quarterly REPORT"), None),
    doc(Some("misc"), Some("see the report")),
    doc(Some("other"), Some("nothing")),
    doc(None, Some("Reporting")),
    doc(Some("rePort"), None),
  ];
  for term in ["report", "REP", "port", "o", "x"] {
    let result = DocumentQueryService::new().query(term, docs.clone());
    let lowered = term.to_lowercase();
    for d in &result {
      let hit = [d.name.as_deref(), d.content.as_deref()]
        .into_iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(&lowered));
      assert!(hit, "{:?} does not contain {:?}", d, term);
    }
    let expected = docs
      .iter()
      .filter(|d| {
        [d.name.as_deref(), d.content.as_deref()]
          .into_iter()
          .flatten()
          .any(|f| f.to_lowercase().contains(&lowered))
      })
      .count();
    assert_eq!(result.len(), expected, "term {:?}", term);
  }
}

#[test]
fn test_sort_is_stable_for_equal_names() {
  let docs = vec![
    doc(Some("same"), Some("first")),
    doc(Some("a"), None),
    doc(Some("same"), Some("second")),
    doc(Some("same"), Some("third")),
  ];
  let result = DocumentQueryService::new().query("", docs);
  let contents: Vec<_> = result
    .iter()
    .filter(|d| d.name.as_deref() == Some("same"))
    .map(|d| d.content.as_deref().unwrap())
    .collect();
  assert_eq!(contents, vec!["first", "second", "third"]);
}

#[test]
fn test_filtered_sort_is_stable() {
  let docs = vec![
    doc(Some("dup"), Some("x one")),
    doc(Some("dup"), Some("skip")),
    doc(Some("dup"), Some("x two")),
  ];
  let result = DocumentQueryService::new().query("x", docs);
  let contents: Vec<_> = result.iter().map(|d| d.content.as_deref().unwrap()).collect();
  assert_eq!(contents, vec!["x one", "x two"]);
}

#[test]
fn test_unicode_case_insensitive_match() {
  let docs = vec![doc(Some("Größe"), None), doc(Some("ÉTÉ"), None)];
  let result = DocumentQueryService::new().query("été", docs.clone());
  assert_eq!(names(&result), vec!["ÉTÉ"]);
  let result = DocumentQueryService::new().query("GRÖ", docs);
  assert_eq!(names(&result), vec!["Größe"]);
}

#[test]
fn test_query_agrees_with_predicate() {
  let docs = vec![
    doc(Some("Alpha Report"), Some("budget")),
    doc(Some("beta notes"), Some("Alpha mentioned")),
    doc(None, Some("ÉTÉ plans")),
    doc(Some("gamma"), None),
    doc(None, None),
  ];

  for term in ["alpha", "ÉTÉ", "été", "GAMMA", "budget", "zzz"] {
    let predicate = DocumentPredicate::name_or_content_contains(term);
    let mut expected: Vec<Document> = docs.iter().filter(|d| predicate.matches(d)).cloned().collect();
    expected.sort_by(|a, b| a.sort_name().cmp(b.sort_name()));

    let result = DocumentQueryService::new().query(term, docs.clone());
    assert_eq!(result, expected, "term {term:?}");
  }
}
