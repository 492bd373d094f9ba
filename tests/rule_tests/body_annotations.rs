//! Tags pushed onto `test.info().annotations` inside the test body

use super::test_utils::*;
use playwright_tagging::rule::TagSource;
use playwright_tagging::TagRuleConfig;
use pretty_assertions::assert_eq;
use serde_json::json;

fn body_only(tag_groups: serde_json::Value) -> TagRuleConfig {
    config(json!({
        "allow": { "title": false, "bodyAnnotation": true },
        "tagGroups": tag_groups
    }))
}

#[test]
fn test_single_push() {
    assert_valid(
        r#"
        test('should do something', () => {
          test.info().annotations.push({
            type: 'tag',
            description: 'smoke',
          });
        });
      "#,
        &body_only(json!({ "priority": ["smoke"] })),
    );
}

#[test]
fn test_pushes_across_statements() {
    assert_valid(
        r#"
        test('should do something', () => {
          test.info().annotations.push({
            type: 'tag',
            description: 'smoke',
          });
          test.info().annotations.push({
            type: 'tag',
            description: 'regression',
          });
        });
      "#,
        &body_only(json!({ "priority": ["smoke"], "type": ["regression"] })),
    );
}

#[test]
fn test_push_inside_async_body_with_fixtures() {
    assert_valid(
        r#"
        test('should do something', async ({ page }) => {
          await page.goto('/');
          if (process.env.CI) {
            test.info().annotations.push({ type: 'tag', description: '@smoke' });
          }
        });
      "#,
        &body_only(json!({ "priority": ["smoke"] })),
    );
}

#[test]
fn test_push_not_read_by_default() {
    let config = config(json!({
        "allow": { "title": false, "tagAnnotation": true },
        "tagGroups": { "priority": ["smoke"] }
    }));
    let result = lint(
        r#"
        test('should do something', () => {
          test.info().annotations.push({ type: 'tag', description: 'smoke' });
        });
      "#,
        &config,
    );
    assert_eq!(only_groups(&result), "priority (smoke)");
}

#[test]
fn test_other_annotation_types_are_ignored() {
    let result = lint(
        r#"
        test('should do something', () => {
          test.info().annotations.push({ type: 'issue', description: 'smoke' });
        });
      "#,
        &body_only(json!({ "priority": ["smoke"] })),
    );
    assert_eq!(only_groups(&result), "priority (smoke)");
}

#[test]
fn test_unknown_pushed_tag() {
    let source = r#"test('x', () => {
  test.info().annotations.push({ type: 'tag', description: 'flaky' });
});"#;
    let result = lint(source, &body_only(json!({ "priority": ["smoke"] })));
    let (tag, _) = only_unknown(&result);
    assert_eq!(tag, "flaky");
    assert_eq!(result.diagnostics[0].span.line, 2);
}

#[test]
fn test_nested_test_tags_stay_with_nested_test() {
    let result = lint(
        r#"
        test('outer', () => {
          test('inner', () => {
            test.info().annotations.push({ type: 'tag', description: 'smoke' });
          });
        });
      "#,
        &body_only(json!({ "priority": ["smoke"] })),
    );
    // outer has nothing, inner is satisfied
    assert_eq!(message_ids(&result), vec!["missingTagFromGroup"]);
    assert_eq!(result.diagnostics[0].span.line, 2);
}

#[test]
fn test_all_sources_together() {
    let config = config(json!({
        "allow": { "title": true, "tagAnnotation": true, "bodyAnnotation": true },
        "tagGroups": { "priority": ["smoke"], "type": ["regression"], "area": ["cart"] }
    }));
    assert_valid(
        r#"
        test('adds item @smoke', { tag: 'regression' }, () => {
          test.info().annotations.push({ type: 'tag', description: 'cart' });
        });
      "#,
        &config,
    );
}

#[test]
fn test_extraction_order_title_annotation_body() {
    use playwright_tagging::rule::{extract_tags, match_call_site};
    use playwright_tagging::syntax::{parse_source, Language, SourceContext};

    let source = r#"test('a @one', { tag: 'two' }, () => {
  test.info().annotations.push({ type: 'tag', description: 'three' });
});"#;
    let tree = parse_source(source, Language::Javascript).unwrap();
    let ctx = SourceContext::new(source.as_bytes(), "order.spec.js");
    let call = tree
        .root_node()
        .named_child(0)
        .and_then(|statement| statement.named_child(0))
        .unwrap();
    let site = match_call_site(call, &ctx).unwrap();

    let allow = config(json!({
        "allow": { "title": true, "tagAnnotation": true, "bodyAnnotation": true }
    }))
    .allow;
    let tags: Vec<(String, TagSource)> = extract_tags(&site, &allow, &ctx)
        .into_iter()
        .map(|raw| (raw.tag, raw.source))
        .collect();

    assert_eq!(
        tags,
        vec![
            ("@one".to_string(), TagSource::Title),
            ("two".to_string(), TagSource::Annotation),
            ("three".to_string(), TagSource::BodyAnnotation),
        ]
    );
}
