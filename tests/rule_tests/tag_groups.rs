//! Title and details-object tags checked against tag groups

use super::test_utils::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn title_only(tag_groups: serde_json::Value) -> playwright_tagging::TagRuleConfig {
    config(json!({
        "allow": { "title": true, "tagAnnotation": false },
        "tagGroups": tag_groups,
        "optionalTagGroups": {}
    }))
}

fn annotation_only(tag_groups: serde_json::Value) -> playwright_tagging::TagRuleConfig {
    config(json!({
        "allow": { "title": false, "tagAnnotation": true },
        "tagGroups": tag_groups,
        "optionalTagGroups": {}
    }))
}

fn project_with_optional() -> playwright_tagging::TagRuleConfig {
    config(json!({
        "allow": { "title": true, "tagAnnotation": false },
        "tagGroups": { "projectTags": ["projectTag"] },
        "optionalTagGroups": { "otherTags": ["optionalTag"] }
    }))
}

// =============================================================================
// Valid
// =============================================================================

#[test]
fn test_any_title_tag_without_groups() {
    let result = lint_default("test('should do something @tag1', () => {});");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_title_tags_cover_every_group() {
    assert_valid(
        "test('should do something @projectTag @otherTag', () => {});",
        &title_only(json!({ "projectTags": ["projectTag"], "otherTags": ["otherTag"] })),
    );
}

#[test]
fn test_several_tags_from_one_group() {
    assert_valid(
        "test('should do something @projectTag @otherTag @anotherTag', () => {});",
        &title_only(json!({
            "projectTags": ["projectTag"],
            "otherTags": ["otherTag", "anotherTag"]
        })),
    );
}

#[test]
fn test_one_member_per_group_is_enough() {
    assert_valid(
        "test('should do something @smoke @regression', () => {});",
        &title_only(json!({ "priority": ["smoke", "fast"], "type": ["regression"] })),
    );
}

#[test]
fn test_annotation_string() {
    assert_valid(
        r#"
        test('should do something', {
          tag: 'smoke',
        }, () => {});
      "#,
        &annotation_only(json!({ "priority": ["smoke"] })),
    );
}

#[test]
fn test_annotation_array() {
    assert_valid(
        r#"
        test('should do something', {
          tag: ['smoke', 'regression'],
        }, () => {});
      "#,
        &annotation_only(json!({ "priority": ["smoke"], "type": ["regression"] })),
    );
}

#[test]
fn test_title_and_annotation_combined() {
    let config = config(json!({
        "allow": { "title": true, "tagAnnotation": true },
        "tagGroups": { "priority": ["smoke"], "type": ["regression"] },
        "optionalTagGroups": {}
    }));
    assert_valid(
        "test('should do something @smoke', { tag: 'regression' }, () => {});",
        &config,
    );
}

#[test]
fn test_non_string_array_elements_are_skipped() {
    assert_valid(
        r#"
        test('should do something', {
          tag: ['smoke', 123, null, 'regression'],
        }, () => {});
      "#,
        &annotation_only(json!({ "priority": ["smoke"], "type": ["regression"] })),
    );
}

#[test]
fn test_optional_tag_is_known() {
    assert_valid(
        "test('should do something @projectTag @optionalTag', () => {});",
        &project_with_optional(),
    );
}

#[test]
fn test_annotation_tags_with_at_sign() {
    assert_valid(
        "test('checkout', { tag: ['@smoke', '@regression'] }, async () => {});",
        &annotation_only(json!({ "priority": ["smoke"], "type": ["regression"] })),
    );
}

// =============================================================================
// Invalid
// =============================================================================

#[test]
fn test_untagged_title_gets_placeholder_fix() {
    let source = "test('should do something', () => {});";
    let result = lint_default(source);

    assert_eq!(message_ids(&result), vec!["missingTag"]);
    assert_eq!(
        fixed_output(source, &result),
        "test('should do something @tagme', () => {});"
    );
}

#[test]
fn test_no_fix_when_groups_configured() {
    let result = lint(
        "test('should do something', () => {});",
        &title_only(json!({ "priority": ["smoke"] })),
    );
    assert_eq!(only_groups(&result), "priority (smoke)");
    assert!(result.diagnostics[0].fix.is_none());
}

#[test]
fn test_missing_second_group() {
    let result = lint(
        "test('should do something @projectTag', () => {});",
        &title_only(json!({ "projectTags": ["projectTag"], "otherTags": ["otherTag"] })),
    );
    assert_eq!(only_groups(&result), "otherTags (otherTag)");
}

#[test]
fn test_missing_first_group() {
    let result = lint(
        "test('should do something @otherTag', () => {});",
        &title_only(json!({ "projectTags": ["projectTag"], "otherTags": ["otherTag"] })),
    );
    assert_eq!(only_groups(&result), "projectTags (projectTag)");
}

#[test]
fn test_first_unknown_tag_is_reported() {
    let result = lint(
        "test('should do something @wrongProject @wrongOther', () => {});",
        &title_only(json!({ "projectTags": ["projectTag"], "otherTags": ["otherTag"] })),
    );
    assert_eq!(
        only_unknown(&result),
        (
            "@wrongProject".to_string(),
            "\n  - projectTags (required): projectTag\n  - otherTags (required): otherTag"
                .to_string()
        )
    );
    assert_eq!(
        result.diagnostics[0].message(),
        "Unknown tag \"@wrongProject\". It does not belong to any configured tag group. \
         Available tags by group: \n  - projectTags (required): projectTag\n  - otherTags (required): otherTag"
    );
}

#[test]
fn test_missing_type_group() {
    let result = lint(
        "test('should do something @smoke', () => {});",
        &title_only(json!({ "priority": ["smoke", "fast"], "type": ["regression"] })),
    );
    assert_eq!(only_groups(&result), "type (regression)");
}

#[test]
fn test_title_tag_when_title_disallowed() {
    let result = lint(
        "test('should do something @smoke', () => {});",
        &annotation_only(json!({ "priority": ["smoke"] })),
    );
    assert_eq!(message_ids(&result), vec!["disallowedTagInTitle"]);
    assert_eq!(
        result.diagnostics[0].message(),
        "Tags are not allowed in the test title"
    );
}

#[test]
fn test_disallowed_title_ignores_valid_annotation() {
    let result = lint(
        "test('should do something @smoke', { tag: 'smoke' }, () => {});",
        &annotation_only(json!({ "priority": ["smoke"] })),
    );
    assert_eq!(message_ids(&result), vec!["disallowedTagInTitle"]);
}

#[test]
fn test_body_comment_is_not_a_tag() {
    let result = lint(
        r#"
        test('should do something', () => {
          // no tags
        });
      "#,
        &annotation_only(json!({ "priority": ["smoke"] })),
    );
    assert_eq!(message_ids(&result), vec!["missingTagFromGroup"]);
}

#[test]
fn test_annotation_array_missing_group() {
    let result = lint(
        r#"
        test('should do something', {
          tag: ['smoke'],
        }, () => {});
      "#,
        &annotation_only(json!({ "priority": ["smoke"], "type": ["regression"] })),
    );
    assert_eq!(only_groups(&result), "type (regression)");
}

#[test]
fn test_annotation_ignored_when_not_allowed() {
    let result = lint(
        r#"
        test('should do something', {
          tag: 'smoke',
        }, () => {});
      "#,
        &title_only(json!({ "priority": ["smoke"] })),
    );
    assert_eq!(only_groups(&result), "priority (smoke)");
}

#[test]
fn test_unknown_title_tag_lists_groups() {
    let result = lint(
        "test('should do something @unknown', () => {});",
        &title_only(json!({ "priority": ["smoke", "fast"], "type": ["regression"] })),
    );
    assert_eq!(
        only_unknown(&result),
        (
            "@unknown".to_string(),
            "\n  - priority (required): smoke, fast\n  - type (required): regression".to_string()
        )
    );
}

#[test]
fn test_unknown_annotation_tag_keeps_spelling() {
    let result = lint(
        r#"
        test('should do something', {
          tag: ['smoke', 'unknown'],
        }, () => {});
      "#,
        &annotation_only(json!({ "priority": ["smoke"], "type": ["regression"] })),
    );
    assert_eq!(
        only_unknown(&result),
        (
            "unknown".to_string(),
            "\n  - priority (required): smoke\n  - type (required): regression".to_string()
        )
    );
}

#[test]
fn test_optional_tag_does_not_satisfy_required_group() {
    let result = lint(
        "test('should do something @optionalTag', () => {});",
        &project_with_optional(),
    );
    assert_eq!(only_groups(&result), "projectTags (projectTag)");
}

#[test]
fn test_unknown_tag_listing_includes_optional_groups() {
    let result = lint(
        "test('should do something @unknown', () => {});",
        &project_with_optional(),
    );
    assert_eq!(
        only_unknown(&result).1,
        "\n  - projectTags (required): projectTag\n  - otherTags (optional): optionalTag"
    );
}

#[test]
fn test_every_unsatisfied_group_is_listed() {
    let result = lint(
        "test('should do something', () => {});",
        &title_only(json!({ "projectTags": ["projectTag"], "otherTags": ["otherTag"] })),
    );
    assert_eq!(
        only_groups(&result),
        "projectTags (projectTag) and otherTags (otherTag)"
    );
    assert_eq!(
        result.diagnostics[0].message(),
        "Test must contain at least one tag from: projectTags (projectTag) and otherTags (otherTag)"
    );
}

#[test]
fn test_unknown_tag_is_anchored_on_the_tag() {
    let source = "test('x', { tag: ['smoke', 'nope'] }, () => {});";
    let result = lint(source, &annotation_only(json!({ "priority": ["smoke"] })));
    let span = result.diagnostics[0].span;
    assert_eq!(&source[span.start_byte..span.end_byte], "'nope'");
}

#[test]
fn test_group_diagnostic_is_anchored_on_the_title() {
    let source = "test('x', () => {});";
    let result = lint(source, &title_only(json!({ "priority": ["smoke"] })));
    let span = result.diagnostics[0].span;
    assert_eq!(&source[span.start_byte..span.end_byte], "'x'");
    assert_eq!((span.line, span.column), (1, 6));
}

#[test]
fn test_tag_outside_every_group_is_unknown() {
    let result = lint(
        "test('should do something @projectTag @otherTag @anotherTag', () => {});",
        &title_only(json!({ "projectTags": ["projectTag"], "otherTags": ["otherTag"] })),
    );
    assert_eq!(only_unknown(&result).0, "@anotherTag");
}
