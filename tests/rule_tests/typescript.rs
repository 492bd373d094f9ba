//! TypeScript and TSX sources

use super::test_utils::*;
use playwright_tagging::syntax::Language;
use playwright_tagging::TagRuleConfig;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_typed_fixture_callback() {
    let source = r#"
import { test, expect, type Page } from '@playwright/test';

test('opens home', async ({ page }: { page: Page }): Promise<void> => {
  await expect(page).toHaveTitle(/Home/);
});
"#;
    let result = lint_default(source);
    assert_eq!(message_ids(&result), vec!["missingTag"]);
    assert_eq!(result.diagnostics[0].span.line, 4);
}

#[test]
fn test_details_object_with_typed_callback() {
    let config = config(json!({
        "allow": { "title": false, "tagAnnotation": true },
        "tagGroups": { "priority": ["smoke"] }
    }));
    assert_valid(
        "test('typed', { tag: ['@smoke'] }, async ({ page }: { page: Page }) => {});",
        &config,
    );
}

#[test]
fn test_tsx_component_test() {
    let source = r#"
test('renders @smoke', async ({ mount }) => {
  const component = await mount(<Button label="Save" />);
});

test('renders disabled', async ({ mount }) => {
  await mount(<Button disabled />);
});
"#;
    let result = lint_with(source, &TagRuleConfig::default(), Language::Tsx);
    let lines: Vec<usize> = result.diagnostics.iter().map(|d| d.span.line).collect();
    assert_eq!(lines, vec![6]);
}

#[test]
fn test_javascript_grammar() {
    let source = "const { test } = require('@playwright/test');\ntest('plain js', () => {});";
    let result = lint_with(source, &TagRuleConfig::default(), Language::Javascript);
    assert_eq!(message_ids(&result), vec!["missingTag"]);
    assert_eq!(result.diagnostics[0].span.column, 6);
}
