use anyhow::Result;
use seedstream::{
    PlaceholderPolicy, SeedError, SubstitutionContext, escape_json_fragment, expand,
};
use serde_json::json;

#[test]
fn round_trip_preserves_structure_outside_placeholders() -> Result<()> {
    let template = json!({
        "crn": "{{CRN}}",
        "nested": { "grant": "{{GRANT_CODE}}", "cost": 120000, "approved": true },
        "tags": ["a", "b"]
    });
    let ctx = SubstitutionContext::new()
        .with("CRN", "1100014934")
        .with("GRANT_CODE", "adding-value");

    let doc = expand(&template, &ctx, PlaceholderPolicy::PassThrough)?;
    assert_eq!(
        doc,
        json!({
            "crn": "1100014934",
            "nested": { "grant": "adding-value", "cost": 120000, "approved": true },
            "tags": ["a", "b"]
        })
    );
    // The template itself is untouched.
    assert_eq!(template["crn"], "{{CRN}}");
    Ok(())
}

#[test]
fn partial_string_placeholders_are_substituted() -> Result<()> {
    let template = json!({ "correlation": "ref-{{REFERENCE_NUMBER}}" });
    let ctx = SubstitutionContext::new().with("REFERENCE_NUMBER", "abc-123");

    let doc = expand(&template, &ctx, PlaceholderPolicy::PassThrough)?;
    assert_eq!(doc["correlation"], "ref-abc-123");
    Ok(())
}

#[test]
fn repeated_placeholders_are_replaced_globally() -> Result<()> {
    let template = json!({ "createdAt": "{{TIMESTAMP}}", "updatedAt": "{{TIMESTAMP}}" });
    let ctx = SubstitutionContext::new().with("TIMESTAMP", "2026-08-29T00:00:00.000Z");

    let doc = expand(&template, &ctx, PlaceholderPolicy::PassThrough)?;
    assert_eq!(doc["createdAt"], doc["updatedAt"]);
    Ok(())
}

#[test]
fn unmatched_placeholder_passes_through_by_default() -> Result<()> {
    let template = json!({ "crn": "{{CRN}}", "sbi": "{{SBI}}" });
    let ctx = SubstitutionContext::new().with("CRN", "100");

    let doc = expand(&template, &ctx, PlaceholderPolicy::PassThrough)?;
    assert_eq!(doc["crn"], "100");
    assert_eq!(doc["sbi"], "{{SBI}}");
    Ok(())
}

#[test]
fn strict_mode_rejects_unmatched_placeholders() -> Result<()> {
    let template = json!({ "crn": "{{CRN}}", "sbi": "{{SBI}}" });
    let ctx = SubstitutionContext::new().with("CRN", "100");

    let err = expand(&template, &ctx, PlaceholderPolicy::Strict).unwrap_err();
    match err {
        SeedError::TemplateSubstitution(detail) => assert!(detail.contains("{{SBI}}"), "{detail}"),
        other => panic!("expected TemplateSubstitution, got {other}"),
    }
    Ok(())
}

#[test]
fn unescaped_quote_in_value_breaks_the_reparse() -> Result<()> {
    // Substitution is textual, so a raw quote tears the surrounding JSON
    // string apart and the result no longer parses.
    let template = json!({ "name": "{{BUSINESS}}" });
    let ctx = SubstitutionContext::new().with("BUSINESS", r#"The "Best" Farm"#);

    let err = expand(&template, &ctx, PlaceholderPolicy::PassThrough).unwrap_err();
    assert!(matches!(err, SeedError::TemplateSubstitution(_)), "{err}");
    Ok(())
}

#[test]
fn escape_json_fragment_makes_special_values_safe() -> Result<()> {
    let template = json!({ "name": "{{BUSINESS}}" });
    let raw = "The \"Best\"\nFarm \\ Co";
    let ctx = SubstitutionContext::new().with("BUSINESS", escape_json_fragment(raw));

    let doc = expand(&template, &ctx, PlaceholderPolicy::PassThrough)?;
    assert_eq!(doc["name"], raw);
    Ok(())
}
