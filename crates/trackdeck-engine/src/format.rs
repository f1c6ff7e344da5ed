use trackdeck_types::FieldValue;

/// Canonical display string for a raw field value.
///
/// Total over the whole value domain: absent and null render empty, lists
/// join with ", ", booleans become Yes/No, everything else is its plain
/// string conversion.
pub fn format_cell(value: Option<&FieldValue>) -> String {
    match value {
        None | Some(FieldValue::Null) => String::new(),
        Some(FieldValue::Bool(true)) => "Yes".to_string(),
        Some(FieldValue::Bool(false)) => "No".to_string(),
        Some(FieldValue::Int(n)) => n.to_string(),
        Some(FieldValue::Float(x)) => x.to_string(),
        Some(FieldValue::Text(s)) => s.clone(),
        Some(FieldValue::TextList(items)) => items.join(", "),
    }
}

/// Fields rendered full-width instead of as a label/value pair.
pub fn is_long_field(key: &str) -> bool {
    matches!(
        key,
        "summary" | "notes" | "job_link" | "problem_link" | "repo_url" | "location"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_render_empty() {
        assert_eq!(format_cell(None), "");
        assert_eq!(format_cell(Some(&FieldValue::Null)), "");
    }

    #[test]
    fn booleans_render_yes_no() {
        assert_eq!(format_cell(Some(&FieldValue::Bool(true))), "Yes");
        assert_eq!(format_cell(Some(&FieldValue::Bool(false))), "No");
    }

    #[test]
    fn lists_join_in_original_order() {
        let value = FieldValue::TextList(vec![
            "rust".to_string(),
            "axum".to_string(),
            "postgres".to_string(),
        ]);
        assert_eq!(format_cell(Some(&value)), "rust, axum, postgres");
    }

    #[test]
    fn scalars_render_via_display() {
        assert_eq!(format_cell(Some(&FieldValue::Int(217))), "217");
        assert_eq!(format_cell(Some(&FieldValue::Float(4.5))), "4.5");
        assert_eq!(
            format_cell(Some(&FieldValue::Text("Senior Engineer".to_string()))),
            "Senior Engineer"
        );
    }

    #[test]
    fn long_field_classification() {
        assert!(is_long_field("notes"));
        assert!(is_long_field("repo_url"));
        assert!(!is_long_field("company"));
    }
}
