//! Unit tests for the clause builders.

#[cfg(test)]
mod tests {
    use crate::errors::StoreError;
    use crate::query_builder::filter::{
        Comparison, FilterRequest, FilterRule, FilterRuleSet, RangePair,
    };
    use crate::query_builder::sql_generation::build_where_clause;
    use crate::query_builder::update::{build_set_clause, UpdatePayload};
    use serde_json::{json, Value};

    const RULES: FilterRuleSet = FilterRuleSet {
        rules: &[
            FilterRule {
                key: "nameLike",
                column: "name",
                comparison: Comparison::Contains,
            },
            FilterRule {
                key: "minCount",
                column: "item_count",
                comparison: Comparison::Gte,
            },
            FilterRule {
                key: "maxCount",
                column: "item_count",
                comparison: Comparison::Lte,
            },
            FilterRule {
                key: "hasNotes",
                column: "notes",
                comparison: Comparison::NotNullFlag,
            },
        ],
        range_pairs: &[RangePair {
            min_key: "minCount",
            max_key: "maxCount",
        }],
    };

    // ========================================
    // Partial-Update Builder
    // ========================================

    #[test]
    fn test_set_clause_translates_and_numbers() {
        let payload = UpdatePayload::new()
            .set("firstName", json!("Test"))
            .set("email", json!("a@b.com"));

        let fragment = build_set_clause(&payload, &[("firstName", "first_name")]).unwrap();

        assert_eq!(fragment.text(), "\"first_name\"=$1, \"email\"=$2");
        assert_eq!(fragment.values(), &[json!("Test"), json!("a@b.com")]);
    }

    #[test]
    fn test_set_clause_placeholder_count_matches_values() {
        let payload = UpdatePayload::new()
            .set("name", json!("Acme"))
            .set("numEmployees", json!(12))
            .set("logoUrl", json!("https://example.com/logo.png"));

        let fragment = build_set_clause(
            &payload,
            &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")],
        )
        .unwrap();

        assert_eq!(fragment.len(), payload.len());
        for idx in 1..=payload.len() {
            assert!(fragment.text().contains(&format!("${}", idx)));
        }
    }

    #[test]
    fn test_set_clause_empty_payload_fails() {
        let result = build_set_clause(&UpdatePayload::new(), &[("firstName", "first_name")]);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_set_clause_null_value_passes_through() {
        let payload = UpdatePayload::new().set("description", Value::Null);

        let fragment = build_set_clause(&payload, &[]).unwrap();

        assert_eq!(fragment.text(), "\"description\"=$1");
        assert_eq!(fragment.values(), &[Value::Null]);
    }

    #[test]
    fn test_set_clause_untranslated_field_used_verbatim() {
        let payload = UpdatePayload::new().set("name", json!("Acme"));

        let fragment = build_set_clause(&payload, &[("numEmployees", "num_employees")]).unwrap();

        assert_eq!(fragment.text(), "\"name\"=$1");
    }

    #[test]
    fn test_set_clause_duplicate_field_replaces_in_place() {
        let payload = UpdatePayload::new()
            .set("name", json!("first"))
            .set("numEmployees", json!(5))
            .set("name", json!("second"));

        let fragment = build_set_clause(&payload, &[("numEmployees", "num_employees")]).unwrap();

        assert_eq!(fragment.text(), "\"name\"=$1, \"num_employees\"=$2");
        assert_eq!(fragment.values(), &[json!("second"), json!(5)]);
    }

    // ========================================
    // Filter Builder - Validation
    // ========================================

    #[test]
    fn test_where_unrecognized_keys_all_reported() {
        let request = FilterRequest::new()
            .with("bogus", json!(1))
            .with("nameLike", json!("x"))
            .with("alsoBad", json!(true));

        let err = build_where_clause(&request, &RULES).unwrap_err();

        match err {
            StoreError::Validation(message) => {
                assert!(message.contains("bogus"));
                assert!(message.contains("alsoBad"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_where_range_violation_rejected() {
        let request = FilterRequest::new()
            .with("minCount", json!(10))
            .with("maxCount", json!(2));

        let result = build_where_clause(&request, &RULES);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_where_equal_bounds_accepted() {
        let request = FilterRequest::new()
            .with("minCount", json!(5))
            .with("maxCount", json!(5));

        let fragment = build_where_clause(&request, &RULES).unwrap();
        assert_eq!(fragment.text(), "item_count >= $1 AND item_count <= $2");
    }

    #[test]
    fn test_where_single_bound_skips_range_check() {
        let request = FilterRequest::new().with("minCount", json!(100));

        let fragment = build_where_clause(&request, &RULES).unwrap();
        assert_eq!(fragment.text(), "item_count >= $1");
        assert_eq!(fragment.values(), &[json!(100)]);
    }

    // ========================================
    // Filter Builder - SQL Generation
    // ========================================

    #[test]
    fn test_where_empty_request_yields_empty_fragment() {
        let fragment = build_where_clause(&FilterRequest::new(), &RULES).unwrap();

        assert!(fragment.is_empty());
        assert_eq!(fragment.text(), "");
        assert!(fragment.values().is_empty());
        assert_eq!(fragment.where_clause(), "");
    }

    #[test]
    fn test_where_contains_is_parameterized() {
        let request = FilterRequest::new().with("nameLike", json!("'; DROP TABLE companies; --"));

        let fragment = build_where_clause(&request, &RULES).unwrap();

        assert_eq!(fragment.text(), "name ILIKE '%' || $1 || '%'");
        assert!(!fragment.text().contains("DROP TABLE"));
        assert_eq!(fragment.values(), &[json!("'; DROP TABLE companies; --")]);
    }

    #[test]
    fn test_where_flag_true_emits_static_predicate() {
        let request = FilterRequest::new().with("hasNotes", json!(true));

        let fragment = build_where_clause(&request, &RULES).unwrap();

        assert_eq!(fragment.text(), "notes IS NOT NULL");
        assert!(fragment.values().is_empty());
    }

    #[test]
    fn test_where_flag_false_emits_nothing() {
        let request = FilterRequest::new().with("hasNotes", json!(false));

        let fragment = build_where_clause(&request, &RULES).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_where_placeholders_count_value_filters_only() {
        let request = FilterRequest::new()
            .with("nameLike", json!("a"))
            .with("hasNotes", json!(true))
            .with("minCount", json!(3));

        let fragment = build_where_clause(&request, &RULES).unwrap();

        assert_eq!(
            fragment.text(),
            "name ILIKE '%' || $1 || '%' AND notes IS NOT NULL AND item_count >= $2"
        );
        assert_eq!(fragment.values(), &[json!("a"), json!(3)]);
    }

    #[test]
    fn test_where_clause_prefix_helper() {
        let request = FilterRequest::new().with("minCount", json!(1));

        let fragment = build_where_clause(&request, &RULES).unwrap();
        assert_eq!(fragment.where_clause(), "WHERE item_count >= $1");
    }
}
