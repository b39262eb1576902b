//! Property-based tests for input parsing
//!
//! These verify the parsers behave for arbitrary operator input, not just the
//! handful of cases in the unit tests.

#[cfg(test)]
mod tests {
    use crate::core::validation::*;
    use proptest::prelude::*;

    // Strategy for amounts as an operator would type them
    prop_compose! {
        fn typed_amount()(
            whole in 0u32..1_000_000,
            cents in prop::option::of(0u32..100),
            padding in prop::bool::ANY,
        ) -> (String, f64) {
            let text = match cents {
                Some(c) => format!("{whole}.{c:02}"),
                None => whole.to_string(),
            };
            let value: f64 = text.parse().unwrap();
            let text = if padding { format!("  {text} ") } else { text };
            (text, value)
        }
    }

    proptest! {
        #[test]
        fn prop_parse_amount_never_panics(s in ".*") {
            let _ = parse_amount(&s);
        }

        #[test]
        fn prop_parse_student_id_never_panics(s in ".*") {
            let _ = parse_student_id(&s);
        }

        #[test]
        fn prop_accepted_amounts_are_finite_and_non_negative(s in ".*") {
            if let Ok(amount) = parse_amount(&s) {
                prop_assert!(amount.is_finite());
                prop_assert!(amount >= 0.0);
            }
        }

        #[test]
        fn prop_typed_amounts_parse((text, value) in typed_amount()) {
            prop_assert_eq!(parse_amount(&text), Ok(value));
        }

        #[test]
        fn prop_negative_amounts_rejected(value in 0.001f64..1.0e9) {
            let text = format!("-{value}");
            prop_assert!(parse_amount(&text).is_err());
        }

        #[test]
        fn prop_student_id_roundtrip(raw in any::<u32>()) {
            let parsed = parse_student_id(&raw.to_string());
            prop_assert_eq!(parsed.map(|id| id.get()), Some(raw));
        }
    }
}
