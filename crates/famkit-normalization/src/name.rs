//! Name normalization and flag coercion.

use famkit_model::FlagValue;

/// Trims surrounding whitespace. Case is preserved.
pub fn normalize_name(raw: &str) -> &str {
    raw.trim()
}

/// Coerces a graph flag to a boolean.
///
/// Text equal to `true` in any ASCII case is `true`; every other text is
/// `false`. Booleans pass through; integers are truthy when non-zero.
pub fn coerce_flag(value: &FlagValue) -> bool {
    match value {
        FlagValue::Bool(flag) => *flag,
        FlagValue::Integer(number) => *number != 0,
        FlagValue::Text(text) => text.eq_ignore_ascii_case("true"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_but_keeps_case() {
        assert_eq!(normalize_name("  Width \t"), "Width");
        assert_eq!(normalize_name("PG_General"), "PG_General");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn flag_coercion() {
        for truthy in ["True", "true", "TRUE"] {
            assert!(coerce_flag(&FlagValue::from(truthy)), "{truthy}");
        }
        for falsy in ["False", "false", "banana", "", " true"] {
            assert!(!coerce_flag(&FlagValue::from(falsy)), "{falsy}");
        }
        assert!(coerce_flag(&FlagValue::Bool(true)));
        assert!(!coerce_flag(&FlagValue::Bool(false)));
        assert!(coerce_flag(&FlagValue::Integer(1)));
        assert!(coerce_flag(&FlagValue::Integer(-2)));
        assert!(!coerce_flag(&FlagValue::Integer(0)));
    }
}
