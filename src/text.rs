// 📝 Text Helpers - months, yes/no, unit pluralization, spoken lists

use crate::value::{Output, Value};

/// `"1 month"` / `"<period> months"`, empty for non-numeric input
///
/// Only an exact numeric 1 is singular; `0`, `2.5` and `-1` all get "months".
pub fn format_months(period: impl Into<Value>) -> String {
    let period = period.into();
    if !period.is_numeric() {
        tracing::debug!(?period, "format_months: non-numeric input");
        return String::new();
    }

    if period.equals_number(1.0) {
        "1 month".to_string()
    } else {
        format!("{} months", period)
    }
}

/// `"No"` for 0 / "no", `"Yes"` for 1 / "yes", empty otherwise
///
/// Numbers and numeric strings compare numerically (`"0.0"` is No);
/// words compare case-insensitively. The No checks run first.
pub fn format_yes_no(value: impl Into<Value>) -> &'static str {
    let value = value.into();

    if let Some(n) = value.as_number() {
        return if n == 0.0 {
            "No"
        } else if n == 1.0 {
            "Yes"
        } else {
            ""
        };
    }

    match value.to_string().to_lowercase().as_str() {
        "no" => "No",
        "yes" => "Yes",
        _ => "",
    }
}

/// `"<data> <unit>"` for exactly 1, `"<data> <unit>s"` otherwise
///
/// Plural is always a plain `s` suffix. Non-numeric `data` comes back
/// unchanged.
pub fn pluralize_unit(data: impl Into<Value>, unit: &str) -> Output {
    let data = data.into();
    if !data.is_numeric() {
        tracing::debug!(?data, unit, "pluralize_unit: non-numeric input, passing through");
        return Output::Unchanged(data);
    }

    if data.equals_number(1.0) {
        Output::Formatted(format!("{} {}", data, unit))
    } else {
        Output::Formatted(format!("{} {}s", data, unit))
    }
}

/// Join words the way they are spoken: `"a, b and c"`
///
/// A single item is returned as is; an empty slice gives an empty string.
pub fn join_as_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months() {
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(3), "3 months");
        assert_eq!(format_months("abc"), "");
    }

    #[test]
    fn test_months_no_special_cases() {
        assert_eq!(format_months(0), "0 months");
        assert_eq!(format_months(2.5), "2.5 months");
        assert_eq!(format_months(-1), "-1 months");
        assert_eq!(format_months("1.0"), "1 month");
        assert_eq!(format_months("12"), "12 months");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(format_yes_no(0), "No");
        assert_eq!(format_yes_no(1), "Yes");
        assert_eq!(format_yes_no("YES"), "Yes");
        assert_eq!(format_yes_no("No"), "No");
        assert_eq!(format_yes_no(5), "");
        assert_eq!(format_yes_no("maybe"), "");
    }

    #[test]
    fn test_yes_no_numeric_strings() {
        assert_eq!(format_yes_no("0"), "No");
        assert_eq!(format_yes_no("0.0"), "No");
        assert_eq!(format_yes_no(" 1"), "Yes");
        assert_eq!(format_yes_no(1.0), "Yes");
        assert_eq!(format_yes_no(""), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize_unit(1, "day"), "1 day");
        assert_eq!(pluralize_unit(2, "day"), "2 days");
        assert_eq!(pluralize_unit(0, "item"), "0 items");
        assert_eq!(pluralize_unit("1", "week"), "1 week");
    }

    #[test]
    fn test_pluralize_is_naive() {
        assert_eq!(pluralize_unit(2, "child"), "2 childs");
        assert_eq!(pluralize_unit(1.5, "hour"), "1.5 hours");
    }

    #[test]
    fn test_float_counts_render_like_templates() {
        assert_eq!(format_months(0.1 + 0.2), "0.3 months");
        assert_eq!(pluralize_unit(1e20, "day"), "1.0E+20 days");
        assert_eq!(pluralize_unit(4usize, "seat"), "4 seats");
    }

    #[test]
    fn test_pluralize_passthrough() {
        assert_eq!(
            pluralize_unit("several", "day"),
            Output::Unchanged(Value::from("several"))
        );
    }

    #[test]
    fn test_join_as_list() {
        assert_eq!(join_as_list(&["a"]), "a");
        assert_eq!(join_as_list(&["a", "b"]), "a and b");
        assert_eq!(join_as_list(&["a", "b", "c"]), "a, b and c");
    }

    #[test]
    fn test_join_as_list_empty_and_owned() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(join_as_list(&empty), "");

        let owned = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        assert_eq!(join_as_list(&owned), "red, green and blue");
    }
}
