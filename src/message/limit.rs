/// Patterns for failed limit checks, selected by which limits were set.
///
/// Every pattern uses the [`RangeTemplate`](super::RangeTemplate) token set:
/// `{item}`, `{value}`, `{min}` and `{max}`.
#[derive(Debug, Clone, Copy)]
pub struct LimitMessageTemplate;

impl LimitMessageTemplate {
    pub const MIN: &'static str =
        "The value of '{item}' ({value}) is below the minimum limit of {min}.";

    pub const MAX: &'static str =
        "The value of '{item}' ({value}) is above the maximum limit of {max}.";

    pub const RANGE: &'static str =
        "The value of '{item}' ({value}) is not within the expected range of {min} to {max}.";

    pub const INVALID: &'static str = "Invalid limit test: no limits set.";

    /// Looks up the pattern for the given combination of limits.
    pub const fn template_for(min_set: bool, max_set: bool) -> &'static str {
        match (min_set, max_set) {
            (true, false) => Self::MIN,
            (false, true) => Self::MAX,
            (true, true) => Self::RANGE,
            (false, false) => Self::INVALID,
        }
    }

    /// Whether the combination selects a usable pattern.
    pub const fn is_valid(min_set: bool, max_set: bool) -> bool {
        min_set || max_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, LimitMessageTemplate::MIN)]
    #[case(false, true, LimitMessageTemplate::MAX)]
    #[case(true, true, LimitMessageTemplate::RANGE)]
    #[case(false, false, "Invalid limit test: no limits set.")]
    fn test_template_lookup(#[case] min_set: bool, #[case] max_set: bool, #[case] expected: &str) {
        assert_eq!(LimitMessageTemplate::template_for(min_set, max_set), expected);
    }

    #[test]
    fn test_only_no_limits_is_invalid() {
        assert!(!LimitMessageTemplate::is_valid(false, false));
        assert!(LimitMessageTemplate::is_valid(true, false));
        assert!(LimitMessageTemplate::is_valid(false, true));
        assert!(LimitMessageTemplate::is_valid(true, true));
    }
}
