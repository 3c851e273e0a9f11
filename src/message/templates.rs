//! Typed message templates.
//!
//! Each template type knows a fixed set of tokens. Known tokens that were
//! never bound render as an empty string; tokens outside the set are left in
//! the output literally.

use std::borrow::Cow;
use std::fmt::Display;

use super::limit::LimitMessageTemplate;
use super::substitute::{plural_suffix, plural_suffix_for, substitute};

/// Template that takes the name of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    template: Cow<'static, str>,
    item: String,
}

impl ItemTemplate {
    pub const NOT_TRUE: Self =
        Self::new("The operation requires that '{item}' be true, but it is false.");

    pub const NOT_FALSE: Self =
        Self::new("The operation requires that '{item}' be false, but it is true.");

    pub const NOT_SET: Self = Self::new(
        "'{item}' must be set to a non-null, non-empty, non-whitespace only string.",
    );

    pub const NO_ELEMENTS: Self = Self::new("The collection '{item}' has no elements.");

    pub const IS_NULL: Self = Self::new("The value of '{item}' is required but is null.");

    pub const fn new(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            item: String::new(),
        }
    }

    /// Creates a template from a runtime string.
    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            item: String::new(),
        }
    }

    pub fn using_item(mut self, item: impl AsRef<str>) -> Self {
        self.item = item.as_ref().to_owned();
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn prepare(&self) -> String {
        substitute(&self.template, &[("item", &self.item)])
    }
}

/// Template that takes an item name and one more value.
///
/// The value is free-form: the operation requiring the item, the type of the
/// item, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValueTemplate {
    template: Cow<'static, str>,
    item: String,
    value: String,
}

impl ItemValueTemplate {
    pub const MISSING_FOR_OPERATION: Self =
        Self::new("The operation, '{value}', requires a value for '{item}' which is null.");

    pub const DEFAULT_NOT_ALLOWED: Self =
        Self::new("The value of '{item}' cannot be the default value for its type ({value}).");

    pub const fn new(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            item: String::new(),
            value: String::new(),
        }
    }

    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            item: String::new(),
            value: String::new(),
        }
    }

    pub fn using_item(mut self, item: impl AsRef<str>) -> Self {
        self.item = item.as_ref().to_owned();
        self
    }

    pub fn using_value(mut self, value: impl Display) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn prepare(&self) -> String {
        substitute(
            &self.template,
            &[("item", &self.item), ("value", &self.value)],
        )
    }
}

/// Template for a value that must fall between two limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTemplate {
    template: Cow<'static, str>,
    item: String,
    value: String,
    min: String,
    max: String,
}

impl RangeTemplate {
    pub const OUT_OF_RANGE: Self = Self::new(LimitMessageTemplate::RANGE);

    pub const fn new(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            item: String::new(),
            value: String::new(),
            min: String::new(),
            max: String::new(),
        }
    }

    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            ..Self::new("")
        }
    }

    pub fn using_item(mut self, item: impl AsRef<str>) -> Self {
        self.item = item.as_ref().to_owned();
        self
    }

    pub fn using_value(mut self, value: impl Display) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_minimum(mut self, min: impl Display) -> Self {
        self.min = min.to_string();
        self
    }

    pub fn with_maximum(mut self, max: impl Display) -> Self {
        self.max = max.to_string();
        self
    }

    pub fn prepare(&self) -> String {
        substitute(
            &self.template,
            &[
                ("item", &self.item),
                ("value", &self.value),
                ("min", &self.min),
                ("max", &self.max),
            ],
        )
    }
}

/// Template comparing a value against a single other value.
///
/// Used for counts as well as limits, so `{value-plural}` and
/// `{compare-to-plural}` follow whichever bound value parses as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleValueComparisonTemplate {
    template: Cow<'static, str>,
    item: String,
    value: String,
    compare_to: String,
}

impl SingleValueComparisonTemplate {
    pub const TOO_FEW_ELEMENTS: Self = Self::new(
        "The collection '{item}' has {value} element{value-plural}, \
         but requires at least {compare-to} element{compare-to-plural}.",
    );

    pub const fn new(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            item: String::new(),
            value: String::new(),
            compare_to: String::new(),
        }
    }

    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            ..Self::new("")
        }
    }

    pub fn using_item(mut self, item: impl AsRef<str>) -> Self {
        self.item = item.as_ref().to_owned();
        self
    }

    pub fn using_value(mut self, value: impl Display) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn compared_to(mut self, compare_to: impl Display) -> Self {
        self.compare_to = compare_to.to_string();
        self
    }

    pub fn prepare(&self) -> String {
        substitute(
            &self.template,
            &[
                ("item", &self.item),
                ("value", &self.value),
                ("compare-to", &self.compare_to),
                ("value-plural", plural_suffix_for(&self.value)),
                ("compare-to-plural", plural_suffix_for(&self.compare_to)),
            ],
        )
    }
}

/// Template for a string that must have an exact length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSizeTemplate {
    template: Cow<'static, str>,
    item: String,
    text: String,
    required_length: usize,
}

impl StringSizeTemplate {
    pub const NOT_REQUIRED_SIZE: Self = Self::new(
        "The '{item}', with a value of '{value}', must be {required-length} \
         character{required-plural} long, but was {value-length} character{value-plural} long.",
    );

    pub const fn new(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            item: String::new(),
            text: String::new(),
            required_length: 0,
        }
    }

    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            ..Self::new("")
        }
    }

    pub fn using_item(mut self, item: impl AsRef<str>) -> Self {
        self.item = item.as_ref().to_owned();
        self
    }

    pub fn using_value(mut self, text: impl AsRef<str>) -> Self {
        self.text = text.as_ref().to_owned();
        self
    }

    pub fn requiring_length(mut self, required_length: usize) -> Self {
        self.required_length = required_length;
        self
    }

    pub fn prepare(&self) -> String {
        let value_length = self.text.chars().count();
        substitute(
            &self.template,
            &[
                ("item", &self.item),
                ("value", &self.text),
                ("value-length", &value_length.to_string()),
                ("required-length", &self.required_length.to_string()),
                ("value-plural", plural_suffix(value_length)),
                ("required-plural", plural_suffix(self.required_length)),
            ],
        )
    }
}

/// Template for a string whose length must fall between two limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLengthRangeTemplate {
    template: Cow<'static, str>,
    item: String,
    text: String,
    min: String,
    max: String,
}

impl StringLengthRangeTemplate {
    pub const TEXT_SIZE_OUT_OF_RANGE: Self = Self::new(
        "The '{item}', with a value of '{value}', must be between {min} and {max} \
         characters long, but was {value-length} character{value-plural} long.",
    );

    pub const fn new(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            item: String::new(),
            text: String::new(),
            min: String::new(),
            max: String::new(),
        }
    }

    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            ..Self::new("")
        }
    }

    pub fn using_item(mut self, item: impl AsRef<str>) -> Self {
        self.item = item.as_ref().to_owned();
        self
    }

    pub fn using_value(mut self, text: impl AsRef<str>) -> Self {
        self.text = text.as_ref().to_owned();
        self
    }

    pub fn with_minimum(mut self, min: impl Display) -> Self {
        self.min = min.to_string();
        self
    }

    pub fn with_maximum(mut self, max: impl Display) -> Self {
        self.max = max.to_string();
        self
    }

    pub fn prepare(&self) -> String {
        let value_length = self.text.chars().count();
        substitute(
            &self.template,
            &[
                ("item", &self.item),
                ("value", &self.text),
                ("value-length", &value_length.to_string()),
                ("value-plural", plural_suffix(value_length)),
                ("min", &self.min),
                ("max", &self.max),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_template() {
        let message = ItemTemplate::NOT_TRUE.using_item("is_open").prepare();
        assert_eq!(
            message,
            "The operation requires that 'is_open' be true, but it is false."
        );
    }

    #[test]
    fn test_catalog_constant_is_not_mutated() {
        let _ = ItemTemplate::NOT_SET.using_item("first");
        let fresh = ItemTemplate::NOT_SET.prepare();
        assert!(fresh.starts_with("'' must be set"));
    }

    #[test]
    fn test_item_value_template() {
        let message = ItemValueTemplate::MISSING_FOR_OPERATION
            .using_item("connection")
            .using_value("send")
            .prepare();
        assert_eq!(
            message,
            "The operation, 'send', requires a value for 'connection' which is null."
        );
    }

    #[test]
    fn test_range_template() {
        let message = RangeTemplate::OUT_OF_RANGE
            .using_item("port")
            .using_value(70000)
            .with_minimum(1)
            .with_maximum(65535)
            .prepare();
        assert_eq!(
            message,
            "The value of 'port' (70000) is not within the expected range of 1 to 65535."
        );
    }

    #[test]
    fn test_range_template_unbound_known_token_is_empty() {
        let message = RangeTemplate::custom("[{min}..{max}]")
            .with_minimum(3)
            .prepare();
        assert_eq!(message, "[3..]");
    }

    #[test]
    fn test_unknown_token_stays_literal() {
        let message = ItemTemplate::custom("'{item}' must stay below {max}.")
            .using_item("depth")
            .prepare();
        assert_eq!(message, "'depth' must stay below {max}.");
    }

    #[test]
    fn test_comparison_template_pluralizes() {
        let message = SingleValueComparisonTemplate::TOO_FEW_ELEMENTS
            .using_item("hosts")
            .using_value(1)
            .compared_to(3)
            .prepare();
        assert_eq!(
            message,
            "The collection 'hosts' has 1 element, but requires at least 3 elements."
        );
    }

    #[test]
    fn test_string_size_template() {
        let message = StringSizeTemplate::NOT_REQUIRED_SIZE
            .using_item("code")
            .using_value("AB")
            .requiring_length(1)
            .prepare();
        assert_eq!(
            message,
            "The 'code', with a value of 'AB', must be 1 character long, but was 2 characters long."
        );
    }

    #[test]
    fn test_string_length_range_template() {
        let message = StringLengthRangeTemplate::TEXT_SIZE_OUT_OF_RANGE
            .using_item("name")
            .using_value("a")
            .with_minimum(2)
            .with_maximum(5)
            .prepare();
        assert_eq!(
            message,
            "The 'name', with a value of 'a', must be between 2 and 5 characters long, \
             but was 1 character long."
        );
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let template = StringSizeTemplate::NOT_REQUIRED_SIZE
            .using_item("pin")
            .using_value("123")
            .requiring_length(4);
        assert_eq!(template.prepare(), template.prepare());
    }
}
