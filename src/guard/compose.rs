//! Guard composers that build the failure message from a template.
//!
//! Two template styles are accepted: a positional template where `{0}` is the
//! item name, and a named [`ItemTemplate`] using `{item}`. When both are set
//! the positional template wins.

use super::engine::Guard;
use super::error::{GuardError, NO_ERROR_BUILDER, NO_TEMPLATE, NO_TEST};
use crate::message::{substitute, ItemTemplate};

type Test<'a, T> = Box<dyn FnOnce(&T) -> bool + 'a>;

#[derive(Debug, Clone, Default)]
struct MessageParts {
    template: Option<String>,
    name_template: Option<ItemTemplate>,
    item: String,
}

impl MessageParts {
    fn build(&self) -> Result<String, GuardError> {
        match (&self.template, &self.name_template) {
            (Some(template), _) if !template.trim().is_empty() => {
                Ok(substitute(template, &[("0", &self.item)]))
            }
            (_, Some(name_template)) => Ok(name_template.clone().using_item(&self.item).prepare()),
            _ => Err(GuardError::configuration(NO_TEMPLATE)),
        }
    }
}

/// Composer whose error is built from the item name and the message.
#[must_use = "composers do nothing until .guard() is called"]
pub struct ItemTemplateComposer<'a, T, E = GuardError> {
    value: T,
    test: Option<Test<'a, T>>,
    error_builder: Option<Box<dyn FnOnce(&str, String) -> E + 'a>>,
    parts: MessageParts,
}

impl<'a, T, E> ItemTemplateComposer<'a, T, E>
where
    E: From<GuardError>,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            test: None,
            error_builder: None,
            parts: MessageParts::default(),
        }
    }

    pub fn test(mut self, test: impl FnOnce(&T) -> bool + 'a) -> Self {
        self.test = Some(Box::new(test));
        self
    }

    pub fn error_builder(mut self, builder: impl FnOnce(&str, String) -> E + 'a) -> Self {
        self.error_builder = Some(Box::new(builder));
        self
    }

    /// Positional template, `{0}` is replaced by the item name.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.parts.template = Some(template.into());
        self
    }

    pub fn name_template(mut self, template: ItemTemplate) -> Self {
        self.parts.name_template = Some(template);
        self
    }

    pub fn for_item(mut self, item: impl Into<String>) -> Self {
        self.parts.item = item.into();
        self
    }

    pub fn guard(self) -> Result<T, E> {
        let test = self
            .test
            .ok_or_else(|| GuardError::configuration(NO_TEST))?;
        let builder = self
            .error_builder
            .ok_or_else(|| GuardError::configuration(NO_ERROR_BUILDER))?;
        let message = self.parts.build()?;
        let item = self.parts.item;

        Guard::new(self.value)
            .test(test)
            .error_builder(move |_| builder(&item, message))
            .validate_and_return()
    }
}

/// Composer whose error is built from the prepared message alone.
#[must_use = "composers do nothing until .guard() is called"]
pub struct MessageTemplateComposer<'a, T, E = GuardError> {
    value: T,
    test: Option<Test<'a, T>>,
    error_builder: Option<Box<dyn FnOnce(String) -> E + 'a>>,
    parts: MessageParts,
}

impl<'a, T, E> MessageTemplateComposer<'a, T, E>
where
    E: From<GuardError>,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            test: None,
            error_builder: None,
            parts: MessageParts::default(),
        }
    }

    pub fn test(mut self, test: impl FnOnce(&T) -> bool + 'a) -> Self {
        self.test = Some(Box::new(test));
        self
    }

    pub fn error_builder(mut self, builder: impl FnOnce(String) -> E + 'a) -> Self {
        self.error_builder = Some(Box::new(builder));
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.parts.template = Some(template.into());
        self
    }

    pub fn name_template(mut self, template: ItemTemplate) -> Self {
        self.parts.name_template = Some(template);
        self
    }

    pub fn for_item(mut self, item: impl Into<String>) -> Self {
        self.parts.item = item.into();
        self
    }

    pub fn guard(self) -> Result<T, E> {
        let builder = self
            .error_builder
            .ok_or_else(|| GuardError::configuration(NO_ERROR_BUILDER))?;
        let message = self.parts.build()?;

        let mut guard = Guard::new(self.value).error_builder(move |_| builder(message));
        if let Some(test) = self.test {
            guard = guard.test(test);
        }
        guard.validate_and_return()
    }
}
