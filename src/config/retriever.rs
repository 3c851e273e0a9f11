//! Retrievers fetch raw configuration values and convert them to a kind.

use std::collections::HashMap;

use super::value::{CacheValue, ConfigValue, ValueKind};
use super::CacheError;

/// Fetches a value for `key` within `category` and converts it.
///
/// Implementations report unsupported kinds, unknown keys and conversion
/// failures as [`CacheError`]s.
pub trait CategoryRetriever<C> {
    fn retrieve_value(
        &self,
        category: &C,
        key: &str,
        requested: ValueKind,
    ) -> Result<ConfigValue, CacheError>;

    /// Typed form of [`retrieve_value`](Self::retrieve_value).
    fn retrieve<T: CacheValue>(&self, category: &C, key: &str) -> Result<T, CacheError>
    where
        Self: Sized,
    {
        self.retrieve_value(category, key, T::KIND)?.into_typed()
    }
}

/// Retriever over one in-memory map of raw strings.
///
/// The category is the discriminator naming the kind stored under each key.
/// A retrieval succeeds only when the discriminator matches the requested
/// kind.
#[derive(Debug, Clone, Default)]
pub struct DictionaryRetriever {
    source: HashMap<String, String>,
}

impl DictionaryRetriever {
    pub fn new(source: HashMap<String, String>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &HashMap<String, String> {
        &self.source
    }
}

impl<K, V> FromIterator<(K, V)> for DictionaryRetriever
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl CategoryRetriever<ValueKind> for DictionaryRetriever {
    fn retrieve_value(
        &self,
        category: &ValueKind,
        key: &str,
        requested: ValueKind,
    ) -> Result<ConfigValue, CacheError> {
        let kind = *category;
        let parser = kind.parser().ok_or(CacheError::UnsupportedKind(kind))?;
        let raw = self
            .source
            .get(key)
            .ok_or_else(|| CacheError::KeyNotDefined(key.to_owned()))?;

        if kind != requested {
            return Err(CacheError::TypeMismatch { kind, requested });
        }

        parser(raw).map_err(|reason| CacheError::ParseFailed {
            key: key.to_owned(),
            kind,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn retriever() -> DictionaryRetriever {
        DictionaryRetriever::from_iter([
            ("3", "Three"),
            ("port", "8080"),
            ("ratio", "0.75"),
            ("price", "19.99"),
            ("enabled", "True"),
            ("broken", "eighty"),
        ])
    }

    #[test]
    fn test_retrieve_string() {
        let value: String = retriever().retrieve(&ValueKind::String, "3").unwrap();
        assert_eq!(value, "Three");
    }

    #[test]
    fn test_retrieve_parsed_kinds() {
        let r = retriever();
        assert_eq!(r.retrieve::<u16>(&ValueKind::UInt16, "port").unwrap(), 8080);
        assert_eq!(r.retrieve::<f64>(&ValueKind::Double, "ratio").unwrap(), 0.75);
        assert_eq!(
            r.retrieve::<Decimal>(&ValueKind::Decimal, "price").unwrap(),
            Decimal::new(1999, 2)
        );
        assert!(r.retrieve::<bool>(&ValueKind::Boolean, "enabled").unwrap());
    }

    #[test]
    fn test_missing_key() {
        let err = retriever()
            .retrieve::<String>(&ValueKind::String, "9")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The key provided, '9', is not defined in the source dictionary."
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let err = retriever()
            .retrieve::<i32>(&ValueKind::String, "3")
            .unwrap_err();
        assert!(matches!(
            err,
            CacheError::TypeMismatch {
                kind: ValueKind::String,
                requested: ValueKind::Int32
            }
        ));
    }

    #[test]
    fn test_unsupported_kind_checked_before_key() {
        let err = retriever()
            .retrieve_value(&ValueKind::Object, "9", ValueKind::Object)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The type code provided, 'Object', is not supported."
        );
    }

    #[test]
    fn test_parse_failure_names_key() {
        let err = retriever()
            .retrieve::<i32>(&ValueKind::Int32, "broken")
            .unwrap_err();
        assert!(matches!(
            err,
            CacheError::ParseFailed { ref key, kind: ValueKind::Int32, .. } if key == "broken"
        ));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let r: Box<dyn CategoryRetriever<ValueKind>> = Box::new(retriever());
        let value = r
            .retrieve_value(&ValueKind::String, "3", ValueKind::String)
            .unwrap();
        assert_eq!(value, ConfigValue::String("Three".into()));
    }
}
