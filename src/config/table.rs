//! Retriever over an in-memory TOML document.
//!
//! Categories are dotted section paths (`server.tls`); the empty category is
//! the document root. Scalar values are rendered to strings and then parsed
//! with the requested kind's parser, so `port = 8080` retrieves as any
//! integer kind wide enough to hold it.

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use super::retriever::CategoryRetriever;
use super::value::{ConfigValue, ValueKind};
use super::CacheError;

#[derive(Debug, Clone, Default)]
pub struct TableRetriever {
    root: Table,
}

impl TableRetriever {
    pub fn new(root: Table) -> Self {
        Self { root }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CacheError> {
        let root = toml::from_str(content).map_err(CacheError::ParseError)?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Table {
        &self.root
    }

    /// Deserializes a whole section into `T`.
    pub fn section<T: DeserializeOwned>(&self, category: &str) -> Result<T, CacheError> {
        let table = self.lookup_section(category)?;
        Value::Table(table.clone())
            .try_into()
            .map_err(|source| CacheError::DeserializeError {
                section: category.to_owned(),
                source,
            })
    }

    fn lookup_section(&self, category: &str) -> Result<&Table, CacheError> {
        if category.is_empty() {
            return Ok(&self.root);
        }

        let not_found = || CacheError::CategoryNotDefined(category.to_owned());
        let mut current = &self.root;
        for part in category.split('.') {
            current = current
                .get(part)
                .and_then(Value::as_table)
                .ok_or_else(not_found)?;
        }
        Ok(current)
    }
}

impl CategoryRetriever<String> for TableRetriever {
    fn retrieve_value(
        &self,
        category: &String,
        key: &str,
        requested: ValueKind,
    ) -> Result<ConfigValue, CacheError> {
        let parser = requested
            .parser()
            .ok_or(CacheError::UnsupportedKind(requested))?;
        let section = self.lookup_section(category)?;
        let value = section
            .get(key)
            .ok_or_else(|| CacheError::KeyNotDefined(key.to_owned()))?;

        let raw = scalar_to_string(value, key)?;
        parser(&raw).map_err(|reason| CacheError::ParseFailed {
            key: key.to_owned(),
            kind: requested,
            reason,
        })
    }
}

fn scalar_to_string(value: &Value, key: &str) -> Result<String, CacheError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) | Value::Table(_) => Err(CacheError::NonScalarValue(key.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Deserialize;

    const DOCUMENT: &str = r#"
        name = "edge"

        [server]
        host = "example.com"
        port = 8080
        ratio = 0.5
        debug = true
        started = 2024-03-01T12:30:00Z
        aliases = ["a", "b"]

        [server.tls]
        enabled = false
    "#;

    fn retriever() -> TableRetriever {
        TableRetriever::from_toml_str(DOCUMENT).unwrap()
    }

    #[test]
    fn test_root_category() {
        let name: String = retriever().retrieve(&String::new(), "name").unwrap();
        assert_eq!(name, "edge");
    }

    #[test]
    fn test_scalar_conversion() {
        let r = retriever();
        let server = "server".to_owned();

        assert_eq!(r.retrieve::<u16>(&server, "port").unwrap(), 8080);
        assert_eq!(r.retrieve::<i64>(&server, "port").unwrap(), 8080);
        assert_eq!(r.retrieve::<String>(&server, "port").unwrap(), "8080");
        assert_eq!(r.retrieve::<f32>(&server, "ratio").unwrap(), 0.5);
        assert!(r.retrieve::<bool>(&server, "debug").unwrap());
    }

    #[test]
    fn test_datetime_value() {
        let started = retriever()
            .retrieve::<chrono::NaiveDateTime>(&"server".to_owned(), "started")
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap();
        assert_eq!(started, expected);
    }

    #[test]
    fn test_nested_category() {
        let enabled: bool = retriever()
            .retrieve(&"server.tls".to_owned(), "enabled")
            .unwrap();
        assert!(!enabled);
    }

    #[test]
    fn test_unknown_category() {
        let err = retriever()
            .retrieve::<String>(&"client".to_owned(), "host")
            .unwrap_err();
        assert!(matches!(err, CacheError::CategoryNotDefined(ref c) if c == "client"));
    }

    #[test]
    fn test_scalar_is_not_a_category() {
        let err = retriever()
            .retrieve::<String>(&"server.host".to_owned(), "x")
            .unwrap_err();
        assert!(matches!(err, CacheError::CategoryNotDefined(_)));
    }

    #[test]
    fn test_unknown_key() {
        let err = retriever()
            .retrieve::<String>(&"server".to_owned(), "user")
            .unwrap_err();
        assert!(matches!(err, CacheError::KeyNotDefined(ref k) if k == "user"));
    }

    #[test]
    fn test_non_scalar_value() {
        let err = retriever()
            .retrieve::<String>(&"server".to_owned(), "aliases")
            .unwrap_err();
        assert!(matches!(err, CacheError::NonScalarValue(_)));
    }

    #[test]
    fn test_unparseable_value() {
        let err = retriever()
            .retrieve::<u8>(&"server".to_owned(), "port")
            .unwrap_err();
        assert!(matches!(err, CacheError::ParseFailed { kind: ValueKind::Byte, .. }));
    }

    #[test]
    fn test_invalid_document() {
        let err = TableRetriever::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, CacheError::ParseError(_)));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Tls {
        enabled: bool,
    }

    #[test]
    fn test_section_deserialize() {
        let tls: Tls = retriever().section("server.tls").unwrap();
        assert_eq!(tls, Tls { enabled: false });

        let err = retriever().section::<Tls>("server").unwrap_err();
        assert!(matches!(err, CacheError::DeserializeError { ref section, .. } if section == "server"));
    }
}
