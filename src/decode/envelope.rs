//! List envelope decoding

use crate::error::{Error, Result};
use crate::pagination::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Decodes list-endpoint bodies whose items live under a fixed field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDecoder {
    items_field: String,
}

impl PageDecoder {
    /// Create a decoder for envelopes carrying their items under `items_field`
    pub fn new(items_field: impl Into<String>) -> Self {
        Self {
            items_field: items_field.into(),
        }
    }

    /// Field name the items are read from
    pub fn items_field(&self) -> &str {
        &self.items_field
    }

    /// Decode a raw response body
    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<Page<T>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
        self.decode_value(value)
    }

    /// Decode an already parsed response body
    pub fn decode_value<T: DeserializeOwned>(&self, mut body: Value) -> Result<Page<T>> {
        if !body.is_object() {
            return Err(Error::decode(format!(
                "expected a JSON object for a list response, found {}",
                kind_of(&body)
            )));
        }

        let next = extract_next_start(&body)?;
        let total_count = body.get("total_count").and_then(Value::as_u64);

        let field = self.items_field.as_str();
        let raw_items = match body.get_mut(field).map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::decode(format!(
                    "field '{field}' is not an array (found {})",
                    kind_of(&other)
                )))
            }
            None => {
                return Err(Error::decode(format!(
                    "missing array '{field}' in list response"
                )))
            }
        };

        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .map_err(|e| Error::decode(format!("item {index} of '{field}': {e}")))
            })
            .collect::<Result<Vec<T>>>()?;

        let mut page = Page::new(items, next);
        page.total_count = total_count;
        Ok(page)
    }
}

/// Read the continuation token out of a list envelope
///
/// `next.start` wins; otherwise the `start` query parameter of `next.href` is
/// used. An absent or null `next`, or an empty token, means there are no
/// further pages.
pub fn extract_next_start(body: &Value) -> Result<Option<String>> {
    let next = match body.get("next") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(next)) => next,
        Some(other) => {
            return Err(Error::decode(format!(
                "field 'next' must be an object, found {}",
                kind_of(other)
            )))
        }
    };

    match next.get("start") {
        Some(Value::String(start)) if !start.is_empty() => return Ok(Some(start.clone())),
        None | Some(Value::Null | Value::String(_)) => {}
        Some(other) => {
            return Err(Error::decode(format!(
                "field 'next.start' must be a string, found {}",
                kind_of(other)
            )))
        }
    }

    match next.get("href") {
        Some(Value::String(href)) if !href.is_empty() => start_from_href(href),
        None | Some(Value::Null | Value::String(_)) => Ok(None),
        Some(other) => Err(Error::decode(format!(
            "field 'next.href' must be a string, found {}",
            kind_of(other)
        ))),
    }
}

fn start_from_href(href: &str) -> Result<Option<String>> {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("https://relative.invalid/")
            .and_then(|base| base.join(href))
            .map_err(|e| Error::decode(format!("malformed next.href '{href}': {e}")))?,
        Err(e) => return Err(Error::decode(format!("malformed next.href '{href}': {e}"))),
    };

    Ok(url
        .query_pairs()
        .find(|(key, _)| key == "start")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
