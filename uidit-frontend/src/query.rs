use thiserror::Error;
use url::Url;

/// Base for launch urls given without scheme and host, like `?uid=7`.
const RELATIVE_BASE: &str = "http://localhost/";

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("url is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("malformed percent escape at index {0}")]
    MalformedEscape(usize),
    #[error("decoded value is not valid utf-8")]
    InvalidUtf8,
}

/// Reads the first `uid` query parameter of a url. The query value is
/// decoded like a form field and then percent decoded once more, strictly.
/// A missing parameter yields `Ok(None)`.
pub fn get_uid(url: &str) -> Result<Option<String>, QueryError> {
    let base = Url::parse(RELATIVE_BASE)?;
    let url = Url::options().base_url(Some(&base)).parse(url)?;

    let value = url
        .query_pairs()
        .find(|(key, _)| key == "uid")
        .map(|(_, value)| value.into_owned());

    match value {
        Some(value) => decode_component(&value).map(Some),
        None => Ok(None),
    }
}

pub fn decode_component(value: &str) -> Result<String, QueryError> {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let escaped = bytes
                .get(index + 1)
                .and_then(|high| hex_value(*high))
                .zip(bytes.get(index + 2).and_then(|low| hex_value(*low)));

            match escaped {
                Some((high, low)) => decoded.push((high << 4) + low),
                None => return Err(QueryError::MalformedEscape(index)),
            }
            index += 3;
        } else {
            decoded.push(bytes[index]);
            index += 1;
        }
    }

    String::from_utf8(decoded).map_err(|_| QueryError::InvalidUtf8)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(10 + byte - b'a'),
        b'A'..=b'F' => Some(10 + byte - b'A'),
        _ => None,
    }
}
