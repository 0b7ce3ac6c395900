use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP verb of a documented route.
///
/// The five supported verbs are a closed set; anything else is carried
/// verbatim in `Other` so an unexpected verb still parses and renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
    Other(String),
}

impl HttpMethod {
    pub const SUPPORTED: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Patch,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn from_code<S: AsRef<str>>(code: S) -> Self {
        match code.as_ref() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PATCH" => Self::Patch,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Other(code) => code,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Stand-in for a route whose verb is missing or not a string.
impl Default for HttpMethod {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for HttpMethod {
    fn from(code: String) -> Self {
        Self::from_code(code)
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_code().to_string()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
