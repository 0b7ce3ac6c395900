use serde::{Deserialize, Serialize};

/// Access level a route declares in its documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccessLevel {
    Public,
    Protected,
    Private,
    Unknown(String),
}

impl AccessLevel {
    pub fn from_code<S: AsRef<str>>(code: S) -> Self {
        match code.as_ref() {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Unknown(code) => code,
        }
    }
}

impl From<String> for AccessLevel {
    fn from(code: String) -> Self {
        Self::from_code(code)
    }
}

impl From<AccessLevel> for String {
    fn from(level: AccessLevel) -> Self {
        level.as_code().to_string()
    }
}
