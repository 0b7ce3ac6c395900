use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::access_level::AccessLevel;
use super::lenient::{or_default, seq_or_default};

/// Full documentation attached to a route.
///
/// Missing, `null` or wrong-typed fields decode to empty defaults; they show
/// up as blanks in the rendered panel rather than rejecting the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteDocumentation {
    #[serde(deserialize_with = "or_default")]
    pub summary: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessLevel>,
    #[serde(deserialize_with = "seq_or_default")]
    pub params: Vec<ParameterSpec>,
    #[serde(deserialize_with = "seq_or_default")]
    pub query: Vec<ParameterSpec>,
    #[serde(deserialize_with = "seq_or_default")]
    pub body: Vec<ParameterSpec>,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseSpec>,
}

/// The three parameter groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterGroup {
    Params,
    Query,
    Body,
}

impl ParameterGroup {
    pub const ALL: [ParameterGroup; 3] = [Self::Params, Self::Query, Self::Body];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Params => "Parameters",
            Self::Query => "Query Parameters",
            Self::Body => "Request Body",
        }
    }
}

impl RouteDocumentation {
    pub fn group(&self, group: ParameterGroup) -> &[ParameterSpec] {
        match group {
            ParameterGroup::Params => &self.params,
            ParameterGroup::Query => &self.query,
            ParameterGroup::Body => &self.body,
        }
    }

    /// Groups that have at least one entry, in display order.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = (ParameterGroup, &[ParameterSpec])> {
        ParameterGroup::ALL
            .into_iter()
            .map(move |g| (g, self.group(g)))
            .filter(|(_, specs)| !specs.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSpec {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub kind: String,
    #[serde(deserialize_with = "or_default")]
    pub required: Requirement,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(deserialize_with = "or_default")]
    pub must_exist: bool,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
}

impl ParameterSpec {
    /// Allowed values, or `None` when the list is absent or empty.
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref().filter(|o| !o.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseSpec {
    #[serde(deserialize_with = "or_default")]
    pub status: u16,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub body: String,
}

/// Whether a parameter is required.
///
/// The upstream document carries either a boolean or a non-empty string
/// naming the condition under which the field becomes required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Flag(bool),
    Condition(String),
}

impl Default for Requirement {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl Requirement {
    pub fn is_required(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Condition(condition) => !condition.is_empty(),
        }
    }

    /// The display condition, when one is attached.
    pub fn condition(&self) -> Option<&str> {
        match self {
            Self::Condition(condition) if !condition.is_empty() => Some(condition),
            _ => None,
        }
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Condition(condition) => serializer.serialize_str(condition),
        }
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RequirementVisitor;

        impl<'de> Visitor<'de> for RequirementVisitor {
            type Value = Requirement;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean, a condition string or null")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Requirement, E> {
                Ok(Requirement::Flag(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Requirement, E> {
                Ok(Requirement::Condition(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Requirement, E> {
                Ok(Requirement::Condition(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Requirement, E> {
                Ok(Requirement::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Requirement, E> {
                Ok(Requirement::default())
            }
        }

        deserializer.deserialize_any(RequirementVisitor)
    }
}
