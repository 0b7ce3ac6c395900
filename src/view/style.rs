//! Visual mappings for methods, access levels and table glyphs.

use crate::domain::catalog::entity::{AccessLevel, HttpMethod};

pub const CHECK_GLYPH: &str = "✓";
pub const DASH_GLYPH: &str = "–";
pub const OPTIONS_PLACEHOLDER: &str = "N/A";
pub const OPTIONS_SEPARATOR: &str = ", ";

/// Colour accent of a supported HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodAccent {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl MethodAccent {
    fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Class for the method label text.
    pub fn text_class(&self) -> String {
        format!("accent-{}", self.name())
    }

    /// Class for the tinted header row background.
    pub fn background_class(&self) -> String {
        format!("bg-{}", self.name())
    }
}

/// `None` for verbs outside the supported five; those render unstyled.
pub fn method_accent(method: &HttpMethod) -> Option<MethodAccent> {
    match method {
        HttpMethod::Get => Some(MethodAccent::Green),
        HttpMethod::Post => Some(MethodAccent::Blue),
        HttpMethod::Patch => Some(MethodAccent::Yellow),
        HttpMethod::Put => Some(MethodAccent::Orange),
        HttpMethod::Delete => Some(MethodAccent::Red),
        HttpMethod::Other(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockIcon {
    Open,
    Closed,
}

impl LockIcon {
    pub fn svg(&self) -> &'static str {
        match self {
            Self::Open => super::icons::LOCK_OPEN,
            Self::Closed => super::icons::LOCK,
        }
    }
}

pub fn lock_icon(access: &AccessLevel) -> Option<LockIcon> {
    match access {
        AccessLevel::Public => Some(LockIcon::Open),
        AccessLevel::Protected | AccessLevel::Private => Some(LockIcon::Closed),
        AccessLevel::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn supported_methods_have_distinct_accents() {
        let accents: HashSet<_> = HttpMethod::SUPPORTED
            .iter()
            .map(|m| method_accent(m).expect("supported method must be styled"))
            .collect();
        assert_eq!(accents.len(), HttpMethod::SUPPORTED.len());
    }

    #[test]
    fn unknown_method_is_unstyled() {
        assert_eq!(method_accent(&HttpMethod::Other("TRACE".into())), None);
    }

    #[test]
    fn access_maps_to_lock_state() {
        assert_eq!(lock_icon(&AccessLevel::Public), Some(LockIcon::Open));
        assert_eq!(lock_icon(&AccessLevel::Protected), Some(LockIcon::Closed));
        assert_eq!(lock_icon(&AccessLevel::Private), Some(LockIcon::Closed));
        assert_eq!(lock_icon(&AccessLevel::Unknown("internal".into())), None);
        assert_ne!(LockIcon::Open.svg(), LockIcon::Closed.svg());
    }

    #[test]
    fn accent_classes() {
        assert_eq!(MethodAccent::Blue.text_class(), "accent-blue");
        assert_eq!(MethodAccent::Red.background_class(), "bg-red");
    }
}
