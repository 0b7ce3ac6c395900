//! Namespace key formatting for section headers and nav anchors.

/// Turn a namespace key like `user-auth` into the header `User Auth`.
///
/// Each `-`-separated segment gets its first character upper-cased; an
/// empty segment renders as `/`, so `"-"` becomes `"/ /"`.
pub fn namespace_title(key: &str) -> String {
    key.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "/".to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fragment id used to link the sidebar to a namespace section.
pub fn namespace_anchor(key: &str) -> String {
    format!("ns-{}", urlencoding::encode(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_segment() {
        assert_eq!(namespace_title("user-auth"), "User Auth");
        assert_eq!(namespace_title("todo-list-entries"), "Todo List Entries");
        assert_eq!(namespace_title("calendar"), "Calendar");
    }

    #[test]
    fn keeps_the_tail_of_each_segment() {
        assert_eq!(namespace_title("apiKeys-vault"), "ApiKeys Vault");
    }

    #[test]
    fn empty_segments_render_as_slash() {
        assert_eq!(namespace_title("-"), "/ /");
        assert_eq!(namespace_title(""), "/");
        assert_eq!(namespace_title("a--b"), "A / B");
    }

    #[test]
    fn idempotent_on_formatted_titles() {
        for key in ["user-auth", "-", "projects-k-entries", "x"] {
            let once = namespace_title(key);
            assert_eq!(namespace_title(&once), once);
        }
    }

    #[test]
    fn anchors_are_url_safe() {
        assert_eq!(namespace_anchor("user-auth"), "ns-user-auth");
        assert_eq!(namespace_anchor("a b"), "ns-a%20b");
    }
}
