// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Example registry and route resolution for the sidebar.

/// Pages the shell knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExampleId {
    FileHash,
}

/// Static registration of one example page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleDescriptor {
    pub id: ExampleId,
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Sidebar row derived from a descriptor and the current route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub is_active: bool,
}

/// Registered examples in menu order. The first one is the landing page.
pub const EXAMPLES: &[ExampleDescriptor] = &[ExampleDescriptor {
    id: ExampleId::FileHash,
    name: "File hash",
    path: "/file-hash",
    icon: egui_phosphor::regular::HASH,
}];

/// Path the shell lands on when no specific page is requested.
pub fn default_route() -> &'static str {
    EXAMPLES.first().map(|e| e.path).unwrap_or("/")
}

/// Trim whitespace and trailing slashes; `/` and empty redirect to the default route.
pub fn normalize_route(route: &str) -> String {
    let trimmed = route.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return default_route().to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Plain string-prefix match of the route against an example path.
pub fn route_matches(route: &str, path: &str) -> bool {
    route.starts_with(path)
}

/// Build the sidebar entries for `route`.
pub fn entries(route: &str) -> Vec<ExampleEntry> {
    EXAMPLES
        .iter()
        .map(|desc| ExampleEntry {
            name: desc.name,
            path: desc.path,
            icon: desc.icon,
            is_active: route_matches(route, desc.path),
        })
        .collect()
}

/// Resolve the page to render for `route`, if any.
pub fn resolve(route: &str) -> Option<ExampleId> {
    EXAMPLES
        .iter()
        .find(|desc| route_matches(route, desc.path))
        .map(|desc| desc.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_first_example() {
        assert_eq!(normalize_route("/"), "/file-hash");
        assert_eq!(normalize_route(""), "/file-hash");
        assert_eq!(normalize_route("  "), "/file-hash");
    }

    #[test]
    fn normalize_adds_leading_and_strips_trailing_slash() {
        assert_eq!(normalize_route("file-hash/"), "/file-hash");
    }

    #[test]
    fn entry_active_on_exact_and_nested_paths() {
        assert!(entries("/file-hash")[0].is_active);
        assert!(entries("/file-hash/details")[0].is_active);
    }

    // Activation is a raw string prefix, so a longer sibling path also matches.
    #[test]
    fn entry_active_for_any_string_prefix() {
        assert!(entries("/file-hashes")[0].is_active);
        assert_eq!(resolve("/file-hashes"), Some(ExampleId::FileHash));
    }

    #[test]
    fn entry_inactive_for_unrelated_route() {
        assert!(!entries("/other")[0].is_active);
        assert!(!entries("/file")[0].is_active);
    }

    #[test]
    fn resolve_unknown_route_is_none() {
        assert_eq!(resolve("/file-hash"), Some(ExampleId::FileHash));
        assert_eq!(resolve("/nope"), None);
    }
}
