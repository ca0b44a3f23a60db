//! Semantic labels for upstream data sources.

/// Well-known upstream sources a page may depend on.
///
/// Tags show up in logs and metrics so operators can tell which
/// dependency misbehaved without grepping URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTag {
    /// The tour catalog document.
    Catalog,
    /// Static media (gallery assets, hero imagery).
    Media,
    /// Analytics/tracking endpoints.
    Analytics,
    /// Custom source with a name.
    Custom(&'static str),
}

impl SourceTag {
    /// Check if this source is critical (failure replaces the page content).
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Catalog)
    }

    /// Get the name of this source.
    pub fn name(&self) -> &str {
        match self {
            Self::Catalog => "catalog",
            Self::Media => "media",
            Self::Analytics => "analytics",
            Self::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(SourceTag::Catalog.name(), "catalog");
        assert_eq!(SourceTag::Custom("weather").name(), "weather");
    }

    #[test]
    fn test_only_catalog_is_critical() {
        assert!(SourceTag::Catalog.is_critical());
        assert!(!SourceTag::Media.is_critical());
        assert!(!SourceTag::Analytics.is_critical());
    }
}
