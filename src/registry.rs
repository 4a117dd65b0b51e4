//! Static vendor endpoint registry
//!
//! Hand-maintained map from well-known tool names to their public API
//! documentation and changelog pages. A hit enriches the research
//! prompt with authoritative URLs; a miss changes nothing: the
//! research call runs the same either way. Operational history shows
//! this table is incomplete and sometimes stale, so nothing may depend
//! on it.

use std::collections::HashMap;

/// Known public endpoints for one vendor
#[derive(Debug, Clone)]
pub struct VendorEndpoints {
    /// Canonical vendor name
    pub vendor: &'static str,
    /// API documentation URL
    pub api_docs: &'static str,
    /// Changelog / release notes URL, if the vendor publishes one
    pub changelog: Option<&'static str>,
    /// Whether the API requires authenticated access to read
    pub auth_required: bool,
}

/// Lookup table of well-known advisory-stack vendors
#[derive(Debug, Clone)]
pub struct ChangelogRegistry {
    entries: HashMap<String, VendorEndpoints>,
}

impl ChangelogRegistry {
    /// Builds the registry with the built-in vendor table
    pub fn with_defaults() -> Self {
        let defaults = [
            VendorEndpoints {
                vendor: "Wealthbox",
                api_docs: "https://dev.wealthbox.com/",
                changelog: Some("https://wealthbox.com/whats-new"),
                auth_required: false,
            },
            VendorEndpoints {
                vendor: "Redtail CRM",
                api_docs: "https://help.redtailtechnology.com/s/api-documentation",
                changelog: None,
                auth_required: true,
            },
            VendorEndpoints {
                vendor: "Orion",
                api_docs: "https://api.orionadvisor.com/docs",
                changelog: None,
                auth_required: true,
            },
            VendorEndpoints {
                vendor: "eMoney",
                api_docs: "https://developer.emoneyadvisor.com/",
                changelog: None,
                auth_required: true,
            },
            VendorEndpoints {
                vendor: "Salesforce",
                api_docs: "https://developer.salesforce.com/docs",
                changelog: Some("https://help.salesforce.com/s/articleView?id=release-notes.salesforce_release_notes.htm"),
                auth_required: false,
            },
            VendorEndpoints {
                vendor: "Microsoft 365",
                api_docs: "https://learn.microsoft.com/en-us/graph/",
                changelog: Some("https://developer.microsoft.com/en-us/graph/changelog"),
                auth_required: false,
            },
            VendorEndpoints {
                vendor: "Schwab Advisor Center",
                api_docs: "https://developer.schwab.com/",
                changelog: None,
                auth_required: true,
            },
            VendorEndpoints {
                vendor: "RightCapital",
                api_docs: "https://help.rightcapital.com/",
                changelog: None,
                auth_required: true,
            },
            VendorEndpoints {
                vendor: "Zoom",
                api_docs: "https://developers.zoom.us/docs/api/",
                changelog: Some("https://devsupport.zoom.us/hc/en-us/sections/changelog"),
                auth_required: false,
            },
            VendorEndpoints {
                vendor: "Slack",
                api_docs: "https://api.slack.com/docs",
                changelog: Some("https://api.slack.com/changelog"),
                auth_required: false,
            },
        ];

        let mut entries = HashMap::new();
        for entry in defaults {
            entries.insert(Self::normalize(entry.vendor), entry);
        }

        Self { entries }
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Looks up a tool by name, case- and whitespace-insensitively
    pub fn get(&self, tool_name: &str) -> Option<&VendorEndpoints> {
        self.entries.get(&Self::normalize(tool_name))
    }

    /// Whether the registry knows this tool
    pub fn contains(&self, tool_name: &str) -> bool {
        self.get(tool_name).is_some()
    }

    /// Number of vendors in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChangelogRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        let registry = ChangelogRegistry::with_defaults();
        let entry = registry.get("Wealthbox").unwrap();
        assert_eq!(entry.vendor, "Wealthbox");
        assert!(entry.changelog.is_some());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let registry = ChangelogRegistry::with_defaults();
        assert!(registry.contains("redtail crm"));
        assert!(registry.contains("  MICROSOFT 365  "));
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ChangelogRegistry::with_defaults();
        assert!(registry.get("Some Internal Tool").is_none());
    }

    #[test]
    fn test_registry_not_empty() {
        let registry = ChangelogRegistry::with_defaults();
        assert!(!registry.is_empty());
        assert!(registry.len() >= 8);
    }
}
