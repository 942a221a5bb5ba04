use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_list, validate_non_empty_string, Validate,
};
use serde::Serialize;
use std::collections::HashSet;

/// Number of results returned when the caller does not ask for a limit.
pub const MAX_RESULTS: usize = 3;

/// Subdirectory of the data root holding one `<stack>.csv` per stack.
pub const STACKS_DIR: &str = "stacks";

/// Columns every stack table is searched on.
pub const STACK_SEARCH_COLS: [&str; 2] = ["Category", "Keywords"];

/// Stack results share one shape: (output field, source column, fallback).
pub const STACK_OUTPUT_FIELDS: [(&str, &str, &str); 4] = [
    ("Category", "Category", "General"),
    ("Pattern", "Pattern Name", "N/A"),
    ("Code/Rule", "Code Snippet / Rule", "N/A"),
    ("Explanation", "Explanation", "N/A"),
];

/// Substituted for any domain output column the row lacks.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainConfig {
    pub name: &'static str,
    pub file: &'static str,
    pub search_cols: &'static [&'static str],
    pub output_cols: &'static [&'static str],
}

pub static DOMAINS: &[DomainConfig] = &[
    DomainConfig {
        name: "style",
        file: "styles.csv",
        search_cols: &["Style Category", "Keywords", "Best For", "Type"],
        output_cols: &[
            "Style Category",
            "Keywords",
            "Primary Colors",
            "Secondary Colors",
            "Effects & Animation",
            "Best For",
        ],
    },
    DomainConfig {
        name: "typography",
        file: "typography.csv",
        search_cols: &["Pairing Name", "Keywords", "Vibe"],
        output_cols: &[
            "Pairing Name",
            "Header Font",
            "Body Font",
            "Google Fonts Import",
            "Usage Context",
        ],
    },
    DomainConfig {
        name: "color",
        file: "colors.csv",
        search_cols: &["Palette Name", "Keywords", "Industry"],
        output_cols: &[
            "Palette Name",
            "Primary",
            "Secondary",
            "Accent",
            "Background",
            "Surface",
            "Description",
        ],
    },
    DomainConfig {
        name: "chart",
        file: "charts.csv",
        search_cols: &["Chart Type", "Keywords", "Use Case", "Accessibility Notes"],
        output_cols: &[
            "Data Type",
            "Keywords",
            "Best Chart Type",
            "Secondary Options",
            "Color Guidance",
            "Accessibility Notes",
            "Library Recommendation",
            "Interactive Level",
        ],
    },
    DomainConfig {
        name: "landing",
        file: "landing.csv",
        search_cols: &[
            "Pattern Name",
            "Keywords",
            "Conversion Optimization",
            "Section Order",
        ],
        output_cols: &[
            "Pattern Name",
            "Keywords",
            "Section Order",
            "Primary CTA Placement",
            "Color Strategy",
            "Conversion Optimization",
        ],
    },
    DomainConfig {
        name: "product",
        file: "products.csv",
        search_cols: &[
            "Product Type",
            "Keywords",
            "Primary Style Recommendation",
            "Key Considerations",
        ],
        output_cols: &[
            "Product Type",
            "Keywords",
            "Primary Style Recommendation",
            "Secondary Styles",
            "Landing Page Pattern",
            "Dashboard Style (if applicable)",
            "Color Palette Focus",
        ],
    },
    DomainConfig {
        name: "ux",
        file: "ux-guidelines.csv",
        search_cols: &["Category", "Issue", "Description", "Platform"],
        output_cols: &[
            "Category",
            "Issue",
            "Best Practice",
            "Anti-Pattern",
            "Accessibility Impact",
            "Platform",
        ],
    },
];

pub static AVAILABLE_STACKS: &[&str] = &[
    "html-tailwind",
    "react",
    "nextjs",
    "vue",
    "svelte",
    "swiftui",
    "react-native",
    "flutter",
];

/// Looks up a domain by its exact identifier.
pub fn domain_config(name: &str) -> Option<&'static DomainConfig> {
    DOMAINS.iter().find(|d| d.name == name)
}

/// Like [`domain_config`], but reports an unknown domain as an error.
pub fn require_domain(name: &str) -> Result<&'static DomainConfig> {
    domain_config(name).ok_or_else(|| SearchError::UnknownDomain {
        name: name.to_string(),
    })
}

pub fn is_supported_stack(name: &str) -> bool {
    AVAILABLE_STACKS.contains(&name)
}

pub fn available_domains() -> impl Iterator<Item = &'static str> {
    DOMAINS.iter().map(|d| d.name)
}

pub fn available_stacks() -> impl Iterator<Item = &'static str> {
    AVAILABLE_STACKS.iter().copied()
}

/// Path of a stack table relative to the data root.
pub fn stack_file(stack: &str) -> String {
    format!("{}/{}.csv", STACKS_DIR, stack)
}

impl Validate for DomainConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("domain.name", self.name)?;
        validate_file_extensions("domain.file", &[self.file], &["csv"])?;
        validate_non_empty_list("domain.search_cols", self.search_cols)?;
        validate_non_empty_list("domain.output_cols", self.output_cols)?;
        Ok(())
    }
}

/// Checks every domain entry and rejects duplicate domain or stack names.
pub fn validate_catalog() -> Result<()> {
    let mut seen = HashSet::new();
    for domain in DOMAINS {
        domain.validate()?;
        if !seen.insert(domain.name) {
            return Err(SearchError::InvalidConfigValueError {
                field: "domain.name".to_string(),
                value: domain.name.to_string(),
                reason: "Duplicate domain".to_string(),
            });
        }
    }

    let mut stacks = HashSet::new();
    for stack in AVAILABLE_STACKS {
        validate_non_empty_string("stack", stack)?;
        if !stacks.insert(*stack) {
            return Err(SearchError::InvalidConfigValueError {
                field: "stack".to_string(),
                value: stack.to_string(),
                reason: "Duplicate stack".to_string(),
            });
        }
    }

    Ok(())
}
