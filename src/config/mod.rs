pub mod catalog;

pub use catalog::{
    available_domains, available_stacks, domain_config, is_supported_stack, require_domain,
    stack_file, validate_catalog, DomainConfig, AVAILABLE_STACKS, DOMAINS, MAX_RESULTS,
    NOT_AVAILABLE, STACKS_DIR, STACK_OUTPUT_FIELDS, STACK_SEARCH_COLS,
};
