//! Built-in lint rules

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::check::{Rule, RuleCatalog};

pub const CATEGORY_MINIMAL: &str = "MINIMAL";
pub const CATEGORY_BASIC: &str = "BASIC";
pub const CATEGORY_DEFAULT: &str = "DEFAULT";
pub const CATEGORY_COMMENTS: &str = "COMMENTS";
pub const CATEGORY_UNARY_RPC: &str = "UNARY_RPC";

const MINIMAL: &str = CATEGORY_MINIMAL;
const BASIC: &str = CATEGORY_BASIC;
const DEFAULT: &str = CATEGORY_DEFAULT;
const COMMENTS: &str = CATEGORY_COMMENTS;
const UNARY_RPC: &str = CATEGORY_UNARY_RPC;

static CATALOG: Lazy<Arc<RuleCatalog>> = Lazy::new(|| {
    Arc::new(RuleCatalog::new(
        "lint",
        &[MINIMAL, BASIC, DEFAULT, COMMENTS, UNARY_RPC],
        &[DEFAULT],
        vec![
            Rule::new("DIRECTORY_SAME_PACKAGE", &[MINIMAL, BASIC, DEFAULT], "All files in a directory share a package."),
            Rule::new("PACKAGE_DEFINED", &[MINIMAL, BASIC, DEFAULT], "All files declare a package."),
            Rule::new("PACKAGE_DIRECTORY_MATCH", &[MINIMAL, BASIC, DEFAULT], "Packages match their directory."),
            Rule::new("PACKAGE_SAME_DIRECTORY", &[MINIMAL, BASIC, DEFAULT], "All files of a package share a directory."),
            Rule::new("ENUM_PASCAL_CASE", &[BASIC, DEFAULT], "Enums are PascalCase."),
            Rule::new("ENUM_VALUE_UPPER_SNAKE_CASE", &[BASIC, DEFAULT], "Enum values are UPPER_SNAKE_CASE."),
            Rule::new("FIELD_LOWER_SNAKE_CASE", &[BASIC, DEFAULT], "Fields are lower_snake_case."),
            Rule::new("MESSAGE_PASCAL_CASE", &[BASIC, DEFAULT], "Messages are PascalCase."),
            Rule::new("ONEOF_LOWER_SNAKE_CASE", &[BASIC, DEFAULT], "Oneofs are lower_snake_case."),
            Rule::new("PACKAGE_LOWER_SNAKE_CASE", &[BASIC, DEFAULT], "Packages are lower_snake.case."),
            Rule::new("RPC_PASCAL_CASE", &[BASIC, DEFAULT], "RPCs are PascalCase."),
            Rule::new("SERVICE_PASCAL_CASE", &[BASIC, DEFAULT], "Services are PascalCase."),
            Rule::new("ENUM_VALUE_PREFIX", &[DEFAULT], "Enum values are prefixed with the enum name."),
            Rule::new("ENUM_ZERO_VALUE_SUFFIX", &[DEFAULT], "Enum zero values carry the configured suffix."),
            Rule::new("FILE_LOWER_SNAKE_CASE", &[DEFAULT], "Filenames are lower_snake_case."),
            Rule::new("PACKAGE_VERSION_SUFFIX", &[DEFAULT], "The last package component is a version."),
            Rule::new("RPC_REQUEST_RESPONSE_UNIQUE", &[DEFAULT], "Request and response types are used by one RPC only."),
            Rule::new("RPC_REQUEST_STANDARD_NAME", &[DEFAULT], "Request types are named MethodRequest."),
            Rule::new("RPC_RESPONSE_STANDARD_NAME", &[DEFAULT], "Response types are named MethodResponse."),
            Rule::new("SERVICE_SUFFIX", &[DEFAULT], "Services carry the configured suffix."),
            Rule::new("COMMENT_ENUM", &[COMMENTS], "Enums have non-empty comments."),
            Rule::new("COMMENT_ENUM_VALUE", &[COMMENTS], "Enum values have non-empty comments."),
            Rule::new("COMMENT_FIELD", &[COMMENTS], "Fields have non-empty comments."),
            Rule::new("COMMENT_MESSAGE", &[COMMENTS], "Messages have non-empty comments."),
            Rule::new("COMMENT_ONEOF", &[COMMENTS], "Oneofs have non-empty comments."),
            Rule::new("COMMENT_RPC", &[COMMENTS], "RPCs have non-empty comments."),
            Rule::new("COMMENT_SERVICE", &[COMMENTS], "Services have non-empty comments."),
            Rule::new("RPC_NO_CLIENT_STREAMING", &[UNARY_RPC], "RPCs are not client streaming."),
            Rule::new("RPC_NO_SERVER_STREAMING", &[UNARY_RPC], "RPCs are not server streaming."),
        ],
    ))
});

/// The built-in lint catalog
pub fn catalog() -> Arc<RuleCatalog> {
    Arc::clone(&CATALOG)
}
