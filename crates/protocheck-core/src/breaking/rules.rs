//! Built-in breaking-change rules

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::check::{Rule, RuleCatalog};

pub const CATEGORY_FILE: &str = "FILE";
pub const CATEGORY_PACKAGE: &str = "PACKAGE";
pub const CATEGORY_WIRE_JSON: &str = "WIRE_JSON";
pub const CATEGORY_WIRE: &str = "WIRE";

const FILE: &str = CATEGORY_FILE;
const PACKAGE: &str = CATEGORY_PACKAGE;
const WIRE_JSON: &str = CATEGORY_WIRE_JSON;
const WIRE: &str = CATEGORY_WIRE;

static CATALOG: Lazy<Arc<RuleCatalog>> = Lazy::new(|| {
    Arc::new(RuleCatalog::new(
        "breaking",
        &[FILE, PACKAGE, WIRE_JSON, WIRE],
        &[FILE],
        vec![
            Rule::new("ENUM_NO_DELETE", &[FILE], "Enums are not deleted from a given file."),
            Rule::new("ENUM_VALUE_NO_DELETE", &[FILE, PACKAGE], "Enum values are not deleted from a given enum."),
            Rule::new("ENUM_VALUE_NO_DELETE_UNLESS_NAME_RESERVED", &[WIRE_JSON], "Deleted enum values have their names reserved."),
            Rule::new("ENUM_VALUE_NO_DELETE_UNLESS_NUMBER_RESERVED", &[WIRE_JSON, WIRE], "Deleted enum values have their numbers reserved."),
            Rule::new("ENUM_VALUE_SAME_NAME", &[FILE, PACKAGE, WIRE_JSON], "Enum values keep the same name for a number."),
            Rule::new("EXTENSION_MESSAGE_NO_DELETE", &[FILE, PACKAGE], "Extension ranges are not deleted from a message."),
            Rule::new("FIELD_NO_DELETE", &[FILE, PACKAGE], "Fields are not deleted from a given message."),
            Rule::new("FIELD_NO_DELETE_UNLESS_NAME_RESERVED", &[WIRE_JSON], "Deleted fields have their names reserved."),
            Rule::new("FIELD_NO_DELETE_UNLESS_NUMBER_RESERVED", &[WIRE_JSON, WIRE], "Deleted fields have their numbers reserved."),
            Rule::new("FIELD_SAME_CARDINALITY", &[FILE, PACKAGE], "Fields keep the same cardinality."),
            Rule::new("FIELD_SAME_JSON_NAME", &[FILE, PACKAGE, WIRE_JSON], "Fields keep the same JSON name."),
            Rule::new("FIELD_SAME_NAME", &[FILE, PACKAGE, WIRE_JSON], "Fields keep the same name for a number."),
            Rule::new("FIELD_SAME_TYPE", &[FILE, PACKAGE, WIRE_JSON, WIRE], "Fields keep the same type."),
            Rule::new("FILE_NO_DELETE", &[FILE], "Files are not deleted."),
            Rule::new("FILE_SAME_PACKAGE", &[FILE], "Files keep the same package."),
            Rule::new("MESSAGE_NO_DELETE", &[FILE], "Messages are not deleted from a given file."),
            Rule::new("ONEOF_NO_DELETE", &[FILE, PACKAGE], "Oneofs are not deleted from a given message."),
            Rule::new("PACKAGE_ENUM_NO_DELETE", &[PACKAGE], "Enums are not deleted from a given package."),
            Rule::new("PACKAGE_MESSAGE_NO_DELETE", &[PACKAGE], "Messages are not deleted from a given package."),
            Rule::new("PACKAGE_NO_DELETE", &[PACKAGE], "Packages are not deleted."),
            Rule::new("PACKAGE_SERVICE_NO_DELETE", &[PACKAGE], "Services are not deleted from a given package."),
            Rule::new("RPC_NO_DELETE", &[FILE, PACKAGE], "RPCs are not deleted from a given service."),
            Rule::new("RPC_SAME_REQUEST_TYPE", &[FILE, PACKAGE, WIRE_JSON, WIRE], "RPCs keep the same request type."),
            Rule::new("RPC_SAME_RESPONSE_TYPE", &[FILE, PACKAGE, WIRE_JSON, WIRE], "RPCs keep the same response type."),
            Rule::new("SERVICE_NO_DELETE", &[FILE], "Services are not deleted from a given file."),
        ],
    ))
});

/// The built-in breaking-change catalog
pub fn catalog() -> Arc<RuleCatalog> {
    Arc::clone(&CATALOG)
}
