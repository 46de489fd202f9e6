//! The intermediate representation handed to templates.
//!
//! Field names serialize exactly as template authors see them
//! (`GenPackage`, `Methods`, `Input`, ...).

use serde::Serialize;

/// Name of the generated mock type. Not derived from the input.
pub const MOCK_STRUCT_NAME: &str = "Mocker";

/// One parameter or result slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    /// Empty for unnamed slots
    pub name: String,
    #[serde(rename = "Type")]
    pub type_text: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }

    pub fn unnamed(type_text: impl Into<String>) -> Self {
        Self::new(String::new(), type_text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Method {
    pub name: String,
    pub input: Vec<Field>,
    pub output: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Import {
    pub path: String,
    /// Explicit alias (`_` and `.` included), empty when absent
    pub name: String,
}

/// Everything a template needs to render a mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub gen_package: String,
    pub model_path: String,
    pub package: String,
    #[serde(rename = "Struct")]
    pub struct_name: String,
    pub imports: Vec<Import>,
    pub methods: Vec<Method>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_serializes_with_template_names() {
        let output = Output {
            gen_package: "mocks".to_string(),
            model_path: "example.com/app/db".to_string(),
            package: "db".to_string(),
            struct_name: MOCK_STRUCT_NAME.to_string(),
            imports: vec![Import {
                path: "context".to_string(),
                name: String::new(),
            }],
            methods: vec![Method {
                name: "Ping".to_string(),
                input: vec![Field::new("ctx", "context.Context")],
                output: vec![Field::unnamed("error")],
            }],
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["GenPackage"], "mocks");
        assert_eq!(value["ModelPath"], "example.com/app/db");
        assert_eq!(value["Package"], "db");
        assert_eq!(value["Struct"], "Mocker");
        assert_eq!(value["Imports"][0]["Path"], "context");
        assert_eq!(value["Imports"][0]["Name"], "");
        assert_eq!(value["Methods"][0]["Name"], "Ping");
        assert_eq!(value["Methods"][0]["Input"][0]["Type"], "context.Context");
        assert_eq!(value["Methods"][0]["Output"][0]["Name"], "");
    }
}
