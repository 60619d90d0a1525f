use crate::core::factory::{
    build_parameter_definition, create_parameter_definition_with_description,
};
use crate::domain::model::ParameterDefinition;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_keys, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A document listing the parameter definitions of a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterFile {
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub key: String,
    pub datatype: String,
    pub name: Option<String>,
    pub required: Option<bool>,
    pub description: Option<String>,
}

impl ParameterEntry {
    pub fn to_definition(&self) -> ParameterDefinition {
        create_parameter_definition_with_description(
            &self.key,
            &self.datatype,
            self.name.as_deref(),
            self.required.unwrap_or(false),
            self.description.as_deref(),
        )
    }
}

impl From<ParameterEntry> for ParameterDefinition {
    fn from(entry: ParameterEntry) -> Self {
        build_parameter_definition(
            entry.key,
            entry.datatype,
            entry.name,
            entry.required.unwrap_or(false),
            entry.description,
        )
    }
}

impl ParameterFile {
    /// 從檔案載入參數定義，依副檔名選擇 TOML 或 JSON（不分大小寫）
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(CalcError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: Self = toml::from_str(content)?;
        tracing::info!("Loaded {} parameter entries from TOML", file.parameters.len());
        Ok(file)
    }

    /// 從 JSON 字串解析
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(content)?;
        tracing::info!("Loaded {} parameter entries from JSON", file.parameters.len());
        Ok(file)
    }

    pub fn definitions(&self) -> Vec<ParameterDefinition> {
        self.parameters.iter().map(ParameterEntry::to_definition).collect()
    }

    pub fn into_definitions(self) -> Vec<ParameterDefinition> {
        self.parameters
            .into_iter()
            .map(ParameterDefinition::from)
            .collect()
    }

    /// 驗證每個參數的 key 與 datatype，並檢查 key 是否重複
    pub fn validate_config(&self) -> Result<()> {
        for (index, entry) in self.parameters.iter().enumerate() {
            validate_non_empty_string(&format!("parameters[{}].key", index), &entry.key)?;
            validate_non_empty_string(
                &format!("parameters[{}].datatype", index),
                &entry.datatype,
            )?;
        }

        validate_unique_keys(self.parameters.iter().map(|p| p.key.as_str())).inspect_err(|e| {
            tracing::warn!("Parameter file rejected: {}", e);
        })
    }
}

impl Validate for ParameterFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
