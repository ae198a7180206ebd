// file: src/config/loader.rs
// version: 1.0.0
// guid: c7e93a15-4f62-4d08-b1a7-8e25d0f9c643

//! Layout manifest loading and environment variable substitution

use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::WorkspaceLayout;
use crate::Result;

/// Layout manifest loader with environment variable substitution
pub struct LayoutLoader {
    env_vars: HashMap<String, String>,
}

impl LayoutLoader {
    /// Create a new layout loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load a workspace layout from a YAML manifest
    pub fn load_layout<P: AsRef<Path>>(&self, path: P) -> Result<WorkspaceLayout> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::ScaffoldError::config(format!(
                "Failed to read layout manifest {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let layout: WorkspaceLayout = serde_yaml::from_str(&expanded)?;

        layout.validate()?;

        Ok(layout)
    }

    /// Expand environment variables in manifest content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| crate::ScaffoldError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::ScaffoldError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for LayoutLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = LayoutLoader::new();
        loader.set_env_var("TEST_VAR".to_string(), "test_value".to_string());

        let content = "key: ${TEST_VAR}";
        let result = loader.expand_env_vars(content).unwrap();
        assert_eq!(result, "key: test_value");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = LayoutLoader::new();
        let content = "key: ${QBANK_DEFINITELY_MISSING_VAR}";

        let result = loader.expand_env_vars(content);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables"));
    }

    #[test]
    fn test_load_layout_manifest() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
directories:
  - data/raw_jee_materials
  - config
placeholders:
  - app.py
  - config/topic_map.csv
legacy_scripts:
  - scripts/01_scrape_and_parse.py
legacy_bootstrap: setup_pipeline.sh
"#
        )
        .unwrap();

        let loader = LayoutLoader::new();
        let layout = loader.load_layout(file.path())?;

        assert_eq!(layout.directories.len(), 2);
        assert_eq!(layout.placeholders.len(), 2);
        assert_eq!(layout.legacy_scripts.len(), 1);

        Ok(())
    }

    #[test]
    fn test_load_layout_with_substitution() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
directories:
  - ${{QBANK_TEST_DATA_DIR}}
placeholders:
  - app.py
"#
        )
        .unwrap();

        let mut loader = LayoutLoader::new();
        loader.set_env_var("QBANK_TEST_DATA_DIR".to_string(), "data/raw".to_string());

        let layout = loader.load_layout(file.path())?;
        assert_eq!(layout.directories, vec!["data/raw".to_string()]);

        Ok(())
    }

    #[test]
    fn test_load_layout_rejects_invalid_manifest() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
directories:
  - /absolute/path
placeholders: []
"#
        )
        .unwrap();

        let loader = LayoutLoader::new();
        assert!(loader.load_layout(file.path()).is_err());
    }
}
