use std::collections::BTreeMap;

use base64::Engine;

use crate::error::Error;

/// Result of asking the repository for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFile {
    /// The file exists; `content` is the raw base64 field, which may be absent.
    Present { content: Option<String> },
    NotFound,
}

/// Read access to files in the current repository.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch_file(&self, path: &str) -> Result<RemoteFile, Error>;
}

/// Label name to the users that should follow it.
///
/// Keys and users are scalars as YAML reads them, so `2024: [1234]` maps the
/// label "2024" to the user "1234". A label whose value is not a list has no
/// users, the same as a label that is not listed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration(BTreeMap<String, Vec<String>>);

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(value) => Some(value.clone()),
        serde_yaml::Value::Number(value) => Some(value.to_string()),
        serde_yaml::Value::Bool(value) => Some(value.to_string()),
        serde_yaml::Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn users_from(value: &serde_yaml::Value) -> Vec<String> {
    match value {
        serde_yaml::Value::Sequence(users) => {
            users.iter().filter_map(scalar_to_string).collect()
        }
        serde_yaml::Value::Tagged(tagged) => users_from(&tagged.value),
        _ => Vec::new(),
    }
}

impl Configuration {
    pub fn users_for(&self, label: &str) -> &[String] {
        self.0.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn from_base64(content: &str, path: &str) -> Result<Self, Error> {
        // GitHub wraps the encoded body at 60 columns.
        let compact: String = content.split_ascii_whitespace().collect();
        if compact.is_empty() {
            return Err(Error::ConfigurationEmpty {
                path: path.to_string(),
            });
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|err| {
                tracing::debug!(path, error = %err, "configuration is not valid base64");
                Error::invalid(path)
            })?;
        let text = String::from_utf8(bytes).map_err(|err| {
            tracing::debug!(path, error = %err, "configuration is not valid UTF-8");
            Error::invalid(path)
        })?;

        Self::from_yaml(&text, path)
    }

    pub fn from_yaml(text: &str, path: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::ConfigurationEmpty {
                path: path.to_string(),
            });
        }

        let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|err| {
            tracing::debug!(path, error = %err, "configuration is not valid YAML");
            Error::invalid(path)
        })?;
        let Some(mapping) = value.as_mapping().filter(|mapping| !mapping.is_empty()) else {
            tracing::debug!(path, "configuration is not a non-empty mapping");
            return Err(Error::invalid(path));
        };

        let labels = mapping
            .iter()
            .filter_map(|(label, users)| Some((scalar_to_string(label)?, users_from(users))))
            .collect();
        Ok(Configuration(labels))
    }
}

pub async fn load_config<S>(source: &S, path: &str) -> Result<Configuration, Error>
where
    S: ContentSource + ?Sized,
{
    let path = path.trim();
    if path.is_empty() {
        return Err(Error::ConfigurationMissing);
    }

    let content = match source.fetch_file(path).await? {
        RemoteFile::Present { content } => content,
        RemoteFile::NotFound => {
            return Err(Error::ConfigurationNotFound {
                path: path.to_string(),
            });
        }
    };

    let Some(content) = content.filter(|content| !content.is_empty()) else {
        return Err(Error::ConfigurationEmpty {
            path: path.to_string(),
        });
    };

    let config = Configuration::from_base64(&content, path)?;
    tracing::info!(path, labels = config.len(), "loaded configuration");
    Ok(config)
}
