//! Repository list and credential loading.
//!
//! The repository list is a JSON file holding an ordered array of
//! [`RepositoryPair`] records. Credentials are resolved once per run from
//! four required environment variables and passed explicitly into the
//! engine — there is no ambient credential lookup anywhere else.

use std::path::Path;

use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::models::RepositoryPair;

/// Environment variable holding the source-side username.
pub const SOURCE_USERNAME_VAR: &str = "GITMIRROR_SOURCE_USERNAME";
/// Environment variable holding the source-side token/password.
pub const SOURCE_TOKEN_VAR: &str = "GITMIRROR_SOURCE_TOKEN";
/// Environment variable holding the target-side username.
pub const TARGET_USERNAME_VAR: &str = "GITMIRROR_TARGET_USERNAME";
/// Environment variable holding the target-side token/password.
pub const TARGET_TOKEN_VAR: &str = "GITMIRROR_TARGET_TOKEN";

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// A single principal/secret pair for one side of the mirror.
#[derive(Clone)]
pub struct Credential {
    username: String,
    secret: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// Hand-written so the secret can never leak through `{:?}` formatting.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// The two independent credential pairs for a run, resolved once and reused
/// for every repository pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub source: Credential,
    pub target: Credential,
}

impl Credentials {
    /// Resolve both credential pairs from the process environment.
    ///
    /// All four variables are required; a missing or empty value is a
    /// fatal [`ConfigError::EnvVarMissing`] raised before any repository
    /// is touched.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(val) if !val.is_empty() => {
                    debug!(var = name, "resolved credential env var");
                    Ok(val)
                }
                _ => Err(ConfigError::EnvVarMissing(name.to_string())),
            }
        };

        Ok(Self {
            source: Credential {
                username: require(SOURCE_USERNAME_VAR)?,
                secret: require(SOURCE_TOKEN_VAR)?,
            },
            target: Credential {
                username: require(TARGET_USERNAME_VAR)?,
                secret: require(TARGET_TOKEN_VAR)?,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Repository list
// ---------------------------------------------------------------------------

/// Load the ordered repository-pair list from a JSON file.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<RepositoryPair>, ConfigError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading repository list");

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)?;
    let pairs: Vec<RepositoryPair> =
        serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    for pair in &pairs {
        if pair.source.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("repository {}: source", pair.id),
                detail: "source location must not be empty".into(),
            });
        }
        if pair.target.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("repository {}: target", pair.id),
                detail: "target location must not be empty".into(),
            });
        }
    }

    debug!(count = pairs.len(), "repository list parsed");
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn full_lookup() -> HashMap<String, String> {
        HashMap::from([
            (SOURCE_USERNAME_VAR.to_string(), "src-user".to_string()),
            (SOURCE_TOKEN_VAR.to_string(), "src-secret".to_string()),
            (TARGET_USERNAME_VAR.to_string(), "dst-user".to_string()),
            (TARGET_TOKEN_VAR.to_string(), "dst-secret".to_string()),
        ])
    }

    #[test]
    fn test_credentials_from_lookup() {
        let vars = full_lookup();
        let creds = Credentials::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(creds.source.username(), "src-user");
        assert_eq!(creds.target.username(), "dst-user");
    }

    #[test]
    fn test_each_missing_var_is_fatal() {
        for missing in [
            SOURCE_USERNAME_VAR,
            SOURCE_TOKEN_VAR,
            TARGET_USERNAME_VAR,
            TARGET_TOKEN_VAR,
        ] {
            let mut vars = full_lookup();
            vars.remove(missing);
            let result = Credentials::from_lookup(|name| vars.get(name).cloned());
            assert!(
                matches!(result, Err(ConfigError::EnvVarMissing(ref v)) if v == missing),
                "expected EnvVarMissing for {missing}"
            );
        }
    }

    #[test]
    fn test_empty_var_counts_as_missing() {
        let mut vars = full_lookup();
        vars.insert(SOURCE_TOKEN_VAR.to_string(), String::new());
        let result = Credentials::from_lookup(|name| vars.get(name).cloned());
        assert!(matches!(result, Err(ConfigError::EnvVarMissing(_))));
    }

    #[test]
    fn test_credential_debug_redacts_secret() {
        let cred = Credential::new("alice", "hunter2");
        let text = format!("{:?}", cred);
        assert!(text.contains("alice"));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_load_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(
            br#"[
                {"id": 1, "source": "a.example/r", "target": "b.example/r"},
                {"id": 2, "source": "a.example/s", "target": "b.example/s"}
            ]"#,
        )
        .unwrap();

        let pairs = load_pairs(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].id, 1);
        assert_eq!(pairs[1].source, "a.example/s");
    }

    #[test]
    fn test_load_pairs_file_not_found() {
        let result = load_pairs("/nonexistent/repositories.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_pairs_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        std::fs::write(&path, "{not json").unwrap();
        let result = load_pairs(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_pairs_rejects_empty_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        std::fs::write(&path, r#"[{"id": 1, "source": "", "target": "b.example/r"}]"#).unwrap();
        let result = load_pairs(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
