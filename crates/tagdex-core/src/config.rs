//! Environment-driven gateway configuration.
//!
//! All settings are resolved once at process start. A missing required
//! variable aborts startup with an error naming the variable, before the
//! HTTP listener binds.

use crate::error::{TagdexError, TagdexResult};

/// Bolt endpoint used when `NEO4J_URI` is unset.
pub const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";

/// Gateway settings resolved from the environment.
///
/// Required: `TAGDEX_PORT`, `NEO4J_USERNAME`, `NEO4J_PASSWORD`.
/// Optional: `NEO4J_URI` (defaults to [`DEFAULT_NEO4J_URI`]).
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub neo4j_uri: String,
    pub neo4j_username: String,
    pub neo4j_password: String,
}

impl Settings {
    /// Resolve settings from process environment variables.
    pub fn from_env() -> TagdexResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TagdexResult<Self> {
        let port = lookup("TAGDEX_PORT").ok_or(TagdexError::MissingEnv("TAGDEX_PORT"))?;
        let port: u16 = port
            .parse()
            .map_err(|_| TagdexError::config(format!("invalid TAGDEX_PORT value: {port}")))?;

        let neo4j_username =
            lookup("NEO4J_USERNAME").ok_or(TagdexError::MissingEnv("NEO4J_USERNAME"))?;
        let neo4j_password =
            lookup("NEO4J_PASSWORD").ok_or(TagdexError::MissingEnv("NEO4J_PASSWORD"))?;
        let neo4j_uri = lookup("NEO4J_URI").unwrap_or_else(|| DEFAULT_NEO4J_URI.to_string());

        Ok(Self {
            port,
            neo4j_uri,
            neo4j_username,
            neo4j_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("TAGDEX_PORT", "4000"),
            ("NEO4J_USERNAME", "neo4j"),
            ("NEO4J_PASSWORD", "secret"),
        ])
    }

    fn lookup<'a>(
        vars: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_all_required_variables_present() {
        let settings = Settings::from_lookup(lookup(&base_vars())).unwrap();
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.neo4j_username, "neo4j");
        assert_eq!(settings.neo4j_password, "secret");
        assert_eq!(settings.neo4j_uri, DEFAULT_NEO4J_URI);
    }

    #[test]
    fn test_uri_override() {
        let mut vars = base_vars();
        vars.insert("NEO4J_URI", "bolt://db.internal:7687");
        let settings = Settings::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(settings.neo4j_uri, "bolt://db.internal:7687");
    }

    #[test]
    fn test_missing_variable_is_named() {
        for missing in ["TAGDEX_PORT", "NEO4J_USERNAME", "NEO4J_PASSWORD"] {
            let mut vars = base_vars();
            vars.remove(missing);
            let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("missing required environment variable: {missing}")
            );
        }
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut vars = base_vars();
        vars.insert("TAGDEX_PORT", "graphql");
        let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, TagdexError::Config(_)));
    }
}
