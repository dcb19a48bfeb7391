use tracing::debug;

pub const TOKEN_ENV_VAR: &str = "GITHUB_GIST_ACCESS_TOKEN";

/// Source of the pre-issued GitHub access token.
pub trait TokenProvider {
    fn token(&self) -> Option<String>;
}

/// Reads the token from the process environment.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var_name: String,
}

impl EnvTokenProvider {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self { var_name: var_name.into() }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

impl TokenProvider for EnvTokenProvider {
    fn token(&self) -> Option<String> {
        let token = std::env::var(&self.var_name)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        debug!("Access token from {}: {}", self.var_name, if token.is_some() { "found" } else { "missing" });
        token
    }
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticTokenProvider(pub Option<String>);

#[cfg(test)]
impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
