use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream section is incomplete or the
    /// retry policy is unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.upstream.model.is_empty() {
            anyhow::bail!("upstream.model must not be empty");
        }

        if self.upstream.api_key.expose_secret().is_empty() {
            anyhow::bail!("upstream.api_key must not be empty");
        }

        if self.upstream.retry.max_attempts == 0 {
            anyhow::bail!("upstream.retry.max_attempts must be at least 1");
        }

        // Surface a bad duration string at startup rather than per request
        self.upstream.retry.backoff_duration()?;

        Ok(())
    }
}
