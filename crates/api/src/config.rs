use shipwrecked_core::progress::ShellRate;

/// Runtime settings for the HTTP server, read once at startup.
///
/// Every field has a local-development default, so a bare `cargo run`
/// works with no environment prepared. Deployments override whichever
/// variables they need.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (default `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on (default `3000`).
    pub port: u16,
    /// Origins allowed by CORS, from the comma-separated `CORS_ORIGINS` variable.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds (default `30`).
    pub request_timeout_secs: u64,
    /// Shells granted per capped progress hour (default `10`).
    pub shells_per_hour: f64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl ServerConfig {
    /// Read all settings from the environment, falling back to defaults.
    ///
    /// | Variable               | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHELLS_PER_HOUR`      | `10`                       |
    ///
    /// Panics when a numeric variable fails to parse.
    pub fn from_env() -> Self {
        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shells_per_hour: f64 = env_or("SHELLS_PER_HOUR", "10")
            .parse()
            .expect("SHELLS_PER_HOUR must be a valid number");

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            shells_per_hour,
        }
    }

    /// The hours-to-shells conversion injected into the calculator.
    pub fn shell_rate(&self) -> ShellRate {
        ShellRate::new(self.shells_per_hour)
    }
}
