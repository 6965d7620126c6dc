// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Configure a client.
///
/// A client represents a connection to a cloud service. Each service has one or
/// more client types. The default configuration for each client should work
/// for most applications. But some applications may need to override the
/// default region, the default endpoint, or the user agent.
///
/// # Example
/// ```
/// # use cloud_sdk_gax::client_config::ClientConfig;
/// let config = ClientConfig::new()
///     .set_region("eu-west-1")
///     .set_endpoint("http://localhost:4566");
/// assert_eq!(config.region(), "eu-west-1");
/// assert_eq!(config.endpoint(), Some("http://localhost:4566"));
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub(crate) region: String,
    pub(crate) endpoint: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) tracing: bool,
}

const LOGGING_VAR: &str = "CLOUD_SDK_RUST_LOGGING";

/// The region used when the application does not configure one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// The default user agent, `cloud-sdk-rust/{version}`.
pub const DEFAULT_USER_AGENT: &str = concat!("cloud-sdk-rust/", env!("CARGO_PKG_VERSION"));

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// The region used to compute the default endpoint.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The endpoint override, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// The value sent in the `User-Agent` header.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns true if tracing is enabled, either in the configuration or via
    /// the `CLOUD_SDK_RUST_LOGGING=true` environment variable.
    pub fn tracing_enabled(&self) -> bool {
        if self.tracing {
            return true;
        }
        std::env::var(LOGGING_VAR)
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    /// Sets the region.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets an endpoint that overrides the default endpoint for a service.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Appends a prefix to the default user agent.
    ///
    /// The result is `{prefix} cloud-sdk-rust/{version}`.
    pub fn set_user_agent_prefix<T: AsRef<str>>(mut self, v: T) -> Self {
        self.user_agent = format!("{} {DEFAULT_USER_AGENT}", v.as_ref());
        self
    }

    /// Enables tracing.
    pub fn enable_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Disables tracing.
    pub fn disable_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    /// The endpoint for a service: the override, or
    /// `https://{endpoint_prefix}.{region}.amazonaws.com`.
    pub fn resolve_endpoint(&self, endpoint_prefix: &str) -> String {
        match &self.endpoint {
            Some(e) => e.trim_end_matches('/').to_string(),
            None => format!("https://{endpoint_prefix}.{}.amazonaws.com", self.region),
        }
    }
}

impl std::default::Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tracing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.region(), "us-east-1");
        assert_eq!(config.endpoint(), None);
        assert!(
            config.user_agent().starts_with("cloud-sdk-rust/"),
            "{config:?}"
        );
        assert_eq!(
            config.resolve_endpoint("firehose"),
            "https://firehose.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn overrides() {
        let config = ClientConfig::new()
            .set_region("ap-south-1")
            .set_user_agent_prefix("my-app/1.0");
        assert_eq!(
            config.resolve_endpoint("ecs"),
            "https://ecs.ap-south-1.amazonaws.com"
        );
        assert_eq!(
            config.user_agent(),
            format!("my-app/1.0 {DEFAULT_USER_AGENT}")
        );

        let config = config.set_endpoint("http://localhost:8080/");
        assert_eq!(config.resolve_endpoint("ecs"), "http://localhost:8080");
    }

    #[test]
    #[serial]
    fn tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::new();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
        let config = ClientConfig::new().enable_tracing();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");
        let config = config.disable_tracing();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::new();
        assert!(config.tracing_enabled(), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::new();
        assert!(!config.tracing_enabled(), "expected tracing to be disabled");
    }
}
