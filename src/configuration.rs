use secrecy::{ExposeSecret, Secret};
use std::path::Path;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub credential: CredentialSettings,
    pub suite: SuiteSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
}

impl ApiSettings {
    /// The configured address without its trailing slash, ready for `format!("{}/api/...")`.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Raw credential settings: an optional static token and an optional login.
#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct CredentialSettings {
    pub token: Option<Secret<String>>,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

impl CredentialSettings {
    /// A non-blank token wins, otherwise the username/password pair is used.
    pub fn source(&self) -> Result<CredentialSource, String> {
        if let Some(token) = self
            .token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty())
        {
            return Ok(CredentialSource::Static {
                token: token.clone(),
            });
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) if !username.trim().is_empty() => {
                Ok(CredentialSource::Login {
                    username: username.clone(),
                    password: password.clone(),
                })
            }
            _ => Err("Neither a static token nor a username/password pair is configured.".into()),
        }
    }
}

/// Where the bearer credential comes from. Resolved once, before any scenario runs.
#[derive(Clone, Debug)]
pub enum CredentialSource {
    /// A pre-obtained token, attached as is.
    Static { token: Secret<String> },
    /// Exchange a username/password pair at the authentication endpoint.
    Login {
        username: String,
        password: Secret<String>,
    },
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SuiteSettings {
    pub non_existing_story_id: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // Add in settings from environment variables (with a prefix of APP and '__' as separator)
    // E.g. `APP_CREDENTIAL__TOKEN=eyJ...` would set `Settings.credential.token`
    let environment_variables = config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__");

    build_configuration(&configuration_directory, &environment, environment_variables)
}

fn build_configuration(
    configuration_directory: &Path,
    environment: &Environment,
    environment_variables: config::Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(environment_variables)
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our suite.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
