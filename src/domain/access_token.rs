use secrecy::{ExposeSecret, Secret};

/// Bearer credential attached to every call made through a `Session`.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    /// Returns an instance of `AccessToken` if the input is not blank.
    pub fn parse(s: String) -> Result<AccessToken, String> {
        if s.trim().is_empty() {
            Err("The access token is empty.".to_string())
        } else if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            // It has to fit into a single `Authorization` header value
            Err("The access token contains whitespace or control characters.".to_string())
        } else {
            Ok(Self(Secret::new(s)))
        }
    }
}

impl ExposeSecret<String> for AccessToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
