//! GoTrue auth API: sign-in, sign-up, sign-out, and session retrieval.

use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "web")]
use super::error::Error;
use super::Client;

/// The authenticated identity as returned by the auth API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Profile fields attached to the identity at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserMetadata {
    pub full_name: Option<String>,
}

impl AuthUser {
    /// Display name for the navbar: metadata name, else the email address.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Usuario")
    }
}

/// An active session issued by the auth API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// Sign-in / sign-up form input, validated before any request is issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Present only on sign-up.
    pub full_name: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CredentialsError {
    #[error("Email inválido")]
    InvalidEmail,
    #[error("La contraseña debe tener al menos 6 caracteres")]
    PasswordTooShort,
    #[error("El nombre debe tener al menos 2 caracteres")]
    NameTooShort,
}

impl Credentials {
    /// Checks the form fields; the first violation aborts the submission.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(CredentialsError::InvalidEmail),
        }
        if self.password.chars().count() < 6 {
            return Err(CredentialsError::PasswordTooShort);
        }
        if let Some(name) = &self.full_name {
            if name.trim().chars().count() < 2 {
                return Err(CredentialsError::NameTooShort);
            }
        }
        Ok(())
    }
}

#[cfg(feature = "web")]
impl Client {
    /// Signs in with the password grant and returns the new session.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, Error> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config().url
        );
        let body = serde_json::json!({
            "email": credentials.email,
            "password": credentials.password,
        });
        let response = self.auth_request(&url, body).await?;

        response
            .json::<Session>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Registers a new account, attaching the profile metadata the clinic
    /// expects (`full_name` plus the `veterinario` role).
    ///
    /// Returns the session when the backend auto-confirms the account, `None`
    /// when a confirmation email is pending.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<Option<Session>, Error> {
        let url = format!("{}/auth/v1/signup", self.config().url);
        let body = serde_json::json!({
            "email": credentials.email,
            "password": credentials.password,
            "data": {
                "full_name": credentials.full_name,
                "role": "veterinario",
            },
        });
        let response = self.auth_request(&url, body).await?;

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;
        if value.get("access_token").is_some() {
            let session = serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))?;
            Ok(Some(session))
        } else {
            Ok(None)
        }
    }

    /// Revokes the current access token. Best effort: the local session is
    /// cleared regardless of the outcome.
    pub async fn sign_out(&self) -> Result<(), Error> {
        let url = format!("{}/auth/v1/logout", self.config().url);
        let response = reqwasm::http::Request::post(&url)
            .header("apikey", &self.config().anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(auth_error(status, response).await)
        }
    }

    /// Retrieves the identity behind the current access token.
    pub async fn get_user(&self) -> Result<AuthUser, Error> {
        let url = format!("{}/auth/v1/user", self.config().url);
        let response = reqwasm::http::Request::get(&url)
            .header("apikey", &self.config().anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(auth_error(status, response).await);
        }
        response
            .json::<AuthUser>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    async fn auth_request(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<reqwasm::http::Response, Error> {
        if self.config().url.is_empty() || self.config().anon_key.is_empty() {
            return Err(Error::Config);
        }

        let response = reqwasm::http::Request::post(url)
            .header("apikey", &self.config().anon_key)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if (200..300).contains(&status) {
            Ok(response)
        } else {
            Err(auth_error(status, response).await)
        }
    }
}

/// Maps a failed auth response to [`Error::Auth`], preferring the
/// human-readable message fields GoTrue uses across its endpoints.
#[cfg(feature = "web")]
async fn auth_error(status: u16, response: reqwasm::http::Response) -> Error {
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                ["error_description", "msg", "message"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str().map(String::from)))
            })
            .unwrap_or_else(|| format!("Authentication failed with status {status}")),
        Err(_) => format!("Authentication failed with status {status}"),
    };
    Error::Auth(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests accepting a well-formed sign-in form.
    ///
    /// Expected: Ok(())
    #[test]
    fn accepts_valid_credentials() {
        let credentials = Credentials {
            email: "vet@clinica.mx".into(),
            password: "secret1".into(),
            full_name: None,
        };
        assert_eq!(credentials.validate(), Ok(()));
    }

    /// Tests rejecting an email without a domain part.
    ///
    /// Expected: InvalidEmail
    #[test]
    fn rejects_email_without_domain() {
        let credentials = Credentials {
            email: "vet@".into(),
            password: "secret1".into(),
            full_name: None,
        };
        assert_eq!(credentials.validate(), Err(CredentialsError::InvalidEmail));
    }

    /// Tests rejecting a five-character password.
    ///
    /// Expected: PasswordTooShort
    #[test]
    fn rejects_short_password() {
        let credentials = Credentials {
            email: "vet@clinica.mx".into(),
            password: "12345".into(),
            full_name: None,
        };
        assert_eq!(
            credentials.validate(),
            Err(CredentialsError::PasswordTooShort)
        );
    }

    /// Tests rejecting a one-character full name on sign-up.
    ///
    /// Expected: NameTooShort
    #[test]
    fn rejects_short_full_name() {
        let credentials = Credentials {
            email: "vet@clinica.mx".into(),
            password: "secret1".into(),
            full_name: Some("J".into()),
        };
        assert_eq!(credentials.validate(), Err(CredentialsError::NameTooShort));
    }

    /// Tests the display-name fallback chain.
    ///
    /// Expected: metadata name wins, then email.
    #[test]
    fn resolves_display_name() {
        let mut user = AuthUser {
            id: "u1".into(),
            email: Some("vet@clinica.mx".into()),
            user_metadata: UserMetadata {
                full_name: Some("Dra. Rivera".into()),
            },
        };
        assert_eq!(user.display_name(), "Dra. Rivera");

        user.user_metadata.full_name = None;
        assert_eq!(user.display_name(), "vet@clinica.mx");
    }
}
