use interfacing::Credentials;
use secrecy::ExposeSecret;

// the single account the simulated check accepts
pub static DEMO_USER_EMAIL: &str = "joaozinho@email.com";
pub static DEMO_USER_SENHA: &str = "123";

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
}

#[tracing::instrument(name = "Validate credentials", skip_all)]
pub fn validate_credentials(credentials: &Credentials) -> Result<(), AuthError> {
    let known = credentials.email == DEMO_USER_EMAIL
        && credentials.senha.expose_secret() == DEMO_USER_SENHA;

    if known {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials(anyhow::anyhow!(
            "email and senha do not match the known account"
        )))
    }
}
