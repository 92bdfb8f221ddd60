use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Wire names are fixed: `email` and `senha`.
/// Values cross the wire verbatim, debug output redacts the secret.
#[derive(Deserialize, Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub senha: SecretString,
}

impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Credentials", 2)?;
        s.serialize_field("email", &self.email)?;
        s.serialize_field("senha", &self.senha.expose_secret())?;
        s.end()
    }
}
