// Serde helpers that write secrecy-wrapped values as plain JSON strings
// while keeping their Debug output redacted.
pub mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    pub fn serialize<S>(value: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.expose_secret())
    }
}

pub mod secret_string_option {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    // `None` is written as `null`, never skipped: the backend expects the field.
    pub fn serialize<S>(value: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(s) => serializer.serialize_some(s.expose_secret()),
            None => serializer.serialize_none(),
        }
    }
}
