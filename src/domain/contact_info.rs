use serde::Serialize;

// Display contact details for the signed-in user. Every field is optional;
// a provider that cannot supply one leaves it empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub avatar_url: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}
