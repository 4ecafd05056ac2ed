use std::collections::HashMap;

use crate::domain::errors::SignInError;

// Registration fields captured by the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), SignInError> {
        require("first name", &self.first_name)?;
        require("last name", &self.last_name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;

        if !self.email.contains('@') {
            return Err(SignInError::Validation(
                "email must be a valid address".to_string(),
            ));
        }
        Ok(())
    }
}

/// Credential handed to the session exchange.
///
/// Built at form submission and dropped once the exchange resolves. Email
/// credentials can only be constructed through [`IdentityCredential::email_password`],
/// which rejects missing fields before anything touches the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityCredential {
    EmailPassword { email: String, password: String },
    OAuthToken(String),
    SignUp(SignUpForm),
}

impl IdentityCredential {
    pub fn email_password(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, SignInError> {
        let email = require("email", email.unwrap_or_default())?;
        let password = require("password", password.unwrap_or_default())?;

        Ok(IdentityCredential::EmailPassword {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    // String-keyed parameters posted to the session or registration endpoint.
    pub fn params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        match self {
            IdentityCredential::EmailPassword { email, password } => {
                params.insert("email".to_string(), email.clone());
                params.insert("password".to_string(), password.clone());
            }
            IdentityCredential::OAuthToken(token) => {
                params.insert("oauth_access_token".to_string(), token.clone());
            }
            IdentityCredential::SignUp(form) => {
                params.insert("first_name".to_string(), form.first_name.clone());
                params.insert("last_name".to_string(), form.last_name.clone());
                params.insert("email".to_string(), form.email.clone());
                params.insert("phone".to_string(), form.phone.clone());
                params.insert("password".to_string(), form.password.clone());
            }
        }
        params
    }
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, SignInError> {
    if value.trim().is_empty() {
        return Err(SignInError::Validation(format!("{field} is required")));
    }
    Ok(value)
}
