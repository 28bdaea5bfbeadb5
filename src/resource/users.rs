//! Users, registration and the current user

use super::Tenant;
use crate::api::{relation, requests, Endpoint};
use crate::error::Result;
use serde_json::Value;

/// Accessor for user registration and account operations.
#[derive(Debug, Clone)]
pub struct Users {
    tenant: Tenant,
}

impl Users {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    /// Whether `email_address` can still be used to create a user.
    ///
    /// A missing address is a validation error. Any rejection from the
    /// server means "not available" and yields `Ok(false)`.
    pub async fn is_email_available(&self, email_address: &str) -> Result<bool> {
        let request = requests::is_email_available(email_address)?;
        match self.tenant.execute(request).await {
            Ok(_) => Ok(true),
            Err(err) => {
                tracing::debug!("Email address not available: {}", err);
                Ok(false)
            },
        }
    }

    /// Create a user. An issued token is stored on the session and added to
    /// the returned body as `authenticationToken`.
    pub async fn create(&self, email_address: &str, password: Option<&str>) -> Result<Value> {
        let request = requests::create_user(email_address, password)?;
        let (token, mut body) = self.tenant.execute_issuing_token(request).await?;

        if let (Some(token), Value::Object(map)) = (token, &mut body) {
            map.insert("authenticationToken".to_string(), Value::String(token));
        }

        Ok(body)
    }

    pub async fn request_invitation(&self, email_address: &str) -> Result<Value> {
        self.tenant
            .execute(requests::request_invitation(email_address)?)
            .await
    }

    /// Activate a user; returns the issued token.
    pub async fn activate(&self, user_id: &str, activation_code: &str) -> Result<Option<String>> {
        let request = requests::activate_user(user_id, activation_code)?;
        let (token, _) = self.tenant.execute_issuing_token(request).await?;
        Ok(token)
    }

    /// Resend the activation code to `email_address`.
    pub async fn activation_request(&self, email_address: &str) -> Result<Value> {
        self.tenant
            .execute(requests::activation_request(email_address)?)
            .await
    }

    pub fn me(&self) -> Me {
        Me::new(self.tenant.clone())
    }

    pub async fn password_reset_request(&self, email_address: &str) -> Result<Value> {
        self.tenant
            .execute(requests::password_reset_request(email_address)?)
            .await
    }

    /// Set a new password using a reset code; returns the issued token.
    pub async fn password_reset(
        &self,
        user_id: &str,
        password_reset_code: &str,
        password: &str,
    ) -> Result<Option<String>> {
        let request = requests::password_reset(user_id, password_reset_code, password)?;
        let (token, _) = self.tenant.execute_issuing_token(request).await?;
        Ok(token)
    }

    pub async fn list_authentications(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Authentications, &[], relation::AUTHENTICATION)
            .await
    }

    pub async fn delete_authentication(&self, authentication_id: &str) -> Result<Value> {
        self.tenant
            .execute(requests::delete_authentication(authentication_id)?)
            .await
    }

    /// Registration status of an address (`NotRegistered`,
    /// `ActivationRequired`, `NotAuthenticatable` or `Active`).
    pub async fn check_registration_status(&self, email_address: &str) -> Result<Value> {
        self.tenant
            .execute(requests::check_registration_status(email_address)?)
            .await
    }

    pub async fn change_password(&self, new_password: &str) -> Result<Value> {
        self.tenant
            .execute(requests::change_password(new_password)?)
            .await
    }

    pub async fn get_person(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::Person, &[]).await
    }

    pub async fn get_roles(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Roles, &[], relation::ROLE)
            .await
    }

    pub async fn add_person_role(&self, role_id: &str) -> Result<Value> {
        self.tenant.execute(requests::add_person_role(role_id)?).await
    }

    pub async fn remove_person_role(&self, role_id: &str) -> Result<Value> {
        self.tenant
            .execute(requests::remove_person_role(role_id)?)
            .await
    }
}

/// Accessor for the authenticated user.
#[derive(Debug, Clone)]
pub struct Me {
    tenant: Tenant,
}

impl Me {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::Me, &[]).await
    }

    pub async fn edit(&self, data: &Value) -> Result<Value> {
        self.tenant.execute(requests::edit_me(data)?).await
    }
}
