//! Tenant applications, their forms, configs and localizations

use super::Tenant;
use crate::api::{relation, Endpoint};
use crate::error::Result;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Applications {
    tenant: Tenant,
}

impl Applications {
    pub(crate) fn new(tenant: Tenant) -> Self {
        Self { tenant }
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.tenant
            .fetch_list(Endpoint::Applications, &[], relation::APPLICATION)
            .await
    }

    /// Applications are addressed by handle rather than id.
    pub fn application(&self, handle: impl Into<String>) -> Application {
        Application {
            tenant: self.tenant.clone(),
            handle: handle.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Application {
    tenant: Tenant,
    handle: String,
}

impl Application {
    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub async fn get(&self) -> Result<Value> {
        self.tenant.fetch(Endpoint::Application, &[&self.handle]).await
    }

    pub async fn get_config(&self, config_handle: &str) -> Result<Value> {
        self.tenant
            .fetch(Endpoint::ApplicationConfig, &[&self.handle, config_handle])
            .await
    }

    pub async fn get_localization(&self, localization_handle: &str) -> Result<Value> {
        self.tenant
            .fetch(
                Endpoint::ApplicationLocalization,
                &[&self.handle, localization_handle],
            )
            .await
    }

    pub fn forms(&self) -> ApplicationForms {
        ApplicationForms {
            application: self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationForms {
    application: Application,
}

impl ApplicationForms {
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.application
            .tenant
            .fetch_list(
                Endpoint::ApplicationForms,
                &[&self.application.handle],
                relation::APPLICATION_FORM,
            )
            .await
    }

    pub fn form(&self, form_handle: impl Into<String>) -> ApplicationForm {
        ApplicationForm {
            application: self.application.clone(),
            form_handle: form_handle.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationForm {
    application: Application,
    form_handle: String,
}

impl ApplicationForm {
    pub async fn get(&self) -> Result<Value> {
        self.application
            .tenant
            .fetch(
                Endpoint::ApplicationForm,
                &[&self.application.handle, &self.form_handle],
            )
            .await
    }
}
