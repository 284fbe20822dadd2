use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

use crate::user::errors::ValidationErrors;

const REGISTER: &str = "register";
const LOGIN: &str = "login";
const DASHBOARD: &str = "dashboard";

/// Error for template registration and rendering
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Context for the register and login forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub errors: Vec<FieldErrorView>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorView {
    pub field: String,
    pub message: String,
}

impl FormView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            errors: Vec::new(),
            error: Some(message.into()),
        }
    }
}

impl From<&ValidationErrors> for FormView {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            errors: errors
                .iter()
                .map(|e| FieldErrorView {
                    field: e.field.to_string(),
                    message: e.message.clone(),
                })
                .collect(),
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DashboardView<'a> {
    user: &'a str,
}

/// Embedded HTML templates for the three pages.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, ViewError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(
            REGISTER,
            include_str!("../../../../templates/register.hbs"),
        )?;
        registry.register_template_string(LOGIN, include_str!("../../../../templates/login.hbs"))?;
        registry.register_template_string(
            DASHBOARD,
            include_str!("../../../../templates/dashboard.hbs"),
        )?;

        Ok(Self { registry })
    }

    pub fn register(&self, form: &FormView) -> Result<String, ViewError> {
        Ok(self.registry.render(REGISTER, form)?)
    }

    pub fn login(&self, form: &FormView) -> Result<String, ViewError> {
        Ok(self.registry.render(LOGIN, form)?)
    }

    pub fn dashboard(&self, user: &str) -> Result<String, ViewError> {
        Ok(self.registry.render(DASHBOARD, &DashboardView { user })?)
    }
}
