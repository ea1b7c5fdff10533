//! The rendering layer.
//!
//! Handlers return a [`View`]: a template name plus a render context (a
//! key-value bag). The [`Templates`] registry registered as app data turns
//! it into an HTML response.

pub mod users;

use std::collections::HashMap;

use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{
    CODE_TEMPLATE_ERROR, ERR_MISSING_CONTEXT, ERR_NO_TEMPLATES, ERR_UNKNOWN_VIEW, VIEW_USER_EDIT,
    VIEW_USER_FORM, VIEW_USER_LIST,
};
use crate::errors::ApiError;

/// Key-value bag handed to a template.
pub type RenderContext = Map<String, Value>;

/// A template turns a render context into an HTML document.
pub type Template = fn(&RenderContext) -> Result<String, ApiError>;

/// A view selection plus the data it renders.
#[derive(Debug, Clone)]
pub struct View {
    name: &'static str,
    context: RenderContext,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            context: RenderContext::new(),
        }
    }

    /// Add `value` to the render context under `key`.
    pub fn with<T: Serialize>(mut self, key: &str, value: &T) -> Result<Self, ApiError> {
        self.context
            .insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }
}

impl Responder for View {
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        let rendered = match req.app_data::<web::Data<Templates>>() {
            Some(templates) => templates.render(&self),
            None => Err(ApiError::internal(CODE_TEMPLATE_ERROR, ERR_NO_TEMPLATES)),
        };

        match rendered {
            Ok(html) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(html),
            Err(err) => {
                error!("Failed to render view '{}': {}", self.name(), err);
                err.error_response()
            }
        }
    }
}

/// Registry of templates keyed by view name.
pub struct Templates {
    templates: HashMap<&'static str, Template>,
}

impl Templates {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn register(mut self, name: &'static str, template: Template) -> Self {
        self.templates.insert(name, template);
        self
    }

    pub fn render(&self, view: &View) -> Result<String, ApiError> {
        let template = self.templates.get(view.name()).ok_or_else(|| {
            ApiError::internal(
                CODE_TEMPLATE_ERROR,
                format!("{}: {}", ERR_UNKNOWN_VIEW, view.name()),
            )
        })?;
        template(view.context())
    }
}

impl Default for Templates {
    fn default() -> Self {
        Templates::empty()
            .register(VIEW_USER_FORM, users::create_form)
            .register(VIEW_USER_LIST, users::list)
            .register(VIEW_USER_EDIT, users::edit_form)
    }
}

/// Pull `key` out of the context as a `T`.
pub fn context_entry<T: DeserializeOwned>(
    context: &RenderContext,
    key: &str,
) -> Result<T, ApiError> {
    let value = context.get(key).ok_or_else(|| {
        ApiError::internal(
            CODE_TEMPLATE_ERROR,
            format!("{}: {}", ERR_MISSING_CONTEXT, key),
        )
    })?;
    Ok(T::deserialize(value)?)
}

/// Wrap `body` in the shared page layout.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        crate::utils::escape_html(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CTX_USER;
    use crate::models::User;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    fn echo(context: &RenderContext) -> Result<String, ApiError> {
        let user: User = context_entry(context, CTX_USER)?;
        Ok(user.name)
    }

    #[test]
    fn test_with_serializes_into_context() {
        let view = View::new("echo").with(CTX_USER, &User::new("Alice", 30)).unwrap();
        assert_eq!(view.name(), "echo");
        assert_eq!(view.context()[CTX_USER]["name"], "Alice");
        assert_eq!(view.context()[CTX_USER]["age"], 30);
    }

    #[test]
    fn test_render_dispatches_by_name() {
        let templates = Templates::empty().register("echo", echo);
        let view = View::new("echo").with(CTX_USER, &User::new("Alice", 30)).unwrap();
        assert_eq!(templates.render(&view).unwrap(), "Alice");
    }

    #[test]
    fn test_unknown_view_is_template_error() {
        let err = Templates::empty().render(&View::new("missing")).unwrap_err();
        assert_eq!(err.code(), CODE_TEMPLATE_ERROR);
    }

    #[test]
    fn test_missing_context_entry_is_template_error() {
        let templates = Templates::empty().register("echo", echo);
        let err = templates.render(&View::new("echo")).unwrap_err();
        assert_eq!(err.code(), CODE_TEMPLATE_ERROR);
    }

    #[test]
    fn test_responder_without_registry_is_server_error() {
        let req = TestRequest::default().to_http_request();
        let resp = View::new("echo").respond_to(&req);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_responder_renders_html() {
        let templates = web::Data::new(Templates::empty().register("echo", echo));
        let req = TestRequest::default().app_data(templates).to_http_request();
        let view = View::new("echo").with(CTX_USER, &User::new("Alice", 30)).unwrap();

        let resp = view.respond_to(&req);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
