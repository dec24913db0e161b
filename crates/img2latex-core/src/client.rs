use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::consts::LATEX_FIELD;
use crate::error::{ConvertError, Result};
use crate::selection::SelectedImage;

/// Anything that can turn an image into LaTeX.
///
/// `Ok(None)` means the service answered successfully but carried no
/// LaTeX field.
pub trait LatexService: Send + Sync {
    fn convert(&self, image: &SelectedImage) -> Result<Option<String>>;
}

/// Uploads images as `multipart/form-data` to the configured endpoint.
pub struct HttpLatexClient {
    client: reqwest::blocking::Client,
    config: ServiceConfig,
}

impl HttpLatexClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("img2latex/", env!("CARGO_PKG_VERSION")))
            // The blocking client defaults to 30s; uploads wait for the service instead.
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn build_form(&self, image: &SelectedImage) -> Result<Form> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.mime())?;
        Ok(Form::new().part(self.config.field_name.clone(), part))
    }
}

impl LatexService for HttpLatexClient {
    fn convert(&self, image: &SelectedImage) -> Result<Option<String>> {
        info!(
            "POST {} ({}, {} bytes, field '{}')",
            self.config.endpoint,
            image.name(),
            image.len(),
            self.config.field_name
        );

        let form = self.build_form(image)?;
        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!("Response body: {} bytes", body.len());
        parse_latex_body(&body)
    }
}

/// Extract the LaTeX field from a success body.
///
/// The body must be a JSON object. A missing, null or non-string `latex`
/// field is reported as `Ok(None)`.
pub fn parse_latex_body(body: &str) -> Result<Option<String>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ConvertError::MalformedBody(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(ConvertError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    };

    Ok(map
        .get(LATEX_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string))
}
