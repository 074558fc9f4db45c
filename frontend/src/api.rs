use crate::config;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{Location, PredictionResult, Sex};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Patient details typed into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatientDetails {
    pub age: String,
    pub sex: Option<Sex>,
    pub localization: Option<Location>,
}

/// Everything one submission sends.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm<F> {
    pub details: PatientDetails,
    pub image: Option<F>,
}

impl<F> PredictionForm<F> {
    /// Scalar parts in wire order. Unset selects go out empty and the
    /// service decides what to do with them.
    pub fn text_fields(&self) -> [(&'static str, String); 3] {
        let details = &self.details;
        [
            (config::AGE_FIELD, details.age.trim().to_string()),
            (
                config::SEX_FIELD,
                details.sex.map(Sex::token).unwrap_or_default().to_string(),
            ),
            (
                config::LOCALIZATION_FIELD,
                details.localization.map(Location::token).unwrap_or_default(),
            ),
        ]
    }
}

impl PredictionForm<GlooFile> {
    fn to_form_data(&self) -> Result<FormData, SubmitError> {
        let data = FormData::new().map_err(request_error)?;

        if let Some(image) = &self.image {
            data.append_with_blob_and_filename(config::IMAGE_FIELD, image.as_ref(), &image.name())
                .map_err(request_error)?;
        }

        for (name, value) in self.text_fields() {
            data.append_with_str(name, &value).map_err(request_error)?;
        }

        Ok(data)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Server error: {status} - {body}")]
    Server { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Malformed(String),
}

impl SubmitError {
    /// The only text end users ever see; details stay in the console.
    pub fn user_message(&self) -> &'static str {
        config::GENERIC_FAILURE_MESSAGE
    }
}

fn request_error(e: JsValue) -> SubmitError {
    SubmitError::Request(format!("{:?}", e))
}

pub async fn submit_prediction(
    form: PredictionForm<GlooFile>,
) -> Result<PredictionResult, SubmitError> {
    let body = form.to_form_data()?;

    let response = Request::post(config::PREDICT_ENDPOINT)
        .body(body)
        .map_err(|e| SubmitError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SubmitError::Server { status, body });
    }

    let text = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    serde_json::from_str(&text).map_err(|e| SubmitError::Malformed(e.to_string()))
}
