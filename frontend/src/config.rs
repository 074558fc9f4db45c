//! Build-time settings for the prediction client.

pub const PREDICT_ENDPOINT: &str = match option_env!("PREDICT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/api/predict",
};

// Multipart part names expected by the analysis service
pub const IMAGE_FIELD: &str = "image";
pub const AGE_FIELD: &str = "age";
pub const SEX_FIELD: &str = "sex";
pub const LOCALIZATION_FIELD: &str = "localization";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const SUBMIT_LABEL: &str = "Analyze Image";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during analysis. Please try again.";
pub const INVALID_FILE_MESSAGE: &str = "Please upload an image file";
