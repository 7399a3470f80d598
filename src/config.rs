// Runtime configuration. The original tool hard-coded its paths; here
// they are resolved once from the environment and threaded through the
// selection and request stages as an immutable struct.

use std::env;
use std::path::PathBuf;

const DEFAULT_IMAGES_DIR: &str = "images";
const DEFAULT_CREDENTIALS_PATH: &str = "credentials/vision-api-service-account.json";
const DEFAULT_BASE_URL: &str = "https://vision.googleapis.com/v1";

/// Settings for one annotation run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the image menu is built from.
    pub images_dir: PathBuf,
    /// Service-account key file read once at startup.
    pub credentials_path: PathBuf,
    /// Base URL of the annotate endpoint, overridable for testing.
    pub base_url: String,
}

impl AppConfig {
    /// Create a config from the environment variables `VISION_IMAGES_DIR`,
    /// `VISION_CREDENTIALS` and `VISION_API_URL`, falling back to the
    /// relative paths the tool has always used.
    pub fn from_env() -> Self {
        let images_dir = env::var("VISION_IMAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_IMAGES_DIR));
        let credentials_path = env::var("VISION_CREDENTIALS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_PATH));
        let base_url = env::var("VISION_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        AppConfig {
            images_dir,
            credentials_path,
            base_url,
        }
    }
}
