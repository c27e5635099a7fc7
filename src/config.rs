use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the image upload path
#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// Largest accepted upload payload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Content type sent when streaming a stored image
    #[serde(default = "default_stream_content_type")]
    pub stream_content_type: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            max_upload_bytes: default_max_upload_bytes(),
            stream_content_type: default_stream_content_type(),
        }
    }
}

// Default value functions
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_stream_content_type() -> String {
    "image/jpeg".to_string()
}

impl ImageConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_IMAGES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_IMAGES__MAX_UPLOAD_BYTES
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_IMAGES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
