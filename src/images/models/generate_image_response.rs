use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub image: String,
}

impl GenerateImageResponse {
    pub fn from_png(bytes: &[u8]) -> Self {
        Self {
            image: format!("data:image/png;base64,{}", base64::encode(bytes)),
        }
    }
}
