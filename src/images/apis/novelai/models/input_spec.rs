use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub input: String,
    pub model: String,
    pub action: String,
    pub parameters: InputSpecParameters,
}

#[derive(Debug, Serialize)]
pub struct InputSpecParameters {
    pub width: i64,
    pub height: i64,
    pub scale: f64,
    pub sampler: String,
    pub steps: i64,
    pub n_samples: u8,
    #[serde(rename = "ucPreset")]
    pub uc_preset: u8,
    #[serde(rename = "qualityToggle")]
    pub quality_toggle: bool,
    pub sm: bool,
    pub sm_dyn: bool,
    pub dynamic_thresholding: bool,
    pub controlnet_strength: u8,
    pub legacy: bool,
    pub add_original_image: bool,
    pub uncond_scale: u8,
    pub cfg_rescale: u8,
    pub noise_schedule: String,
    pub negative_prompt: String,
}
