use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub static DEFAULT_NEGATIVE_PROMPT: &str = "lowres, bad anatomy, bad hands, text, error, missing fingers, extra digit, fewer digits, cropped, worst quality, low quality, normal quality, jpeg artifacts, signature, watermark, username, blurry";
pub static DEFAULT_SAMPLER: &str = "k_euler_ancestral";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateImageDto {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_negative_prompt")]
    pub negative_prompt: String,
    #[serde(default = "default_width", deserialize_with = "integer")]
    pub width: i64,
    #[serde(default = "default_height", deserialize_with = "integer")]
    pub height: i64,
    #[serde(default = "default_steps", deserialize_with = "integer")]
    pub steps: i64,
    #[serde(default = "default_sampler")]
    pub sampler: String,
    #[serde(default = "default_true")]
    pub sm: bool,
    #[serde(default = "default_true")]
    pub sm_dyn: bool,
    #[serde(default = "default_scale", deserialize_with = "float")]
    pub scale: f64,
}

impl GenerateImageDto {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

impl Default for GenerateImageDto {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            negative_prompt: default_negative_prompt(),
            width: default_width(),
            height: default_height(),
            steps: default_steps(),
            sampler: default_sampler(),
            sm: true,
            sm_dyn: true,
            scale: default_scale(),
        }
    }
}

fn default_negative_prompt() -> String {
    DEFAULT_NEGATIVE_PROMPT.to_string()
}

fn default_width() -> i64 {
    832
}

fn default_height() -> i64 {
    1216
}

fn default_steps() -> i64 {
    28
}

fn default_sampler() -> String {
    DEFAULT_SAMPLER.to_string()
}

fn default_true() -> bool {
    true
}

fn default_scale() -> f64 {
    5.0
}

// Clients send sizes as numbers, floats or numeric strings. Range checks are
// left to NovelAI.
fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let parsed = match &value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => None,
    };

    parsed.ok_or_else(|| de::Error::custom(format!("invalid integer value: {}", value)))
}

// NaN and infinity would serialize as null upstream.
fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let parsed = match &value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| de::Error::custom(format!("invalid float value: {}", value)))
}
