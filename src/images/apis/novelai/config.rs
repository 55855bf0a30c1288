pub static MODEL: &str = "nai-diffusion-3";
pub static ACTION: &str = "generate";
pub static NOISE_SCHEDULE: &str = "native";
