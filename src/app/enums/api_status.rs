#[derive(Clone)]
pub enum ApiStatus {
    Online,
    Unconfigured,
}

impl ApiStatus {
    pub fn value(&self) -> String {
        match *self {
            Self::Online => "online".to_string(),
            Self::Unconfigured => "unconfigured".to_string(),
        }
    }
}
