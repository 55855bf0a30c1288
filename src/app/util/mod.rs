pub mod panic;
pub mod reqwest;
