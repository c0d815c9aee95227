pub mod data_uri;
pub mod error;
pub mod svg;
pub mod validation;
