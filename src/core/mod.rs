pub mod error;

pub use error::{AppError, ErrorBody, ErrorDetail, Result};
