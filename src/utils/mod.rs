mod error;
mod params;
mod response;

pub use error::{CalculationError, ErrorResponse, PersistenceError};
pub use params::{get_field, parse_body};
pub use response::{
    ApiResponse, CONTENT_TYPE_JSON, CORS_HEADERS, add_cors_headers, json_response,
};
