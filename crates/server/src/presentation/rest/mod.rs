mod dto;
mod error;
mod handlers;
mod router;

pub use dto::*;
pub use error::ApiError;
pub use handlers::USER_ID_HEADER;
pub use router::{AppState, create_router};
