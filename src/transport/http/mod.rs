pub mod router;
pub mod types;
pub mod handlers {
    pub mod guess;
    pub mod health;
    pub mod history;
    pub mod puzzle;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
