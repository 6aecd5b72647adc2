//! bioskop-api: HTTP CRUD service for cinemas
//!
//! ```text
//! bioskop-api/src/
//! ├── api/       # router, CORS middleware, handlers
//! ├── db/        # repository trait, PostgreSQL + in-memory implementations
//! ├── config.rs  # environment configuration
//! ├── logger.rs  # tracing setup
//! └── state.rs   # shared handler state
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
