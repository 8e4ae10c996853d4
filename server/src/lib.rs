//! QR Dine Server - restaurant ordering backend
//!
//! # Overview
//!
//! Backend for a QR-code ordering flow: admins manage the menu and the
//! dining tables (each table carries an ordering link for its printed QR
//! code), customers place dine-in or home-delivery orders against the
//! live menu, and the kitchen drives each order through its status
//! lifecycle.
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/    # config, shared state, HTTP server
//! ├── auth/    # admin JWT sessions and the route guard
//! ├── api/     # HTTP routes and handlers
//! ├── orders/  # placement validation, pricing, lifecycle, read views
//! ├── db/      # embedded SurrealDB, models, repositories
//! └── utils/   # errors, response envelope, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export common types
pub use auth::{CurrentAdmin, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::{OrderService, OrderView};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging.
///
/// Called once at process start, before the config is read. `LOG_DIR`
/// switches output to a daily-rolled file in that directory.
pub fn setup_environment() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    match std::env::var("LOG_DIR") {
        Ok(dir) => init_logger_with_file(None, Some(&dir)),
        Err(_) => init_logger(),
    }
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____  ____     ____  _
  / __ \/ __ \   / __ \(_)___  ___
 / / / / /_/ /  / / / / / __ \/ _ \
/ /_/ / _, _/  / /_/ / / / / /  __/
\___\_\_/ |_|  /_____/_/_/ /_/\___/
    "#
    );
}
