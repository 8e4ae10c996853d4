use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderService;
use crate::utils::AppError;

/// Shared server state
///
/// Holds the immutable configuration, the embedded database handle and
/// the JWT service. Cloning is cheap: the database handle and the JWT
/// service are shared, the config is copied.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize all services from the configuration.
    ///
    /// Creates the working directory layout, opens the database and
    /// builds the JWT service from `config.jwt`.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service,
        })
    }

    /// Database handle (cheap clone)
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Order service over this state's database
    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.get_db(), self.config.delivery_fee)
    }
}
