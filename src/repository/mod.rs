// ==========================================
// Ювелирный MES - слой пулов
// ==========================================
// Четыре пула в памяти, каждый под своим мьютексом:
// заказы, наряды, зона комплектования, ёлки.
// Пулы не содержат бизнес-логики - только хранение и выборка.
// ==========================================

pub mod error;
pub mod order_repo;
pub mod staging_repo;
pub mod tree_repo;
pub mod wax_job_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use order_repo::{InsertOutcome, OrderRepository};
pub use staging_repo::AssemblyStagingRepository;
pub use tree_repo::TreeRepository;
pub use wax_job_repo::{LineUpdate, WaxJobRepository};

use std::sync::Arc;

// ==========================================
// ProductionRepositories - связка пулов
// ==========================================
// Общая точка доступа для движков и API-фасада.
#[derive(Clone)]
pub struct ProductionRepositories {
    pub orders: Arc<OrderRepository>,
    pub wax_jobs: Arc<WaxJobRepository>,
    pub staging: Arc<AssemblyStagingRepository>,
    pub trees: Arc<TreeRepository>,
}

impl ProductionRepositories {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(OrderRepository::new()),
            wax_jobs: Arc::new(WaxJobRepository::new()),
            staging: Arc::new(AssemblyStagingRepository::new()),
            trees: Arc::new(TreeRepository::new()),
        }
    }
}

impl Default for ProductionRepositories {
    fn default() -> Self {
        Self::new()
    }
}
