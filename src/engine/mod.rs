// ==========================================
// Ювелирный MES - слой движков
// ==========================================
// Бизнес-правила воскового передела. Движки не держат
// скрытого состояния: входы приходят параметрами, пулы
// трогает только оркестратор и движок жизненного цикла.
// ==========================================

pub mod expander;
pub mod grouper;
pub mod job_builder;
pub mod lifecycle;
pub mod method;
pub mod orchestrator;
pub mod tree_assembler;

// Реэкспорт движков
pub use expander::UnitExpander;
pub use grouper::BatchGrouper;
pub use job_builder::{JobBuildResult, JobBuilder};
pub use lifecycle::{
    AcceptOutcome, LifecycleEngine, LifecycleError, STAGE_ACCEPTED, STAGE_DONE, STAGE_GIVEN,
    STAGE_SYNCED_TO_ERP, STAGE_TREE_READY,
};
pub use method::{classify_by_article, MethodClassifier};
pub use orchestrator::ProductionOrchestrator;
pub use tree_assembler::TreeAssembler;
