use courseledger::application::engine::EnrollmentEngine;
use courseledger::domain::catalog::Catalog;
use courseledger::infrastructure::in_memory::InMemoryKvStore;

pub fn in_memory_engine() -> EnrollmentEngine {
    EnrollmentEngine::new(Box::new(InMemoryKvStore::new()), Catalog::new())
}

pub fn catalog_names() -> Vec<&'static str> {
    Catalog::new().courses().map(|c| c.name).collect()
}
