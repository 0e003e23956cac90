mod import_engine;

pub use import_engine::{ImportEngine, ImportSummary};
