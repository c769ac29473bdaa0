// ============================================================================
// Runtime Module
// Configuration for values whose declared type is chosen at run time
// ============================================================================

mod config;

pub use config::RuntimeConfig;
