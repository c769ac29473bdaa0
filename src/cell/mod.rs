// ============================================================================
// Cell Module
// Mutable holder for compound assignment on immutable values
// ============================================================================

mod mutable;

pub use mutable::Mut;
