// ============================================================================
// Exception Module
// Two-state success/failure container
// ============================================================================

mod container;
mod errors;

pub use container::{Exception, ExceptionState};
pub use errors::InvalidStateError;
