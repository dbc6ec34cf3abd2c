//! Service modules for record generation and letter composition

pub mod letter_composer;
pub mod pools;
pub mod record_generator;

// Re-export service types
pub use letter_composer::LetterComposer;
pub use pools::ValuePools;
pub use record_generator::RecordGenerator;
