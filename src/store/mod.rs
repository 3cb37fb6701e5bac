//! Durable session state
//! 
//! Mastery scores and the skill catalog live in small pretty-printed JSON
//! documents. Every save replaces the whole file.

pub mod document;
pub mod mastery;
pub mod catalog;
pub mod reference;

// Re-export commonly used types
pub use catalog::SkillCatalog;
pub use mastery::MasteryStore;
pub use reference::read_reference;
