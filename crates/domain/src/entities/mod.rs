//! Domain entities - Core business objects with identity

mod dinosaur;
mod security;

pub use dinosaur::Dinosaur;
pub use security::Security;
