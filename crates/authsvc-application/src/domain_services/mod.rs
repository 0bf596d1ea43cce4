//! Supporting services used by the use cases

pub mod code_generator;
pub mod email_templates;

pub use code_generator::RandomCodeGenerator;
pub use email_templates::{EmailTemplate, verification_email};
