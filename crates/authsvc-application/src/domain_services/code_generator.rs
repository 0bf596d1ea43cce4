//! Random numeric verification codes

use crate::ports::CodeGenerator;
use authsvc_domain::constants::{VERIFICATION_CODE_DIGITS, VERIFICATION_CODE_SPACE};
use rand::Rng;

/// Uniform codes from the thread-local CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let value = rand::rng().random_range(0..VERIFICATION_CODE_SPACE);
        format!("{value:0width$}", width = VERIFICATION_CODE_DIGITS)
    }
}
