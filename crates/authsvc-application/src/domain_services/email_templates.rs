//! HTML bodies for verification emails

use authsvc_domain::value_objects::CodePurpose;
use std::time::Duration;

/// Rendered email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: &'static str,
    pub html_body: String,
}

/// Render the email carrying `code` for `purpose`
pub fn verification_email(purpose: CodePurpose, code: &str, valid_for: Duration) -> EmailTemplate {
    let minutes = valid_for.as_secs().div_ceil(60).max(1);
    let plural = if minutes == 1 { "" } else { "s" };
    let validity = format!("{minutes} minute{plural}");

    match purpose {
        CodePurpose::EmailVerification => EmailTemplate {
            subject: "Verify your email",
            html_body: format!(
                "<html><body>\
                 <h2>Confirm your email address</h2>\
                 <p>Your verification code is:</p>\
                 <p style=\"font-size:24px;font-weight:bold;letter-spacing:4px\">{code}</p>\
                 <p>The code is valid for {validity}.</p>\
                 <p>If you did not create an account, ignore this message.</p>\
                 </body></html>"
            ),
        },
        CodePurpose::ResetPassword => EmailTemplate {
            subject: "Reset your password",
            html_body: format!(
                "<html><body>\
                 <h2>Password reset</h2>\
                 <p>Use this code to set a new password:</p>\
                 <p style=\"font-size:24px;font-weight:bold;letter-spacing:4px\">{code}</p>\
                 <p>The code is valid for {validity}.</p>\
                 <p>If you did not request a reset, your password stays unchanged.</p>\
                 </body></html>"
            ),
        },
    }
}
