use crate::phone;
use safar_shared::models::submission::{BookingSubmission, EnquirySubmission};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is missing or empty: {0}")]
    MissingField(&'static str),

    #[error("phone number is not valid")]
    InvalidPhone,

    #[error("terms and conditions must be accepted")]
    TermsNotAccepted,
}

/// Dispatch eligibility for a booking. Check order follows the form
/// handler: terms first, then the phone shape, then required text fields.
/// No side effects on failure.
pub fn validate_booking(submission: &BookingSubmission) -> Result<(), ValidationError> {
    if !submission.agree_to_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    if !phone::validate_phone_number(submission.phone.as_str()) {
        return Err(ValidationError::InvalidPhone);
    }
    require("name", &submission.name)?;
    require("email", submission.email.as_str())?;
    Ok(())
}

/// Dispatch eligibility for an enquiry.
pub fn validate_enquiry(submission: &EnquirySubmission) -> Result<(), ValidationError> {
    if !phone::validate_phone_number(submission.phone.as_str()) {
        return Err(ValidationError::InvalidPhone);
    }
    require("name", &submission.name)?;
    require("email", submission.email.as_str())?;
    require("destination", &submission.destination)?;
    require("message", &submission.message)?;
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
