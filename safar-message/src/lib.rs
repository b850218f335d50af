use chrono::Utc;
use safar_shared::models::submission::{BookingSubmission, EnquirySubmission};
use std::fmt;

/// Placeholder rendered for optional choice fields the traveler skipped.
const NOT_SPECIFIED: &str = "Not specified";
/// Placeholder rendered for an empty special-requests box.
const NONE_GIVEN: &str = "None";

/// Render a booking request into the operator-readable message. Layout
/// and wording are fixed; only field values vary. Never fails, including
/// for submissions with every optional field empty.
pub fn format_booking_message(submission: &BookingSubmission) -> String {
    format!(
        "🏛️ *NEW BOOKING REQUEST - DISCOVER GUJARAT*\n\
         \n\
         👤 *Personal Details:*\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         \n\
         🗺️ *Trip Details:*\n\
         Destination: {destination}\n\
         Check-in Date: {check_in}\n\
         Check-out Date: {check_out}\n\
         Number of Guests: {guests}\n\
         Travel Type: {travel_type}\n\
         \n\
         🏨 *Accommodation:*\n\
         Room Type: {room_type}\n\
         Budget Range: {budget}\n\
         \n\
         📝 *Special Requests:*\n\
         {special_requests}\n\
         \n\
         ✅ Terms & Conditions: Agreed\n\
         \n\
         ---\n\
         *Thank you for choosing Discover Gujarat! We'll get back to you within 24 hours with a customized itinerary and pricing.*\n\
         \n\
         *Booking ID: {id}*",
        name = submission.name,
        email = submission.email.as_str(),
        phone = submission.phone.as_str(),
        destination = submission.destination,
        check_in = submission.check_in,
        check_out = submission.check_out,
        guests = submission.guests,
        travel_type = or_not_specified(submission.travel_type.as_ref()),
        room_type = or_not_specified(submission.room_type.as_ref()),
        budget = or_not_specified(submission.budget.as_ref()),
        special_requests = free_text_or_none(submission.special_requests.as_deref()),
        id = display_id(),
    )
}

/// Render a general enquiry into the operator-readable message.
pub fn format_enquiry_message(submission: &EnquirySubmission) -> String {
    format!(
        "📞 *NEW ENQUIRY - DISCOVER GUJARAT*\n\
         \n\
         👤 *Contact Details:*\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         \n\
         🗺️ *Interest:*\n\
         Destination: {destination}\n\
         \n\
         📝 *Message:*\n\
         {message}\n\
         \n\
         ---\n\
         *Thank you for your interest in Gujarat! We'll respond to your enquiry shortly.*\n\
         \n\
         *Enquiry ID: {id}*",
        name = submission.name,
        email = submission.email.as_str(),
        phone = submission.phone.as_str(),
        destination = submission.destination,
        message = submission.message,
        id = display_id(),
    )
}

fn or_not_specified<T: fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => NOT_SPECIFIED.to_string(),
    }
}

fn free_text_or_none(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => NONE_GIVEN,
    }
}

/// Display-only id printed at the foot of the message, so the traveler
/// and operator can refer to the same request. Independent of the backup
/// record id.
fn display_id() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use safar_shared::models::submission::{
        BudgetRange, Destination, GuestCount, RoomType, TravelType,
    };

    fn minimal_booking() -> BookingSubmission {
        BookingSubmission {
            name: "Asha Patel".to_string(),
            email: "asha@example.com".into(),
            phone: "+91 9876543210".into(),
            destination: Destination::Kutch,
            check_in: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
            guests: GuestCount::TenPlus,
            room_type: None,
            budget: None,
            travel_type: None,
            special_requests: None,
            agree_to_terms: true,
        }
    }

    #[test]
    fn empty_optionals_render_placeholders() {
        let message = format_booking_message(&minimal_booking());
        assert!(message.contains("Room Type: Not specified"));
        assert!(message.contains("Budget Range: Not specified"));
        assert!(message.contains("Travel Type: Not specified"));
        assert!(message.contains("*Special Requests:*\nNone"));
    }

    #[test]
    fn booking_sections_and_fields_are_present() {
        let mut submission = minimal_booking();
        submission.room_type = Some(RoomType::HeritageRoom);
        submission.budget = Some(BudgetRange::UpTo20k);
        submission.travel_type = Some(TravelType::FamilyTrip);
        submission.special_requests = Some("Wheelchair access".to_string());

        let message = format_booking_message(&submission);
        assert!(message.contains("*Personal Details:*"));
        assert!(message.contains("*Trip Details:*"));
        assert!(message.contains("*Accommodation:*"));
        assert!(message.contains("*Special Requests:*"));
        assert!(message.contains("Name: Asha Patel"));
        assert!(message.contains("Phone: +91 9876543210"));
        assert!(message.contains("Destination: Kutch (Rann of Kutch)"));
        assert!(message.contains("Check-in Date: 2025-12-20"));
        assert!(message.contains("Number of Guests: 10+"));
        assert!(message.contains("Room Type: Heritage Room"));
        assert!(message.contains("Budget Range: ₹10,000 - ₹20,000 per person"));
        assert!(message.contains("Wheelchair access"));
        assert!(message.contains("Terms & Conditions: Agreed"));
        assert!(message.contains("*Booking ID: "));
    }

    #[test]
    fn whitespace_only_special_requests_render_as_none() {
        let mut submission = minimal_booking();
        submission.special_requests = Some("   ".to_string());
        let message = format_booking_message(&submission);
        assert!(message.contains("*Special Requests:*\nNone"));
    }

    #[test]
    fn enquiry_sections_and_fields_are_present() {
        let submission = EnquirySubmission {
            name: "Ravi Shah".to_string(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            destination: "Saputara".to_string(),
            message: "Looking for a weekend plan.".to_string(),
        };

        let message = format_enquiry_message(&submission);
        assert!(message.contains("*Contact Details:*"));
        assert!(message.contains("*Interest:*"));
        assert!(message.contains("*Message:*"));
        assert!(message.contains("Destination: Saputara"));
        assert!(message.contains("Looking for a weekend plan."));
        assert!(message.contains("*Enquiry ID: "));
    }
}
