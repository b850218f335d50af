use crate::pii::Masked;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destinations offered on the booking form, plus the catch-all for
/// multi-stop trips.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Destination {
    Ahmedabad,
    #[serde(rename = "Kutch (Rann of Kutch)")]
    Kutch,
    #[serde(rename = "Gir National Park")]
    GirNationalPark,
    Dwarka,
    #[serde(rename = "Statue of Unity")]
    StatueOfUnity,
    Somnath,
    Vadodara,
    Rajkot,
    Bhuj,
    Diu,
    Saputara,
    Palitana,
    #[serde(rename = "Multiple Destinations")]
    MultipleDestinations,
}

impl Destination {
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Ahmedabad => "Ahmedabad",
            Destination::Kutch => "Kutch (Rann of Kutch)",
            Destination::GirNationalPark => "Gir National Park",
            Destination::Dwarka => "Dwarka",
            Destination::StatueOfUnity => "Statue of Unity",
            Destination::Somnath => "Somnath",
            Destination::Vadodara => "Vadodara",
            Destination::Rajkot => "Rajkot",
            Destination::Bhuj => "Bhuj",
            Destination::Diu => "Diu",
            Destination::Saputara => "Saputara",
            Destination::Palitana => "Palitana",
            Destination::MultipleDestinations => "Multiple Destinations",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guest count as selected on the form: an exact count of 1 to 10, or the
/// open-ended "10+" option. "10+" is an opaque label and is never parsed
/// as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GuestCount {
    Count(u8),
    TenPlus,
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestCount::Count(n) => write!(f, "{}", n),
            GuestCount::TenPlus => f.write_str("10+"),
        }
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=10).contains(&value) {
            Ok(GuestCount::Count(value))
        } else {
            Err(format!("guest count out of range: {}", value))
        }
    }
}

impl FromStr for GuestCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "10+" {
            return Ok(GuestCount::TenPlus);
        }
        let count: u8 = s
            .parse()
            .map_err(|_| format!("invalid guest count: {}", s))?;
        GuestCount::try_from(count)
    }
}

impl From<GuestCount> for String {
    fn from(value: GuestCount) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for GuestCount {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Accommodation options offered on the booking form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomType {
    #[serde(rename = "Standard Room")]
    StandardRoom,
    #[serde(rename = "Deluxe Room")]
    DeluxeRoom,
    Suite,
    #[serde(rename = "Family Room")]
    FamilyRoom,
    #[serde(rename = "Heritage Room")]
    HeritageRoom,
    #[serde(rename = "Tent/Camp")]
    TentCamp,
    Homestay,
    #[serde(rename = "Resort Villa")]
    ResortVilla,
}

impl RoomType {
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::StandardRoom => "Standard Room",
            RoomType::DeluxeRoom => "Deluxe Room",
            RoomType::Suite => "Suite",
            RoomType::FamilyRoom => "Family Room",
            RoomType::HeritageRoom => "Heritage Room",
            RoomType::TentCamp => "Tent/Camp",
            RoomType::Homestay => "Homestay",
            RoomType::ResortVilla => "Resort Villa",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-person budget buckets, as free-text labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetRange {
    #[serde(rename = "₹5,000 - ₹10,000 per person")]
    UpTo10k,
    #[serde(rename = "₹10,000 - ₹20,000 per person")]
    UpTo20k,
    #[serde(rename = "₹20,000 - ₹35,000 per person")]
    UpTo35k,
    #[serde(rename = "₹35,000 - ₹50,000 per person")]
    UpTo50k,
    #[serde(rename = "₹50,000+ per person")]
    Above50k,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::UpTo10k => "₹5,000 - ₹10,000 per person",
            BudgetRange::UpTo20k => "₹10,000 - ₹20,000 per person",
            BudgetRange::UpTo35k => "₹20,000 - ₹35,000 per person",
            BudgetRange::UpTo50k => "₹35,000 - ₹50,000 per person",
            BudgetRange::Above50k => "₹50,000+ per person",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trip styles offered on the booking form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TravelType {
    #[serde(rename = "Family Trip")]
    FamilyTrip,
    #[serde(rename = "Couple/Honeymoon")]
    CoupleHoneymoon,
    #[serde(rename = "Solo Travel")]
    SoloTravel,
    #[serde(rename = "Friends Group")]
    FriendsGroup,
    #[serde(rename = "Business Trip")]
    BusinessTrip,
    #[serde(rename = "Adventure Tour")]
    AdventureTour,
    #[serde(rename = "Cultural Tour")]
    CulturalTour,
    #[serde(rename = "Wildlife Safari")]
    WildlifeSafari,
}

impl TravelType {
    pub fn label(&self) -> &'static str {
        match self {
            TravelType::FamilyTrip => "Family Trip",
            TravelType::CoupleHoneymoon => "Couple/Honeymoon",
            TravelType::SoloTravel => "Solo Travel",
            TravelType::FriendsGroup => "Friends Group",
            TravelType::BusinessTrip => "Business Trip",
            TravelType::AdventureTour => "Adventure Tour",
            TravelType::CulturalTour => "Cultural Tour",
            TravelType::WildlifeSafari => "Wildlife Safari",
        }
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed booking request, as handed over by the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub destination: Destination,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: GuestCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_type: Option<TravelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub agree_to_terms: bool,
}

/// A lighter general enquiry: contact details, an area of interest and a
/// free-text message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnquirySubmission {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub destination: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&Destination::Kutch).unwrap();
        assert_eq!(json, "\"Kutch (Rann of Kutch)\"");
        let back: Destination = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Destination::Kutch);
    }

    #[test]
    fn guest_count_sentinel_stays_opaque() {
        assert_eq!("10+".parse::<GuestCount>().unwrap(), GuestCount::TenPlus);
        assert_eq!(GuestCount::TenPlus.to_string(), "10+");
        assert_eq!(
            serde_json::to_string(&GuestCount::TenPlus).unwrap(),
            "\"10+\""
        );
    }

    #[test]
    fn guest_count_rejects_out_of_range_values() {
        assert!("0".parse::<GuestCount>().is_err());
        assert!("11".parse::<GuestCount>().is_err());
        assert!("ten".parse::<GuestCount>().is_err());
        assert_eq!("4".parse::<GuestCount>().unwrap(), GuestCount::Count(4));
    }

    #[test]
    fn booking_serializes_with_form_field_names() {
        let submission = BookingSubmission {
            name: "Asha Patel".to_string(),
            email: "asha@example.com".into(),
            phone: "+91 9876543210".into(),
            destination: Destination::Dwarka,
            check_in: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 11, 7).unwrap(),
            guests: GuestCount::Count(2),
            room_type: None,
            budget: None,
            travel_type: Some(TravelType::CoupleHoneymoon),
            special_requests: None,
            agree_to_terms: true,
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["checkIn"], "2025-11-03");
        assert_eq!(value["agreeToTerms"], true);
        assert_eq!(value["travelType"], "Couple/Honeymoon");
        assert_eq!(value["phone"], "+91 9876543210");
        assert!(value.get("roomType").is_none());
    }
}
