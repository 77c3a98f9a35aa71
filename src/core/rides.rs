//! Ride summaries shown on the landing pages

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Number of placeholder rides on the landing pages
pub const PLACEHOLDER_RIDE_COUNT: usize = 8;

/// One card on the ride list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSummary {
    pub driver_name: String,
    pub driver_photo: String,
    /// Stars out of five
    pub driver_rating: u8,
    pub pickup: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price_cents: u32,
    pub link: String,
}

impl RideSummary {
    /// Date as `10/15/2022`
    pub fn formatted_date(&self) -> String {
        self.date.format("%m/%d/%Y").to_string()
    }

    /// Time as `9:45am`
    pub fn formatted_time(&self) -> String {
        self.time.format("%-I:%M%P").to_string()
    }

    /// Price as `$58.42`
    pub fn formatted_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Case-insensitive match against driver, pickup and destination
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.driver_name, &self.pickup, &self.destination]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// The sample ride shown until real rides are wired in
pub fn sample_ride() -> RideSummary {
    RideSummary {
        driver_name: "Mathew Pitts".to_string(),
        driver_photo: "/images/profile-picture-mockup.jpg".to_string(),
        driver_rating: 3,
        pickup: "700 Royal Street".to_string(),
        destination: "31254 Charlotte Avenue".to_string(),
        date: NaiveDate::from_ymd_opt(2022, 10, 15).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(9, 45, 0).unwrap_or_default(),
        price_cents: 5842,
        link: "/ride-info".to_string(),
    }
}

/// `count` copies of the sample ride
pub fn placeholder_rides(count: usize) -> Vec<RideSummary> {
    vec![sample_ride(); count]
}

/// Rides matching a search query, in their original order
pub fn filter_rides(rides: &[RideSummary], query: &str) -> Vec<RideSummary> {
    rides
        .iter()
        .filter(|ride| ride.matches(query))
        .cloned()
        .collect()
}
