//! Business details shown across the landing page.
//!
//! Everything here is compiled in. Components import [`BUSINESS_INFO`]
//! directly instead of receiving it through props or context.

use chrono::Datelike;
use serde::Serialize;

/// Immutable record of the contact and display details for the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessInfo {
    pub name: &'static str,
    pub address: &'static str,
    /// Phone number as displayed, with grouping spaces
    pub phone: &'static str,
    /// Opening status text
    pub status: &'static str,
    pub services: &'static str,
    pub facebook: &'static str,
    pub slogan: &'static str,
}

pub const BUSINESS_INFO: BusinessInfo = BusinessInfo {
    name: "Nước suối HALI Cần Thơ",
    address: "G3-1 Cao Minh Lộc, KDC 586, Quận Cái Răng, TP. Cần Thơ",
    phone: "0913 619 045",
    status: "Luôn mở cửa",
    services: "Nước uống đóng chai",
    facebook: "https://www.facebook.com/nuocsuoihalicantho",
    slogan: "Giao sỉ – giao lẻ tận nơi, sạch – nhanh – luôn đủ hàng",
};

impl BusinessInfo {
    /// Telephone deep-link for the display number
    pub fn dial_uri(&self) -> String {
        dial_uri(self.phone)
    }

    /// Footer copyright line for the given year
    pub fn copyright_notice(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.name)
    }
}

/// Build a `tel:` URI from a display phone number.
///
/// Whitespace is stripped; everything else is kept as written.
pub fn dial_uri(display: &str) -> String {
    let dialable: String = display.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", dialable)
}

/// Calendar year at the moment of rendering, in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
