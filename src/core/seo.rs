//! Search engine metadata derived from the business details

use serde_json::{Value, json};

use super::business::BusinessInfo;
use super::content::PRODUCT_CATEGORIES;

pub const PAGE_TITLE: &str = "Nước suối HALI Cần Thơ - Nước uống đóng chai giao tận nơi";

pub const PAGE_DESCRIPTION: &str = "Nước suối HALI Cần Thơ: nước uống đóng chai từ 250ml đến bình 20L. Giao sỉ – giao lẻ tận nơi tại Cần Thơ, sạch – nhanh – luôn đủ hàng.";

pub const PAGE_KEYWORDS: &str =
    "nước suối, nước uống đóng chai, HALI, Cần Thơ, giao nước tận nơi, bình 20L";

/// schema.org `LocalBusiness` description of the business
pub fn structured_data(info: &BusinessInfo) -> Value {
    let offers: Vec<&str> = PRODUCT_CATEGORIES
        .iter()
        .flat_map(|category| category.sizes.iter().copied())
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": info.name,
        "description": info.slogan,
        "telephone": info.phone,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": info.address,
            "addressLocality": "Cần Thơ",
            "addressCountry": "VN",
        },
        "openingHours": "Mo-Su 00:00-23:59",
        "sameAs": [info.facebook],
        "makesOffer": offers,
    })
}

/// Structured data serialized for embedding in a `<script>` element.
///
/// `</` is escaped so the payload cannot close the element early.
pub fn structured_data_script(info: &BusinessInfo) -> String {
    structured_data(info).to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::business::BUSINESS_INFO;

    #[test]
    fn test_structured_data_fields() {
        let data = structured_data(&BUSINESS_INFO);

        assert_eq!(data["@type"], "LocalBusiness");
        assert_eq!(data["name"], BUSINESS_INFO.name);
        assert_eq!(data["telephone"], BUSINESS_INFO.phone);
        assert_eq!(data["address"]["streetAddress"], BUSINESS_INFO.address);
        assert_eq!(data["sameAs"][0], BUSINESS_INFO.facebook);
    }

    #[test]
    fn test_structured_data_lists_every_size() {
        let data = structured_data(&BUSINESS_INFO);
        let offers = data["makesOffer"].as_array().unwrap();

        assert_eq!(offers.len(), 8);
        assert_eq!(offers[0], "Chai 250ml");
        assert_eq!(offers[7], "Bình 20L");
    }

    #[test]
    fn test_structured_data_script_escapes_closing_tags() {
        let info = BusinessInfo {
            name: "</script><script>alert(1)",
            ..BUSINESS_INFO
        };
        let script = structured_data_script(&info);

        assert!(!script.contains("</script>"));
        assert!(script.contains("<\\/script>"));
    }

    #[test]
    fn test_structured_data_script_is_valid_json() {
        let script = structured_data_script(&BUSINESS_INFO);
        let parsed: Value = serde_json::from_str(&script).unwrap();

        assert_eq!(parsed["name"], BUSINESS_INFO.name);
    }
}
