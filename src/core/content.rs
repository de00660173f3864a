//! Static page content: navigation, features, products, hero and contact copy

use std::fmt;

use serde::Serialize;

use super::business::BUSINESS_INFO;

/// Page sections reachable through in-page anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Products,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Contact,
    ];

    /// Element id rendered on the section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Contact => "contact",
        }
    }

    /// Fragment link pointing at the section
    pub fn href(&self) -> String {
        format!("#{}", self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icons referenced from content; drawn by `ui::icon`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Phone,
    MapPin,
    Clock,
    Facebook,
    Droplets,
    CheckCircle,
    Truck,
    ShieldCheck,
    Menu,
    Close,
    ChevronRight,
    Instagram,
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// Shared by the navigation bar and the footer
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Trang chủ",
        target: SectionId::Home,
    },
    NavLink {
        label: "Về chúng tôi",
        target: SectionId::About,
    },
    NavLink {
        label: "Sản phẩm",
        target: SectionId::Products,
    },
    NavLink {
        label: "Liên hệ",
        target: SectionId::Contact,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        icon: IconKind::ShieldCheck,
        title: "Chất Lượng Kiểm Định",
        description: "Quy trình sản xuất hiện đại, loại bỏ tạp chất, giữ lại sự thanh khiết tự nhiên của nước uống đóng chai.",
    },
    FeatureItem {
        icon: IconKind::Truck,
        title: "Giao Hàng Tận Nơi",
        description: "Đội ngũ giao hàng chuyên nghiệp, nhanh chóng tại khu vực Cần Thơ: Sạch – Nhanh – Luôn đủ hàng.",
    },
    FeatureItem {
        icon: IconKind::Clock,
        title: "Luôn Mở Cửa",
        description: "Nước suối HALI Cần Thơ sẵn sàng phục vụ nhu cầu nước uống của bạn bất kể thời gian nào.",
    },
    FeatureItem {
        icon: IconKind::Droplets,
        title: "Đa Dạng Kích Cỡ",
        description: "Cung cấp đầy đủ các loại chai từ 250ml đến bình 20L phù hợp mọi nhu cầu sỉ và lẻ.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    pub title: &'static str,
    pub icon: IconKind,
    pub sizes: &'static [&'static str],
}

pub const PRODUCT_CATEGORIES: [ProductCategory; 2] = [
    ProductCategory {
        title: "Dòng Chai Nhỏ & Vừa",
        icon: IconKind::Droplets,
        sizes: &["Chai 250ml", "Chai 330ml", "Chai 0.5L", "Chai 1.5L"],
    },
    ProductCategory {
        title: "Dòng Bình Lớn",
        icon: IconKind::Truck,
        sizes: &["Bình 5L", "Bình 7.5L", "Bình 19L", "Bình 20L"],
    },
];

/// Headline figure under the hero call-to-actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroHighlight {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const HERO_HIGHLIGHTS: [HeroHighlight; 3] = [
    HeroHighlight {
        value: "HALI",
        caption: "Đóng chai",
    },
    HeroHighlight {
        value: "24/7",
        caption: "Phục vụ",
    },
    HeroHighlight {
        value: "Cần Thơ",
        caption: "Giao nhanh",
    },
];

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1548839140-29a749e1cf4d?auto=format&fit=crop&q=80&w=2000";

pub const HERO_BADGE: &str = "Nước uống đóng chai chuẩn chất lượng";

pub const HERO_INTRO: &str = "Nước suối HALI Cần Thơ mang đến nguồn nước uống đóng chai mát lành, đảm bảo an toàn vệ sinh thực phẩm cho gia đình và doanh nghiệp của bạn.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: IconKind,
    pub heading: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
    /// Rendered large and highlighted
    pub emphasized: bool,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: IconKind::MapPin,
        heading: "Địa chỉ văn phòng",
        value: BUSINESS_INFO.address,
        note: None,
        emphasized: false,
    },
    ContactDetail {
        icon: IconKind::Phone,
        heading: "Hotline đặt hàng",
        value: BUSINESS_INFO.phone,
        note: Some("Hỗ trợ 24/7 - Giao hàng nhanh chóng"),
        emphasized: true,
    },
    ContactDetail {
        icon: IconKind::Clock,
        heading: "Giờ làm việc",
        value: BUSINESS_INFO.status,
        note: None,
        emphasized: false,
    },
];

/// Where a social link leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialTarget {
    /// Opened in a new browsing context
    External(&'static str),
    /// No destination yet
    Placeholder,
}

impl SocialTarget {
    pub fn href(&self) -> &'static str {
        match self {
            SocialTarget::External(url) => url,
            SocialTarget::Placeholder => "#",
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, SocialTarget::External(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: IconKind,
    pub target: SocialTarget,
}

pub const FACEBOOK_LINK: SocialLink = SocialLink {
    label: "Facebook",
    icon: IconKind::Facebook,
    target: SocialTarget::External(BUSINESS_INFO.facebook),
};

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    FACEBOOK_LINK,
    SocialLink {
        label: "Instagram",
        icon: IconKind::Instagram,
        target: SocialTarget::Placeholder,
    },
    SocialLink {
        label: "Mail",
        icon: IconKind::Mail,
        target: SocialTarget::Placeholder,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_display_matches_as_str() {
        for id in SectionId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_section_href() {
        assert_eq!(SectionId::Products.href(), "#products");
        assert_eq!(SectionId::Home.href(), "#home");
    }

    #[test]
    fn test_nav_links_order() {
        let targets: Vec<_> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_nav_links_are_unique() {
        let labels: HashSet<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        let targets: HashSet<_> = NAV_LINKS.iter().map(|l| l.target).collect();

        assert_eq!(labels.len(), NAV_LINKS.len());
        assert_eq!(targets.len(), NAV_LINKS.len());
    }

    #[test]
    fn test_features_fixed_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Chất Lượng Kiểm Định",
                "Giao Hàng Tận Nơi",
                "Luôn Mở Cửa",
                "Đa Dạng Kích Cỡ",
            ]
        );
    }

    #[test]
    fn test_product_sizes_have_no_duplicates() {
        let mut seen = HashSet::new();
        for category in PRODUCT_CATEGORIES {
            assert_eq!(category.sizes.len(), 4);
            for size in category.sizes {
                assert!(seen.insert(*size), "duplicate size label {size}");
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_contact_details_come_from_business_info() {
        assert_eq!(CONTACT_DETAILS[0].value, BUSINESS_INFO.address);
        assert_eq!(CONTACT_DETAILS[1].value, BUSINESS_INFO.phone);
        assert_eq!(CONTACT_DETAILS[2].value, BUSINESS_INFO.status);
        assert_eq!(CONTACT_DETAILS.iter().filter(|d| d.emphasized).count(), 1);
    }

    #[test]
    fn test_social_links_placeholders() {
        assert_eq!(SOCIAL_LINKS[0].target.href(), BUSINESS_INFO.facebook);
        assert!(SOCIAL_LINKS[0].target.is_external());

        for link in &SOCIAL_LINKS[1..] {
            assert_eq!(link.target, SocialTarget::Placeholder);
            assert_eq!(link.target.href(), "#");
            assert!(!link.target.is_external());
        }
    }

    #[test]
    fn test_section_id_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SectionId::Contact).unwrap(),
            "\"contact\""
        );
    }
}
