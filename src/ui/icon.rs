use leptos::prelude::*;

use crate::core::IconKind;

/// Stroke paths (24x24 viewBox) for each icon
fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        IconKind::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
        ],
        IconKind::Clock => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0Z",
            "M12 6v6l4 2",
        ],
        IconKind::Facebook => &[
            "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
        ],
        IconKind::Droplets => &[
            "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
            "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
        ],
        IconKind::CheckCircle => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0Z",
            "m9 12 2 2 4-4",
        ],
        IconKind::Truck => &[
            "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
            "M15 18H9",
            "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
            "M19 18a2 2 0 1 1-4 0 2 2 0 0 1 4 0Z",
            "M9 18a2 2 0 1 1-4 0 2 2 0 0 1 4 0Z",
        ],
        IconKind::ShieldCheck => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            "m9 12 2 2 4-4",
        ],
        IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
        IconKind::ChevronRight => &["m9 18 6-6-6-6"],
        IconKind::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5Z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        IconKind::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
    }
}

/// Inline stroke icon, colored through `currentColor`
#[component]
pub fn Icon(
    kind: IconKind,
    /// Size and color classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(kind)
                .iter()
                .map(|d| view! { <path d=*d /> })
                .collect_view()}
        </svg>
    }
}

/// Brand mark served from `public/logo.svg`
#[component]
pub fn Logo(
    #[prop(default = "w-12 h-12 md:w-16 md:h-16")]
    class: &'static str,
    #[prop(default = "Nước suối HALI Cần Thơ Logo")]
    alt: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} flex items-center justify-center overflow-hidden rounded-lg bg-white p-1 shadow-sm",
            class
        )>
            <img src="/logo.svg" alt=alt class="w-full h-full object-contain" draggable="false" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    const ALL_KINDS: [IconKind; 13] = [
        IconKind::Phone,
        IconKind::MapPin,
        IconKind::Clock,
        IconKind::Facebook,
        IconKind::Droplets,
        IconKind::CheckCircle,
        IconKind::Truck,
        IconKind::ShieldCheck,
        IconKind::Menu,
        IconKind::Close,
        IconKind::ChevronRight,
        IconKind::Instagram,
        IconKind::Mail,
    ];

    #[test]
    fn test_every_icon_has_paths() {
        for kind in ALL_KINDS {
            assert!(!icon_paths(kind).is_empty(), "{kind:?} has no paths");
        }
    }

    #[test]
    fn test_icon_renders_one_path_per_stroke() {
        let html = view! { <Icon kind=IconKind::Truck class="w-8 h-8" /> }.to_html();

        assert!(html.contains("<svg"));
        assert!(html.contains("w-8 h-8"));
        assert!(html.contains("aria-hidden=\"true\""));
        assert_eq!(html.matches("<path").count(), icon_paths(IconKind::Truck).len());
    }

    #[test]
    fn test_logo_uses_public_asset() {
        let html = view! { <Logo class="w-10 h-10" alt="Logo" /> }.to_html();

        assert!(html.contains("src=\"/logo.svg\""));
        assert!(html.contains("alt=\"Logo\""));
        assert!(html.contains("w-10 h-10"));
    }
}
