use leptos::prelude::*;

use crate::core::{CONTACT_DETAILS, ContactDetail, SOCIAL_LINKS, SectionId, SocialLink};
use crate::ui::icon::Icon;

#[component]
pub fn ContactPanel() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() class="py-24 bg-slate-900 text-white overflow-hidden relative">
            // Decorative blobs
            <div class="absolute top-0 right-0 w-96 h-96 bg-blue-600/10 rounded-full blur-3xl -mr-48 -mt-48" aria-hidden="true"></div>
            <div class="absolute bottom-0 left-0 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl -ml-48 -mb-48" aria-hidden="true"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <h2 class="text-blue-400 font-semibold tracking-wide uppercase text-sm mb-3">
                            "Liên hệ với chúng tôi"
                        </h2>
                        <p class="text-4xl md:text-5xl font-bold mb-8 leading-tight">
                            "Bạn Cần Nước Uống Đóng Chai? " <br /> "Hãy Gọi Cho HALI!"
                        </p>

                        <div class="space-y-8">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|detail| view! { <ContactCard detail=*detail /> })
                                .collect_view()}
                        </div>

                        <div class="mt-12 flex items-center gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! { <SocialButton link=*link /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(detail: ContactDetail) -> impl IntoView {
    let value_class = if detail.emphasized {
        "text-3xl font-bold text-blue-400"
    } else {
        "text-slate-400 leading-relaxed"
    };

    view! {
        <div class="flex items-start gap-5" data-contact="">
            <div class="bg-blue-600/20 p-4 rounded-2xl border border-blue-500/30">
                <Icon kind=detail.icon class="text-blue-400 w-6 h-6" />
            </div>
            <div>
                <h4 class="text-lg font-bold text-white mb-1">{detail.heading}</h4>
                <p class=value_class>{detail.value}</p>
                {detail.note.map(|note| view! { <p class="text-slate-400">{note}</p> })}
            </div>
        </div>
    }
}

/// Round icon link; external targets open in a new tab
#[component]
fn SocialButton(link: SocialLink) -> impl IntoView {
    let external = link.target.is_external();

    view! {
        <a
            href=link.target.href()
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            aria-label=link.label
            class="w-12 h-12 bg-white/5 border border-white/10 rounded-full flex items-center justify-center hover:bg-blue-600 transition-all group"
        >
            <Icon kind=link.icon class="w-6 h-6 text-white group-hover:scale-110 transition-transform" />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use crate::core::BUSINESS_INFO;

    #[test]
    fn test_contact_section_shows_business_details() {
        let html = view! { <ContactPanel /> }.to_html();

        assert!(html.contains("id=\"contact\""));
        assert!(html.contains(BUSINESS_INFO.address));
        assert!(html.contains(BUSINESS_INFO.phone));
        assert!(html.contains(BUSINESS_INFO.status));
        assert_eq!(html.matches("data-contact").count(), 3);
    }

    #[test]
    fn test_facebook_opens_in_new_tab() {
        let html = view! { <ContactPanel /> }.to_html();

        assert!(html.contains(&format!("href=\"{}\"", BUSINESS_INFO.facebook)));
        assert_eq!(html.matches("target=\"_blank\"").count(), 1);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 1);
    }

    #[test]
    fn test_placeholder_links_have_no_destination() {
        let html = view! { <ContactPanel /> }.to_html();

        assert_eq!(html.matches("href=\"#\"").count(), 2);
        assert!(html.contains("aria-label=\"Instagram\""));
        assert!(html.contains("aria-label=\"Mail\""));
    }
}
