use leptos::prelude::*;

use crate::core::{
    BUSINESS_INFO, HERO_BADGE, HERO_HIGHLIGHTS, HERO_IMAGE_URL, HERO_INTRO, IconKind, SectionId,
};
use crate::ui::icon::Icon;

/// Full-height banner with slogan and the two primary call-to-actions
#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <section id=SectionId::Home.as_str() class="relative h-screen min-h-[700px] flex items-center overflow-hidden">
            // Background
            <div class="absolute inset-0 z-0">
                <img
                    src=HERO_IMAGE_URL
                    alt="Pure Water Background"
                    class="w-full h-full object-cover"
                    referrerpolicy="no-referrer"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-blue-900/80 via-blue-800/40 to-transparent"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="max-w-2xl landing-slide-in">
                    <div class="inline-flex items-center gap-2 bg-blue-500/20 backdrop-blur-md border border-white/20 px-4 py-2 rounded-full text-blue-100 text-sm font-medium mb-6">
                        <Icon kind=IconKind::CheckCircle class="w-4 h-4 text-blue-400" />
                        {HERO_BADGE}
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold text-white leading-tight mb-4">
                        "Nước suối " <br />
                        <span class="text-blue-400">"HALI Cần Thơ"</span>
                    </h1>
                    <p class="text-xl md:text-2xl font-medium text-blue-200 mb-6 italic">
                        "“" {BUSINESS_INFO.slogan} "”"
                    </p>
                    <p class="text-lg md:text-xl text-blue-50/90 mb-10 leading-relaxed max-w-xl">
                        {HERO_INTRO}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href=SectionId::Products.href()
                            class="bg-white text-blue-900 px-8 py-4 rounded-full font-bold text-lg hover:bg-blue-50 transition-all flex items-center justify-center gap-2 shadow-xl"
                        >
                            "Xem sản phẩm"
                            <Icon kind=IconKind::ChevronRight />
                        </a>
                        <a
                            href=BUSINESS_INFO.dial_uri()
                            class="bg-blue-600/20 backdrop-blur-md border border-white/30 text-white px-8 py-4 rounded-full font-bold text-lg hover:bg-white/10 transition-all flex items-center justify-center gap-2"
                        >
                            <Icon kind=IconKind::Phone />
                            "Đặt hàng ngay"
                        </a>
                    </div>

                    <div class="mt-12 flex items-center gap-8 text-white/80">
                        {HERO_HIGHLIGHTS
                            .iter()
                            .enumerate()
                            .map(|(i, highlight)| {
                                view! {
                                    {(i > 0).then(|| view! { <div class="w-px h-10 bg-white/20"></div> })}
                                    <div class="flex flex-col" data-highlight="">
                                        <span class="text-2xl font-bold text-white">{highlight.value}</span>
                                        <span class="text-xs uppercase tracking-wider">{highlight.caption}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 text-white/50 hidden md:block" aria-hidden="true">
                <div class="landing-bob">
                    <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center p-1">
                        <div class="w-1 h-2 bg-white/60 rounded-full"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_hero_anchor_and_background() {
        let html = view! { <HeroBanner /> }.to_html();

        assert!(html.contains("id=\"home\""));
        assert!(html.contains("images.unsplash.com/photo-1548839140-29a749e1cf4d"));
        assert!(html.contains("referrerpolicy=\"no-referrer\""));
    }

    #[test]
    fn test_hero_call_to_actions() {
        let html = view! { <HeroBanner /> }.to_html();

        assert!(html.contains("href=\"#products\""));
        assert!(html.contains("href=\"tel:0913619045\""));
        assert!(html.contains("Đặt hàng ngay"));
    }

    #[test]
    fn test_hero_slogan_and_highlights() {
        let html = view! { <HeroBanner /> }.to_html();

        assert!(html.contains(BUSINESS_INFO.slogan));
        assert_eq!(html.matches("data-highlight").count(), HERO_HIGHLIGHTS.len());
        assert!(html.contains("24/7"));
    }

    #[test]
    fn test_hero_animations_present() {
        let html = view! { <HeroBanner /> }.to_html();

        assert!(html.contains("landing-slide-in"));
        assert!(html.contains("landing-bob"));
    }
}
