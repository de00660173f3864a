use leptos::prelude::*;

use crate::core::business::current_year;
use crate::core::{BUSINESS_INFO, FACEBOOK_LINK, NAV_LINKS};
use crate::ui::icon::Logo;

/// Footer with the shared section links and a copyright line for the current year
#[component]
pub fn Footer() -> impl IntoView {
    let copyright = BUSINESS_INFO.copyright_notice(current_year());

    view! {
        <footer class="bg-slate-950 text-slate-400 py-12 border-t border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-8">
                    <div class="flex items-center gap-3">
                        <Logo class="w-10 h-10" alt="Logo" />
                        <span class="font-bold text-lg tracking-tight text-white">
                            {BUSINESS_INFO.name}
                        </span>
                    </div>

                    <div class="flex flex-wrap justify-center gap-8 text-sm font-medium">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.target.href()
                                        class="hover:text-white transition-colors"
                                        data-footer-link=link.target.as_str()
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=FACEBOOK_LINK.target.href()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-white transition-colors"
                        >
                            {FACEBOOK_LINK.label}
                        </a>
                    </div>

                    <p class="text-sm" data-copyright="">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use chrono::Datelike;

    #[test]
    fn test_copyright_shows_current_year() {
        let html = view! { <Footer /> }.to_html();
        let year = chrono::Local::now().year();

        assert!(html.contains(&format!("© {} {}. All rights reserved.", year, BUSINESS_INFO.name)));
    }

    #[test]
    fn test_footer_links_match_navigation_order() {
        let html = view! { <Footer /> }.to_html();

        let positions: Vec<usize> = NAV_LINKS
            .iter()
            .map(|link| {
                html.find(&format!("data-footer-link=\"{}\"", link.target))
                    .expect("footer link rendered")
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("data-footer-link=").count(), NAV_LINKS.len());
    }

    #[test]
    fn test_footer_facebook_link() {
        let html = view! { <Footer /> }.to_html();

        assert!(html.contains(BUSINESS_INFO.facebook));
        assert!(html.contains("target=\"_blank\""));
    }
}
