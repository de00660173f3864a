use leptos::prelude::*;

use crate::core::{BUSINESS_INFO, IconKind, NAV_LINKS, NavBarState};
use crate::ui::icon::{Icon, Logo};

/// Fixed top bar with scroll-dependent styling and a collapsible mobile menu
#[component]
pub fn NavigationBar() -> impl IntoView {
    let state = RwSignal::new(NavBarState::default());

    // Track scroll offset for the transparent/opaque swap
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| match window().scroll_y() {
            Ok(offset) => state.update(|s| s.on_scroll(offset)),
            Err(e) => leptos::logging::debug_warn!("scroll offset unavailable: {:?}", e),
        });

        on_cleanup(move || handle_scroll.remove());
    }

    let appearance = move || state.with(|s| s.appearance());
    let menu_open = move || state.with(|s| s.menu_open);
    let close_menu = move |_| state.update(|s| s.close_menu());
    let dial_uri = BUSINESS_INFO.dial_uri();

    view! {
        <nav class=move || appearance().bar_class()>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center">
                    <a href="#home" class="flex items-center gap-3">
                        <Logo />
                        <span class=move || appearance().brand_class()>
                            "Nước suối " <br class="md:hidden" /> "HALI Cần Thơ"
                        </span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.target.href()
                                        class=move || appearance().link_class()
                                        data-nav-link=link.target.as_str()
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=dial_uri.clone()
                            class="bg-blue-600 hover:bg-blue-700 text-white px-5 py-2 rounded-full text-sm font-semibold transition-all shadow-lg shadow-blue-600/20 flex items-center gap-2"
                        >
                            <Icon kind=IconKind::Phone class="w-4 h-4" />
                            {BUSINESS_INFO.phone}
                        </a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden">
                        <button
                            class=move || appearance().toggle_class()
                            on:click=move |_| state.update(|s| s.toggle_menu())
                            aria-label="Mở menu"
                            aria-expanded=move || menu_open().to_string()
                        >
                            {move || {
                                if menu_open() {
                                    view! { <Icon kind=IconKind::Close class="w-7 h-7" /> }
                                } else {
                                    view! { <Icon kind=IconKind::Menu class="w-7 h-7" /> }
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <div
                class="md:hidden bg-white border-b border-slate-100 overflow-hidden landing-mobile-menu"
                class:landing-mobile-menu-open=menu_open
                aria-hidden=move || (!menu_open()).to_string()
                inert=move || !menu_open()
            >
                <div class="px-4 pt-2 pb-6 space-y-1">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.target.href()
                                    on:click=close_menu
                                    tabindex=move || (!menu_open()).then_some("-1")
                                    class="block px-3 py-4 text-base font-medium text-slate-700 hover:bg-blue-50 hover:text-blue-600 rounded-lg transition-colors"
                                    data-mobile-link=link.target.as_str()
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="pt-4 px-3">
                        <a
                            href=dial_uri
                            on:click=close_menu
                            tabindex=move || (!menu_open()).then_some("-1")
                            class="w-full bg-blue-600 text-white px-5 py-3 rounded-xl font-semibold flex items-center justify-center gap-2 shadow-lg shadow-blue-600/20"
                        >
                            <Icon kind=IconKind::Phone class="w-[18px] h-[18px]" />
                            "Gọi ngay: " {BUSINESS_INFO.phone}
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos::reactive::owner::Owner;

    fn render() -> String {
        Owner::new().with(|| view! { <NavigationBar /> }.to_html())
    }

    #[test]
    fn test_initial_render_is_transparent_and_closed() {
        let html = render();

        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("bg-white/95"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("landing-mobile-menu-open"));
    }

    #[test]
    fn test_renders_all_links_in_both_menus() {
        let html = render();

        for link in NAV_LINKS {
            assert!(html.contains(&format!("data-nav-link=\"{}\"", link.target)));
            assert!(html.contains(&format!("data-mobile-link=\"{}\"", link.target)));
            assert!(html.contains(&format!("href=\"#{}\"", link.target)));
            assert!(html.contains(link.label));
        }
        assert_eq!(html.matches("data-nav-link=").count(), 4);
        assert_eq!(html.matches("data-mobile-link=").count(), 4);
    }

    #[test]
    fn test_call_to_actions_dial_digits_only() {
        let html = render();

        assert_eq!(html.matches("href=\"tel:0913619045\"").count(), 2);
        assert!(!html.contains("href=\"tel:0913 619"));
        assert!(html.contains("0913 619 045"));
    }

    #[test]
    fn test_closed_mobile_menu_is_not_focusable() {
        let html = render();

        let panel = &html[html.find("landing-mobile-menu").expect("mobile panel rendered")..];
        assert!(panel.contains("aria-hidden=\"true\""));
        assert!(panel.contains(" inert"));
        // Four section links plus the call button
        assert_eq!(panel.matches("tabindex=\"-1\"").count(), 5);
        // Desktop links stay reachable
        assert_eq!(html.matches("tabindex=").count(), 5);
    }
}
