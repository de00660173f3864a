use leptos::prelude::*;

/// CSS for landing page animations
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            /* Hero entrance, plays once on mount */
            @keyframes landing-slide-in {
                from {
                    opacity: 0;
                    transform: translateX(-50px);
                }
                to {
                    opacity: 1;
                    transform: translateX(0);
                }
            }

            .landing-slide-in {
                animation: landing-slide-in 0.8s ease-out both;
            }

            /* Scroll indicator */
            @keyframes landing-bob {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(10px); }
            }

            .landing-bob {
                animation: landing-bob 2s ease-in-out infinite;
            }

            /* Feature cards */
            .landing-lift {
                transition: transform 0.3s ease-out, box-shadow 0.3s ease-out;
            }
            .landing-lift:hover {
                transform: translateY(-10px);
            }

            /* Mobile menu panel */
            .landing-mobile-menu {
                max-height: 0;
                opacity: 0;
                transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
            }
            .landing-mobile-menu.landing-mobile-menu-open {
                max-height: 32rem;
                opacity: 1;
            }

            /* Reveal once when scrolled into view */
            .landing-reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-slide-in, .landing-bob { animation: none; }
                .landing-reveal { opacity: 1; transform: none; transition: none; }
                .landing-lift, .landing-mobile-menu { transition: none; }
            }
            "#
        </style>
    }
}

/// Marks `.landing-reveal` elements visible on first intersection, then stops observing them
#[component]
pub fn RevealOnScroll() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveal() {
                    const targets = document.querySelectorAll('.landing-reveal');
                    if (!('IntersectionObserver' in window)) {
                        targets.forEach(el => el.classList.add('visible'));
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    targets.forEach(el => observer.observe(el));
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}
