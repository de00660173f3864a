//! Landing page component
//!
//! The whole site is this one page:
//! - SEO meta tags and LocalBusiness structured data
//! - Navigation bar with in-page anchors
//! - Hero, features, products and contact sections
//! - Footer with copyright line

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::BUSINESS_INFO;
use crate::core::content::HERO_IMAGE_URL;
use crate::core::seo::{PAGE_DESCRIPTION, PAGE_KEYWORDS, PAGE_TITLE, structured_data_script};
use crate::ui::sections::{
    ContactPanel, FeatureList, Footer, HeroBanner, LandingStyles, NavigationBar, ProductCatalog,
    RevealOnScroll,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <PageBody />
    }
}

/// Composes the sections in fixed order
#[component]
fn PageBody() -> impl IntoView {
    view! {
        <div class="min-h-screen font-sans text-slate-900 selection:bg-blue-100 selection:text-blue-900">
            <NavigationBar />
            <main>
                <HeroBanner />
                <FeatureList />
                <ProductCatalog />
                <ContactPanel />
            </main>
            <Footer />

            // CSS Animations
            <LandingStyles />

            // Intersection Observer for reveal animations
            <RevealOnScroll />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content=PAGE_KEYWORDS />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="vi_VN" />
        <Meta property="og:site_name" content=BUSINESS_INFO.name />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:image" content=HERO_IMAGE_URL />

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=structured_data_script(&BUSINESS_INFO)></script>
    }
}
