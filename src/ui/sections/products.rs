use leptos::prelude::*;

use crate::core::{BUSINESS_INFO, IconKind, PRODUCT_CATEGORIES, ProductCategory, SectionId};
use crate::ui::icon::Icon;

/// Package sizes grouped by category.
///
/// Category cards carry `landing-reveal`; the reveal script fades them in
/// the first time they enter the viewport.
#[component]
pub fn ProductCatalog() -> impl IntoView {
    view! {
        <section id=SectionId::Products.as_str() class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row md:items-end justify-between mb-16 gap-6">
                    <div class="max-w-2xl">
                        <h2 class="text-blue-600 font-semibold tracking-wide uppercase text-sm mb-3">
                            "Sản phẩm của chúng tôi"
                        </h2>
                        <p class="text-3xl md:text-4xl font-bold text-slate-900">
                            "Nước suối HALI Cần Thơ Đầy Đủ & Đa Dạng"
                        </p>
                        <p class="mt-4 text-slate-600 italic">"“" {BUSINESS_INFO.slogan} "”"</p>
                    </div>
                    <a
                        href=BUSINESS_INFO.dial_uri()
                        class="inline-flex items-center gap-2 text-blue-600 font-bold hover:text-blue-700 transition-colors group"
                    >
                        "Liên hệ đặt hàng sỉ & lẻ"
                        <Icon kind=IconKind::ChevronRight class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                    </a>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {PRODUCT_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category=*category /> })
                        .collect_view()}
                </div>

                <div class="mt-12 p-8 bg-blue-600 rounded-3xl text-white text-center">
                    <p class="text-xl font-medium mb-4">
                        "Mọi sản phẩm đều được kiểm soát chất lượng nghiêm ngặt"
                    </p>
                    <p class="text-blue-100">
                        "Giao hàng tận nơi nhanh chóng – Luôn sẵn sàng phục vụ quý khách tại Cần Thơ"
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: ProductCategory) -> impl IntoView {
    view! {
        <div class="landing-reveal bg-slate-50 rounded-3xl p-8 border border-slate-100 shadow-sm hover:shadow-md transition-shadow" data-category="">
            <div class="flex items-center gap-4 mb-8">
                <div class="bg-white p-3 rounded-2xl shadow-sm">
                    <Icon kind=category.icon class="w-6 h-6 text-blue-500" />
                </div>
                <h3 class="text-2xl font-bold text-slate-900">{category.title}</h3>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {category
                    .sizes
                    .iter()
                    .map(|size| {
                        view! {
                            <div class="bg-white p-4 rounded-xl border border-slate-100 flex items-center justify-between group hover:border-blue-200 transition-colors" data-size="">
                                <span class="font-semibold text-slate-700">{*size}</span>
                                <Icon kind=IconKind::CheckCircle class="w-[18px] h-[18px] text-blue-500 opacity-0 group-hover:opacity-100 transition-opacity" />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_renders_two_categories() {
        let html = view! { <ProductCatalog /> }.to_html();

        assert!(html.contains("id=\"products\""));
        assert_eq!(html.matches("data-category").count(), 2);
        assert_eq!(html.matches("landing-reveal").count(), 2);
    }

    #[test]
    fn test_every_size_rendered_once() {
        let html = view! { <ProductCatalog /> }.to_html();

        assert_eq!(html.matches("data-size").count(), 8);
        for category in PRODUCT_CATEGORIES {
            assert!(html.contains(&category.title.replace('&', "&amp;")));
            for size in category.sizes {
                let needle = format!(">{}<", size);
                assert_eq!(html.matches(&needle).count(), 1, "size {size}");
            }
        }
    }

    #[test]
    fn test_sizes_stay_grouped_under_their_category() {
        let html = view! { <ProductCatalog /> }.to_html();

        let second_title = html.find(PRODUCT_CATEGORIES[1].title).unwrap();
        for size in PRODUCT_CATEGORIES[0].sizes {
            assert!(html.find(&format!(">{}<", size)).unwrap() < second_title);
        }
        for size in PRODUCT_CATEGORIES[1].sizes {
            assert!(html.find(&format!(">{}<", size)).unwrap() > second_title);
        }
    }

    #[test]
    fn test_wholesale_call_to_action_dials_digits() {
        let html = view! { <ProductCatalog /> }.to_html();
        assert!(html.contains("href=\"tel:0913619045\""));
    }
}
