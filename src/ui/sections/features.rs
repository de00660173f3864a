use leptos::prelude::*;

use crate::core::{FEATURES, FeatureItem, SectionId};
use crate::ui::icon::Icon;

/// "Why HALI" grid of value propositions
#[component]
pub fn FeatureList() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-24 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <h2 class="text-blue-600 font-semibold tracking-wide uppercase text-sm mb-3">
                        "Tại sao chọn HALI?"
                    </h2>
                    <p class="text-3xl md:text-4xl font-bold text-slate-900 mb-6">
                        "Cam Kết Mang Lại Nguồn Nước Tốt Nhất Cho Sức Khỏe"
                    </p>
                    <div class="h-1.5 w-20 bg-blue-600 mx-auto rounded-full"></div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    view! {
        <div class="landing-lift bg-white p-8 rounded-2xl shadow-sm border border-slate-100 hover:shadow-xl hover:shadow-blue-900/5" data-feature="">
            <div class="bg-blue-50 w-16 h-16 rounded-xl flex items-center justify-center mb-6">
                <Icon kind=feature.icon class="w-8 h-8 text-blue-600" />
            </div>
            <h3 class="text-xl font-bold text-slate-900 mb-4">{feature.title}</h3>
            <p class="text-slate-600 leading-relaxed">{feature.description}</p>
        </div>
    }
}
