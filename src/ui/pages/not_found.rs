//! Not found page component
//!
//! Rendered for every path other than `/`.

use leptos::prelude::*;

use crate::core::BUSINESS_INFO;
use crate::ui::icon::Logo;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Set the HTTP status during server rendering
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-slate-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <Logo class="w-24 h-24 mx-auto mb-6" alt="Logo" />

                // Error code
                <h1 class="text-6xl font-bold text-blue-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-slate-900 mb-2">
                    "Không tìm thấy trang"
                </h2>

                <p class="text-slate-600 mb-8 max-w-md mx-auto">
                    "Trang bạn tìm không tồn tại hoặc đã được di chuyển."
                </p>

                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-full transition-colors"
                >
                    "Về trang chủ"
                </a>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-400">{BUSINESS_INFO.name}</p>
            </div>
        </div>
    }
}
