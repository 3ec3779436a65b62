use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ViewConfig;
use crate::pages::recommendations::RecommendationsPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ViewConfig::default());

    view! {
        <Router>
            <main class="content">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=RecommendationsPage />
                    <Route path=path!("/recommendations") view=RecommendationsPage />
                    <Route path=path!("/recommendations/:employee_id") view=RecommendationsPage />
                </Routes>
            </main>
        </Router>
    }
}
