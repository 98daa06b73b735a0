use leptos::prelude::*;

/// Разделы, у которых пока нет своей страницы.
#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <h2>{title}</h2>
            <p>"Раздел в разработке"</p>
        </div>
    }
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"AsiaSeti CRM"</h2>
            <p>"Выберите раздел в меню слева."</p>
        </div>
    }
}
