use crate::domain::counterparty::CounterpartyPage;
use crate::domain::document::DocumentPage;
use crate::domain::location::{LocationDetailsPage, LocationPage};
use crate::domain::nomenklatura::{NomenklaturaDetailsPage, NomenklaturaPage};
use crate::layout::Sidebar;
use crate::shared::notifications::{NotificationStack, Notifications};
use crate::system::pages::{PlaceholderPage, WelcomePage};
use contracts::domain::location::LocationType;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    Notifications::provide();

    view! {
        <Router>
            <div style="display: flex; min-height: 100vh;">
                <Sidebar />
                <main style="flex: 1; padding: 16px; overflow-x: auto;">
                    <Routes fallback=|| view! { <PlaceholderPage title="Страница не найдена" /> }>
                        <Route path=path!("/") view=WelcomePage />
                        <Route path=path!("/statistic") view=|| view! { <PlaceholderPage title="Статистика" /> } />
                        <Route
                            path=path!("/salepoint")
                            view=|| view! { <LocationPage location_type=LocationType::Salespoint /> }
                        />
                        <Route
                            path=path!("/storage")
                            view=|| view! { <LocationPage location_type=LocationType::Storage /> }
                        />
                        <Route path=path!("/items") view=NomenklaturaPage />
                        <Route path=path!("/item/:id") view=NomenklaturaDetailsPage />
                        <Route
                            path=path!("/storages/:id")
                            view=|| view! { <LocationDetailsPage location_type=LocationType::Storage /> }
                        />
                        <Route
                            path=path!("/salespoints/:id")
                            view=|| view! { <LocationDetailsPage location_type=LocationType::Salespoint /> }
                        />
                        <Route path=path!("/debtbook") view=|| view! { <PlaceholderPage title="Долговая книга" /> } />
                        <Route path=path!("/customer") view=CounterpartyPage />
                        <Route path=path!("/worker") view=|| view! { <PlaceholderPage title="Сотрудники" /> } />
                        <Route path=path!("/order") view=DocumentPage />
                        <Route path=path!("/analitic") view=|| view! { <PlaceholderPage title="Аналитика" /> } />
                        <Route path=path!("/setting") view=|| view! { <PlaceholderPage title="Настройка" /> } />
                    </Routes>
                </main>
            </div>
            <NotificationStack />
        </Router>
    }
}
