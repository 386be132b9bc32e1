use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use shared::models::UserRole;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Index,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/tickets")]
    Tickets,
    #[at("/client")]
    Client,
    #[at("/forbidden")]
    Forbidden,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Outcome of gating a requested route against the signed-in role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(MainRoute),
}

/// Decide whether `role` may see `requested`, or where to send it instead.
///
/// This gate only shapes navigation; the API authorizes every request on its
/// own. Roles the client cannot route (Support) land on the forbidden page
/// and never see a protected view.
pub fn resolve_route(role: Option<UserRole>, requested: &MainRoute) -> RouteDecision {
    use MainRoute as R;
    use RouteDecision::{Allow, Redirect};

    match role {
        None => match requested {
            R::Login | R::Register => Allow,
            _ => Redirect(R::Login),
        },
        Some(UserRole::Admin) => match requested {
            R::Index | R::Login | R::Forbidden => Redirect(R::Dashboard),
            R::Client => Redirect(R::Login),
            R::Register | R::Dashboard | R::Tickets | R::NotFound => Allow,
        },
        Some(UserRole::Client) => match requested {
            R::Index | R::Login | R::Forbidden => Redirect(R::Client),
            R::Dashboard | R::Tickets => Redirect(R::Login),
            R::Register | R::Client | R::NotFound => Allow,
        },
        Some(UserRole::Support) => match requested {
            R::Register | R::Forbidden => Allow,
            _ => Redirect(R::Forbidden),
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let role = use_selector(AppState::role);
    let route = props.route;

    if let RouteDecision::Redirect(to) = resolve_route(*role, &route) {
        log::debug!("redirecting {route:?} to {to:?}");
        return html! { <Redirect<MainRoute> {to} /> };
    }

    match route {
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Dashboard => html! {
            <Layout current_route={route}>
                <DashboardPage />
            </Layout>
        },
        MainRoute::Tickets => html! {
            <Layout current_route={route}>
                <TicketsPage />
            </Layout>
        },
        MainRoute::Client => html! { <ClientPage /> },
        MainRoute::Forbidden => html! { <ForbiddenPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
        // Never allowed; the gate always redirects the index.
        MainRoute::Index => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    html! { <MainRouteView {route} /> }
}
