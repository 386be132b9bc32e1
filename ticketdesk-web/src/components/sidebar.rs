use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use super::logout_button::LogoutButton;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

const NAV_ITEMS: [(MainRoute, &str, IconId); 2] = [
    (MainRoute::Dashboard, "Dashboard", IconId::HeroiconsOutlineChartBar),
    (MainRoute::Tickets, "Tickets", IconId::HeroiconsOutlineTicket),
];

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_route: MainRoute,
}

/// Admin navigation.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let user_name = use_selector(|state: &AppState| {
        state
            .session
            .as_ref()
            .map(|session| session.user_name.clone())
            .unwrap_or_default()
    });

    html! {
        <aside class="w-64 min-h-screen bg-base-200 flex flex-col p-4">
            <div class="text-2xl font-bold mb-1">{"TicketDesk"}</div>
            if !user_name.is_empty() {
                <div class="text-sm opacity-70 mb-6">{(*user_name).clone()}</div>
            }
            <ul class="menu gap-1 flex-1">
                { for NAV_ITEMS.iter().map(|(route, label, icon)| html! {
                    <li key={label.to_string()}>
                        <Link<MainRoute>
                            to={*route}
                            classes={classes!((*route == props.current_route).then_some("active"))}
                        >
                            <Icon icon_id={*icon} class="w-5 h-5" />
                            {*label}
                        </Link<MainRoute>>
                    </li>
                }) }
            </ul>
            <LogoutButton class="justify-start" />
        </aside>
    }
}
