use crate::api::TicketDeskClient;
use crate::components::{CreateTicketModal, Loading, LogoutButton, TicketTable, Toast};
use crate::models::app_state::AppState;
use crate::view_models::analytics::summarize_client;
use crate::view_models::ticket_list::{LoadState, TicketListAction, TicketListModel, load_tickets};
use crate::view_models::{Notice, ViewScope};
use shared::models::Session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

/// Landing page for clients: their own tickets and a way to raise new ones.
#[function_component(ClientPage)]
pub fn client_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let revision = use_selector(|state: &AppState| state.tickets_revision);
    let model = use_reducer(TicketListModel::default);
    let creating = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let scope = use_memo((), |_| ViewScope::new());

    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }

    let current: &Option<Session> = &session;
    let owner = current.as_ref().map(|session| session.user_id.clone());

    {
        let model = model.clone();
        let scope = scope.clone();
        use_effect_with((owner.clone(), *revision), move |(owner, _)| {
            let owner = owner.clone();
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                if let Some(result) = scope.run(load_tickets(&client, owner.as_deref())).await {
                    model.dispatch(TicketListAction::from(result));
                }
            });
            || ()
        });
    }

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };

    let on_close = {
        let creating = creating.clone();
        Callback::from(move |()| creating.set(false))
    };

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |next: Notice| notice.set(Some(next)))
    };

    let on_expire = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let (user_name, user_email, created_by) = match current {
        Some(session) => (
            session.user_name.clone(),
            session.user_email.clone(),
            session.numeric_user_id(),
        ),
        None => (String::new(), String::new(), None),
    };

    let summary = summarize_client(model.tickets());
    let body = match &model.state {
        LoadState::Loading => html! { <Loading message="Fetching your tickets..." /> },
        LoadState::Failed(message) => html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        },
        LoadState::Ready => html! {
            <TicketTable
                tickets={model.tickets().to_vec()}
                show_people={false}
                empty_message={"You have not raised any tickets yet".to_string()}
            />
        },
    };

    html! {
        <div class="min-h-screen bg-base-100">
            <Toast notice={(*notice).clone()} {on_expire} />
            <header class="navbar bg-base-200 px-6">
                <div class="flex-1 flex flex-col items-start">
                    <span class="text-lg font-semibold">{format!("Hello, {user_name}")}</span>
                    <span class="text-sm opacity-70">{user_email}</span>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-primary gap-2" onclick={on_new}>
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                        {"New Ticket"}
                    </button>
                    <LogoutButton />
                </div>
            </header>

            <main class="p-6 space-y-6">
                <div class="stats shadow w-full">
                    <div class="stat">
                        <div class="stat-title">{"Tickets Raised"}</div>
                        <div class="stat-value">{summary.raised}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Resolved"}</div>
                        <div class="stat-value text-success">{summary.resolved}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Pending"}</div>
                        <div class="stat-value text-warning">{summary.pending}</div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"My Tickets"}</h2>
                        {body}
                    </div>
                </div>
            </main>

            <CreateTicketModal open={*creating} {created_by} {on_close} {on_notice} />
        </div>
    }
}
