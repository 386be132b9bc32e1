use crate::api::TicketDeskClient;
use crate::components::{DeleteModal, Loading, Pagination, TicketEditorModal, TicketTable, Toast};
use crate::models::app_state::AppState;
use crate::view_models::ticket_list::{
    LoadState, TicketListAction, TicketListModel, delete_ticket, load_tickets,
};
use crate::view_models::{Notice, ViewScope};
use shared::models::{Ticket, TicketPriority, TicketStatus};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// Admin ticket table with filters, pagination, edit and delete.
#[function_component(TicketsPage)]
pub fn tickets_page() -> Html {
    let model = use_reducer(TicketListModel::default);
    let notice = use_state(|| None::<Notice>);
    let deleting = use_state(|| None::<i64>);
    let editing = use_state(|| None::<Ticket>);
    let revision = use_selector(|state: &AppState| state.tickets_revision);
    let scope = use_memo((), |_| ViewScope::new());

    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }

    {
        let model = model.clone();
        let scope = scope.clone();
        use_effect_with(*revision, move |_| {
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                if let Some(result) = scope.run(load_tickets(&client, None)).await {
                    model.dispatch(TicketListAction::from(result));
                }
            });
            || ()
        });
    }

    let on_reporter = {
        let model = model.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                model.dispatch(TicketListAction::SetReporter(input.value()));
            }
        })
    };

    let on_status = {
        let model = model.clone();
        Callback::from(move |event: Event| {
            let status = select_value(&event).and_then(|value| value.parse::<TicketStatus>().ok());
            model.dispatch(TicketListAction::SetStatus(status));
        })
    };

    let on_priority = {
        let model = model.clone();
        Callback::from(move |event: Event| {
            let priority =
                select_value(&event).and_then(|value| value.parse::<TicketPriority>().ok());
            model.dispatch(TicketListAction::SetPriority(priority));
        })
    };

    let on_page = {
        let model = model.clone();
        Callback::from(move |page: usize| model.dispatch(TicketListAction::GoToPage(page)))
    };

    let on_view = {
        let editing = editing.clone();
        Callback::from(move |ticket: Ticket| editing.set(Some(ticket)))
    };

    let on_delete = {
        let deleting = deleting.clone();
        Callback::from(move |id: i64| deleting.set(Some(id)))
    };

    let on_confirm_delete = {
        let deleting = deleting.clone();
        let model = model.clone();
        let notice = notice.clone();
        let scope = scope.clone();
        Callback::from(move |()| {
            let Some(id) = *deleting else {
                return;
            };
            deleting.set(None);
            let model = model.clone();
            let notice = notice.clone();
            let scope = scope.clone();
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                let dispatch_scope = scope.clone();
                let dispatch = move |action: TicketListAction| {
                    if dispatch_scope.is_active() {
                        model.dispatch(action);
                    }
                };
                if let Some(outcome) = scope.run(delete_ticket(&client, id, dispatch)).await {
                    notice.set(Some(outcome));
                }
            });
        })
    };

    let on_cancel_delete = {
        let deleting = deleting.clone();
        Callback::from(move |()| deleting.set(None))
    };

    let on_close_editor = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |next: Notice| notice.set(Some(next)))
    };

    let on_expire = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let body = match &model.state {
        LoadState::Loading => html! { <Loading message="Fetching Tickets..." /> },
        LoadState::Failed(message) => html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        },
        LoadState::Ready => html! {
            <>
                <TicketTable tickets={model.visible()} {on_view} {on_delete} />
                <Pagination page={model.page()} total_pages={model.total_pages()} on_select={on_page} />
            </>
        },
    };
    let filters = model.filters();

    html! {
        <div class="space-y-4">
            <Toast notice={(*notice).clone()} {on_expire} />
            <h1 class="text-2xl font-bold">{"Tickets"}</h1>

            <div class="flex flex-wrap gap-3">
                <input
                    class="input input-bordered"
                    type="search"
                    placeholder="Search by reporter"
                    value={filters.reporter.clone()}
                    oninput={on_reporter}
                />
                <select class="select select-bordered" onchange={on_status}>
                    <option value="" selected={filters.status.is_none()}>{"All statuses"}</option>
                    { for TicketStatus::iter().map(|status| html! {
                        <option value={status.as_str()} selected={filters.status == Some(status)}>
                            {status.label()}
                        </option>
                    }) }
                </select>
                <select class="select select-bordered" onchange={on_priority}>
                    <option value="" selected={filters.priority.is_none()}>{"All priorities"}</option>
                    { for TicketPriority::iter().map(|priority| html! {
                        <option value={priority.as_str()} selected={filters.priority == Some(priority)}>
                            {priority.as_str()}
                        </option>
                    }) }
                </select>
            </div>

            {body}

            <DeleteModal open={deleting.is_some()} on_confirm={on_confirm_delete} on_cancel={on_cancel_delete} />
            if let Some(ticket) = (*editing).clone() {
                <TicketEditorModal key={ticket.id} ticket={ticket.clone()} on_close={on_close_editor} {on_notice} />
            }
        </div>
    }
}
