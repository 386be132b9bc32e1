use crate::api::TicketDeskClient;
use crate::components::{Bar, BarChart, Loading, StatCard};
use crate::components::ticket_table::{status_badge_class, status_label};
use crate::models::app_state::AppState;
use crate::view_models::analytics::{
    month_histogram_with, recent_tickets, status_distribution, summarize,
};
use crate::view_models::ticket_list::{LOAD_FAILED_MESSAGE, load_tickets};
use crate::view_models::ViewScope;
use shared::models::{Ticket, Timestamp};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_memo, use_state};
use yew_icons::IconId;
use yewdux::prelude::use_selector;

const RECENT_TICKETS: usize = 10;

/// Short month name in the viewer's locale, e.g. `Jan`.
#[allow(clippy::cast_precision_loss)]
fn locale_month_label(created: &Timestamp) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(created.0.timestamp_millis() as f64));
    let options = js_sys::Object::new();
    if js_sys::Reflect::set(&options, &"month".into(), &"short".into()).is_err() {
        return created.0.format("%b").to_string();
    }
    date.to_locale_string("default", &options).into()
}

/// Admin analytics: headline counts, charts and the newest tickets.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let tickets = use_state(|| None::<Result<Vec<Ticket>, String>>);
    let revision = use_selector(|state: &AppState| state.tickets_revision);
    let scope = use_memo((), |_| ViewScope::new());

    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }

    {
        let tickets = tickets.clone();
        let scope = scope.clone();
        use_effect_with(*revision, move |_| {
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                if let Some(result) = scope.run(load_tickets(&client, None)).await {
                    tickets.set(Some(result.map_err(|_| LOAD_FAILED_MESSAGE.to_string())));
                }
            });
            || ()
        });
    }

    let tickets = match &*tickets {
        None => return html! { <Loading message="Fetching Tickets..." /> },
        Some(Err(message)) => {
            return html! {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            };
        }
        Some(Ok(tickets)) => tickets,
    };

    let summary = summarize(tickets);
    let status_bars: Vec<Bar> = status_distribution(&summary)
        .into_iter()
        .map(|(status, value)| Bar {
            label: status.label().to_string(),
            value,
        })
        .collect();
    let month_bars: Vec<Bar> = month_histogram_with(tickets, locale_month_label)
        .into_iter()
        .map(|bucket| Bar {
            label: bucket.label,
            value: bucket.count,
        })
        .collect();
    let recent = recent_tickets(tickets, RECENT_TICKETS);

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Tickets Analytics"}</h1>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard title="Total Tickets" value={summary.total} icon={IconId::HeroiconsOutlineTicket} />
                <StatCard title="Open Tickets" value={summary.open} icon={IconId::HeroiconsOutlineInbox} />
                <StatCard title="In Progress" value={summary.in_progress} icon={IconId::HeroiconsOutlineClock} />
                <StatCard title="Resolved Tickets" value={summary.resolved} icon={IconId::HeroiconsOutlineCheckCircle} />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Tickets by Status"}</h2>
                        <BarChart bars={status_bars} />
                    </div>
                </div>
                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Tickets Created Per Month"}</h2>
                        <BarChart bars={month_bars} empty_message={"No dated tickets yet".to_string()} />
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Recent Tickets"}</h2>
                    <div class="overflow-x-auto max-h-80">
                        <table class="table table-pin-rows">
                            <thead>
                                <tr>
                                    <th>{"ID"}</th>
                                    <th>{"Title"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Date"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for recent.iter().map(|ticket| html! {
                                    <tr key={ticket.id} class="hover">
                                        <td>{ticket.id}</td>
                                        <td>{ticket.title.clone()}</td>
                                        <td>
                                            <span class={format!("badge {}", status_badge_class(&ticket.status))}>
                                                {status_label(ticket)}
                                            </span>
                                        </td>
                                        <td>{ticket.created_at.as_ref().map(Timestamp::display_date).unwrap_or_default()}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
