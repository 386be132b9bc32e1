use shared::models::{Ticket, TicketPriority, TicketStatus, Timestamp};
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

/// Badge tone for a ticket status as received from the server.
pub fn status_badge_class(status: &str) -> &'static str {
    match TicketStatus::parse_loose(status) {
        Some(TicketStatus::Open) => "badge-success",
        Some(TicketStatus::InProgress) => "badge-warning",
        Some(TicketStatus::Resolved) => "badge-secondary",
        Some(TicketStatus::Closed) | None => "badge-ghost",
    }
}

pub fn priority_badge_class(priority: &str) -> &'static str {
    match priority.parse::<TicketPriority>() {
        Ok(TicketPriority::High) => "badge-error",
        Ok(TicketPriority::Medium) => "badge-warning",
        Ok(TicketPriority::Low) => "badge-info",
        Err(_) => "badge-ghost",
    }
}

pub fn status_label(ticket: &Ticket) -> String {
    ticket
        .status_kind()
        .map_or_else(|| ticket.status.clone(), |status| status.label().to_string())
}

#[derive(Properties, PartialEq)]
pub struct TicketTableProps {
    pub tickets: Vec<Ticket>,
    /// Show the reporter and assignee columns.
    #[prop_or(true)]
    pub show_people: bool,
    #[prop_or_default]
    pub on_view: Option<Callback<Ticket>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<i64>>,
    #[prop_or_default]
    pub empty_message: Option<String>,
}

#[function_component(TicketTable)]
pub fn ticket_table(props: &TicketTableProps) -> Html {
    let has_actions = props.on_view.is_some() || props.on_delete.is_some();
    let columns = 5 + 2 * usize::from(props.show_people) + usize::from(has_actions);

    let rows = if props.tickets.is_empty() {
        let message = props
            .empty_message
            .clone()
            .unwrap_or_else(|| "No tickets found".to_string());
        html! {
            <tr><td colspan={columns.to_string()} class="text-center opacity-60">{message}</td></tr>
        }
    } else {
        props.tickets.iter().map(|ticket| {
            let view = props.on_view.as_ref().map(|on_view| {
                let ticket = ticket.clone();
                on_view.reform(move |_: MouseEvent| ticket.clone())
            });
            let delete = props.on_delete.as_ref().map(|on_delete| {
                let id = ticket.id;
                on_delete.reform(move |_: MouseEvent| id)
            });
            html! {
                <tr key={ticket.id} class="hover">
                    <td>{format!("#{}", ticket.id)}</td>
                    <td>{ticket.title.clone()}</td>
                    <td>
                        <span class={classes!("badge", status_badge_class(&ticket.status))}>
                            {status_label(ticket)}
                        </span>
                    </td>
                    <td>
                        <span class={classes!("badge", "badge-outline", priority_badge_class(&ticket.priority))}>
                            {ticket.priority.clone()}
                        </span>
                    </td>
                    if props.show_people {
                        <>
                            <td>{ticket.reporter_name().to_string()}</td>
                            <td>{ticket.assignee_label().to_string()}</td>
                        </>
                    }
                    <td>{ticket.created_at.as_ref().map(Timestamp::display_date).unwrap_or_default()}</td>
                    if has_actions {
                        <td class="flex gap-2">
                            if let Some(onclick) = view {
                                <button class="btn btn-ghost btn-xs" title="View" {onclick}>
                                    <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-4 h-4" />
                                </button>
                            }
                            if let Some(onclick) = delete {
                                <button class="btn btn-ghost btn-xs text-error" title="Delete" {onclick}>
                                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" />
                                </button>
                            }
                        </td>
                    }
                </tr>
            }
        }).collect::<Html>()
    };

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Subject"}</th>
                        <th>{"Status"}</th>
                        <th>{"Priority"}</th>
                        if props.show_people {
                            <>
                                <th>{"Reporter"}</th>
                                <th>{"Assignee"}</th>
                            </>
                        }
                        <th>{"Raised on"}</th>
                        if has_actions {
                            <th>{"Actions"}</th>
                        }
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
