use shared::models::{Ticket, TicketStatus, User};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::TicketDeskClient;
use crate::models::app_state::AppState;
use crate::view_models::ticket_editor::{
    TicketDetails, TicketEditBuffer, attach_file, load_details, load_roster, save_ticket,
};
use crate::view_models::{Notice, ViewScope};

#[derive(Properties, PartialEq)]
pub struct TicketEditorModalProps {
    pub ticket: Ticket,
    pub on_close: Callback<()>,
    pub on_notice: Callback<Notice>,
}

/// Status and assignee editor for one ticket.
#[function_component(TicketEditorModal)]
pub fn ticket_editor_modal(props: &TicketEditorModalProps) -> Html {
    let roster = use_state(Vec::<User>::new);
    let details = use_state(TicketDetails::default);
    let buffer = use_state(|| TicketEditBuffer::open(&props.ticket, &[]));
    let saving = use_state(|| false);
    let attachment_name = use_state(String::new);
    let attachment_url = use_state(String::new);
    let dispatch = use_dispatch::<AppState>();
    let scope = use_memo((), |_| ViewScope::new());

    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }

    {
        let roster = roster.clone();
        let details = details.clone();
        let scope = scope.clone();
        use_effect_with(props.ticket.clone(), move |ticket| {
            let ticket = ticket.clone();
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                if let Some(users) = scope.run(load_roster(&client)).await {
                    roster.set(users);
                }
                if let Some(loaded) = scope.run(load_details(&client, &ticket)).await {
                    details.set(loaded);
                }
            });
            || ()
        });
    }

    {
        // The roster can name the assignee when the ticket only carries a name.
        let buffer = buffer.clone();
        let ticket = props.ticket.clone();
        use_effect_with((*roster).clone(), move |roster| {
            let mut next = (*buffer).clone();
            next.roster_loaded(&ticket, roster);
            if next != *buffer {
                buffer.set(next);
            }
            || ()
        });
    }

    let on_status = {
        let buffer = buffer.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*buffer).clone();
                next.set_status_value(&select.value());
                buffer.set(next);
            }
        })
    };

    let on_assignee = {
        let buffer = buffer.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*buffer).clone();
                next.set_assignee_value(&select.value());
                buffer.set(next);
            }
        })
    };

    let on_save = {
        let buffer = buffer.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        let on_notice = props.on_notice.clone();
        let scope = scope.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*buffer).clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            let on_notice = on_notice.clone();
            let dispatch = dispatch.clone();
            let scope = scope.clone();
            saving.set(true);
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                let publish = || {
                    dispatch.reduce_mut(AppState::publish_ticket_change);
                };
                let Some(result) = scope.run(save_ticket(&client, &current, publish)).await else {
                    return;
                };
                saving.set(false);
                match result {
                    Ok(notice) => {
                        on_notice.emit(notice);
                        on_close.emit(());
                    }
                    Err(notice) => on_notice.emit(notice),
                }
            });
        })
    };

    let on_attachment_name = {
        let attachment_name = attachment_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                attachment_name.set(input.value());
            }
        })
    };

    let on_attachment_url = {
        let attachment_url = attachment_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                attachment_url.set(input.value());
            }
        })
    };

    let on_attach = {
        let attachment_name = attachment_name.clone();
        let attachment_url = attachment_url.clone();
        let details = details.clone();
        let on_notice = props.on_notice.clone();
        let ticket_id = props.ticket.id;
        let scope = scope.clone();
        Callback::from(move |_: MouseEvent| {
            let name = (*attachment_name).clone();
            let url = (*attachment_url).clone();
            let attachment_name = attachment_name.clone();
            let attachment_url = attachment_url.clone();
            let details = details.clone();
            let on_notice = on_notice.clone();
            let scope = scope.clone();
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                let Some(result) = scope.run(attach_file(&client, ticket_id, &name, &url)).await
                else {
                    return;
                };
                match result {
                    Ok(attachment) => {
                        let mut next = (*details).clone();
                        next.attachments.push(attachment);
                        details.set(next);
                        attachment_name.set(String::new());
                        attachment_url.set(String::new());
                    }
                    Err(err) => on_notice.emit(Notice::error(err.user_message())),
                }
            });
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let ticket = &props.ticket;
    let current = &*buffer;
    let reporter = details
        .reporter
        .as_ref()
        .map_or_else(|| ticket.reporter_name().to_string(), |user| user.name.clone());

    html! {
        <div class="modal modal-open">
            <div class="modal-box max-w-2xl">
                <button class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2" onclick={on_close}>{"✕"}</button>
                <h3 class="font-bold text-lg">{"Edit Ticket"}</h3>
                <div class="divider my-2"></div>

                <div class="space-y-3">
                    <p><span class="font-semibold">{"ID: "}</span>{format!("#{}", ticket.id)}</p>
                    if !reporter.is_empty() {
                        <p><span class="font-semibold">{"Reporter: "}</span>{reporter}</p>
                    }
                    <label class="form-control">
                        <span class="label-text font-semibold">{"Subject"}</span>
                        <input class="input input-bordered" type="text" value={ticket.title.clone()} disabled=true />
                    </label>
                    if let Some(description) = ticket.description.clone().filter(|text| !text.is_empty()) {
                        <label class="form-control">
                            <span class="label-text font-semibold">{"Description"}</span>
                            <textarea class="textarea textarea-bordered" rows="3" value={description} disabled=true />
                        </label>
                    }
                    <label class="form-control">
                        <span class="label-text font-semibold">{"Status"}</span>
                        <select class="select select-bordered" onchange={on_status}>
                            { for TicketStatus::iter().map(|status| html! {
                                <option value={status.as_str()} selected={status == current.status}>
                                    {status.label()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text font-semibold">{"Assignee"}</span>
                        <select class="select select-bordered" onchange={on_assignee}>
                            <option value="" selected={current.assignee.is_none()}>{"Unassigned"}</option>
                            { for roster.iter().map(|user| html! {
                                <option value={user.id.to_string()} selected={current.assignee == Some(user.id)}>
                                    {user.name.clone()}
                                </option>
                            }) }
                        </select>
                    </label>

                    <div>
                        <span class="label-text font-semibold">{"Attachments"}</span>
                        if details.attachments.is_empty() {
                            <p class="text-sm opacity-60">{"No attachments"}</p>
                        } else {
                            <ul class="list-disc ml-6 text-sm">
                                { for details.attachments.iter().map(|attachment| html! {
                                    <li>
                                        if let Some(url) = attachment.file_url.clone() {
                                            <a class="link" href={url} target="_blank">{attachment.file_name.clone()}</a>
                                        } else {
                                            {attachment.file_name.clone()}
                                        }
                                    </li>
                                }) }
                            </ul>
                        }
                        <div class="join w-full mt-2">
                            <input
                                class="input input-bordered input-sm join-item flex-1"
                                placeholder="File name"
                                value={(*attachment_name).clone()}
                                oninput={on_attachment_name}
                            />
                            <input
                                class="input input-bordered input-sm join-item flex-1"
                                placeholder="File URL"
                                value={(*attachment_url).clone()}
                                oninput={on_attachment_url}
                            />
                            <button class="btn btn-sm join-item" onclick={on_attach}>{"Attach"}</button>
                        </div>
                    </div>
                </div>

                <div class="modal-action">
                    <button class="btn btn-primary" disabled={*saving} onclick={on_save}>
                        {if *saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
