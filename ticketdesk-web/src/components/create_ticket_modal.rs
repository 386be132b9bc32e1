use shared::models::TicketPriority;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::TicketDeskClient;
use crate::error::AppError;
use crate::models::app_state::AppState;
use crate::view_models::create_ticket::{CreateTicketForm, submit_ticket};
use crate::view_models::{Notice, ViewScope};

#[derive(Properties, PartialEq)]
pub struct CreateTicketModalProps {
    pub open: bool,
    /// Numeric id of the reporter, when the session has one.
    pub created_by: Option<i64>,
    pub on_close: Callback<()>,
    pub on_notice: Callback<Notice>,
}

#[function_component(CreateTicketModal)]
pub fn create_ticket_modal(props: &CreateTicketModalProps) -> Html {
    let form = use_state(CreateTicketForm::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let scope = use_memo((), |_| ViewScope::new());

    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }

    let on_title = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.title = input.value();
                form.set(next);
            }
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                next.description = input.value();
                form.set(next);
            }
        })
    };

    let on_priority = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(priority) = select.value().parse() {
                    let mut next = (*form).clone();
                    next.priority = priority;
                    form.set(next);
                }
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let created_by = props.created_by;
        let on_close = props.on_close.clone();
        let on_notice = props.on_notice.clone();
        let dispatch = use_dispatch::<AppState>();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let form = form.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            let on_notice = on_notice.clone();
            let dispatch = dispatch.clone();
            let scope = scope.clone();
            let mut draft = (*form).clone();
            error.set(None);
            submitting.set(true);
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                let publish = || {
                    dispatch.reduce_mut(AppState::publish_ticket_change);
                };
                let Some(result) = scope
                    .run(submit_ticket(&client, &mut draft, created_by, publish))
                    .await
                else {
                    return;
                };
                submitting.set(false);
                form.set(draft);
                match result {
                    Ok(_) => {
                        on_notice.emit(Notice::success("Ticket created successfully!"));
                        on_close.emit(());
                    }
                    Err(AppError::Validation(message)) => error.set(Some(message)),
                    Err(err) => on_notice.emit(Notice::error(err.user_message())),
                }
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    let current = &*form;

    html! {
        <div class="modal modal-open">
            <form class="modal-box space-y-3" onsubmit={on_submit}>
                <h3 class="font-bold text-lg">{"Create New Ticket"}</h3>
                if let Some(message) = &*error {
                    <div class="alert alert-error"><span>{message.clone()}</span></div>
                }
                <label class="form-control">
                    <span class="label-text">{"Title"}</span>
                    <input
                        class="input input-bordered"
                        type="text"
                        value={current.title.clone()}
                        oninput={on_title}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Description"}</span>
                    <textarea
                        class="textarea textarea-bordered"
                        rows="4"
                        value={current.description.clone()}
                        oninput={on_description}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Priority"}</span>
                    <select class="select select-bordered" onchange={on_priority}>
                        { for TicketPriority::iter().map(|priority| html! {
                            <option value={priority.as_str()} selected={priority == current.priority}>
                                {priority.as_str()}
                            </option>
                        }) }
                    </select>
                </label>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
