use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
    pub open: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(DeleteModal)]
pub fn delete_modal(props: &DeleteModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{"Delete ticket"}</h3>
                <p class="py-4">{"Are you sure you want to delete this ticket? This cannot be undone."}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="btn btn-error" onclick={on_confirm}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
