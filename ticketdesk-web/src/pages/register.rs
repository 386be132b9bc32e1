use crate::{
    api::TicketDeskClient,
    models::app_state::AppState,
    routes::MainRoute,
    session::{LocalSessionStorage, SessionStore, register_account},
    view_models::registration::RegistrationForm,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

fn field_input(
    form: &UseStateHandle<RegistrationForm>,
    apply: fn(&mut RegistrationForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        }
    })
}

/// Self-service client registration.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form = use_state(RegistrationForm::default);
    let error = use_state(|| None::<String>);
    let registered = use_state(|| false);
    let loading = use_state(|| false);
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let registered = registered.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(problem) => {
                    error.set(Some(problem.to_string()));
                    return;
                }
            };
            error.set(None);
            loading.set(true);
            let error = error.clone();
            let registered = registered.clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = TicketDeskClient::shared();
                let mut store = SessionStore::new(LocalSessionStorage);
                let result = register_account(&client, &mut store, &request).await;
                loading.set(false);
                match result {
                    Ok(Some(session)) => {
                        dispatch.reduce_mut(|state| state.sign_in(session));
                    }
                    Ok(None) => registered.set(true),
                    Err(err) => {
                        log::warn!("registration failed: {err}");
                        error.set(Some(err.user_message()));
                    }
                }
            });
        })
    };

    let on_name = field_input(&form, |form, value| form.name = value);
    let on_email = field_input(&form, |form, value| form.email = value);
    let on_password = field_input(&form, |form, value| form.password = value);
    let on_confirm = field_input(&form, |form, value| form.confirm_password = value);

    if *registered {
        return html! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="card w-full max-w-md shadow-lg bg-base-100">
                    <div class="card-body">
                        <div class="alert alert-success">
                            <span>{"Account created. You can sign in now."}</span>
                        </div>
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary mt-4">
                            {"Go to sign in"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        };
    }

    let current = &*form;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name"><span class="label-text">{"Name"}</span></label>
                        <input id="name" class="input input-bordered" type="text"
                            value={current.name.clone()} oninput={on_name} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email"><span class="label-text">{"Email"}</span></label>
                        <input id="email" class="input input-bordered" type="email"
                            value={current.email.clone()} oninput={on_email} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password"><span class="label-text">{"Password"}</span></label>
                        <input id="password" class="input input-bordered" type="password"
                            value={current.password.clone()} oninput={on_password} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm-password"><span class="label-text">{"Confirm password"}</span></label>
                        <input id="confirm-password" class="input input-bordered" type="password"
                            value={current.confirm_password.clone()} oninput={on_confirm} />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            {if *loading { "Creating account..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
