use crate::components::LogoutButton;
use yew::{Html, function_component, html};

/// Shown to signed-in users whose role has no pages of its own.
#[function_component(ForbiddenPage)]
pub fn forbidden_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{"403"}</h1>
                    <p>{"Your account does not have access to this application."}</p>
                    <LogoutButton class="btn-outline" />
                </div>
            </div>
        </div>
    }
}
