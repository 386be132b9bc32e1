use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{ "404" }</h1>
                    <p>{ "The page you are looking for does not exist." }</p>
                    <Link<MainRoute> to={MainRoute::Index} classes="btn btn-primary">
                        { "Back to start" }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
