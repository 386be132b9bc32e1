use crate::components::Sidebar;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
}

/// Admin shell: sidebar navigation beside the page content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "corporate")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex bg-base-100">
            <Sidebar current_route={props.current_route} />
            <div class="flex-1 flex flex-col">
                <main class={classes!("flex-grow", "p-6", "transition-all", "duration-300")}>
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <p>{"TicketDesk · Powered by Rust, Yew and DaisyUI"}</p>
                </footer>
            </div>
        </div>
    }
}
