use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use crate::session::{LocalSessionStorage, SessionStore};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

/// Restores the persisted session, then hands over to the router.
///
/// Routing waits for the restore so a signed-in user who reloads a deep link
/// is not bounced through the login page first.
#[function_component(App)]
pub fn app() -> Html {
    let restored = use_selector(|state: &AppState| state.restored);
    let dispatch = use_dispatch::<AppState>();

    use_effect_with((), move |_| {
        let store = SessionStore::restore(LocalSessionStorage);
        let session = store.into_session();
        if let Some(session) = &session {
            log::debug!("restored session for user {}", session.user_id);
        }
        dispatch.reduce_mut(|state| {
            state.session = session;
            state.restored = true;
        });
        || ()
    });

    if !*restored {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
