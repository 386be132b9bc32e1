use yew::{Callback, Classes, Html, MouseEvent, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_dispatch;

use crate::models::app_state::AppState;
use crate::session::{LocalSessionStorage, SessionStore};

#[derive(Properties, PartialEq)]
pub struct LogoutButtonProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Clears the stored session. The route gate then sends the user to login.
#[function_component(LogoutButton)]
pub fn logout_button(props: &LogoutButtonProps) -> Html {
    let dispatch = use_dispatch::<AppState>();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Err(err) = SessionStore::new(LocalSessionStorage).clear() {
            log::error!("logout left stored credentials behind: {err}");
        }
        dispatch.reduce_mut(AppState::sign_out);
    });

    html! {
        <button class={classes!("btn", "btn-ghost", "gap-2", props.class.clone())} {onclick}>
            <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
            {"Logout"}
        </button>
    }
}
