use gloo_timers::callback::Timeout;
use yew::{Callback, Html, Properties, classes, function_component, html, use_effect_with};

use crate::config::FrontendConfig;
use crate::view_models::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    /// Fired once the notice has been on screen for the configured duration.
    pub on_expire: Callback<()>,
}

/// Top-right notice that clears itself.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_expire = props.on_expire.clone();
        let duration = FrontendConfig::new().toast_duration_ms;
        use_effect_with(props.notice.clone(), move |notice| {
            let timeout = notice
                .as_ref()
                .map(|_| Timeout::new(duration, move || on_expire.emit(())));
            // Dropping the handle cancels a timer that has not fired yet.
            move || drop(timeout)
        });
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };
    let tone = match notice.kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Error => "alert-error",
    };

    html! {
        <div class="toast toast-top toast-end z-50">
            <div class={classes!("alert", tone)} role="status">
                <span>{notice.text.clone()}</span>
            </div>
        </div>
    }
}
