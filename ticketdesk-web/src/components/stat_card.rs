use yew::{AttrValue, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: usize,
    pub icon: IconId,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-base-200 rounded-box shadow">
            <div class="stat-figure text-primary">
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <div class="stat-title">{props.title.clone()}</div>
            <div class="stat-value text-primary">{props.value}</div>
        </div>
    }
}
