use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_select: Callback<usize>,
}

/// Previous/next and numbered page buttons. Hidden for a single page.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let page = props.page;
    let previous = props.on_select.reform(move |_: MouseEvent| page.saturating_sub(1));
    let next = props.on_select.reform(move |_: MouseEvent| page + 1);

    html! {
        <div class="join flex justify-center mt-4">
            <button class="join-item btn btn-sm" disabled={page <= 1} onclick={previous}>{"«"}</button>
            { for (1..=props.total_pages).map(|number| {
                let onclick = props.on_select.reform(move |_: MouseEvent| number);
                html! {
                    <button
                        key={number}
                        class={classes!("join-item", "btn", "btn-sm", (number == page).then_some("btn-active"))}
                        {onclick}
                    >
                        {number}
                    </button>
                }
            }) }
            <button class="join-item btn btn-sm" disabled={page >= props.total_pages} onclick={next}>{"»"}</button>
        </div>
    }
}
