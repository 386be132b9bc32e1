use yew::{Html, Properties, function_component, html};

#[derive(Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub bars: Vec<Bar>,
    #[prop_or_default]
    pub empty_message: Option<String>,
}

/// Percentage width of `value` against `max`, for the bar fill.
pub fn bar_width(value: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    value.saturating_mul(100) / max
}

/// Horizontal bars drawn with plain elements.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    if props.bars.is_empty() {
        let message = props.empty_message.clone().unwrap_or_else(|| "No data".to_string());
        return html! { <p class="text-sm opacity-60">{message}</p> };
    }
    let max = props.bars.iter().map(|bar| bar.value).max().unwrap_or(0);

    html! {
        <div class="space-y-2">
            { for props.bars.iter().map(|bar| html! {
                <div key={bar.label.clone()} class="flex items-center gap-3">
                    <span class="w-24 text-sm truncate">{bar.label.clone()}</span>
                    <progress
                        class="progress progress-primary flex-1"
                        value={bar_width(bar.value, max).to_string()}
                        max="100"
                    ></progress>
                    <span class="w-8 text-right text-sm font-semibold">{bar.value}</span>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::bar_width;

    #[test]
    fn widths_scale_to_the_largest_bar() {
        assert_eq!(bar_width(5, 10), 50);
        assert_eq!(bar_width(10, 10), 100);
        assert_eq!(bar_width(0, 0), 0);
    }
}
