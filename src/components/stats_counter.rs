use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCounterProps {
    pub number: AttrValue,
    pub label: AttrValue,
    /// Milliseconds to wait before the counter fades in.
    #[prop_or_default]
    pub delay: u32,
}

pub fn stat_class(shown: bool) -> Classes {
    classes!("stat-item", shown.then(|| "visible"))
}

#[function_component(StatsCounter)]
pub fn stats_counter(props: &StatsCounterProps) -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |delay| {
                let timeout = Timeout::new(*delay, move || shown.set(true));
                // Dropping the timeout on unmount cancels it.
                move || drop(timeout)
            },
            props.delay,
        );
    }

    html! {
        <div class={stat_class(*shown)}>
            <div class="stat-number">{props.number.clone()}</div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_hidden_until_shown() {
        assert_eq!(stat_class(false).to_string(), "stat-item");
        assert_eq!(stat_class(true).to_string(), "stat-item visible");
    }
}
