use yew::prelude::*;

use crate::content::{reveal_style, Service};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    #[prop_or_default]
    pub delay: u32,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <div class="service-card" style={reveal_style(props.delay)}>
            <div class="service-accent" style={format!("background: {};", service.gradient)}></div>
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <ul class="service-features">
                {
                    service.features.iter().map(|feature| {
                        html! { <li key={*feature}>{"✓ "}{*feature}</li> }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
