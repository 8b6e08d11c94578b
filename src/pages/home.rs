use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::Nav;
use crate::config;
use crate::scroller::{ScrollerHandle, SectionScroller};
use crate::sections::{
    ContactSection, Footer, HeroSection, ServicesSection, TestimonialSection, HERO, SERVICES,
};
use crate::theme::ThemeBackground;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let handle = use_memo(|_| ScrollerHandle::new(), ());
    let active = use_state(|| HERO);
    let scroller_config = use_memo(|_| config::scroller_settings(), ());

    let on_change = {
        let active = active.clone();
        Callback::from(move |index: usize| {
            debug!("Active section {}", index);
            active.set(index);
        })
    };

    let sections = vec![
        html! { <HeroSection active={*active == HERO} /> },
        html! { <ServicesSection config={config::carousel_settings()} active={*active == SERVICES} /> },
        html! { <TestimonialSection /> },
        html! { <ContactSection /> },
        html! { <Footer handle={(*handle).clone()} /> },
    ];

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                        background: var(--bg-primary);
                    }
                "#}
            </style>
            <ThemeBackground />
            <Nav handle={(*handle).clone()} active={*active} />
            <SectionScroller
                sections={sections}
                config={(*scroller_config).clone()}
                handle={(*handle).clone()}
                on_change={on_change}
            />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: var(--bg-primary);
                        color: var(--text-primary);
                    }
                    .not-found a {
                        color: var(--accent);
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
        </div>
    }
}
