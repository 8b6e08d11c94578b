use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::scroller::ScrollerHandle;
use crate::sections::{CONTACT, HERO, SERVICES, TESTIMONIALS};

pub struct FooterLink {
    pub label: &'static str,
    /// Section to scroll to; `None` links are placeholders.
    pub section: Option<usize>,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink { label: "About", section: Some(HERO) },
            FooterLink { label: "Careers", section: None },
            FooterLink { label: "Contact", section: Some(CONTACT) },
        ],
    },
    FooterColumn {
        title: "Services",
        links: &[
            FooterLink { label: "What we do", section: Some(SERVICES) },
            FooterLink { label: "Client stories", section: Some(TESTIMONIALS) },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            FooterLink { label: "Terms", section: None },
            FooterLink { label: "Privacy", section: None },
            FooterLink { label: "Cookies", section: None },
        ],
    },
];

const SOCIALS: &[(&str, &str)] = &[
    ("Instagram", "https://instagram.com"),
    ("YouTube", "https://youtube.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("X", "https://x.com"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} HustlersConnect. All rights reserved.", year)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub handle: ScrollerHandle,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = use_memo(|_| Local::now().year(), ());

    let go_to = |index: usize| {
        let handle = props.handle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.scroll_to(index);
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 2.5rem;
                        padding: 0 clamp(1rem, 6vw, 6rem);
                        background: transparent;
                        color: var(--text-secondary);
                    }
                    .footer-cta {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1.5rem 2rem;
                        border-radius: 1rem;
                        border: 1px solid var(--border-subtle);
                        background: var(--bg-card);
                    }
                    .footer-cta h3 {
                        margin: 0;
                        color: var(--text-primary);
                    }
                    .footer-cta button,
                    .footer-top {
                        padding: 0.6rem 1.3rem;
                        border-radius: 999px;
                        border: 1px solid var(--border-subtle);
                        background: transparent;
                        color: var(--text-primary);
                        cursor: pointer;
                    }
                    .footer-cta button {
                        border: none;
                        color: white;
                        background: linear-gradient(90deg, #7c3aed, #db2777);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .footer-brand strong {
                        display: block;
                        font-size: 1.2rem;
                        color: var(--text-primary);
                        margin-bottom: 0.5rem;
                    }
                    .footer-brand p {
                        margin: 0 0 1rem;
                        line-height: 1.6;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .footer-socials a,
                    .footer-column a {
                        color: var(--text-secondary);
                        text-decoration: none;
                    }
                    .footer-socials a:hover,
                    .footer-column a:hover {
                        color: var(--accent);
                    }
                    .footer-column h4 {
                        margin: 0 0 0.75rem;
                        font-size: 0.7rem;
                        letter-spacing: 0.14em;
                        text-transform: uppercase;
                        color: var(--text-muted);
                    }
                    .footer-column ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: grid;
                        gap: 0.45rem;
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding-top: 1.25rem;
                        border-top: 1px solid var(--border-subtle);
                        font-size: 0.8rem;
                    }
                "#}
            </style>
            <div class="footer-cta">
                <h3>{"Ready to scale what you've built?"}</h3>
                <button onclick={go_to(CONTACT)}>{"Start a project"}</button>
            </div>
            <div class="footer-grid">
                <div class="footer-brand">
                    <strong>{"HustlersConnect"}</strong>
                    <p>{"Building scalable digital systems, intelligent products, and high-impact experiences."}</p>
                    <div class="footer-socials">
                        { for SOCIALS.iter().map(|(name, url)| html! {
                            <a href={*url} target="_blank" rel="noopener noreferrer" aria-label={*name}>{*name}</a>
                        }) }
                    </div>
                </div>
                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <nav class="footer-column" aria-label={format!("Footer {}", column.title)}>
                        <h4>{column.title}</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li>
                                    {
                                        match link.section {
                                            Some(index) => html! { <a href="#" onclick={go_to(index)}>{link.label}</a> },
                                            None => html! { <a href="#">{link.label}</a> },
                                        }
                                    }
                                </li>
                            }) }
                        </ul>
                    </nav>
                }) }
            </div>
            <div class="footer-bottom">
                <span>{copyright_line(*year)}</span>
                <button class="footer-top" onclick={go_to(HERO)}>{"Back to top ↑"}</button>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_mentions_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 HustlersConnect. All rights reserved."
        );
    }

    #[test]
    fn section_links_point_at_real_sections() {
        for column in FOOTER_COLUMNS {
            for link in column.links {
                if let Some(index) = link.section {
                    assert!(index <= CONTACT, "{} points past contact", link.label);
                }
            }
        }
    }
}
