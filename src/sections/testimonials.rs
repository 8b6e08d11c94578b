use yew::prelude::*;

use crate::config::MARQUEE_SECONDS;
use crate::theme::{use_theme, Theme};

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar_url: &'static str,
    pub story: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Aarav Sharma",
        role: "Startup Founder",
        company: "ScaleX Labs",
        avatar_url: "https://i.pravatar.cc/150?img=11",
        story: "Working with this platform transformed our workflow completely. The performance and execution quality exceeded every expectation we brought to the table.",
    },
    Testimonial {
        name: "Riya Patel",
        role: "Product Designer",
        company: "Designify",
        avatar_url: "https://i.pravatar.cc/150?img=32",
        story: "The clarity in communication and execution speed made everything seamless. Highly professional and deeply committed to results that actually matter.",
    },
    Testimonial {
        name: "Karan Mehta",
        role: "CTO",
        company: "NextGen AI",
        avatar_url: "https://i.pravatar.cc/150?img=45",
        story: "Technically sharp, reliable, and forward-thinking. One of the most structured and scalable implementations our team has ever worked with.",
    },
    Testimonial {
        name: "Sneha Kapoor",
        role: "Marketing Lead",
        company: "BrandLift",
        avatar_url: "https://i.pravatar.cc/150?img=24",
        story: "Exceptional collaboration and execution at every step. Delivered measurable growth across all campaigns with zero compromise on quality.",
    },
    Testimonial {
        name: "Dev Nair",
        role: "Engineering Manager",
        company: "Cloudstack",
        avatar_url: "https://i.pravatar.cc/150?img=57",
        story: "Reliability and quality are rare to find together. This platform delivered both, every single sprint without fail.",
    },
    Testimonial {
        name: "Priya Iyer",
        role: "UX Researcher",
        company: "Humanize",
        avatar_url: "https://i.pravatar.cc/150?img=47",
        story: "The attention to detail in every deliverable was remarkable. Felt like working with a team that truly understood our users.",
    },
];

/// Splits `len` items into two marquee rows (even and odd positions), each
/// repeated twice so a `-50%` translation loops without a seam.
pub fn marquee_rows(len: usize) -> (Vec<usize>, Vec<usize>) {
    let even: Vec<usize> = (0..len).step_by(2).collect();
    let odd: Vec<usize> = (1..len).step_by(2).collect();
    let doubled = |row: Vec<usize>| -> Vec<usize> { row.iter().chain(row.iter()).copied().collect() };
    (doubled(even), doubled(odd))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialSectionProps {
    #[prop_or(MARQUEE_SECONDS)]
    pub speed_secs: u32,
}

#[function_component(TestimonialSection)]
pub fn testimonial_section(props: &TestimonialSectionProps) -> Html {
    let theme = use_theme().theme;
    let (row_a, row_b) = marquee_rows(TESTIMONIALS.len());

    let row = |items: Vec<usize>, reverse: bool| {
        html! {
            <div class="marquee">
                <div
                    class={classes!("marquee-track", reverse.then(|| "reverse"))}
                    style={format!("animation-duration: {}s;", props.speed_secs)}
                >
                    { for items.into_iter().enumerate().map(|(slot, i)| html! {
                        <TestimonialCard key={slot} testimonial={TESTIMONIALS[i].clone()} />
                    }) }
                </div>
            </div>
        }
    };

    html! {
        <section class="testimonials-section" aria-label="Client testimonials">
            <style>
                {r#"
                    .testimonials-section {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 1.25rem;
                        overflow: hidden;
                        background: transparent;
                    }
                    .testimonials-section h2 {
                        text-align: center;
                        margin: 0 0 2rem;
                        font-size: clamp(1.8rem, 3.5vw, 2.4rem);
                    }
                    .story-accent {
                        background: linear-gradient(90deg, #a78bfa, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .story-accent.light {
                        background-image: linear-gradient(90deg, #6366f1, #8b5cf6);
                    }
                    .marquee {
                        position: relative;
                        overflow: hidden;
                    }
                    .marquee-track {
                        display: flex;
                        gap: 1.25rem;
                        width: max-content;
                        animation-name: marquee-left;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                        will-change: transform;
                    }
                    .marquee-track.reverse {
                        animation-name: marquee-right;
                    }
                    .testimonials-section:hover .marquee-track {
                        animation-play-state: paused;
                    }
                    @keyframes marquee-left {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    @keyframes marquee-right {
                        from { transform: translateX(-50%); }
                        to { transform: translateX(0); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .marquee-track {
                            animation: none;
                        }
                    }
                    .testimonial-card {
                        width: 340px;
                        flex-shrink: 0;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid var(--border-subtle);
                        background: var(--bg-card);
                        display: flex;
                        flex-direction: column;
                        gap: 0.9rem;
                        transition: box-shadow 0.3s;
                    }
                    .testimonial-card:hover {
                        box-shadow: 0 8px 30px rgba(99, 102, 241, 0.18);
                    }
                    .testimonial-card .quote {
                        font-size: 2rem;
                        line-height: 1;
                        color: var(--accent);
                    }
                    .testimonial-card .stars {
                        color: #fbbf24;
                        letter-spacing: 0.15em;
                    }
                    .testimonial-card p {
                        margin: 0;
                        color: var(--text-secondary);
                        line-height: 1.55;
                        font-size: 0.92rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .testimonial-author img {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                    .testimonial-author small {
                        display: block;
                        color: var(--text-muted);
                    }
                "#}
            </style>
            <h2>
                {"Our Clients "}
                <span class={classes!("story-accent", (theme == Theme::Light).then(|| "light"))}>{"Story"}</span>
            </h2>
            { row(row_a, false) }
            { row(row_b, true) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <article class="testimonial-card">
            <span class="quote" aria-hidden="true">{"“"}</span>
            <span class="stars" aria-label="5 out of 5 stars">{"★★★★★"}</span>
            <p>{t.story}</p>
            <div class="testimonial-author">
                <img src={t.avatar_url} alt={t.name} loading="lazy" />
                <div>
                    <strong>{t.name}</strong>
                    <small>{format!("{} · {}", t.role, t.company)}</small>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_testimonial_twice() {
        let (a, b) = marquee_rows(TESTIMONIALS.len());
        assert_eq!(a, vec![0, 2, 4, 0, 2, 4]);
        assert_eq!(b, vec![1, 3, 5, 1, 3, 5]);
    }

    #[test]
    fn odd_count_and_empty() {
        let (a, b) = marquee_rows(3);
        assert_eq!(a, vec![0, 2, 0, 2]);
        assert_eq!(b, vec![1, 1]);
        let (a, b) = marquee_rows(0);
        assert!(a.is_empty() && b.is_empty());
    }
}
