use std::rc::Rc;

use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

/// Half the drawing height; the SVG viewBox spans `-GEOMETRY_HEIGHT..GEOMETRY_HEIGHT`.
pub const GEOMETRY_HEIGHT: f64 = 300.0;
pub const VISIBLE_HEIGHT: f64 = 350.0;

/// Fraction of the curve left free at each end before the first and last step.
pub const CURVE_EDGE_GAP: f64 = 0.11;

const RIBBON_SEGMENTS: usize = 50;
const CONNECTOR_OFFSET_RATIO: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: "understand",
        number: "1",
        title: "Understand",
        description: "Deep dive into your business, audience and growth opportunities",
        color: "#2563EB",
    },
    ProcessStep {
        id: "plan",
        number: "2",
        title: "Plan",
        description: "Strategic roadmap combining tech, creativity, and marketing",
        color: "#7C3AED",
    },
    ProcessStep {
        id: "execute",
        number: "3",
        title: "Execute",
        description: "Precise implementation across all digital channels",
        color: "#8B5CF6",
    },
    ProcessStep {
        id: "refine",
        number: "4",
        title: "Scale",
        description: "Continuous optimization for scalable growth",
        color: "#EC4899",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenClass {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
}

impl ScreenClass {
    pub fn from_width(width: f64) -> Self {
        if width < 640.0 {
            ScreenClass::Mobile
        } else if width < 1024.0 {
            ScreenClass::Tablet
        } else if width < 1536.0 {
            ScreenClass::Laptop
        } else {
            ScreenClass::Desktop
        }
    }
}

/// Ratios that shape the ribbon, all relative to the container size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveShape {
    /// Moves the whole curve; negative is up.
    pub vertical_shift: f64,
    pub start_y_offset: f64,
    pub end_y_offset: f64,
    pub width_ratio: f64,
    pub left_inward: f64,
    pub right_inward: f64,
    pub left_stretch_down: f64,
    pub right_stretch_down: f64,
    pub start_thickness: f64,
    pub mid_thickness: f64,
    pub end_thickness: f64,
    /// Gap between the lowest point of the curve and the step labels.
    pub label_offset: f64,
}

impl CurveShape {
    pub fn for_screen(screen: ScreenClass) -> Self {
        match screen {
            ScreenClass::Mobile => CurveShape {
                vertical_shift: -0.8,
                start_y_offset: 0.9,
                end_y_offset: -0.25,
                width_ratio: 0.98,
                left_inward: 0.05,
                right_inward: 0.01,
                left_stretch_down: 0.02,
                right_stretch_down: 1.42,
                start_thickness: 0.002,
                mid_thickness: 0.06,
                end_thickness: 0.002,
                label_offset: 0.49,
            },
            ScreenClass::Tablet => CurveShape {
                vertical_shift: -0.7,
                start_y_offset: 0.9,
                end_y_offset: -0.45,
                width_ratio: 0.98,
                left_inward: 0.15,
                right_inward: 0.09,
                left_stretch_down: 0.02,
                right_stretch_down: 1.82,
                start_thickness: 0.002,
                mid_thickness: 0.08,
                end_thickness: 0.002,
                label_offset: 0.34,
            },
            ScreenClass::Laptop | ScreenClass::Desktop => CurveShape {
                vertical_shift: -0.7,
                start_y_offset: 0.9,
                end_y_offset: -0.45,
                width_ratio: 0.78,
                left_inward: 0.15,
                right_inward: 0.14,
                left_stretch_down: 0.12,
                right_stretch_down: 1.82,
                start_thickness: 0.002,
                mid_thickness: 0.08,
                end_thickness: 0.002,
                label_offset: 0.35,
            },
        }
    }

    /// Lowest y either end of the curve is pulled down to.
    fn lowest_y(&self, height: f64) -> f64 {
        let base = height * self.vertical_shift;
        let left = base + height * (self.start_y_offset + self.left_stretch_down);
        let right = base + height * (self.end_y_offset + self.right_stretch_down);
        left.max(right)
    }

    /// Where the step labels sit.
    pub fn label_plane_y(&self, height: f64) -> f64 {
        self.lowest_y(height) + height * self.label_offset
    }

    /// Where every connector line ends.
    pub fn connector_plane_y(&self, height: f64) -> f64 {
        self.lowest_y(height) + height * CONNECTOR_OFFSET_RATIO
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A cubic Bézier with a thickness that swells towards the middle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Curve {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
    pub start_thickness: f64,
    pub mid_thickness: f64,
    pub end_thickness: f64,
}

impl Curve {
    /// Lays the curve out in a `width` x `height` box. Degenerate boxes give
    /// an all-zero curve.
    pub fn fit(width: f64, height: f64, shape: &CurveShape) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Curve::default();
        }

        let curve_width = width * shape.width_ratio;
        let margin = (width - curve_width) / 2.0;
        let start_x = margin + curve_width * shape.left_inward;
        let end_x = margin + curve_width - curve_width * shape.right_inward;

        let base = height * shape.vertical_shift;
        let start_y = base + height * shape.start_y_offset;
        let end_y = base + height * shape.end_y_offset;
        let span = end_x - start_x;

        Curve {
            start: Point { x: start_x, y: start_y },
            control1: Point {
                x: start_x + span * 0.3,
                y: start_y + height * shape.left_stretch_down,
            },
            control2: Point {
                x: start_x + span * 0.7,
                y: end_y + height * shape.right_stretch_down,
            },
            end: Point { x: end_x, y: end_y },
            start_thickness: height * shape.start_thickness,
            mid_thickness: height * shape.mid_thickness,
            end_thickness: height * shape.end_thickness,
        }
    }

    pub fn point(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Point {
            x: a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            y: a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        }
    }

    /// Linear from the start to the middle, then from the middle to the end.
    pub fn thickness(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            self.start_thickness + (self.mid_thickness - self.start_thickness) * t * 2.0
        } else {
            self.mid_thickness + (self.end_thickness - self.mid_thickness) * (t - 0.5) * 2.0
        }
    }

    /// Closed SVG path tracing the top edge forward and the bottom edge back.
    pub fn ribbon_path(&self, segments: usize) -> String {
        let segments = segments.max(1);
        let mut top = Vec::with_capacity(segments + 1);
        let mut bottom = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let t = i as f64 / segments as f64;
            let p = self.point(t);
            let half = self.thickness(t) / 2.0;
            let cmd = if i == 0 { "M" } else { "L" };
            top.push(format!("{} {:.2},{:.2}", cmd, p.x, p.y - half));
            bottom.push(format!("L {:.2},{:.2}", p.x, p.y + half));
        }
        bottom.reverse();
        top.extend(bottom);
        top.push("Z".to_string());
        top.join(" ")
    }
}

/// Curve parameter for step `index` of `total`, spread evenly inside the edge gaps.
pub fn step_t(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 0.5;
    }
    CURVE_EDGE_GAP + (index as f64 / (total - 1) as f64) * (1.0 - CURVE_EDGE_GAP * 2.0)
}

/// Converts a viewBox y to a pixel offset from the top of the container.
pub fn svg_y_to_px(y: f64) -> f64 {
    (y + GEOMETRY_HEIGHT) * VISIBLE_HEIGHT / (GEOMETRY_HEIGHT * 2.0)
}

pub fn dot_radius(width: f64) -> f64 {
    if width < 500.0 {
        5.0
    } else if width < 900.0 {
        6.0
    } else if width < 1200.0 {
        7.0
    } else {
        8.0
    }
}

#[function_component(HeroProcess)]
pub fn hero_process() -> Html {
    let container = use_node_ref();
    let width = use_state_eq(|| 0.0_f64);
    let active_step = use_state(|| None::<&'static str>);

    let measure = {
        let container = container.clone();
        let width = width.clone();
        Rc::new(move || {
            if let Some(el) = container.cast::<HtmlElement>() {
                let measured = f64::from(el.client_width());
                if measured > 0.0 {
                    width.set(measured);
                }
            }
        })
    };

    {
        let measure = measure.clone();
        use_event_with_window("resize", move |_: Event| measure());
    }
    use_effect_with_deps(
        move |_| {
            measure();
            || ()
        },
        (),
    );

    {
        let active_step = active_step.clone();
        use_event_with_window("keydown", move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                active_step.set(None);
            }
        });
    }

    let width = *width;
    let screen = ScreenClass::from_width(width);
    let shape = CurveShape::for_screen(screen);
    let curve = Curve::fit(width, GEOMETRY_HEIGHT, &shape);
    let view_box = format!(
        "0 -{h} {w} {h2}",
        h = GEOMETRY_HEIGHT,
        w = width,
        h2 = GEOMETRY_HEIGHT * 2.0
    );
    let connector_y = shape.connector_plane_y(GEOMETRY_HEIGHT);
    let label_top = svg_y_to_px(shape.label_plane_y(GEOMETRY_HEIGHT));
    let radius = dot_radius(width);
    let total = PROCESS_STEPS.len();

    let close = {
        let active_step = active_step.clone();
        Callback::from(move |_: MouseEvent| active_step.set(None))
    };

    html! {
        <div class="hero-process" ref={container} style={format!("height: {}px;", VISIBLE_HEIGHT)}>
            <style>
                {r#"
                    .hero-process {
                        position: relative;
                        width: 100%;
                        overflow: visible;
                    }
                    .hero-process svg {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        overflow: visible;
                        pointer-events: none;
                    }
                    .process-label {
                        position: absolute;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        cursor: pointer;
                        user-select: none;
                        z-index: 5;
                    }
                    .process-label h3 {
                        margin: 0;
                        font-size: 1rem;
                        font-weight: 800;
                        color: var(--text-primary);
                        transition: color 0.3s ease, transform 0.3s ease;
                    }
                    .process-label:hover h3 {
                        color: #a855f7;
                    }
                    .process-label.active h3 {
                        color: #3b82f6;
                        transform: scale(1.05);
                    }
                    .process-label p {
                        margin: 0.5rem 0 0;
                        max-width: 250px;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.85rem;
                        line-height: 1.5;
                        color: var(--text-secondary);
                        background: var(--bg-card);
                        border: 1px solid var(--border-subtle);
                        border-radius: 0.5rem;
                        backdrop-filter: blur(12px);
                    }
                    .process-scrim {
                        display: none;
                    }
                    @media (max-width: 767px) {
                        .process-scrim {
                            display: block;
                            position: fixed;
                            inset: 0;
                            z-index: 4;
                            background: rgba(0, 0, 0, 0.3);
                            backdrop-filter: blur(4px);
                        }
                    }
                "#}
            </style>
            if width > 0.0 {
                <svg viewBox={view_box} preserveAspectRatio="none" aria-hidden="true">
                    <defs>
                        <linearGradient id="process-ribbon" x1="0%" y1="100%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="#1E3A8A" stop-opacity="0.9" />
                            <stop offset="30%" stop-color="#2563EB" />
                            <stop offset="60%" stop-color="#7C3AED" />
                            <stop offset="90%" stop-color="#EC4899" />
                            <stop offset="100%" stop-color="#DC2626" stop-opacity="0.9" />
                        </linearGradient>
                    </defs>
                    <path d={curve.ribbon_path(RIBBON_SEGMENTS)} fill="url(#process-ribbon)" />
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| {
                        let p = curve.point(step_t(i, total));
                        html! {
                            <g key={step.id}>
                                <circle cx={p.x.to_string()} cy={p.y.to_string()} r={radius.to_string()} fill={step.color} />
                                <line
                                    x1={p.x.to_string()}
                                    y1={p.y.to_string()}
                                    x2={p.x.to_string()}
                                    y2={connector_y.to_string()}
                                    stroke="rgba(255,255,255,0.6)"
                                    stroke-width="2"
                                    stroke-dasharray="4 6"
                                    stroke-linecap="round"
                                />
                            </g>
                        }
                    }) }
                </svg>
                if active_step.is_some() {
                    <div class="process-scrim" onclick={close}></div>
                }
                { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| {
                    let x = curve.point(step_t(i, total)).x;
                    let is_active = *active_step == Some(step.id);
                    let onclick = {
                        let active_step = active_step.clone();
                        let id = step.id;
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            active_step.set(if is_active { None } else { Some(id) });
                        })
                    };
                    html! {
                        <div
                            key={step.id}
                            class={classes!("process-label", is_active.then(|| "active"))}
                            style={format!("left: {:.2}px; top: {:.2}px;", x, label_top)}
                            {onclick}
                        >
                            <h3>{step.title}</h3>
                            if is_active {
                                <p>{step.description}</p>
                            }
                        </div>
                    }
                }) }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn steps_are_numbered_in_order_with_unique_ids() {
        assert_eq!(PROCESS_STEPS.len(), 4);
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number, (i + 1).to_string());
            assert!(step.color.starts_with('#') && step.color.len() == 7);
        }
        let mut ids: Vec<_> = PROCESS_STEPS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROCESS_STEPS.len());
        assert_eq!(PROCESS_STEPS[3].title, "Scale");
    }

    #[test]
    fn screen_class_breakpoints() {
        assert_eq!(ScreenClass::from_width(639.0), ScreenClass::Mobile);
        assert_eq!(ScreenClass::from_width(640.0), ScreenClass::Tablet);
        assert_eq!(ScreenClass::from_width(1023.0), ScreenClass::Tablet);
        assert_eq!(ScreenClass::from_width(1024.0), ScreenClass::Laptop);
        assert_eq!(ScreenClass::from_width(1536.0), ScreenClass::Desktop);
    }

    #[test]
    fn steps_spread_between_edge_gaps() {
        assert!(close(step_t(0, 4), CURVE_EDGE_GAP));
        assert!(close(step_t(3, 4), 1.0 - CURVE_EDGE_GAP));
        let gap = step_t(1, 4) - step_t(0, 4);
        assert!(close(step_t(2, 4) - step_t(1, 4), gap));
        assert!(close(step_t(0, 1), 0.5));
    }

    #[test]
    fn empty_box_gives_flat_curve() {
        let shape = CurveShape::for_screen(ScreenClass::Laptop);
        assert_eq!(Curve::fit(0.0, GEOMETRY_HEIGHT, &shape), Curve::default());
        assert_eq!(Curve::fit(1200.0, -1.0, &shape), Curve::default());
    }

    #[test]
    fn curve_hits_its_ends_and_rises_left_to_right() {
        let shape = CurveShape::for_screen(ScreenClass::Laptop);
        let curve = Curve::fit(1200.0, GEOMETRY_HEIGHT, &shape);

        assert_eq!(curve.point(0.0), curve.start);
        assert_eq!(curve.point(1.0), curve.end);
        assert_eq!(curve.point(-2.0), curve.start);
        assert_eq!(curve.point(3.0), curve.end);
        // Width 1200 at 0.78 leaves a 132 px margin each side.
        assert!(close(curve.start.x, 132.0 + 936.0 * 0.15));
        assert!(close(curve.end.x, 132.0 + 936.0 - 936.0 * 0.14));
        // Ends higher on screen (smaller y) than it starts.
        assert!(curve.end.y < curve.start.y);

        let xs: Vec<f64> = (0..PROCESS_STEPS.len())
            .map(|i| curve.point(step_t(i, PROCESS_STEPS.len())).x)
            .collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn thickness_swells_to_the_middle() {
        let curve = Curve::fit(1200.0, GEOMETRY_HEIGHT, &CurveShape::for_screen(ScreenClass::Desktop));
        assert!(close(curve.thickness(0.0), GEOMETRY_HEIGHT * 0.002));
        assert!(close(curve.thickness(0.5), GEOMETRY_HEIGHT * 0.08));
        assert!(close(curve.thickness(1.0), GEOMETRY_HEIGHT * 0.002));
        assert!(curve.thickness(0.25) > curve.thickness(0.0));
        assert!(curve.thickness(0.25) < curve.thickness(0.5));
    }

    #[test]
    fn ribbon_path_is_closed_outline() {
        let curve = Curve::fit(800.0, GEOMETRY_HEIGHT, &CurveShape::for_screen(ScreenClass::Tablet));
        let path = curve.ribbon_path(10);
        assert!(path.starts_with("M "));
        assert!(path.ends_with(" Z"));
        assert_eq!(path.matches("M ").count(), 1);
        // 11 top points (one of them the move) plus 11 bottom points.
        assert_eq!(path.matches("L ").count(), 21);
    }

    #[test]
    fn labels_sit_below_connectors() {
        for screen in [ScreenClass::Mobile, ScreenClass::Tablet, ScreenClass::Laptop] {
            let shape = CurveShape::for_screen(screen);
            let curve = Curve::fit(1000.0, GEOMETRY_HEIGHT, &shape);
            let connector = shape.connector_plane_y(GEOMETRY_HEIGHT);
            assert!(shape.label_plane_y(GEOMETRY_HEIGHT) > connector);
            for i in 0..PROCESS_STEPS.len() {
                assert!(curve.point(step_t(i, PROCESS_STEPS.len())).y <= connector);
            }
        }
    }

    #[test]
    fn viewbox_maps_onto_visible_height() {
        assert_eq!(svg_y_to_px(-GEOMETRY_HEIGHT), 0.0);
        assert_eq!(svg_y_to_px(GEOMETRY_HEIGHT), VISIBLE_HEIGHT);
        assert_eq!(svg_y_to_px(0.0), VISIBLE_HEIGHT / 2.0);
    }

    #[test]
    fn dots_grow_with_width() {
        assert_eq!(dot_radius(400.0), 5.0);
        assert_eq!(dot_radius(800.0), 6.0);
        assert_eq!(dot_radius(1100.0), 7.0);
        assert_eq!(dot_radius(1600.0), 8.0);
    }
}
