//! Chart Component
//!
//! Paints a card's chart scene on an HTML5 canvas.

use databoard::chart::DatasetStyle;
use databoard::{ChartSpec, Scene, Shape};
use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 240;

const LABEL_COLOR: &str = "#9ca3af"; // gray-400
const AXIS_COLOR: &str = "#6b7280"; // gray-500

/// Canvas chart for one card
#[component]
pub fn ChartCanvas(
    /// Chart to draw; the canvas repaints whenever it changes
    #[prop(into)]
    spec: Signal<ChartSpec>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let scene = create_memo(move |_| {
        spec.with(|s| s.layout(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64))
    });

    create_effect(move |_| {
        let scene = scene.get();
        let style = spec.with(|s| s.dataset.style);

        if let Some(canvas) = canvas_ref.get() {
            draw_scene(&canvas, &scene, &style);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full h-48 rounded"
                class:hidden=move || matches!(scene.get(), Scene::Unsupported { .. })
            />

            {move || scene.with(notice).map(|text| view! {
                <p class="absolute inset-0 flex items-center justify-center text-sm text-gray-500 text-center px-4">
                    {text}
                </p>
            })}
        </div>
    }
}

/// Message shown in place of (or over) the plot
fn notice(scene: &Scene) -> Option<String> {
    match scene {
        Scene::Unsupported { kind } => Some(format!(
            "{} is not supported yet. Pick another chart type.",
            kind.label()
        )),
        Scene::Empty => Some("No data to display".to_string()),
        Scene::Plot { .. } => None,
    }
}

/// Draw the scene on canvas
fn draw_scene(canvas: &HtmlCanvasElement, scene: &Scene, style: &DatasetStyle) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    let Scene::Plot { shapes, y_range } = scene else {
        return;
    };

    ctx.set_line_width(style.stroke_width);
    ctx.set_font("11px sans-serif");

    for shape in shapes {
        match shape {
            Shape::Rect { x, y, width, height } => {
                ctx.set_fill_style(&style.fill.into());
                ctx.set_stroke_style(&style.stroke.into());
                ctx.fill_rect(*x, *y, *width, *height);
                ctx.stroke_rect(*x, *y, *width, *height);
            }
            Shape::Wedge { cx, cy, radius, start, end } => {
                ctx.set_fill_style(&style.fill.into());
                ctx.set_stroke_style(&style.stroke.into());
                ctx.begin_path();
                ctx.move_to(*cx, *cy);
                let _ = ctx.arc(*cx, *cy, *radius, *start, *end);
                ctx.close_path();
                ctx.fill();
                ctx.stroke();
            }
            Shape::Polyline { points } => {
                ctx.set_stroke_style(&style.stroke.into());
                ctx.begin_path();
                for (i, (x, y)) in points.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(*x, *y);
                    } else {
                        ctx.line_to(*x, *y);
                    }
                }
                ctx.stroke();
            }
            Shape::Dot { x, y, radius } => {
                ctx.set_fill_style(&style.fill.into());
                ctx.set_stroke_style(&style.stroke.into());
                ctx.begin_path();
                let _ = ctx.arc(*x, *y, *radius, 0.0, PI * 2.0);
                ctx.fill();
                ctx.stroke();
            }
            Shape::Label { x, y, text } => {
                ctx.set_fill_style(&LABEL_COLOR.into());
                let _ = ctx.fill_text(text, *x, *y);
            }
        }
    }

    // Y-axis extent
    if let Some((min, max)) = y_range {
        ctx.set_fill_style(&AXIS_COLOR.into());
        let _ = ctx.fill_text(&format_axis(*max), 2.0, 14.0);
        let _ = ctx.fill_text(&format_axis(*min), 2.0, height - 28.0);
    }
}

fn format_axis(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use databoard::{ChartKind, GraphDescriptor};

    #[test]
    fn test_notice_for_unsupported_kind() {
        let scene = ChartSpec::new(None, ChartKind::Heatmap).layout(400.0, 240.0);
        assert_eq!(
            notice(&scene).as_deref(),
            Some("Heatmap is not supported yet. Pick another chart type.")
        );
    }

    #[test]
    fn test_notice_for_empty_and_plot() {
        let empty = GraphDescriptor::new(Vec::<String>::new(), vec![]);
        let scene = ChartSpec::new(Some(&empty), ChartKind::Bar).layout(400.0, 240.0);
        assert_eq!(notice(&scene).as_deref(), Some("No data to display"));

        let scene = ChartSpec::new(None, ChartKind::Line).layout(400.0, 240.0);
        assert_eq!(notice(&scene), None);
    }

    #[test]
    fn test_format_axis() {
        assert_eq!(format_axis(3.0), "3");
        assert_eq!(format_axis(-2.5), "-2.5");
    }
}
