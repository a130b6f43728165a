// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis gallery for `axial`.
//!
//! Writes `axial_demo.html`. Set `RUST_LOG=axial=debug` to see layout decisions.
mod html;
mod svg;

use axial::{
    AxisConfig, AxisStyleSpec, Canvas, Orientation, PaddingSpec, ScaleBand, ScaleLog, ScaleTime,
    Side, StyleLayer, TickFormat, TickValues,
};
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let sections = vec![
        tick_values_demo(),
        time_axis_demo(),
        crossing_axes_demo(),
        log_axis_demo(),
        ordinal_axis_demo(),
    ];

    let html = html::render_report("axial demo", &sections);
    std::fs::write("axial_demo.html", html).expect("write axial_demo.html");
    println!("wrote axial_demo.html");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("axial=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Lays out one axis, reporting configs that would fail strict validation.
fn render(name: &str, config: &AxisConfig) -> String {
    if let Err(err) = config.validate() {
        tracing::warn!(demo = name, %err, "config does not validate; rendering anyway");
    }
    let layout = config.layout();
    tracing::info!(demo = name, ticks = layout.ticks.len(), "laid out axis");
    svg::render_scene(&layout.scene())
}

/// The shared style overrides: red axis, wide gridlines, heavy ticks.
fn style_overrides() -> AxisStyleSpec {
    AxisStyleSpec::new()
        .with_axis(StyleLayer::new().with_stroke(css::RED))
        .with_grid(StyleLayer::new().with_stroke_width(2.0))
        .with_ticks(StyleLayer::new().with_stroke_width(5.0))
}

fn tick_values_demo() -> html::HtmlSection {
    let config = AxisConfig::new()
        .with_style(style_overrides())
        .with_padding(PaddingSpec::sides().with_side(Side::Bottom, 60.0))
        .with_label("tick values\nwith labels")
        .with_tick_values(vec![5.0, 10.0, 25.0, 31.0, 42.0])
        .with_tick_format(TickFormat::labels([
            "first", "second", "third", "fourth", "fifth",
        ]));

    html::HtmlSection {
        title: "Tick values with a label array",
        description: "Explicit numeric ticks named by index, a two-line title, and style overrides on the axis, grid and ticks.",
        svg: render("tick values", &config),
    }
}

const SECONDS_PER_YEAR: f64 = 365.2425 * 86_400.0;

fn time_axis_demo() -> html::HtmlSection {
    // Timestamps in seconds since 1970, one per decade.
    let ticks: Vec<f64> = [1980.0, 1990.0, 2000.0, 2010.0, 2020.0]
        .iter()
        .map(|year| (year - 1970.0) * SECONDS_PER_YEAR + 31.0 * 86_400.0)
        .collect();

    let config = AxisConfig::new()
        .with_label("time axis")
        .with_padding(
            PaddingSpec::sides()
                .with_side(Side::Left, 10.0)
                .with_side(Side::Right, 80.0),
        )
        .with_scale(ScaleTime::default())
        .with_style(
            AxisStyleSpec::new().with_grid(
                StyleLayer::new()
                    .with_stroke(css::BLACK)
                    .with_stroke_width(1.0),
            ),
        )
        .with_tick_values(ticks)
        .with_tick_format(TickFormat::func(|t, _| {
            let years = (t / SECONDS_PER_YEAR).floor();
            format!("{}", 1970.0 + years)
        }));

    html::HtmlSection {
        title: "Time axis",
        description: "A time scale with one tick per decade, formatted as years, and solid gridlines.",
        svg: render("time axis", &config),
    }
}

fn crossing_axes_demo() -> html::HtmlSection {
    let domain = (-5.0, 5.0);
    let x_axis = AxisConfig::new()
        .with_domain(domain)
        .with_cross_axis(true)
        .with_offset_x(50.0)
        .with_offset_y(150.0)
        .with_standalone(false);
    let y_axis = AxisConfig::new()
        .with_dependent_axis(true)
        .with_domain(domain)
        .with_cross_axis(true)
        .with_offset_x(250.0)
        .with_offset_y(50.0)
        .with_standalone(false);

    let body = render("x axis", &x_axis) + &render("y axis", &y_axis);
    let canvas = Canvas {
        width: x_axis.width,
        height: x_axis.height,
        fill: None,
    };

    html::HtmlSection {
        title: "Crossing X-Y axes",
        description: "Two embedded axes composed into one canvas. Zero ticks are suppressed where the axes cross.",
        svg: svg::wrap_svg(&canvas, &body),
    }
}

fn log_axis_demo() -> html::HtmlSection {
    let config = AxisConfig::new()
        .with_label("cool log axis")
        .with_padding(
            PaddingSpec::sides()
                .with_side(Side::Top, 10.0)
                .with_side(Side::Bottom, 60.0),
        )
        .with_orientation(Orientation::Left)
        .with_scale(ScaleLog::default())
        .with_domain((1.0, 5.0))
        .with_offset_x(50.0);

    html::HtmlSection {
        title: "Log axis",
        description: "A left axis over a base-10 log scale.",
        svg: render("log axis", &config),
    }
}

fn ordinal_axis_demo() -> html::HtmlSection {
    let config = AxisConfig::new()
        .with_style(style_overrides())
        .with_scale(ScaleBand::new((0.0, 0.0), (0.0, 0.0)))
        .with_tick_values(TickValues::categorical([
            "Mets\nNY",
            "Giants\nSF",
            "Yankees\nNY",
            "Nationals\nDC",
            "Mariners\nSEA",
        ]));

    html::HtmlSection {
        title: "Ordinal axis",
        description: "Categorical ticks on a band scale, labeled in two lines and centered in their bands.",
        svg: render("ordinal axis", &config),
    }
}
