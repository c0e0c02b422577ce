//! Inline SVG chart generation for the HTML report.

use crate::core::Feature;
use crate::data::{ScatterPoint, SimulatedDistribution};
use html_escape::{encode_double_quoted_attribute, encode_text};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 48.0;

const BAR_COLOR: &str = "#4CAF50";
const HIST_COLOR: &str = "#FFA500";
const DENSITY_COLOR: &str = "#C0392B";

/// Viridis colour stops, low to high.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Linear map from a data range onto a pixel range.
#[derive(Debug, Clone, Copy)]
struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.1 > domain.0 {
            domain
        } else {
            (domain.0, domain.0 + 1.0)
        };
        Self { domain, range }
    }

    fn map(&self, v: f64) -> f64 {
        let t = (v - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

fn plot_left() -> f64 {
    MARGIN_LEFT
}

fn plot_right() -> f64 {
    WIDTH - MARGIN_RIGHT
}

fn plot_top() -> f64 {
    MARGIN_TOP
}

fn plot_bottom() -> f64 {
    HEIGHT - MARGIN_BOTTOM
}

fn open_svg(title: &str) -> String {
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" ",
            "width=\"{w}\" height=\"{h}\" role=\"img\" aria-label=\"{a}\">",
            "<text x=\"{cx}\" y=\"24\" text-anchor=\"middle\" class=\"chart-title\">{t}</text>"
        ),
        w = WIDTH,
        h = HEIGHT,
        cx = WIDTH / 2.0,
        t = encode_text(title),
        a = encode_double_quoted_attribute(title)
    )
}

fn axes(x_label: &str, y_label: &str, y_scale: &Scale, y_ticks: usize) -> String {
    let mut out = format!(
        "<line x1=\"{l}\" y1=\"{b}\" x2=\"{r}\" y2=\"{b}\" class=\"axis\"/>\
         <line x1=\"{l}\" y1=\"{t}\" x2=\"{l}\" y2=\"{b}\" class=\"axis\"/>",
        l = plot_left(),
        r = plot_right(),
        t = plot_top(),
        b = plot_bottom()
    );

    for i in 0..=y_ticks {
        let value = y_scale.domain.0
            + (y_scale.domain.1 - y_scale.domain.0) * i as f64 / y_ticks.max(1) as f64;
        let y = y_scale.map(value);
        out.push_str(&format!(
            "<text x=\"{x}\" y=\"{y:.1}\" text-anchor=\"end\" class=\"tick\">{v}</text>",
            x = plot_left() - 6.0,
            y = y + 4.0,
            v = format_tick(value)
        ));
    }

    out.push_str(&format!(
        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" class=\"axis-label\">{t}</text>",
        x = (plot_left() + plot_right()) / 2.0,
        y = HEIGHT - 10.0,
        t = encode_text(x_label)
    ));
    out.push_str(&format!(
        "<text x=\"16\" y=\"{y}\" text-anchor=\"middle\" class=\"axis-label\" \
         transform=\"rotate(-90 16 {y})\">{t}</text>",
        y = (plot_top() + plot_bottom()) / 2.0,
        t = encode_text(y_label)
    ));
    out
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 || value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Colour for `t` in 0..=1 on the Viridis scale.
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let idx = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = pos - idx as f64;
    let (a, b) = (VIRIDIS[idx], VIRIDIS[idx + 1]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(a.0, b.0),
        lerp(a.1, b.1),
        lerp(a.2, b.2)
    )
}

/// Bar chart of the input features.
pub fn feature_bar_chart(features: &[Feature], title: &str) -> String {
    let max = features.iter().map(|f| f.value).fold(0.0_f64, f64::max);
    let y_scale = Scale::new((0.0, max.max(1.0)), (plot_bottom(), plot_top()));

    let mut svg = open_svg(title);
    svg.push_str(&axes("Feature", "Value", &y_scale, 4));

    let slot = (plot_right() - plot_left()) / features.len().max(1) as f64;
    let bar_width = slot * 0.6;
    for (i, feature) in features.iter().enumerate() {
        let x = plot_left() + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = y_scale.map(feature.value);
        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" fill=\"{c}\">\
             <title>{label}: {value}</title></rect>\
             <text x=\"{cx:.1}\" y=\"{ly}\" text-anchor=\"middle\" class=\"tick\">{label}</text>",
            w = bar_width,
            h = (plot_bottom() - y).max(0.0),
            c = BAR_COLOR,
            label = encode_text(feature.label),
            value = format_tick(feature.value),
            cx = x + bar_width / 2.0,
            ly = plot_bottom() + 16.0
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Age vs predicted cost, coloured and sized by BMI when present.
pub fn scatter_chart(points: &[ScatterPoint], title: &str) -> String {
    let (age_min, age_max) = bounds(points.iter().map(|p| p.age));
    let (cost_min, cost_max) = bounds(points.iter().map(|p| p.predicted_cost));
    let (bmi_min, bmi_max) = bounds(points.iter().filter_map(|p| p.bmi));

    let x_scale = Scale::new((age_min, age_max), (plot_left() + 8.0, plot_right() - 8.0));
    let y_scale = Scale::new((cost_min.min(0.0), cost_max), (plot_bottom(), plot_top()));

    let mut svg = open_svg(title);
    svg.push_str(&axes("Age (years)", "Predicted Health Cost", &y_scale, 4));

    for point in points {
        let (fill, radius) = match point.bmi {
            Some(bmi) => {
                let t = if bmi_max > bmi_min {
                    (bmi - bmi_min) / (bmi_max - bmi_min)
                } else {
                    0.5
                };
                (viridis(t), 3.0 + 6.0 * t)
            }
            None => (viridis(0.5), 4.0),
        };
        let hover = match point.bmi {
            Some(bmi) => format!("bmi {}", format_tick(bmi)),
            None => "bmi n/a".to_string(),
        };
        svg.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{r:.1}\" fill=\"{fill}\" fill-opacity=\"0.8\">\
             <title>{hover}</title></circle>",
            x = x_scale.map(point.age),
            y = y_scale.map(point.predicted_cost),
            r = radius,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Histogram of the simulated distribution with its density curve.
pub fn histogram_chart(distribution: &SimulatedDistribution, title: &str) -> String {
    let hist = &distribution.histogram;
    let density_max = distribution
        .density
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max);
    let y_max = (hist.max_count() as f64).max(density_max).max(1.0);

    let x_scale = Scale::new((hist.min, hist.max), (plot_left(), plot_right()));
    let y_scale = Scale::new((0.0, y_max), (plot_bottom(), plot_top()));

    let mut svg = open_svg(title);
    svg.push_str(&axes("Medical Cost", "Frequency", &y_scale, 4));

    for (left, right, count) in hist.bins() {
        let x0 = x_scale.map(left);
        let x1 = x_scale.map(right);
        let y = y_scale.map(count as f64);
        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" \
             fill=\"{c}\" fill-opacity=\"0.6\" stroke=\"#ffffff\"/>",
            x = x0,
            w = (x1 - x0).max(0.0),
            h = (plot_bottom() - y).max(0.0),
            c = HIST_COLOR
        ));
    }

    if !distribution.density.is_empty() {
        let points: Vec<String> = distribution
            .density
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x_scale.map(*x), y_scale.map(*y)))
            .collect();
        svg.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
            points.join(" "),
            DENSITY_COLOR
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{l}\" y=\"{y}\" class=\"tick\">{min}</text>\
         <text x=\"{r}\" y=\"{y}\" text-anchor=\"end\" class=\"tick\">{max}</text>",
        l = plot_left(),
        r = plot_right(),
        y = plot_bottom() + 16.0,
        min = format_tick(hist.min),
        max = format_tick(hist.max)
    ));

    svg.push_str("</svg>");
    svg
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}
