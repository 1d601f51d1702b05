//! SVG renderer
//!
//! Draws a [`ProbabilityPlot`] layout. All positions come normalized from
//! the layout; the renderer only maps them onto the canvas.

use eva_stats::{PlotPoint, ProbabilityPlot};

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 56.0;

/// Probability plot renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: width as f64, height: height as f64 }
    }

    fn plot_width(&self) -> f64 {
        (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    fn canvas_x(&self, nx: f64) -> f64 {
        MARGIN_LEFT + nx * self.plot_width()
    }

    // probability grows upward
    fn canvas_y(&self, ny: f64) -> f64 {
        MARGIN_TOP + (1.0 - ny) * self.plot_height()
    }

    /// Render the plot as a standalone SVG document
    pub fn render(&self, plot: &ProbabilityPlot) -> String {
        let mut output = String::new();
        let (left, top) = (MARGIN_LEFT, MARGIN_TOP);
        let (right, bottom) = (left + self.plot_width(), top + self.plot_height());

        output.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        ));
        output.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
            self.width, self.height
        ));

        // Grid and tick labels
        output.push_str("  <g class=\"grid\" stroke=\"#dddddd\" stroke-width=\"1\">\n");
        for tick in &plot.x.ticks {
            let x = self.canvas_x(tick.position);
            output.push_str(&format!(
                "    <line x1=\"{x:.2}\" y1=\"{top:.2}\" x2=\"{x:.2}\" y2=\"{bottom:.2}\"/>\n"
            ));
        }
        for tick in &plot.y.ticks {
            let y = self.canvas_y(tick.position);
            output.push_str(&format!(
                "    <line x1=\"{left:.2}\" y1=\"{y:.2}\" x2=\"{right:.2}\" y2=\"{y:.2}\"/>\n"
            ));
        }
        output.push_str("  </g>\n");

        output.push_str("  <g class=\"ticks\" font-family=\"sans-serif\" font-size=\"11\" fill=\"black\">\n");
        for tick in &plot.x.ticks {
            output.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
                self.canvas_x(tick.position),
                bottom + 16.0,
                escape(&tick.label)
            ));
        }
        for tick in &plot.y.ticks {
            output.push_str(&format!(
                "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
                left - 6.0,
                self.canvas_y(tick.position),
                escape(&tick.label)
            ));
        }
        output.push_str("  </g>\n");

        // Frame
        output.push_str(&format!(
            "  <rect x=\"{left:.2}\" y=\"{top:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\"/>\n",
            self.plot_width(),
            self.plot_height()
        ));

        // Title and axis labels
        output.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"15\">{}</text>\n",
            left + self.plot_width() / 2.0,
            top - 14.0,
            escape(&plot.title)
        ));
        output.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\">{}</text>\n",
            left + self.plot_width() / 2.0,
            self.height - 12.0,
            escape(&plot.x.label)
        ));
        let label_y = top + self.plot_height() / 2.0;
        output.push_str(&format!(
            "  <text x=\"16\" y=\"{label_y:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\" transform=\"rotate(-90 16 {label_y:.2})\">{}</text>\n",
            escape(&plot.y.label)
        ));

        // Fitted CDF
        if !plot.curve.is_empty() {
            output.push_str(&format!(
                "  <polyline class=\"cdf\" fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"1.5\" points=\"{}\"/>\n",
                self.polyline_points(&plot.curve)
            ));
        }

        // Sample scatter
        output.push_str("  <g class=\"points\" fill=\"none\" stroke=\"black\">\n");
        for p in &plot.points {
            output.push_str(&format!(
                "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"3\"/>\n",
                self.canvas_x(p.nx),
                self.canvas_y(p.ny)
            ));
        }
        output.push_str("  </g>\n");

        output.push_str("</svg>\n");
        output
    }

    fn polyline_points(&self, points: &[PlotPoint]) -> String {
        points
            .iter()
            .map(|p| format!("{:.2},{:.2}", self.canvas_x(p.nx), self.canvas_y(p.ny)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

/// Escape text content for XML
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eva_dist::WeibullMax;
    use eva_stats::{Pipeline, PlotOptions, PlottingPosition, Sample};

    fn plot() -> ProbabilityPlot {
        let sample = Sample::from_magnitudes(&[-8.0, -6.5, -5.0, -3.9, -2.5, -1.1]).unwrap();
        let fit = Pipeline::new(PlottingPosition::Weibull)
            .run(&sample, WeibullMax::with_loc(0.0))
            .unwrap();
        ProbabilityPlot::from_fit(&fit, &PlotOptions::default().with_labels("H <m>", "P")).unwrap()
    }

    #[test]
    fn test_svg_structure() {
        let svg = Renderer::new(600, 400).render(&plot());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"400\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 6);
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("Weibull Maximum Plot"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = Renderer::default().render(&plot());
        assert!(svg.contains("H &lt;m&gt;"));
        assert!(!svg.contains("H <m>"));
    }

    #[test]
    fn test_canvas_mapping() {
        let r = Renderer::new(600, 400);
        assert_eq!(r.canvas_x(0.0), MARGIN_LEFT);
        assert_eq!(r.canvas_x(1.0), 600.0 - MARGIN_RIGHT);
        assert_eq!(r.canvas_y(1.0), MARGIN_TOP);
        assert_eq!(r.canvas_y(0.0), 400.0 - MARGIN_BOTTOM);
    }

    #[test]
    fn test_renderer_is_reusable() {
        let r = Renderer::new(800, 500);
        let copy = r.clone();
        assert_eq!(copy, r);
        assert!(format!("{:?}", copy).contains("800"));
        let plot = plot();
        assert_eq!(copy.render(&plot), r.render(&plot));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
