use std::fmt::{self, Write as _};

pub const CHART_HEIGHT: f64 = 250.0;
pub const PADDING: f64 = 45.0;
pub const GRID_BANDS: usize = 4;
/// Index of the sample shown as "now" on the extended chart.
pub const CURRENT_INDEX: usize = 2;

const TICK_LABELS: [&str; 7] = ["-2h", "-1h", "Now", "+1h", "+2h", "+3h", "+4h"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.segments.push(Segment::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.segments.push(Segment::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) -> &mut Self {
        self.segments.push(Segment::CubicTo(c1, c2, to));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(Segment::Close);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(&'static str),
    Linear {
        from: Point,
        to: Point,
        stops: Vec<(f64, &'static str)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub at: Point,
    pub text: &'a str,
    pub anchor: Anchor,
    pub color: &'static str,
    pub size: f64,
}

/// A 2D drawing target the plotter renders onto.
pub trait Surface {
    fn resize(&mut self, width: f64, height: f64);
    fn size(&self) -> (f64, f64);
    fn stroke(&mut self, path: &Path, stroke: &Stroke);
    fn fill(&mut self, path: &Path, paint: &Paint);
    fn circle(&mut self, center: Point, radius: f64, paint: &Paint);
    fn text(&mut self, label: &Label<'_>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width: f64,
    pub annotated: bool,
    pub title: String,
}

impl PlotOptions {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            annotated: true,
            title: "Migraine risk trend".to_string(),
        }
    }

    pub fn plain(mut self) -> Self {
        self.annotated = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    TooFewPoints(usize),
    TooNarrow(f64),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::TooFewPoints(len) => write!(f, "need at least 2 samples to plot, got {len}"),
            PlotError::TooNarrow(width) => write!(f, "surface width {width} leaves no room to plot"),
        }
    }
}

impl std::error::Error for PlotError {}

/// Maps samples to pixel positions inside the padded plot area.
pub fn layout(values: &[f64], width: f64, height: f64) -> Result<Vec<Point>, PlotError> {
    if values.len() < 2 {
        return Err(PlotError::TooFewPoints(values.len()));
    }
    let inner_w = width - PADDING * 2.0;
    let inner_h = height - PADDING * 2.0;
    let step = inner_w / (values.len() - 1) as f64;

    Ok(values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = PADDING + i as f64 * step;
            let y = PADDING + inner_h - (value.clamp(0.0, 100.0) / 100.0 * inner_h);
            Point::new(x, y)
        })
        .collect())
}

/// Catmull-Rom through every point, emitted as cubic Béziers.
pub fn smooth_path(points: &[Point]) -> Path {
    let mut path = Path::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(*first);

    let last = points.len() - 1;
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
        path.cubic_to(c1, c2, p2);
    }
    path
}

pub fn plot<S: Surface>(surface: &mut S, values: &[f64], options: &PlotOptions) -> Result<(), PlotError> {
    if values.len() < 2 {
        return Err(PlotError::TooFewPoints(values.len()));
    }
    if options.width <= PADDING * 2.0 {
        return Err(PlotError::TooNarrow(options.width));
    }

    surface.resize(options.width, CHART_HEIGHT);
    let (width, height) = surface.size();
    let inner_h = height - PADDING * 2.0;
    let baseline = height - PADDING;

    let grid = Stroke {
        paint: Paint::Solid("#273549"),
        width: 1.0,
        dash: Some([4.0, 4.0]),
    };
    for band in 0..=GRID_BANDS {
        let y = PADDING + inner_h / GRID_BANDS as f64 * band as f64;
        let mut line = Path::new();
        line.move_to(Point::new(PADDING, y)).line_to(Point::new(width - PADDING, y));
        surface.stroke(&line, &grid);

        let percent = format!("{}%", 100 - band * 100 / GRID_BANDS);
        surface.text(&Label {
            at: Point::new(PADDING - 8.0, y + 4.0),
            text: &percent,
            anchor: Anchor::End,
            color: "#94a3b8",
            size: 11.0,
        });
    }

    let points = layout(values, width, height)?;
    let curve = smooth_path(&points);

    surface.stroke(
        &curve,
        &Stroke {
            paint: Paint::Linear {
                from: Point::new(0.0, 0.0),
                to: Point::new(width, 0.0),
                stops: vec![(0.0, "#3b82f6"), (1.0, "#60a5fa")],
            },
            width: 3.0,
            dash: None,
        },
    );

    let first = points[0];
    let last = points[points.len() - 1];
    let mut area = curve.clone();
    area.line_to(Point::new(last.x, baseline))
        .line_to(Point::new(first.x, baseline))
        .close();
    surface.fill(
        &area,
        &Paint::Linear {
            from: Point::new(0.0, PADDING),
            to: Point::new(0.0, height),
            stops: vec![(0.0, "rgba(59,130,246,0.25)"), (1.0, "rgba(59,130,246,0)")],
        },
    );

    for point in &points {
        surface.circle(*point, 6.0, &Paint::Solid("#1e293b"));
        surface.circle(*point, 5.0, &Paint::Solid("#3b82f6"));
    }

    if options.annotated {
        annotate(surface, values, &points, options, baseline);
    }

    Ok(())
}

fn annotate<S: Surface>(surface: &mut S, values: &[f64], points: &[Point], options: &PlotOptions, baseline: f64) {
    let (width, height) = surface.size();

    surface.text(&Label {
        at: Point::new(PADDING, 24.0),
        text: &options.title,
        anchor: Anchor::Start,
        color: "#e2e8f0",
        size: 14.0,
    });
    surface.text(&Label {
        at: Point::new(PADDING - 8.0, PADDING - 16.0),
        text: "Risk",
        anchor: Anchor::End,
        color: "#94a3b8",
        size: 11.0,
    });
    surface.text(&Label {
        at: Point::new(width / 2.0, height - 4.0),
        text: "Forecast window",
        anchor: Anchor::Middle,
        color: "#94a3b8",
        size: 11.0,
    });

    for (i, point) in points.iter().enumerate() {
        let fallback;
        let text = match TICK_LABELS.get(i) {
            Some(label) if points.len() == TICK_LABELS.len() => *label,
            _ => {
                fallback = (i + 1).to_string();
                fallback.as_str()
            }
        };
        surface.text(&Label {
            at: Point::new(point.x, baseline + 18.0),
            text,
            anchor: Anchor::Middle,
            color: "#94a3b8",
            size: 11.0,
        });
    }

    let Some(current) = points.get(CURRENT_INDEX) else {
        return;
    };
    let mut guide = Path::new();
    guide
        .move_to(Point::new(current.x, PADDING))
        .line_to(Point::new(current.x, baseline));
    surface.stroke(
        &guide,
        &Stroke {
            paint: Paint::Solid("#f59e0b"),
            width: 1.0,
            dash: Some([2.0, 3.0]),
        },
    );
    surface.circle(*current, 9.0, &Paint::Solid("#f59e0b"));
    surface.circle(*current, 6.0, &Paint::Solid("#1e293b"));

    let percent = format!("{:.0}%", values[CURRENT_INDEX]);
    surface.text(&Label {
        at: Point::new(current.x, current.y - 14.0),
        text: &percent,
        anchor: Anchor::Middle,
        color: "#fbbf24",
        size: 12.0,
    });
}

/// Renders into a standalone `<svg>` document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Migraine risk chart"><defs>{defs}</defs>{body}</svg>"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
            defs = self.defs,
            body = self.body,
        )
    }

    fn paint_ref(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => (*color).to_string(),
            Paint::Linear { from, to, stops } => {
                let id = format!("grad{}", self.gradients);
                self.gradients += 1;
                let _ = write!(
                    self.defs,
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    fmt_num(from.x),
                    fmt_num(from.y),
                    fmt_num(to.x),
                    fmt_num(to.y),
                );
                for (offset, color) in stops {
                    let _ = write!(self.defs, r#"<stop offset="{}" stop-color="{color}"/>"#, fmt_num(*offset));
                }
                self.defs.push_str("</linearGradient>");
                format!("url(#{id})")
            }
        }
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.defs.clear();
        self.body.clear();
        self.gradients = 0;
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn stroke(&mut self, path: &Path, stroke: &Stroke) {
        let paint = self.paint_ref(&stroke.paint);
        let dash = stroke
            .dash
            .map(|[on, off]| format!(r#" stroke-dasharray="{} {}""#, fmt_num(on), fmt_num(off)))
            .unwrap_or_default();
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{paint}" stroke-width="{}"{dash}/>"#,
            path_data(path),
            fmt_num(stroke.width),
        );
    }

    fn fill(&mut self, path: &Path, paint: &Paint) {
        let paint = self.paint_ref(paint);
        let _ = write!(self.body, r#"<path d="{}" fill="{paint}"/>"#, path_data(path));
    }

    fn circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        let paint = self.paint_ref(paint);
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{paint}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
        );
    }

    fn text(&mut self, label: &Label<'_>) {
        let anchor = match label.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" text-anchor="{anchor}" fill="{}" font-size="{}">{}</text>"#,
            fmt_num(label.at.x),
            fmt_num(label.at.y),
            label.color,
            fmt_num(label.size),
            escape(label.text),
        );
    }
}

pub fn render_svg(values: &[f64], options: &PlotOptions) -> Result<String, PlotError> {
    let mut surface = SvgSurface::new();
    plot(&mut surface, values, options)?;
    Ok(surface.finish())
}

fn path_data(path: &Path) -> String {
    let mut out = String::new();
    for segment in path.segments() {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = match segment {
            Segment::MoveTo(p) => write!(out, "M {} {}", fmt_num(p.x), fmt_num(p.y)),
            Segment::LineTo(p) => write!(out, "L {} {}", fmt_num(p.x), fmt_num(p.y)),
            Segment::CubicTo(c1, c2, p) => write!(
                out,
                "C {} {} {} {} {} {}",
                fmt_num(c1.x),
                fmt_num(c1.y),
                fmt_num(c2.x),
                fmt_num(c2.y),
                fmt_num(p.x),
                fmt_num(p.y)
            ),
            Segment::Close => write!(out, "Z"),
        };
    }
    out
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        width: f64,
        height: f64,
        strokes: Vec<(Path, Stroke)>,
        fills: Vec<Path>,
        circles: Vec<(Point, f64)>,
        texts: Vec<String>,
    }

    impl Surface for Recorder {
        fn resize(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
        }

        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn stroke(&mut self, path: &Path, stroke: &Stroke) {
            self.strokes.push((path.clone(), stroke.clone()));
        }

        fn fill(&mut self, path: &Path, _paint: &Paint) {
            self.fills.push(path.clone());
        }

        fn circle(&mut self, center: Point, radius: f64, _paint: &Paint) {
            self.circles.push((center, radius));
        }

        fn text(&mut self, label: &Label<'_>) {
            self.texts.push(label.text.to_string());
        }
    }

    const SAMPLE: [f64; 7] = [40.0, 55.0, 60.0, 50.0, 65.0, 45.0, 55.0];

    #[test]
    fn layout_maps_extremes_to_padding_and_baseline() {
        let points = layout(&[100.0, 0.0], 500.0, CHART_HEIGHT).unwrap();
        assert_eq!(points[0], Point::new(PADDING, PADDING));
        assert_eq!(points[1], Point::new(500.0 - PADDING, CHART_HEIGHT - PADDING));
    }

    #[test]
    fn layout_needs_two_samples() {
        assert_eq!(layout(&[], 500.0, CHART_HEIGHT), Err(PlotError::TooFewPoints(0)));
        assert_eq!(layout(&[42.0], 500.0, CHART_HEIGHT), Err(PlotError::TooFewPoints(1)));
    }

    #[test]
    fn curve_passes_through_every_sample() {
        let points = layout(&SAMPLE, 640.0, CHART_HEIGHT).unwrap();
        let path = smooth_path(&points);
        let mut ends = Vec::new();
        for segment in path.segments() {
            match segment {
                Segment::MoveTo(p) | Segment::CubicTo(_, _, p) => ends.push(*p),
                _ => {}
            }
        }
        assert_eq!(ends, points);
    }

    #[test]
    fn plot_draws_grid_curve_fill_and_markers() {
        let mut surface = Recorder::default();
        plot(&mut surface, &SAMPLE, &PlotOptions::new(640.0).plain()).unwrap();

        assert_eq!((surface.width, surface.height), (640.0, CHART_HEIGHT));
        let dashed = surface.strokes.iter().filter(|(_, s)| s.dash.is_some()).count();
        assert_eq!(dashed, GRID_BANDS + 1);
        assert_eq!(surface.fills.len(), 1);
        assert_eq!(surface.fills[0].segments().last(), Some(&Segment::Close));
        assert_eq!(surface.circles.len(), SAMPLE.len() * 2);
        assert_eq!(surface.texts, vec!["100%", "75%", "50%", "25%", "0%"]);
    }

    #[test]
    fn annotated_plot_highlights_current_sample() {
        let mut surface = Recorder::default();
        plot(&mut surface, &SAMPLE, &PlotOptions::new(640.0)).unwrap();

        assert!(surface.texts.iter().any(|t| t == "Migraine risk trend"));
        assert!(surface.texts.iter().any(|t| t == "Now"));
        assert!(surface.texts.iter().any(|t| t == "60%"));
        assert_eq!(surface.circles.len(), SAMPLE.len() * 2 + 2);
        let points = layout(&SAMPLE, 640.0, CHART_HEIGHT).unwrap();
        assert!(surface.circles.iter().any(|(c, r)| *c == points[CURRENT_INDEX] && *r == 9.0));
    }

    #[test]
    fn rejects_short_series() {
        let mut surface = Recorder::default();
        let err = plot(&mut surface, &[50.0], &PlotOptions::new(640.0)).unwrap_err();
        assert_eq!(err, PlotError::TooFewPoints(1));
        assert!(surface.strokes.is_empty());
    }

    #[test]
    fn rejects_surface_without_plot_area() {
        let err = render_svg(&SAMPLE, &PlotOptions::new(80.0)).unwrap_err();
        assert_eq!(err, PlotError::TooNarrow(80.0));
    }

    #[test]
    fn svg_output_declares_gradients() {
        let svg = render_svg(&SAMPLE, &PlotOptions::new(640.0)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="640" height="250""#));
        assert!(svg.contains(r##"stop-color="#3b82f6""##));
        assert!(svg.contains("url(#grad0)"));
        assert!(svg.contains("url(#grad1)"));
        assert!(svg.contains(r#"stroke-dasharray="4 4""#));
    }
}
