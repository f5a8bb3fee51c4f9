//! Chart report formatting
//!
//! A pure text formatter over [`ChartResult`]. Every user-visible word comes
//! from a caller-supplied [`ChartLabels`] set so the output can be localized
//! without touching the engine; formatting never feeds back into any numeric
//! result.

use std::fmt::Write;

use crate::chart::ChartResult;

/// The label set used by [`describe_chart`].
///
/// `Default` is English; a localized consumer supplies its own strings.
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub ascendant: String,
    pub house_prefix: String,
    pub houses_heading: String,
    pub aspects_heading: String,
    pub no_aspects: String,
    /// Aspect kind labels in [`crate::chart::AspectKind::ALL`] order
    pub aspect_kinds: [String; 5],
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "natal chart".to_string(),
            ascendant: "ascendant".to_string(),
            house_prefix: "h".to_string(),
            houses_heading: "houses".to_string(),
            aspects_heading: "aspects".to_string(),
            no_aspects: "no aspects within orb".to_string(),
            aspect_kinds: [
                "conjunction".to_string(),
                "sextile".to_string(),
                "square".to_string(),
                "trine".to_string(),
                "opposition".to_string(),
            ],
        }
    }
}

impl ChartLabels {
    fn aspect_kind(&self, kind: crate::chart::AspectKind) -> &str {
        &self.aspect_kinds[kind as usize]
    }
}

/// Render a chart as a plain-text summary.
///
/// One line per body (glyph, name, sign, in-sign degree, house), the
/// ascendant, the twelve cusps, and the detected aspects.
pub fn describe_chart(chart: &ChartResult, labels: &ChartLabels) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", labels.title);
    let _ = writeln!(
        out,
        "{} {} {} {:.2}\u{b0}",
        labels.ascendant,
        chart.ascendant_sign.name(),
        chart.ascendant_sign.symbol(),
        chart.ascendant % 30.0
    );

    for planet in &chart.planets {
        let _ = writeln!(
            out,
            "{} {:<8} {:<11} {:>5.2}\u{b0} {}{}",
            planet.body.symbol(),
            planet.body.name(),
            planet.sign.name(),
            planet.degree_in_sign(),
            labels.house_prefix,
            planet.house
        );
    }

    let _ = writeln!(out, "{}", labels.houses_heading);
    for (i, cusp) in chart.houses.as_array().iter().enumerate() {
        let _ = writeln!(out, "  {}{:<2} {:>6.2}\u{b0}", labels.house_prefix, i + 1, cusp);
    }

    let _ = writeln!(out, "{}", labels.aspects_heading);
    if chart.aspects.is_empty() {
        let _ = writeln!(out, "  {}", labels.no_aspects);
    }
    for aspect in &chart.aspects {
        let _ = writeln!(
            out,
            "  {} {} {} ({:.2}\u{b0})",
            aspect.body_a.name(),
            labels.aspect_kind(aspect.kind),
            aspect.body_b.name(),
            aspect.orb
        );
    }

    out
}
