//! Decorative text built from a typeface.js JSON font.
//!
//! Glyph outlines are command strings (`m x y`, `l x y`, `q x y cx cy`,
//! `b x y c1x c1y c2x c2y`) in font units. They are scaled to the requested
//! size, flattened into polylines and emitted as a line-list wireframe of the
//! extruded glyphs.

use crate::config::{TextConfig, TextLine};
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("malformed typeface json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("typeface resolution must be positive, got {0}")]
    Resolution(f32),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Glyph {
    #[serde(default)]
    pub ha: f32,
    #[serde(default)]
    pub o: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundingBox {
    #[serde(default)]
    y_min: f32,
    #[serde(default)]
    y_max: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeface {
    glyphs: FnvHashMap<String, Glyph>,
    resolution: f32,
    #[serde(default)]
    bounding_box: BoundingBox,
    #[serde(default)]
    underline_thickness: f32,
    #[serde(default)]
    family_name: Option<String>,
}

pub struct Typeface {
    glyphs: FnvHashMap<char, Glyph>,
    resolution: f32,
    line_height: f32,
    family_name: Option<String>,
}

impl Typeface {
    pub fn from_json(bytes: &[u8]) -> Result<Self, FontError> {
        let raw: RawTypeface = serde_json::from_slice(bytes)?;
        if !(raw.resolution > 0.0) {
            return Err(FontError::Resolution(raw.resolution));
        }
        let glyphs = raw
            .glyphs
            .into_iter()
            .filter_map(|(key, glyph)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, glyph)),
                    _ => None,
                }
            })
            .collect();
        Ok(Self {
            glyphs,
            resolution: raw.resolution,
            line_height: raw.bounding_box.y_max - raw.bounding_box.y_min
                + raw.underline_thickness,
            family_name: raw.family_name,
        })
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyph for `c`, falling back to `?`.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c).or_else(|| self.glyphs.get(&'?'))
    }

    /// Flattened 2D contours of `text` at `size`, origin at the baseline of
    /// the first line.
    pub fn layout(&self, text: &str, size: f32, curve_segments: usize) -> Vec<Contour> {
        let scale = size / self.resolution;
        let line_height = self.line_height * scale;
        let mut offset = Vec2::ZERO;
        let mut contours = Vec::new();
        for c in text.chars() {
            if c == '\n' {
                offset.x = 0.0;
                offset.y -= line_height;
                continue;
            }
            let Some(glyph) = self.glyph(c) else {
                log::debug!("[font] no glyph for {c:?}");
                continue;
            };
            if let Some(outline) = &glyph.o {
                trace_outline(outline, scale, offset, curve_segments.max(1), &mut contours);
            }
            offset.x += glyph.ha * scale;
        }
        contours
    }
}

/// A flattened outline. `corners` marks the indices of command end points,
/// as opposed to points produced by curve subdivision.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<Vec2>,
    pub corners: Vec<usize>,
}

impl Contour {
    fn push_corner(&mut self, p: Vec2) {
        self.corners.push(self.points.len());
        self.points.push(p);
    }

    fn last(&self) -> Vec2 {
        self.points.last().copied().unwrap_or(Vec2::ZERO)
    }
}

fn trace_outline(
    outline: &str,
    scale: f32,
    offset: Vec2,
    segments: usize,
    out: &mut Vec<Contour>,
) {
    let tokens: Vec<&str> = outline.split_whitespace().collect();
    let mut i = 0;
    let mut current = Contour::default();

    // Reads the next coordinate pair, scaled and offset.
    let point = |i: &mut usize| -> Option<Vec2> {
        let x = tokens.get(*i)?.parse::<f32>().ok()?;
        let y = tokens.get(*i + 1)?.parse::<f32>().ok()?;
        *i += 2;
        Some(Vec2::new(x, y) * scale + offset)
    };

    while i < tokens.len() {
        let action = tokens[i];
        i += 1;
        match action {
            "m" => {
                let Some(p) = point(&mut i) else { break };
                if current.points.len() > 1 {
                    out.push(std::mem::take(&mut current));
                } else {
                    current = Contour::default();
                }
                current.push_corner(p);
            }
            "l" => {
                let Some(p) = point(&mut i) else { break };
                current.push_corner(p);
            }
            "q" => {
                let (Some(end), Some(ctrl)) = (point(&mut i), point(&mut i)) else {
                    break;
                };
                let start = current.last();
                for s in 1..segments {
                    let t = s as f32 / segments as f32;
                    current.points.push(quadratic(start, ctrl, end, t));
                }
                current.push_corner(end);
            }
            "b" => {
                let (Some(end), Some(c1), Some(c2)) =
                    (point(&mut i), point(&mut i), point(&mut i))
                else {
                    break;
                };
                let start = current.last();
                for s in 1..segments {
                    let t = s as f32 / segments as f32;
                    current.points.push(cubic(start, c1, c2, end, t));
                }
                current.push_corner(end);
            }
            _ => {}
        }
    }
    if current.points.len() > 1 {
        out.push(current);
    }
}

fn quadratic(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k) + p1 * (2.0 * k * t) + p2 * (t * t)
}

fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k * k) + p1 * (3.0 * k * k * t) + p2 * (3.0 * k * t * t) + p3 * (t * t * t)
}

/// Line-list wireframe of the decorative text: every pair of vertices is one
/// segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextMesh {
    vertices: Vec<Vec3>,
}

impl TextMesh {
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_segment(&mut self, a: Vec3, b: Vec3) {
        self.vertices.push(a);
        self.vertices.push(b);
    }

    /// Outline of one extruded text line placed at `origin`: front and back
    /// faces at `z = 0` and `z = height`, joined at the command end points.
    fn push_line(&mut self, contours: &[Contour], origin: Vec3, height: f32) {
        let back = |p: Vec2| origin + p.extend(0.0);
        let front = |p: Vec2| origin + p.extend(height);
        for contour in contours {
            for pair in contour.points.windows(2) {
                self.push_segment(back(pair[0]), back(pair[1]));
                if height != 0.0 {
                    self.push_segment(front(pair[0]), front(pair[1]));
                }
            }
            if height != 0.0 {
                for &c in &contour.corners {
                    let p = contour.points[c];
                    self.push_segment(back(p), front(p));
                }
            }
        }
    }
}

/// Build the static text decoration for all configured lines.
pub fn build_text(font: &Typeface, config: &TextConfig) -> TextMesh {
    let mut mesh = TextMesh::default();
    for TextLine { text, position } in &config.lines {
        let contours = font.layout(text, config.size, config.curve_segments);
        mesh.push_line(&contours, Vec3::from(*position), config.height);
    }
    log::debug!("[font] built {} text segments", mesh.segment_count());
    mesh
}
