use std::fmt;

use crate::view::marker::Marker;
use crate::view::viewport::{Framing, MapViewport};

/// User-visible conditions surfaced through the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A non-blank query matched no features.
    NoResults { query: String },
    /// The dataset could not be loaded; the session stays inert.
    LoadFailed { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoResults { query } => write!(f, "No results found for '{}'", query),
            Notice::LoadFailed { reason } => {
                write!(f, "Could not load the feature dataset: {}", reason)
            }
        }
    }
}

/// Seam between the session and whatever draws the map.
///
/// `render` replaces the previously displayed markers wholesale; nothing of
/// the old subset survives a call. `show_notice` is invoked after `render`
/// when a condition needs the user's attention.
pub trait MarkerRenderer {
    fn render(&mut self, markers: &[Marker], framing: Framing);
    fn show_notice(&mut self, notice: Notice);
}

/// Renderer that records every call, for driving the pipeline in tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub markers: Vec<Marker>,
    pub framing: Option<Framing>,
    pub notices: Vec<Notice>,
    pub render_calls: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerRenderer for RecordingRenderer {
    fn render(&mut self, markers: &[Marker], framing: Framing) {
        self.markers = markers.to_vec();
        self.framing = Some(framing);
        self.render_calls += 1;
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Text renderer used by the binary: one line per marker plus a framing
/// summary, written to stdout.
pub struct ConsoleRenderer {
    viewport: MapViewport,
}

impl ConsoleRenderer {
    pub fn new(viewport: MapViewport) -> Self {
        Self { viewport }
    }
}

impl MarkerRenderer for ConsoleRenderer {
    fn render(&mut self, markers: &[Marker], framing: Framing) {
        match framing {
            Framing::FitBounds(bounds) => println!(
                "Map view: {} marker(s), framed to lon {:.4}..{:.4}, lat {:.4}..{:.4}",
                markers.len(),
                bounds.min().x,
                bounds.max().x,
                bounds.min().y,
                bounds.max().y
            ),
            Framing::Reset => println!(
                "Map view: {} marker(s), reset to ({:.4}, {:.4}) at zoom {}",
                markers.len(),
                self.viewport.center_lon,
                self.viewport.center_lat,
                self.viewport.zoom
            ),
        }
        for marker in markers {
            println!(
                "  [{}] {} @ ({:.4}, {:.4})",
                marker.style.symbol,
                marker.label,
                marker.position.x(),
                marker.position.y()
            );
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        println!("!! {}", notice);
    }
}
