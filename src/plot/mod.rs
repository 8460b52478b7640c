//! Plot layer: the plotly 3D scene and the interactive HTML document.

pub mod html;
pub mod scene;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing the visualization.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(
        "plot inputs differ in length: x={x}, y={y}, z={z}, color={color}"
    )]
    LengthMismatch {
        x: usize,
        y: usize,
        z: usize,
        color: usize,
    },

    #[error("writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Plot style
// ---------------------------------------------------------------------------

/// Fixed presentation settings for the colour–colour–magnitude scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub title: String,
    pub trace_name: String,
    /// At most this many stars are drawn (the first ones, in catalog order).
    pub max_points: usize,
    /// Colour range for proper-motion magnitude, mas/yr.
    pub cmin: f64,
    pub cmax: f64,
    pub colorbar_title: String,
    pub marker_size: usize,
    pub opacity: f64,
    pub width: usize,
    pub height: usize,
    pub x_title: String,
    pub y_title: String,
    pub z_title: String,
    /// Depth-axis tick positions (negated B); labelled with the positive magnitude.
    pub depth_ticks: Vec<f64>,
    pub camera_eye: [f64; 3],
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            title: "NGC5139".to_string(),
            trace_name: "NGC5139".to_string(),
            max_points: 10_000,
            cmin: 0.0,
            cmax: 10.0,
            colorbar_title: "Proper Motion [mas/yr]".to_string(),
            marker_size: 2,
            opacity: 0.5,
            width: 700,
            height: 700,
            x_title: "B-R [mag]".to_string(),
            y_title: "B-V [mag]".to_string(),
            z_title: "B [mag]".to_string(),
            depth_ticks: vec![-24.0, -20.0, -16.0, -12.0],
            camera_eye: [0.1, 2.5, 0.1],
        }
    }
}
