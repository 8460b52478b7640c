use plotly::common::{ColorBar, ColorScale, ColorScalePalette, Line, Marker, Mode, Title};
use plotly::layout::{AspectMode, Axis, Camera, Eye, LayoutScene};
use plotly::{Layout, Plot, Scatter3D};

use super::{PlotStyle, RenderError};
use crate::data::derive::DerivedQuantities;

/// The colour–colour–magnitude figure, ready to be written out.
pub struct Scene {
    plot: Plot,
    points: usize,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// Build the colour–colour–magnitude scene.
    ///
    /// x = B−Rc, y = B−V, z = −B, coloured by proper-motion magnitude on the
    /// Jet scale over `[cmin, cmax]`.  At most `style.max_points` rows are
    /// kept; all four sequences are cut together so points and colours stay
    /// aligned.
    pub fn scatter(derived: &DerivedQuantities, style: &PlotStyle) -> Result<Scene, RenderError> {
        let lengths = [
            derived.color_index_1.len(),
            derived.color_index_2.len(),
            derived.depth.len(),
            derived.pm_mag.len(),
        ];
        if lengths.iter().any(|&l| l != lengths[0]) {
            return Err(RenderError::LengthMismatch {
                x: lengths[0],
                y: lengths[1],
                z: lengths[2],
                color: lengths[3],
            });
        }

        let shown = if derived.len() > style.max_points {
            log::warn!(
                "Rendering the first {} of {} stars",
                style.max_points,
                derived.len()
            );
            derived.truncated(style.max_points)
        } else {
            derived.clone()
        };
        if shown.is_empty() {
            log::warn!("No stars passed selection; the plot will be empty");
        }
        let points = shown.len();

        let marker = Marker::new()
            .color_array(shown.pm_mag)
            .cmin(style.cmin)
            .cmax(style.cmax)
            .color_scale(ColorScale::Palette(ColorScalePalette::Jet))
            .color_bar(ColorBar::new().title(Title::with_text(&style.colorbar_title)))
            .size(style.marker_size)
            .opacity(style.opacity)
            .line(Line::new().width(0.0));

        let trace = Scatter3D::new(shown.color_index_1, shown.color_index_2, shown.depth)
            .name(&style.trace_name)
            .mode(Mode::Markers)
            .marker(marker);

        let depth_labels = style
            .depth_ticks
            .iter()
            .map(|&v| format!("{}", -v))
            .collect();

        let [eye_x, eye_y, eye_z] = style.camera_eye;
        let scene = LayoutScene::new()
            .camera(Camera::new().eye(Eye::from((eye_x, eye_y, eye_z))))
            .aspect_mode(AspectMode::Cube)
            .x_axis(Axis::new().title(Title::with_text(&style.x_title)))
            .y_axis(Axis::new().title(Title::with_text(&style.y_title)))
            .z_axis(
                Axis::new()
                    .title(Title::with_text(&style.z_title))
                    .tick_values(style.depth_ticks.clone())
                    .tick_text(depth_labels),
            );

        let layout = Layout::new()
            .title(Title::with_text(&style.title))
            .auto_size(false)
            .width(style.width)
            .height(style.height)
            .scene(scene);

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);

        Ok(Scene { plot, points })
    }

    /// Number of points in the scene.
    pub fn point_count(&self) -> usize {
        self.points
    }

    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Figure as plotly JSON (`data`, `layout`).
    pub fn to_json(&self) -> String {
        self.plot.to_json()
    }
}
