use std::path::Path;

use super::scene::Scene;
use super::RenderError;

/// Render the scene into a standalone HTML page with plotly.js inlined.
pub fn render_document(scene: &Scene) -> String {
    scene.plot().to_html()
}

/// Render the scene and write it to `path` in one go.
pub fn write_document(scene: &Scene, path: &Path) -> Result<(), RenderError> {
    let html = render_document(scene);
    std::fs::write(path, html).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Wrote {} points to {}",
        scene.point_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::derive::DerivedQuantities;
    use crate::plot::PlotStyle;

    fn scene() -> Scene {
        let derived = DerivedQuantities {
            color_index_1: vec![1.5, 0.9],
            color_index_2: vec![1.0, 0.6],
            depth: vec![-15.0, -17.2],
            pm_mag: vec![2f64.sqrt(), 4.0],
        };
        Scene::scatter(&derived, &PlotStyle::default()).unwrap()
    }

    #[test]
    fn document_is_drawn_by_plotly() {
        let html = render_document(&scene());

        assert!(html.contains("<html"));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("scatter3d"));
        assert!(html.contains("-17.2"));
        assert!(html.contains("NGC5139"));
    }

    #[test]
    fn plotly_js_is_inlined() {
        let html = render_document(&scene());
        assert!(!html.contains("src=\"https://cdn.plot.ly"));
    }

    #[test]
    fn writes_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.html");
        write_document(&scene(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Plotly.newPlot"));
        assert!(written.contains("-17.2"));
    }

    #[test]
    fn unwritable_path_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("plot.html");
        let err = write_document(&scene(), &path).unwrap_err();
        assert!(matches!(err, RenderError::Write { .. }));
    }
}
