use crate::scatter::{ScatterPlot, VizError};

/// A [`ScatterPlot`] backed by a Rerun recording stream.
///
/// Each [`show`](ScatterPlot::show) logs the staged layers under an entity
/// path derived from the title, so successive plots appear as separate groups
/// in the viewer. The 2D view provides equal-aspect axes, grid lines, and a
/// legend keyed by entity path.
pub struct RerunScatter {
    rec: rerun::RecordingStream,
    layers: Vec<Layer>,
}

struct Layer {
    label: String,
    points: Vec<(f32, f32)>,
    color: rerun::Color,
}

impl RerunScatter {
    /// Spawn a viewer and open a recording stream to it.
    pub fn spawn(application_id: &str) -> Result<Self, VizError> {
        let rec = rerun::RecordingStreamBuilder::new(application_id).spawn()?;
        Ok(Self {
            rec,
            layers: Vec::new(),
        })
    }
}

impl ScatterPlot for RerunScatter {
    fn add_points(
        &mut self,
        label: &str,
        points: &[[f64; 2]],
        color: [u8; 3],
    ) -> Result<(), VizError> {
        self.layers.push(Layer {
            label: label.to_owned(),
            points: points.iter().map(|p| (p[0] as f32, p[1] as f32)).collect(),
            color: rerun::Color::from_rgb(color[0], color[1], color[2]),
        });
        Ok(())
    }

    fn show(&mut self, title: &str) -> Result<(), VizError> {
        let path = entity_path(title);
        log::debug!("showing {} layers under {}", self.layers.len(), path);

        self.rec
            .log(format!("{path}/title"), &rerun::TextDocument::new(title))?;

        for layer in self.layers.drain(..) {
            let colors = vec![layer.color; layer.points.len()];
            self.rec.log(
                format!("{path}/{}", layer.label),
                &rerun::Points2D::new(layer.points).with_colors(colors),
            )?;
        }

        // render-and-wait: the plot is on screen before show returns
        self.rec.flush_blocking();
        Ok(())
    }
}

// Derive a stable entity path from a plot title.
fn entity_path(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_path() {
        assert_eq!(entity_path("Before ICP Alignment"), "before_icp_alignment");
        assert_eq!(entity_path("After ICP Alignment"), "after_icp_alignment");
    }
}
