use scanalign_2d::pointcloud::PointCloud;

// Layer palette for the alignment plots.
const TARGET_COLOR: [u8; 3] = [90, 145, 199];
const SOURCE_COLOR: [u8; 3] = [199, 62, 29];
const ALIGNED_COLOR: [u8; 3] = [255, 215, 0];

/// Errors that can occur while rendering.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// The recording stream rejected an operation.
    #[error("failed to log to the recording stream")]
    Recording(#[from] rerun::RecordingStreamError),
}

/// Minimal charting surface for labeled scatter layers.
///
/// Layers staged with [`add_points`](Self::add_points) accumulate until
/// [`show`](Self::show) materializes them as one titled plot, so a single
/// surface can display several plots in sequence.
pub trait ScatterPlot {
    /// Stage a named, colored point layer for the next [`show`](Self::show).
    fn add_points(
        &mut self,
        label: &str,
        points: &[[f64; 2]],
        color: [u8; 3],
    ) -> Result<(), VizError>;

    /// Materialize all staged layers as one plot under `title`, blocking
    /// until the frame has reached the display sink.
    fn show(&mut self, title: &str) -> Result<(), VizError>;
}

/// Plot a target cloud, a source cloud, and optionally the transformed source
/// cloud as one titled scatter plot.
///
/// Layers are staged in target, source, transformed order so the legend reads
/// the same in every plot.
pub fn plot_alignment(
    plot: &mut impl ScatterPlot,
    title: &str,
    target: &PointCloud,
    source: &PointCloud,
    transformed_source: Option<&PointCloud>,
) -> Result<(), VizError> {
    plot.add_points("target", target.points(), TARGET_COLOR)?;
    plot.add_points("source", source.points(), SOURCE_COLOR)?;
    if let Some(aligned) = transformed_source {
        plot.add_points("transformed_source", aligned.points(), ALIGNED_COLOR)?;
    }
    plot.show(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingPlot {
        layers: Vec<(String, usize, [u8; 3])>,
        shown: Vec<(String, usize)>,
    }

    impl ScatterPlot for RecordingPlot {
        fn add_points(
            &mut self,
            label: &str,
            points: &[[f64; 2]],
            color: [u8; 3],
        ) -> Result<(), VizError> {
            self.layers.push((label.to_owned(), points.len(), color));
            Ok(())
        }

        fn show(&mut self, title: &str) -> Result<(), VizError> {
            self.shown.push((title.to_owned(), self.layers.len()));
            Ok(())
        }
    }

    #[test]
    fn test_plot_alignment_two_clouds() -> Result<(), VizError> {
        let target = PointCloud::new(vec![[0.0, 0.0], [1.0, 1.0]], None);
        let source = PointCloud::new(vec![[2.0, 2.0]], None);

        let mut plot = RecordingPlot::default();
        plot_alignment(&mut plot, "Before ICP Alignment", &target, &source, None)?;

        assert_eq!(
            plot.layers,
            vec![
                ("target".to_owned(), 2, TARGET_COLOR),
                ("source".to_owned(), 1, SOURCE_COLOR),
            ]
        );
        assert_eq!(plot.shown, vec![("Before ICP Alignment".to_owned(), 2)]);
        Ok(())
    }

    #[test]
    fn test_plot_alignment_three_clouds() -> Result<(), VizError> {
        let target = PointCloud::new(vec![[0.0, 0.0]], None);
        let source = PointCloud::new(vec![[2.0, 2.0], [3.0, 3.0]], None);
        let aligned = PointCloud::new(vec![[0.1, 0.1], [0.9, 1.1]], None);

        let mut plot = RecordingPlot::default();
        plot_alignment(
            &mut plot,
            "After ICP Alignment",
            &target,
            &source,
            Some(&aligned),
        )?;

        assert_eq!(plot.layers.len(), 3);
        assert_eq!(plot.layers[2], ("transformed_source".to_owned(), 2, ALIGNED_COLOR));
        assert_eq!(plot.shown, vec![("After ICP Alignment".to_owned(), 3)]);
        Ok(())
    }
}
