use scanalign_2d::linalg::{centroid, euclidean_distance, transform_points};
use scanalign_2d::pointcloud::PointCloud;
use scanalign_2d::transforms::rigid;
use scanalign_viz::{plot_alignment, RerunScatter};

mod scans;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let target_cloud = PointCloud::new(scans::target_scan(), None);
    println!("Target cloud: #{} points", target_cloud.len());

    // seed pose of the source scan, a quarter turn about the origin
    let raw_scan = scans::source_scan();
    let seed = rigid(std::f64::consts::FRAC_PI_2, &[0.0, 0.0]);
    let mut seeded = vec![[0.0; 2]; raw_scan.len()];
    transform_points(&raw_scan, &seed, &mut seeded)?;

    let source_cloud = PointCloud::new(seeded, None);
    println!("Source cloud: #{} points", source_cloud.len());

    let mut plot = RerunScatter::spawn("ICP Alignment")?;

    plot_alignment(
        &mut plot,
        "Before ICP Alignment",
        &target_cloud,
        &source_cloud,
        None,
    )?;

    let alignment = scans::alignment_transform();
    let mut aligned = vec![[0.0; 2]; source_cloud.len()];
    transform_points(source_cloud.points(), &alignment, &mut aligned)?;
    let aligned_cloud = PointCloud::new(aligned, None);

    plot_alignment(
        &mut plot,
        "After ICP Alignment",
        &target_cloud,
        &source_cloud,
        Some(&aligned_cloud),
    )?;

    let target_centroid = centroid(target_cloud.points());
    log::info!(
        "centroid gap to target: {:.4} source, {:.4} aligned",
        euclidean_distance(&centroid(source_cloud.points()), &target_centroid),
        euclidean_distance(&centroid(aligned_cloud.points()), &target_centroid),
    );
    log::info!(
        "aligned cloud bounds: {:?} to {:?}",
        aligned_cloud.min_bound(),
        aligned_cloud.max_bound()
    );

    Ok(())
}
