use hough_lines::detect;
use hough_lines::HoughParams;
use image::ImageReader;
use log::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    hough_lines::core::init_tracing(LevelFilter::Info, false)?;
    #[cfg(not(feature = "tracing"))]
    hough_lines::core::init_with_level(LevelFilter::Info)?;

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: detect_lines <edge_image_path> [threshold]");
        return Ok(());
    };
    let threshold = match std::env::args().nth(2) {
        Some(t) => t.parse()?,
        None => HoughParams::default().vote_threshold,
    };

    let edges = ImageReader::open(path)?.decode()?.to_luma8();
    let params = HoughParams {
        vote_threshold: threshold,
        ..HoughParams::default()
    };

    let space = detect::detect_lines(&edges, params)?;
    println!(
        "{} foreground pixels, {} lines above {threshold} votes",
        space.foreground_pixels,
        space.maxima.len()
    );
    for line in space.strongest(10) {
        let d = line.descriptor;
        println!(
            "theta={:6.2}° rho={:7.1} votes={:5}  ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            d.theta.to_degrees(),
            d.rho,
            d.votes,
            line.segment.p0.x,
            line.segment.p0.y,
            line.segment.p1.x,
            line.segment.p1.y
        );
    }

    Ok(())
}
