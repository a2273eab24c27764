use ppm_probe_rs::logger;
use ppm_probe_rs::pixmap_analysis::{AnalysisConfig, FrameAnalyzer};

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "frame.ppm".to_string());

    let config = AnalysisConfig::builder().top_k(10).build();
    let analyzer = FrameAnalyzer::new(config);

    info!("Frame analyzer initialized");
    match analyzer.analyze_file(&path) {
        Ok(report) => report.print_summary(),
        Err(e) => error!("Analysis failed: {}", e),
    }

    Ok(())
}
