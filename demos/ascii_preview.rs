use ppm_probe_rs::pixmap_analysis::{P6Reader, PixmapReader, RasterizerConfig, rasterize};

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "frame.ppm".to_string());
    let data = std::fs::read(&path)?;

    let image = P6Reader.read_pixmap(&data)?;
    println!("Image: {}x{} pixels", image.width(), image.height());

    let stride = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let config = RasterizerConfig::builder().stride(stride).build();

    println!("\nRough visualization (T=texture, .=background):");
    print!("{}", rasterize(&image, &config));

    Ok(())
}
