//! Generate a QR code and save it to a file
//!
//! Usage: cargo run --example mint_qr

use qrmint::{EcLevel, MintConfig, Payload, QrMinter, RenderConfig};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let minter = QrMinter::new(MintConfig::default());

    // Generate a simple QR code with the default settings
    let payload = Payload::parse("Hello from qrmint!")?;
    let outcome = minter.mint(&payload, Path::new("qr_output.png"))?;

    println!(
        "✓ QR code saved to {} (version {}, {}x{} px)",
        outcome.path.display(),
        outcome.version,
        outcome.width,
        outcome.height
    );

    // Generate a denser symbol with high error correction
    let sturdy = QrMinter::new(MintConfig {
        render: RenderConfig {
            ec_level: EcLevel::High,
            ..RenderConfig::default()
        },
    });

    let url = Payload::parse("https://example.com/tickets/42")?;
    let outcome = sturdy.mint(&url, Path::new("qr_sturdy.png"))?;

    println!(
        "✓ High-ECC QR code saved to {} ({} modules)",
        outcome.path.display(),
        outcome.modules
    );
    println!("  Content: {}", url.as_str());

    Ok(())
}
