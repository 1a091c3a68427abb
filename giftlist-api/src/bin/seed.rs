//! Wipe the catalog and load the demo presents.
//!
//! Usage: `cargo run --bin seed` with the same configuration as the API.

use anyhow::Context;
use giftlist_core::{PresentDraft, PresentStore};
use giftlist_store::{app_config::Config, DbClient, PgPresentStore};

fn demo_presents() -> Vec<PresentDraft> {
    let items: [(&str, &str, f64, &str); 12] = [
        (
            "Apple AirPods Pro",
            "Active noise cancellation for immersive sound. Transparency mode for hearing what's happening around you.",
            249.99,
            "/images/airpods.webp",
        ),
        (
            "Apple Watch Series 9",
            "The most powerful Apple Watch yet with advanced health features and a stunning Retina display.",
            399.99,
            "/images/watch.webp",
        ),
        (
            "Jeep Wrangler",
            "The iconic off-road vehicle with unmatched capability and legendary style.",
            29_995.00,
            "/images/jeep.webp",
        ),
        (
            "MacBook Pro 16\"",
            "Supercharged by M3 Pro or M3 Max. The most powerful laptop in its class for demanding workflows.",
            2_499.99,
            "/images/macbook.webp",
        ),
        (
            "PlayStation 5",
            "Experience lightning-fast loading, deeper immersion, and an all-new generation of incredible PlayStation games.",
            499.99,
            "/images/ps5.webp",
        ),
        (
            "DJI Mini 3 Pro",
            "Lightweight sub-249g drone with 4K/60fps video, 48MP photos, and advanced safety features.",
            759.00,
            "/images/drone.webp",
        ),
        (
            "iPhone 15 Pro Max",
            "The most advanced iPhone ever with a titanium design, A17 Pro chip, and a pro camera system.",
            1_199.99,
            "/images/iphone.webp",
        ),
        (
            "Samsung 65\" OLED TV",
            "Quantum HDR OLED display with Neural Quantum Processor for stunning picture quality.",
            2_299.99,
            "/images/tv.webp",
        ),
        (
            "Dyson V15 Detect",
            "Powerful cordless vacuum with laser dust detection and intelligent suction optimization.",
            749.99,
            "/images/vacuum.webp",
        ),
        (
            "iPad Pro 12.9\"",
            "Brilliant Liquid Retina XDR display, M2 chip, and pro cameras with LiDAR Scanner.",
            1_099.99,
            "/images/ipad.webp",
        ),
        (
            "Nintendo Switch OLED",
            "Enhanced gaming system with vibrant 7-inch OLED screen and improved audio.",
            349.99,
            "/images/switch.webp",
        ),
        (
            "Sonos Arc",
            "Premium smart soundbar with Dolby Atmos and voice control for immersive home theater.",
            899.99,
            "/images/soundbar.webp",
        ),
    ];

    items
        .into_iter()
        .map(|(name, description, price, image)| PresentDraft {
            name: name.to_string(),
            description: description.to_string(),
            price,
            images: vec![image.to_string()],
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load().context("Failed to load config")?;
    let db = DbClient::new(&config.database.url)
        .await
        .context("Failed to connect to Postgres")?;
    db.migrate().await.context("Failed to run migrations")?;

    let store = PgPresentStore::new(db.pool.clone());

    tracing::info!("Start seeding...");
    store.clear().await.context("Failed to clear presents")?;
    tracing::info!("Cleared existing presents");

    for draft in demo_presents() {
        let created = store
            .create_present(draft)
            .await
            .context("Failed to create present")?;
        tracing::info!("Created present: {}", created.name);
    }

    tracing::info!("Seeding finished");
    Ok(())
}
