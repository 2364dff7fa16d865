//! Basic example demonstrating the PurpleAir API client.
//!
//! Run with:
//! ```
//! PURPLEAIR_READ_KEY=your-key cargo run --example basic
//! ```

use purpleair::{PurpleAir, SensorFilters};

fn main() -> purpleair::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let read_key = std::env::var("PURPLEAIR_READ_KEY")
        .expect("set PURPLEAIR_READ_KEY to a PurpleAir read key");
    let client = PurpleAir::new(Some(&read_key), None)?;
    println!("Connected to: {}", client.base_url());

    // Validate the key
    println!("\n--- Checking API Key ---");
    let response = client.check_api_key(&read_key)?;
    println!("status {}: {}", response.status, response.body);

    // Outdoor sensors in a bounding box around Portland, OR
    println!("\n--- Listing Sensors ---");
    let filters = SensorFilters {
        location_type: Some(0),
        max_age: Some(3600),
        nwlng: Some(-122.76),
        nwlat: Some(45.65),
        selng: Some(-122.47),
        selat: Some(45.43),
        ..Default::default()
    };
    let response = client.get_sensors_data("name,pm2.5,humidity", &filters)?;
    println!("status {}", response.status);

    if let Some(rows) = response.body["data"].as_array() {
        for row in rows.iter().take(10) {
            println!("  - {row}");
        }

        // Fetch the first sensor individually
        if let Some(index) = rows.first().and_then(|r| r[0].as_u64()) {
            println!("\n--- Single Sensor {index} ---");
            let response = client.get_sensor_data(index, None, Some("name,pm2.5"), None)?;
            println!("status {}: {}", response.status, response.body["sensor"]);
        }
    }

    // Groups owned by this key
    println!("\n--- Owned Groups ---");
    let response = client.get_owned_groups()?;
    println!("status {}: {}", response.status, response.body);

    Ok(())
}
