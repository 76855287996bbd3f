/// Quickstart example - flatten one appointment event
use hoist::{FlattenConfig, Flattener};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    println!("=== Hoist Quick Start ===\n");

    let event = json!({
        "Data": {
            "AppointmentId": "A1",
            "TimestampUtc": "2023-01-01T00:00:00Z",
            "Discipline": "Cardiology",
            "Room": "3B"
        },
        "Status": "ok"
    });

    println!("Original JSON:");
    println!("{}\n", serde_json::to_string_pretty(&event)?);

    let flattener = Flattener::new(FlattenConfig::default().pretty());
    let flattened = flattener.transform(&event.to_string())?;

    println!("Flattened JSON:");
    println!("{}\n", flattened);

    // A second pass has no Data left to read from
    let lenient = Flattener::new(FlattenConfig::default().lenient());
    println!("Second pass (lenient): {}", lenient.transform(&flattened)?);

    Ok(())
}
