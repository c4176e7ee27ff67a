use launch_dashboard::domain::launch::{LaunchRecord, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;

pub const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
pub const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

/// Random launch records with payloads on a 100 kg grid, so any mass that is
/// not a multiple of 100 is guaranteed to be absent.
pub fn random_records(seed: u64, rows: usize) -> Vec<LaunchRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            let site = SITES[rng.gen_range(0..SITES.len())];
            let booster = BOOSTERS[rng.gen_range(0..BOOSTERS.len())];
            let payload = Decimal::from(rng.gen_range(0..=96u32) * 100);
            let outcome = if rng.gen_bool(0.65) {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            LaunchRecord::new(site, payload, booster, outcome)
        })
        .collect()
}

/// Writes records using the column layout of the published launch CSV.
pub fn write_csv(path: &Path, records: &[LaunchRecord]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    for (i, record) in records.iter().enumerate() {
        wtr.write_record([
            i.to_string(),
            (i + 1).to_string(),
            record.launch_site.clone(),
            record.outcome.class().to_string(),
            format!("{:.1}", record.payload_mass_kg.value()),
            format!("F9 {}", record.booster_version_category),
            record.booster_version_category.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
