// src/demo.rs
//
// Built-in rows: four hand-written mock lots (used by tests and `--demo`)
// and a generated sample set the GUI shows until a CSV loads.
// Column names are chosen so the inference table binds every role.

use crate::config::consts::BRAND;
use crate::store::DataSet;

pub const COLUMNS: &[&str] = &[
    "BioTrackID",
    "Product Name",
    "Strain",
    "Type",
    "Batch",
    "Test date",
    "Testing lab",
    "TotalTHC",
    "TotalCBD",
    "TotalCannabinoids",
    "PdfUrl",
    "manufactured by",
    "Manufacture date",
    "package date",
    "expiration date",
    "Grown by",
    "Pesticides used",
    "solvents used",
    "intended use",
    "warning 1",
    "warning 2",
    "poison contorl",
];

const LAB: &str = "MockLab NM";

// id, name, strain, type, batch, test date, thc, cbd, total
const MOCK: [[&str; 9]; 4] = [
    ["TR-ABCD-0001", "Canvas OG Pre-Roll 1g", "Canvas OG", "flower", "B2411-A", "2025-08-18", "23.6%", "0.1%", "28.2%"],
    ["TR-ABCD-0002", "Live Resin - Pine Dew (1g)", "Pine Dew", "concentrate", "B2410-R", "2025-08-19", "82.4%", "0.0%", "89.1%"],
    ["TR-ABCD-0003", "Gummy - Mango Chili (10-pack)", "-", "edible", "E2409-M", "2025-08-20", "10 mg/pc", "0 mg/pc", "10 mg/pc"],
    ["TR-ABCD-0004", "Sunset Haze 3.5g Flower", "Sunset Haze", "flower", "B2411-S", "2025-08-21", "27.1%", "0.0%", "31.5%"],
];

fn columns() -> Vec<String> {
    COLUMNS.iter().map(|c| s!(*c)).collect()
}

/// The four mock lots; compliance columns left blank.
pub fn mock_dataset() -> DataSet {
    let rows = MOCK
        .iter()
        .map(|[id, name, strain, kind, batch, date, thc, cbd, total]| {
            vec![
                s!(*id), s!(*name), s!(*strain), s!(*kind), s!(*batch), s!(*date),
                s!(LAB), s!(*thc), s!(*cbd), s!(*total),
            ]
        })
        .collect();
    DataSet::from_rows(columns(), rows)
}

/// `count` generated lots cycling through the mock products and the
/// flower / concentrate / edible types.
pub fn sample_dataset(count: usize) -> DataSet {
    const TYPES: [&str; 3] = ["flower", "concentrate", "edible"];
    let rows = (0..count)
        .map(|i| {
            let base = &MOCK[i % MOCK.len()];
            let idx = i + 1;
            let kind = TYPES[i % 3];
            let edible = kind == "edible";
            let strain = if base[2] == "-" { "Blend" } else { base[2] };

            let thc = if edible { format!("{} mg/pc", 10 + i % 5) } else { format!("{}.{}%", 20 + i % 10, i % 10) };
            let cbd = if edible { format!("{} mg/pc", i % 2) } else { format!("{}.{}%", i % 3, i % 10) };
            let total = if edible {
                format!("{} mg/pc", 10 + i % 5)
            } else {
                format!("{}.{}%", 25 + i % 10, (i + 3) % 10)
            };

            vec![
                format!("TR-SAMPLE-{:03}", idx),
                format!("{} Lot {}", base[1], 100 + idx),
                s!(strain),
                s!(kind),
                format!("S{}", 2400 + idx),
                format!("2025-08-{:02}", i % 28 + 1),
                s!(LAB),
                thc,
                cbd,
                total,
                s!(),
                s!(BRAND),
                s!("2025-08-01"),
                s!("2025-08-02"),
                s!("2026-08-01"),
                s!("Canvas Farm"),
                s!("None"),
                s!(if kind == "concentrate" { "Hydrocarbon" } else { "None" }),
                s!("Follow label directions"),
                s!("For adults 21+. Keep away from children and pets."),
                s!("Not FDA approved. Do not drive or operate machinery."),
                s!("New Mexico Poison and Drug Hotline: 1-800-222-1222"),
            ]
        })
        .collect();
    DataSet::from_rows(columns(), rows)
}
