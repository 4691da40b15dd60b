use hydroglyph::data::{self, METRIC_LABELS};
use hydroglyph::report;

const FIRST_YEAR: u16 = 2000;
const LAST_YEAR: u16 = 2020;

/// Placeholder the export format uses for a missing observation.
const GAP: &str = "..";

/// World Bank indicator codes, aligned with `METRIC_LABELS`.
const INDICATOR_CODES: [&str; 4] = [
    "ER.H2O.FWTL.K3",
    "ER.H2O.FWTL.ZS",
    "AG.LND.PRCP.MM",
    "AG.LND.IRIG.AG.ZS",
];

struct CountrySpec {
    name: &'static str,
    code: &'static str,
    /// Billion cubic metres withdrawn, 2017 level.
    withdrawals_total: f64,
    /// Withdrawals as % of internal renewable resources, 2017 level.
    withdrawal_share: f64,
    /// Long-term average precipitation depth (mm/year).
    precipitation: f64,
    /// Irrigated share of agricultural land, 2000 and 2020 endpoints.
    irrigated: (f64, f64),
}

// The two non-target neighbours exercise the rank-before-subset path.
const COUNTRIES: [CountrySpec; 6] = [
    CountrySpec {
        name: "India",
        code: "IND",
        withdrawals_total: 647.5,
        withdrawal_share: 45.2,
        precipitation: 1083.0,
        irrigated: (33.0, 39.0),
    },
    CountrySpec {
        name: "Bangladesh",
        code: "BGD",
        withdrawals_total: 35.9,
        withdrawal_share: 34.2,
        precipitation: 2666.0,
        irrigated: (55.0, 73.0),
    },
    CountrySpec {
        name: "Pakistan",
        code: "PAK",
        withdrawals_total: 183.5,
        withdrawal_share: 363.7,
        precipitation: 494.0,
        irrigated: (71.0, 77.0),
    },
    CountrySpec {
        name: "Nepal",
        code: "NPL",
        withdrawals_total: 9.5,
        withdrawal_share: 4.8,
        precipitation: 1500.0,
        irrigated: (27.0, 35.0),
    },
    CountrySpec {
        name: "Bhutan",
        code: "BTN",
        withdrawals_total: 0.34,
        withdrawal_share: 1.1,
        precipitation: 2200.0,
        irrigated: (1.5, 2.2),
    },
    CountrySpec {
        name: "Sri Lanka",
        code: "LKA",
        withdrawals_total: 13.0,
        withdrawal_share: 24.5,
        precipitation: 1712.0,
        irrigated: (28.0, 31.0),
    },
];

/// Withdrawal indicators are surveyed every five years; the years between
/// carry the `..` placeholder, exactly as the real extract does.
fn five_yearly(base: f64, year: u16) -> String {
    if year >= 2002 && (year - 2002) % 5 == 0 {
        format!("{:.2}", base * (1.0 - 0.004 * f64::from(year.abs_diff(2017))))
    } else {
        GAP.to_string()
    }
}

/// Slow upward trend with a mild deterministic wobble, plus two gap years so
/// the trend panel's gap-filling has something to do.
fn irrigated(spec: &CountrySpec, year: u16) -> String {
    if year == 2000 || year == 2003 {
        return GAP.to_string();
    }
    let t = f64::from(year - FIRST_YEAR) / f64::from(LAST_YEAR - FIRST_YEAR);
    let trend = spec.irrigated.0 + (spec.irrigated.1 - spec.irrigated.0) * t;
    let wobble = (f64::from(year - FIRST_YEAR) * 0.9).sin() * 0.6;
    format!("{:.2}", trend + wobble)
}

fn cell_for(short: &str, spec: &CountrySpec, year: u16) -> String {
    match short {
        data::WITHDRAWALS_TOTAL => five_yearly(spec.withdrawals_total, year),
        data::WITHDRAWALS_PCT_INTERNAL => five_yearly(spec.withdrawal_share, year),
        data::PRECIPITATION_DEPTH => format!("{:.1}", spec.precipitation),
        data::IRRIGATED_LAND => irrigated(spec, year),
        _ => GAP.to_string(),
    }
}

fn main() {
    let path = report::INPUT_PATH;
    // Metadata rows are shorter than data rows, so the writer must not
    // enforce a uniform record length.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .expect("Failed to create sample dataset");

    writer
        .write_record(["Data Source", "World Development Indicators"])
        .expect("Failed to write metadata");
    writer
        .write_record(["Last Updated Date", "2024-03-28"])
        .expect("Failed to write metadata");
    writer.write_record([""]).expect("Failed to write metadata");
    writer.write_record([""]).expect("Failed to write metadata");

    let mut header = vec![
        "Country Name".to_string(),
        "Country Code".to_string(),
        "Indicator Name".to_string(),
        "Indicator Code".to_string(),
    ];
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|year| format!("{year} [YR{year}]")));
    writer.write_record(&header).expect("Failed to write header");

    let mut rows = 0usize;
    for spec in &COUNTRIES {
        for (&(verbose, short), code) in METRIC_LABELS.iter().zip(INDICATOR_CODES) {
            let mut record = vec![
                spec.name.to_string(),
                spec.code.to_string(),
                verbose.to_string(),
                code.to_string(),
            ];
            record.extend((FIRST_YEAR..=LAST_YEAR).map(|year| cell_for(short, spec, year)));
            writer.write_record(&record).expect("Failed to write indicator row");
            rows += 1;
        }
    }

    // One indicator outside the mapped set; the loader must drop it.
    let mut cereal = vec![
        "India".to_string(),
        "IND".to_string(),
        "Cereal yield (kg per hectare)".to_string(),
        "AG.YLD.CREL.KG".to_string(),
    ];
    cereal.extend(
        (FIRST_YEAR..=LAST_YEAR).map(|year| format!("{}", 2500 + 40 * i32::from(year - FIRST_YEAR))),
    );
    writer.write_record(&cereal).expect("Failed to write indicator row");
    rows += 1;

    writer.flush().expect("Failed to flush sample dataset");

    println!(
        "Wrote {rows} indicator rows across {} years to {path}",
        usize::from(LAST_YEAR - FIRST_YEAR) + 1
    );
}
