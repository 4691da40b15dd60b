use std::io::Write;
use std::path::PathBuf;

use hydroglyph::data::{self, Observation, ObservationTable};
use hydroglyph::report;

fn write_dataset(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("extract.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    (dir, path)
}

#[test]
fn synthetic_extract_normalises_to_the_mapped_row() {
    let csv = "\
Data Source,World Development Indicators\n\
Last Updated Date,2024-03-28\n\
,\n\
,\n\
Country Name,Country Code,Indicator Name,Indicator Code,2000 [YR2000],2001 [YR2001],2002 [YR2002]\n\
India,IND,Average precipitation in depth (mm per year),AG.LND.PRCP.MM,1083,..,1090.5\n\
India,IND,Cereal yield (kg per hectare),AG.YLD.CREL.KG,2294,2350,2410\n";
    let (_dir, path) = write_dataset(csv);

    let table = data::load_table(&path).expect("load");
    assert_eq!(table.len(), 1);
    assert_eq!(table.years, vec!["2000", "2001", "2002"]);

    let row = &table.rows[0];
    assert_eq!(row.country, "India");
    assert_eq!(row.metric, data::PRECIPITATION_DEPTH);
    assert_eq!(row.values, vec![Some(1083.0), None, Some(1090.5)]);
}

fn observation(country: &str, metric: &str, values: Vec<Option<f64>>) -> Observation {
    Observation {
        country: country.to_string(),
        metric: metric.to_string(),
        values,
    }
}

/// Plausible values for all four metrics so every panel has something to draw.
fn sample_table() -> ObservationTable {
    let years: Vec<String> = (2000..=2020).map(|year: i32| year.to_string()).collect();
    let specs = [
        ("India", 647.5, 45.2, 1083.0, 33.0),
        ("Bangladesh", 35.9, 34.2, 2666.0, 55.0),
        ("Pakistan", 183.5, 363.7, 494.0, 71.0),
        ("Nepal", 9.5, 4.8, 1500.0, 27.0),
    ];

    let mut rows = Vec::new();
    for (country, total, share, rain, irrigated) in specs {
        let five_yearly = |base: f64| -> Vec<Option<f64>> {
            (2000..=2020)
                .map(|year| (year >= 2002 && (year - 2002) % 5 == 0).then_some(base))
                .collect()
        };
        rows.push(observation(country, data::WITHDRAWALS_TOTAL, five_yearly(total)));
        rows.push(observation(
            country,
            data::WITHDRAWALS_PCT_INTERNAL,
            five_yearly(share),
        ));
        rows.push(observation(
            country,
            data::PRECIPITATION_DEPTH,
            (2000..=2020).map(|_| Some(rain)).collect(),
        ));
        rows.push(observation(
            country,
            data::IRRIGATED_LAND,
            (2000..=2020)
                .map(|year| (year != 2000).then(|| irrigated + f64::from(year - 2000) * 0.4))
                .collect(),
        ));
    }
    ObservationTable::new(years, rows)
}

#[test]
fn report_renders_a_dpi_stamped_non_blank_png() {
    let table = sample_table();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("report.png");
    report::write_report(&table, &out).expect("render");

    let decoder = png::Decoder::new(std::fs::File::open(&out).expect("open"));
    let mut reader = decoder.read_info().expect("read info");
    let (width, height, dims) = {
        let info = reader.info();
        (info.width, info.height, info.pixel_dims)
    };
    assert_eq!((width, height), report::CANVAS_SIZE);
    let dims = dims.expect("pHYs chunk present");
    assert_eq!(dims.xppu, 11_811);
    assert_eq!(dims.yppu, 11_811);

    let mut frame = vec![0u8; reader.output_buffer_size()];
    reader.next_frame(&mut frame).expect("decode");

    // Corners stay canvas-coloured; the panels must paint something else.
    assert_eq!(&frame[0..3], &[255, 250, 240]);
    assert!(frame
        .chunks(3)
        .any(|px| !(px[0] == 255 && px[1] == 250 && px[2] == 240)));
}
