// tests/integration_tests.rs
use bts_rs::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_header() -> BtsHeader {
    BtsHeader {
        id: 7,
        z_count: 15,
        y_count: 13,
        tower_count: 4,
        dt_count: 600,
        dz: 5.0,
        dy: 5.0,
        dt: 0.05,
        mean_speed: 12.0,
        hub_height: 90.0,
        bottom_height: 55.0,
        slope: [0.001, 0.002, 0.003],
        intercept: [-1.5, 0.0, 2.5],
        text: "TurbSim full-field time series".to_string(),
    }
}

fn write_fixture(header: &BtsHeader, body: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let mut bytes = Vec::new();
    write_header(&mut bytes, header).unwrap();
    bytes.extend_from_slice(body);
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_open_and_decode_file() {
    let header = sample_header();
    let body = vec![0u8; 256];
    let file = write_fixture(&header, &body);

    let reader = BtsReader::open(file.path()).unwrap();
    assert_eq!(reader.header(), &header);
    assert_eq!(reader.body_offset(), header.total_span() as u64);
}

#[test]
fn test_into_inner_hands_back_the_body() {
    use std::io::Read;

    let header = sample_header();
    let body: Vec<u8> = (0..=255).collect();
    let file = write_fixture(&header, &body);

    let reader = BtsReader::open(file.path()).unwrap();
    let mut source = reader.into_inner();
    let mut rest = Vec::new();
    source.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, body);
}

#[test]
fn test_open_truncated_file() {
    let header = sample_header();
    let file = write_fixture(&header, &[]);

    let full = std::fs::read(file.path()).unwrap();
    let mut short = NamedTempFile::new().unwrap();
    short.write_all(&full[..full.len() - 10]).unwrap();
    short.flush().unwrap();

    assert!(matches!(
        BtsReader::open(short.path()),
        Err(BtsError::TruncatedInput)
    ));
}

#[test]
fn test_open_missing_file() {
    assert!(matches!(
        BtsReader::open("does_not_exist.bts"),
        Err(BtsError::Io(_))
    ));
}

#[test]
fn test_report_from_file() {
    let header = sample_header();
    let file = write_fixture(&header, &[]);

    let reader = BtsReader::open(file.path()).unwrap();
    let report = format_report(reader.header());
    assert!(report.starts_with("TurbSim full-field time series\n"));
    assert!(report.contains("file ID: 7"));
}

#[cfg(feature = "mmap")]
#[test]
fn test_open_mmap() {
    let header = sample_header();
    let body = vec![0u8; 64];
    let file = write_fixture(&header, &body);

    let reader = BtsReader::open_mmap(file.path()).unwrap();
    assert_eq!(reader.header(), &header);
    assert_eq!(reader.body_offset(), header.total_span() as u64);
}
