//! Tests for page rendering and region extraction

mod common;

use pdfsnip::coordinate::PageRect;
use pdfsnip::extractor::{default_output_name, RegionExtractor};
use pdfsnip::pdf::{PdfDocument, SnipError};

/// Allowed pixel slack for scale rounding at page edges
const TOLERANCE: i64 = 2;

fn assert_close(actual: u32, expected: u32) {
    let diff = (actual as i64 - expected as i64).abs();
    assert!(
        diff <= TOLERANCE,
        "expected ~{} pixels, got {}",
        expected,
        actual
    );
}

#[test]
fn render_dimensions_scale_linearly() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();

    let base = doc.render_page(0, 1.0).unwrap();
    let doubled = doc.render_page(0, 2.0).unwrap();

    assert_close(base.width(), 200);
    assert_close(base.height(), 100);
    assert_close(doubled.width(), base.width() * 2);
    assert_close(doubled.height(), base.height() * 2);
}

#[test]
fn render_rejects_out_of_range_page() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();

    let result = doc.render_page(5, 1.0);

    assert!(matches!(
        result,
        Err(SnipError::PageOutOfRange { index: 5, count: 1 })
    ));
}

#[test]
fn extraction_matches_manual_crop_of_full_render() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();
    let scale = 1.5;

    let extracted = extractor
        .extract_region(&doc, 0, PageRect::new(20.0, 10.0, 80.0, 50.0), scale)
        .unwrap();

    // Same pipeline, cropped by hand: content must be pixel-identical
    let full = doc.render_page(0, scale).unwrap();
    let manual = image::imageops::crop_imm(&full, 30, 15, 90, 60).to_image();

    assert_eq!(extracted.dimensions(), manual.dimensions());
    assert_eq!(extracted.as_raw(), manual.as_raw());
}

#[test]
fn export_scale_is_independent_of_display_scale() {
    let file = common::write_pdf(&[(612.0, 792.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();
    let rect = PageRect::new(10.0, 10.0, 110.0, 60.0);

    let at_one = extractor.extract_region(&doc, 0, rect, 1.0).unwrap();
    let at_two = extractor.extract_region(&doc, 0, rect, 2.0).unwrap();

    assert_close(at_one.width(), 100);
    assert_close(at_one.height(), 50);
    assert_close(at_two.width(), 200);
    assert_close(at_two.height(), 100);
}

#[test]
fn zero_area_region_is_rejected() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();

    let result = extractor.extract_region(&doc, 0, PageRect::new(50.0, 50.0, 50.0, 80.0), 2.0);

    assert!(matches!(result, Err(SnipError::InvalidRegion { .. })));
}

#[test]
fn reversed_corners_are_normalized_before_extraction() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();

    let forward = extractor
        .extract_region(&doc, 0, PageRect::new(20.0, 10.0, 80.0, 50.0), 1.0)
        .unwrap();
    let reversed = extractor
        .extract_region(&doc, 0, PageRect::new(80.0, 50.0, 20.0, 10.0), 1.0)
        .unwrap();

    assert_eq!(forward.dimensions(), reversed.dimensions());
    assert_eq!(forward.as_raw(), reversed.as_raw());
}

#[test]
fn off_page_region_is_clamped_to_page() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();

    let clamped = extractor
        .extract_region(&doc, 0, PageRect::new(150.0, 50.0, 400.0, 300.0), 1.0)
        .unwrap();

    assert_close(clamped.width(), 50);
    assert_close(clamped.height(), 50);
}

#[test]
fn region_entirely_outside_page_is_rejected() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();

    let result = extractor.extract_region(&doc, 0, PageRect::new(500.0, 500.0, 600.0, 600.0), 1.0);

    assert!(matches!(result, Err(SnipError::InvalidRegion { .. })));
}

#[test]
fn persist_writes_a_readable_png() {
    let file = common::write_pdf(&[(200.0, 100.0)]);
    let doc = PdfDocument::open(file.path()).unwrap();
    let extractor = RegionExtractor::new();

    let image = extractor
        .extract_region(&doc, 0, PageRect::new(0.0, 0.0, 100.0, 50.0), 1.0)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    extractor.persist(&image, &path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(reloaded.dimensions(), image.dimensions());
}

#[test]
fn default_output_name_is_timestamped_png() {
    let name = default_output_name();

    assert!(name.starts_with("selection_"));
    assert!(name.ends_with(".png"));
    // selection_YYYYMMDD_HHMMSS.png
    assert_eq!(name.len(), "selection_YYYYMMDD_HHMMSS.png".len());
}
