//! Shared test fixtures
//!
//! Builds a minimal but well-formed PDF in memory, with one empty page
//! per requested size. Object offsets are tracked while assembling so
//! the xref table is exact.

use std::io::Write;

use tempfile::NamedTempFile;

/// Assemble a PDF with the given page sizes (width, height in points)
pub fn build_pdf(page_sizes: &[(f32, f32)]) -> Vec<u8> {
    assert!(!page_sizes.is_empty(), "a PDF needs at least one page");

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets: Vec<usize> = Vec::new();

    // Object 1: catalog
    offsets.push(out.len());
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    // Object 2: page tree
    let kids: Vec<String> = (0..page_sizes.len())
        .map(|i| format!("{} 0 R", i + 3))
        .collect();
    offsets.push(out.len());
    out.extend_from_slice(
        format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            page_sizes.len()
        )
        .as_bytes(),
    );

    // Objects 3..: one empty page per size
    for (i, (width, height)) in page_sizes.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(
            format!(
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << >> >>\nendobj\n",
                i + 3,
                width,
                height
            )
            .as_bytes(),
        );
    }

    // Cross-reference table; each entry is exactly 20 bytes
    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{:010} {:05} n \n", offset, 0).as_bytes());
    }

    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

/// Write a generated PDF to a temporary file
pub fn write_pdf(page_sizes: &[(f32, f32)]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .expect("create temp pdf");
    file.write_all(&build_pdf(page_sizes)).expect("write temp pdf");
    file.flush().expect("flush temp pdf");
    file
}

/// Write a file that is not a PDF at all, with a .pdf extension
pub fn write_non_pdf() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"this is plain text, not a PDF document\n")
        .expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
