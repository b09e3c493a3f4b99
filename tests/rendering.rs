use chrono::NaiveDate;
use plan_pdf::{fonts, render_plan_pdf_on};
use sha2::{Digest, Sha256};

const SAMPLE_SOURCE: &str = "\
## Rutina semanal
### Dia de fuerza
- Peso: 80kg
- Corre 5km
1. Haz sentadillas
2. Press banca
Texto libre de cierre.

| Dia | Ejercicio | Series |
|-----|-----------|--------|
| Lunes | Sentadilla | 4 |
| Martes | Press banca |
";

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).expect("valid date")
}

fn render_or_skip(title: &str, source: &str, test: &str) -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping {test}: bundled fonts missing. Set {} or copy the Roboto \
             files into assets/fonts.",
            fonts::FONTS_DIR_ENV
        );
        return None;
    }
    Some(render_plan_pdf_on(title, source, fixed_date()).expect("render succeeds"))
}

/// PDF fields that differ between otherwise identical renders (timestamps,
/// document identifiers, producer build info), paired with the byte that
/// terminates each of them.
const VOLATILE_FIELDS: &[(&[u8], u8)] = &[
    (b"/CreationDate(", b')'),
    (b"/ModDate(", b')'),
    (b"/Producer(", b')'),
    (b"/ID[", b']'),
];

const VOLATILE_XMP_TAGS: &[&str] = &[
    "xmp:CreateDate",
    "xmp:ModifyDate",
    "xmp:MetadataDate",
    "xmpMM:DocumentID",
    "xmpMM:InstanceID",
    "xmpMM:VersionID",
];

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|at| from + at)
}

fn zero_span(data: &mut [u8], start: usize, end: usize) {
    for byte in &mut data[start..end] {
        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
            *byte = b'0';
        }
    }
}

/// Overwrites volatile PDF metadata with zeros so byte comparisons only see
/// the rendered content.
fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    let mut data = bytes.to_vec();

    for (tag, terminator) in VOLATILE_FIELDS {
        let mut cursor = 0;
        while let Some(start) = find(&data, tag, cursor) {
            let value_start = start + tag.len();
            let value_end = find(&data, &[*terminator], value_start).unwrap_or(data.len());
            zero_span(&mut data, value_start, value_end);
            cursor = value_end;
        }
    }

    for tag in VOLATILE_XMP_TAGS {
        let open = format!("<{tag}>").into_bytes();
        let close = format!("</{tag}>").into_bytes();
        let mut cursor = 0;
        while let Some(start) = find(&data, &open, cursor) {
            let value_start = start + open.len();
            let Some(value_end) = find(&data, &close, value_start) else {
                break;
            };
            zero_span(&mut data, value_start, value_end);
            cursor = value_end + close.len();
        }
    }

    data
}

fn scrubbed_hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub_pdf(bytes)).into()
}

#[test]
fn sample_markup_renders_a_pdf() {
    let Some(bytes) = render_or_skip("Plan GymAI", SAMPLE_SOURCE, "sample_markup_renders_a_pdf")
    else {
        return;
    };
    assert!(bytes.starts_with(b"%PDF"), "output should be a PDF document");
    assert!(bytes.len() > 1024, "styled document should not be trivially small");
}

#[test]
fn empty_source_still_renders_banner_and_footer() {
    let Some(bytes) = render_or_skip("", "", "empty_source_still_renders_banner_and_footer")
    else {
        return;
    };
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!bytes.is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let test = "rendering_is_deterministic";
    let Some(bytes_a) = render_or_skip("Plan GymAI", SAMPLE_SOURCE, test) else {
        return;
    };
    let Some(bytes_b) = render_or_skip("Plan GymAI", SAMPLE_SOURCE, test) else {
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        scrubbed_hash(&bytes_a),
        scrubbed_hash(&bytes_b),
        "renders must be byte-identical after metadata scrubbing"
    );
}

#[test]
fn long_tables_continue_across_pages() {
    let mut source = String::from("## Registro\n| Semana | Ejercicio | Series |\n|---|---|---|\n");
    for week in 1..=80 {
        source.push_str(&format!("| {week} | Sentadilla | 4 |\n"));
    }

    let Some(bytes) = render_or_skip("Plan GymAI", &source, "long_tables_continue_across_pages")
    else {
        return;
    };
    // Count page objects, skipping the "/Type /Pages" tree root.
    let needle: &[u8] = b"/Type /Page";
    let mut pages = 0;
    let mut cursor = 0;
    while let Some(at) = find(&bytes, needle, cursor) {
        if bytes.get(at + needle.len()) != Some(&b's') {
            pages += 1;
        }
        cursor = at + needle.len();
    }
    assert!(pages > 1, "80 table rows should not fit on a single page");
}
