//! Shared test fixtures
//!
//! Fixture PDFs are built programmatically with lopdf. Every page
//! carries a unique text marker so page order survives the round trip
//! and can be asserted on.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Marker text placed on one page of a fixture document.
pub fn page_marker(tag: &str, page: usize) -> String {
    format!("{} page {}", tag, page)
}

/// Build a valid PDF with `page_count` pages, each carrying its marker.
pub fn build_pdf(tag: &str, page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in 1..=page_count {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(page_marker(tag, page))]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize fixture PDF");
    buf
}

/// Decode a merged document and return each page's content stream as
/// text, in page order.
pub fn page_texts(pdf_bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(pdf_bytes).expect("load merged PDF");
    let mut texts = Vec::new();
    for (_num, page_id) in doc.get_pages() {
        let content = doc.get_page_content(page_id).expect("read page content");
        texts.push(String::from_utf8_lossy(&content).into_owned());
    }
    texts
}
