//! PDF merging primitive using lopdf
//!
//! Whole-document concatenation only: every page of every input, in the
//! given order, with no deduplication, reordering, or content
//! inspection.

use std::collections::BTreeMap;
use std::path::Path;
use lopdf::{Dictionary, Document, Object, ObjectId};
use crate::error::{Error, Result};

/// Merge the given PDF files, in order, into a single document at
/// `output_path`.
///
/// Based on the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
///
/// The output page sequence is the concatenation of each input's pages
/// in the order the paths are given. Inputs must exist and contain at
/// least one page each.
pub fn merge_documents(input_paths: &[impl AsRef<Path>], output_path: &Path) -> Result<()> {
    if input_paths.is_empty() {
        return Err(Error::InsufficientFiles);
    }

    for path in input_paths {
        if !path.as_ref().exists() {
            return Err(Error::FileNotFound(path.as_ref().to_path_buf()));
        }
    }

    let mut documents: Vec<Document> = Vec::new();
    for path in input_paths {
        let doc = Document::load(path.as_ref())?;

        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.as_ref().to_path_buf()));
        }

        documents.push(doc);
    }

    // Renumber object IDs document by document so nothing collides,
    // collecting pages in input order.
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        let pages = doc.get_pages();
        page_ids.extend(pages.into_iter().map(|(_, id)| id));

        objects.extend(doc.objects);
    }

    let mut merged_doc = Document::with_version("1.5");
    merged_doc.objects.extend(objects);

    // max_id must reflect the highest ID just added, otherwise
    // new_object_id() hands out colliding IDs.
    merged_doc.max_id = max_id - 1;

    let pages_id = merged_doc.new_object_id();

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = merged_doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged_doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged_doc.objects.insert(pages_id, Object::Dictionary(pages_object));

    merged_doc.trailer.set("Root", Object::Reference(catalog_id));

    // Every page now belongs to the new Pages node.
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(ref mut dict)) = merged_doc.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    merged_doc.compress();
    merged_doc.save(output_path)?;

    Ok(())
}
