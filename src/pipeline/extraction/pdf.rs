use super::ExtractionError;

/// Primary strategy: the pdf-extract crate. Handles digital PDFs with
/// embedded text layers.
pub fn extract_with_pdf_extract(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))
}

/// Secondary strategy: walk the content streams with lopdf. Catches some
/// documents pdf-extract renders empty.
pub fn extract_with_lopdf(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = lopdf::Document::load_mem(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&page_numbers)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_pdf {
    /// Generate a valid single-page PDF containing `text`, for extraction
    /// tests.
    pub fn make_test_pdf(text: &str) -> Vec<u8> {
        use lopdf::dictionary;
        use lopdf::{Document, Object, Stream};

        let mut doc = Document::with_version("1.4");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let resources = dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        };

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        });

        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(page_id) {
            dict.set("Parent", pages_id);
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
