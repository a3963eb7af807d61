// Two implementations: a real OCR path when the `ocr` feature is enabled,
// and a stub that reports unavailability when it's not. The stub keeps the
// crate building on machines without system pdfium/leptonica/tesseract; the
// extractor treats either failure the same way (the page stays empty).

#[cfg(feature = "ocr")]
mod real {
    use image::ImageFormat;
    use leptess::LepTess;
    use pdfium_render::prelude::*;
    use std::io::Cursor;

    /// Scanned statements render legibly at 200 DPI; PDF points are 1/72".
    const OCR_DPI: f32 = 200.0;

    pub fn ocr_page(bytes: &[u8], page_index: usize) -> Result<String, String> {
        let pdfium = Pdfium::new(
            Pdfium::bind_to_system_library().map_err(|e| format!("pdfium unavailable: {}", e))?,
        );
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| format!("pdfium load: {}", e))?;
        let page = document
            .pages()
            .get(page_index as u16)
            .map_err(|e| format!("page {}: {}", page_index + 1, e))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(OCR_DPI / 72.0);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| format!("render: {}", e))?;

        let mut png = Vec::new();
        bitmap
            .as_image()
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| format!("png encode: {}", e))?;

        let mut tess = LepTess::new(None, "eng").map_err(|e| format!("tesseract init: {}", e))?;
        tess.set_image_from_mem(&png)
            .map_err(|e| format!("tesseract image: {}", e))?;
        tess.get_utf8_text()
            .map_err(|e| format!("tesseract run: {}", e))
    }
}

#[cfg(not(feature = "ocr"))]
mod stub {
    pub fn ocr_page(_bytes: &[u8], _page_index: usize) -> Result<String, String> {
        Err("OCR support not compiled in (enable the `ocr` feature)".to_string())
    }
}

#[cfg(feature = "ocr")]
pub use real::ocr_page;
#[cfg(not(feature = "ocr"))]
pub use stub::ocr_page;
