pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod render;
pub mod vocab;

use error::BillscanError;
use extraction::PdfExtractor;
use model::Extraction;
use vocab::Vocabulary;

/// Main API entry point: parse one AWS billing PDF into an `Extraction`.
///
/// Pages are concatenated in page order and handed to the line parser.
/// Each call owns independent parser state; concurrent documents need no
/// synchronization.
pub fn extract_document(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    vocab: &Vocabulary,
) -> Result<Extraction, BillscanError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let lines: Vec<String> = pages.into_iter().flat_map(|p| p.lines).collect();

    parse_lines(&lines, vocab)
}

/// Parse an ordered sequence of statement lines into the hierarchy and its
/// flat records.
///
/// Empty input (nothing survives normalization) yields an empty
/// `Extraction` — that is not an error. Non-empty input in which no
/// billing structure is recognized yields `NoBillingData`, so callers can
/// report "could not extract billing data" rather than "empty file".
pub fn parse_lines(lines: &[String], vocab: &Vocabulary) -> Result<Extraction, BillscanError> {
    let cleaned = parsing::normalize::normalize_lines(lines.iter().map(String::as_str));
    if cleaned.is_empty() {
        return Ok(Extraction::default());
    }

    let parsed = parsing::parse_document(&cleaned, vocab);
    let records = render::flatten(&parsed.document);

    if records.is_empty() {
        return Err(BillscanError::NoBillingData);
    }

    Ok(Extraction {
        document: parsed.document,
        records,
        unmatched_lines: parsed.unmatched_lines,
    })
}
