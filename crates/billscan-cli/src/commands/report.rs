use billscan_core::error::BillscanError;
use billscan_core::extraction::pdftotext::PdftotextExtractor;
use billscan_core::render::report::render_report;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    vocab_file: Option<PathBuf>,
) -> Result<(), BillscanError> {
    let vocab = super::load_vocabulary(vocab_file)?;
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();

    let extraction = billscan_core::extract_document(&pdf_bytes, &extractor, &vocab)?;
    let report = render_report(&extraction.document);

    match output_file {
        Some(path) => {
            std::fs::write(&path, report)?;
            eprintln!(
                "Report for {} service(s) written to {}",
                extraction.document.services.len(),
                path.display()
            );
            if !extraction.unmatched_lines.is_empty() {
                eprintln!(
                    "  {} amount-bearing line(s) not classified",
                    extraction.unmatched_lines.len()
                );
            }
        }
        None => {
            println!("{report}");
        }
    }

    Ok(())
}
