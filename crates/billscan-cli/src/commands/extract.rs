use billscan_core::error::BillscanError;
use billscan_core::extraction::pdftotext::PdftotextExtractor;
use billscan_core::model::UsageRecord;
use billscan_core::render::csv::to_csv_string;
use std::path::PathBuf;

pub fn run(
    input_files: Vec<PathBuf>,
    output_format: &str,
    output_file: Option<PathBuf>,
    vocab_file: Option<PathBuf>,
) -> Result<(), BillscanError> {
    if input_files.is_empty() {
        return Err(BillscanError::Extraction("no input files given".into()));
    }

    let vocab = super::load_vocabulary(vocab_file)?;
    let extractor = PdftotextExtractor::new();

    // Aggregation across documents is plain concatenation of each
    // independent parse's record list.
    let mut records: Vec<UsageRecord> = Vec::new();
    let mut unmatched = 0usize;
    for path in &input_files {
        let pdf_bytes = std::fs::read(path)?;
        let extraction = billscan_core::extract_document(&pdf_bytes, &extractor, &vocab)?;
        unmatched += extraction.unmatched_lines.len();
        records.extend(extraction.records);
    }

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&records)?,
        _ => to_csv_string(&records)?,
    };

    match output_file {
        Some(path) => {
            std::fs::write(&path, output_str)?;
            eprintln!(
                "Extracted {} record(s) from {} file(s), written to {}",
                records.len(),
                input_files.len(),
                path.display()
            );
            if unmatched > 0 {
                eprintln!("  {} amount-bearing line(s) not classified", unmatched);
            }
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
