use crate::error::BillscanError;
use crate::model::UsageRecord;

/// Canonical flat-output column order. Matches the header row of the CSV
/// artifact.
pub const CSV_COLUMNS: [&str; 7] = [
    "Service",
    "Region",
    "Description",
    "Usage_Quantity",
    "Usage_Unit",
    "Amount",
    "Amount_Unit",
];

/// Serialize flat records to CSV, UTF-8 with a byte-order marker so
/// spreadsheet applications pick up the encoding of the downloaded file.
pub fn to_csv_string(records: &[UsageRecord]) -> Result<String, BillscanError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(CSV_COLUMNS)?;

    for record in records {
        let amount = record.amount.to_string();
        writer.write_record([
            record.service.as_str(),
            record.region.as_str(),
            record.description.as_str(),
            record.usage_quantity.as_str(),
            record.usage_unit.as_str(),
            amount.as_str(),
            record.amount_unit.as_str(),
        ])?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| BillscanError::Io(e.into_error()))?;

    let mut out = String::from("\u{feff}");
    out.push_str(&String::from_utf8_lossy(&bytes));
    Ok(out)
}
