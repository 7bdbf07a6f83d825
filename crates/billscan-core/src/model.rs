use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A leaf usage line: a free-text description, an optional quantity/unit
/// pair, and the raw trailing amount string ("USD 12.00").
///
/// Amounts stay as raw strings inside the tree; they are parsed to
/// `Decimal` when flat records are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageItem {
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub amount: String,
}

/// A finer-grained charge category nested under a region, e.g.
/// "Amazon Elastic Container Service APN2-Fargate-GB-Hours".
///
/// The stated total from the sub-service header line is kept on the group
/// so the structured report can show it before the detail items; it is not
/// a usage item and never appears in the flat record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubServiceGroup {
    pub label: String,
    pub total: String,
    pub items: Vec<UsageItem>,
}

/// A billing region nested under a service. `total` may be empty: some
/// statements print the region name bare and report the amount later, or
/// never. `name` may also be empty: services like Support and Tax list
/// charges before any region header, and those collect under a synthetic
/// unnamed region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSection {
    pub name: String,
    pub total: String,
    pub sub_services: Vec<SubServiceGroup>,
    /// Usage items that appeared under the region with no sub-service active.
    pub items: Vec<UsageItem>,
}

impl RegionSection {
    pub fn new(name: impl Into<String>, total: impl Into<String>) -> Self {
        RegionSection {
            name: name.into(),
            total: total.into(),
            sub_services: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// A top-level service section and its regions, in statement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub name: String,
    pub total: String,
    pub regions: Vec<RegionSection>,
}

impl ServiceSection {
    pub fn new(name: impl Into<String>, total: impl Into<String>) -> Self {
        ServiceSection {
            name: name.into(),
            total: total.into(),
            regions: Vec::new(),
        }
    }
}

/// The ownership tree built by one forward pass over the statement lines.
/// Write-once: built during parsing, consumed by the emitter afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingDocument {
    pub services: Vec<ServiceSection>,
}

/// One row of the flat tabular output, fully qualified with its
/// service/region ancestry. This is also the canonical CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub service: String,
    pub region: String,
    pub description: String,
    pub usage_quantity: String,
    pub usage_unit: String,
    pub amount: Decimal,
    pub amount_unit: String,
}

/// Result of parsing one statement: the hierarchy, the flattened records,
/// and any lines carrying "USD" that no classifier accepted (soft
/// anomalies, surfaced for diagnostics but never fatal).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    pub document: BillingDocument,
    pub records: Vec<UsageRecord>,
    pub unmatched_lines: Vec<String>,
}
