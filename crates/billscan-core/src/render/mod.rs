pub mod csv;
pub mod report;

use crate::model::{BillingDocument, UsageItem, UsageRecord};
use crate::parsing::usage::parse_amount;

/// Flatten the hierarchy depth-first into one record per usage item,
/// carrying the enclosing service/region names forward.
///
/// Sub-service stated totals are report-only pseudo entries and do not
/// appear here; only detail items are emitted.
pub fn flatten(document: &BillingDocument) -> Vec<UsageRecord> {
    let mut records = Vec::new();

    for service in &document.services {
        for region in &service.regions {
            for group in &region.sub_services {
                for item in &group.items {
                    records.push(to_record(&service.name, &region.name, item));
                }
            }
            for item in &region.items {
                records.push(to_record(&service.name, &region.name, item));
            }
        }
    }

    records
}

fn to_record(service: &str, region: &str, item: &UsageItem) -> UsageRecord {
    UsageRecord {
        service: service.to_string(),
        region: region.to_string(),
        description: item.description.clone(),
        usage_quantity: item.quantity.clone(),
        usage_unit: item.unit.clone(),
        amount: parse_amount(&item.amount),
        amount_unit: "USD".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RegionSection, ServiceSection, SubServiceGroup};
    use rust_decimal_macros::dec;

    fn item(description: &str, quantity: &str, unit: &str, amount: &str) -> UsageItem {
        UsageItem {
            description: description.into(),
            quantity: quantity.into(),
            unit: unit.into(),
            amount: amount.into(),
        }
    }

    fn sample_document() -> BillingDocument {
        let mut region = RegionSection::new("Asia Pacific (Seoul)", "USD 12.00");
        region.sub_services.push(SubServiceGroup {
            label: "Amazon Lambda Requests".into(),
            total: "USD 12.00".into(),
            items: vec![item(
                "$0.0000002 per request",
                "60,000,000",
                "Requests",
                "USD 12.00",
            )],
        });
        region.items.push(item("Late fee adjustment", "", "", "USD 1.50"));

        let mut service = ServiceSection::new("Lambda", "USD 13.50");
        service.regions.push(region);

        BillingDocument {
            services: vec![service],
        }
    }

    #[test]
    fn test_flatten_order_and_fields() {
        let records = flatten(&sample_document());
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.service, "Lambda");
        assert_eq!(first.region, "Asia Pacific (Seoul)");
        assert_eq!(first.description, "$0.0000002 per request");
        assert_eq!(first.usage_quantity, "60,000,000");
        assert_eq!(first.usage_unit, "Requests");
        assert_eq!(first.amount, dec!(12.00));
        assert_eq!(first.amount_unit, "USD");

        // Region-direct items follow sub-service items.
        assert_eq!(records[1].description, "Late fee adjustment");
        assert_eq!(records[1].amount, dec!(1.50));
    }

    #[test]
    fn test_flatten_excludes_sub_service_totals() {
        let records = flatten(&sample_document());
        assert!(records
            .iter()
            .all(|r| r.description != "Amazon Lambda Requests"));
    }

    #[test]
    fn test_flatten_empty_document() {
        assert!(flatten(&BillingDocument::default()).is_empty());
    }
}
