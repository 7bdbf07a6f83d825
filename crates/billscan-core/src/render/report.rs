use crate::model::{BillingDocument, ServiceSection, UsageItem};

/// Render the structured tab-delimited report: one `[Service]` block per
/// service, blank-line separated. Lossy by design — quantity and unit are
/// merged into one column, so the report does not round-trip through the
/// parser.
pub fn render_report(document: &BillingDocument) -> String {
    let mut blocks = Vec::new();
    for service in &document.services {
        blocks.push(render_service_block(service));
    }
    blocks.join("\n")
}

fn render_service_block(service: &ServiceSection) -> String {
    let mut lines = Vec::new();

    lines.push(format!("[{}]", service.name));
    lines.push("\t\t\tUsage\t\tAmount (USD)".to_string());
    lines.push(format!("Total\t\t\t\t\t{}", service.total));

    for region in &service.regions {
        // Synthetic unnamed regions (charges before any region header)
        // have no header line of their own.
        if !region.name.is_empty() {
            lines.push(header_line(&region.name, &region.total));
        }

        for group in &region.sub_services {
            lines.push(header_line(&group.label, &group.total));
            for item in &group.items {
                lines.push(item_line(item));
            }
        }

        for item in &region.items {
            lines.push(item_line(item));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn header_line(name: &str, total: &str) -> String {
    if total.is_empty() {
        name.to_string()
    } else {
        format!("{}\t\t\t\t\t{}", name, total)
    }
}

fn item_line(item: &UsageItem) -> String {
    if item.quantity.is_empty() {
        format!("{}\t\t\t{}", item.description, item.amount)
    } else {
        format!(
            "{}\t{} {}\t\t{}",
            item.description, item.quantity, item.unit, item.amount
        )
    }
}
