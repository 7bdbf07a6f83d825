pub mod headers;
pub mod normalize;
pub mod usage;

use crate::model::{BillingDocument, RegionSection, ServiceSection, SubServiceGroup, UsageItem};
use crate::vocab::Vocabulary;
use headers::{match_region_header, match_service_header, match_sub_service_header};
use usage::match_usage_line;

/// Result of the accumulation pass: the hierarchy plus lines carrying
/// "USD" that no classifier accepted.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub document: BillingDocument,
    pub unmatched_lines: Vec<String>,
}

/// Walk normalized lines once, building the service/region/sub-service
/// hierarchy.
///
/// Per-line precedence, first match wins: service header, region header,
/// sub-service header, usage line, ignore — everything past the service
/// header needs a current service. Charges can precede any region header
/// ("Support" and "Tax" sections do this); those collect under a synthetic
/// unnamed region so their records carry an empty region name. No
/// line-level failure is ever fatal.
pub fn parse_document(lines: &[&str], vocab: &Vocabulary) -> ParseOutput {
    let mut document = BillingDocument::default();
    let mut unmatched_lines = Vec::new();

    // Indices into the tree under construction
    let mut cur_service: Option<usize> = None;
    let mut cur_region: Option<usize> = None;
    let mut cur_sub: Option<usize> = None;

    for &line in lines {
        if let Some(m) = match_service_header(line, vocab) {
            document.services.push(ServiceSection::new(m.name, m.total));
            cur_service = Some(document.services.len() - 1);
            cur_region = None;
            cur_sub = None;
            continue;
        }

        if let Some(si) = cur_service {
            if let Some(m) = match_region_header(line, vocab) {
                let service = &mut document.services[si];
                service.regions.push(RegionSection::new(m.name, m.total));
                cur_region = Some(service.regions.len() - 1);
                cur_sub = None;
                continue;
            }

            if let Some(m) = match_sub_service_header(line) {
                let ri = ensure_region(&mut document.services[si], &mut cur_region);
                let region = &mut document.services[si].regions[ri];
                region.sub_services.push(SubServiceGroup {
                    label: m.name,
                    total: m.total,
                    items: Vec::new(),
                });
                cur_sub = Some(region.sub_services.len() - 1);
                continue;
            }

            if let Some(u) = match_usage_line(line) {
                let item = UsageItem {
                    description: u.description,
                    quantity: u.quantity,
                    unit: u.unit,
                    amount: u.amount,
                };
                let ri = ensure_region(&mut document.services[si], &mut cur_region);
                let region = &mut document.services[si].regions[ri];
                match cur_sub {
                    Some(gi) => region.sub_services[gi].items.push(item),
                    None => region.items.push(item),
                }
                continue;
            }
        }

        // Ignored line. Ones that carry an amount are worth surfacing.
        if line.contains("USD") {
            unmatched_lines.push(line.to_string());
        }
    }

    ParseOutput {
        document,
        unmatched_lines,
    }
}

/// Return the current region's index, opening a synthetic unnamed region
/// when no region header has been seen yet for this service.
fn ensure_region(service: &mut ServiceSection, cur_region: &mut Option<usize>) -> usize {
    match *cur_region {
        Some(ri) => ri,
        None => {
            service.regions.push(RegionSection::new("", ""));
            let ri = service.regions.len() - 1;
            *cur_region = Some(ri);
            ri
        }
    }
}
