use crate::vocab::Vocabulary;

/// Literal prefixes that mark a sub-service header line.
const SUB_SERVICE_PREFIXES: &[&str] = &["Amazon ", "AWS ", "EBS ", "Bandwidth "];

/// Substring that marks load-balancer sub-service lines regardless of prefix.
const ELB_MARKER: &str = "Elastic Load Balancing -";

/// A recognized header line: the matched name/label and the stated total
/// ("USD ..." to end of line, trimmed; may be empty for region headers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub name: String,
    pub total: String,
}

/// Test a line against the service vocabulary.
///
/// A service header starts with a known service name and carries "USD"
/// somewhere after it. First vocabulary entry wins, so vocabulary order is
/// precedence (see `Vocabulary::new`). Case-sensitive.
pub fn match_service_header(line: &str, vocab: &Vocabulary) -> Option<HeaderMatch> {
    for service in &vocab.services {
        if let Some(rest) = line.strip_prefix(service.as_str()) {
            if let Some(pos) = rest.rfind("USD") {
                return Some(HeaderMatch {
                    name: service.clone(),
                    total: rest[pos..].trim().to_string(),
                });
            }
        }
    }
    None
}

/// Test a line against the region vocabulary.
///
/// Unlike service headers, a bare region name with no amount is accepted:
/// some statements print the region total on a later line, or never. The
/// total is then empty.
pub fn match_region_header(line: &str, vocab: &Vocabulary) -> Option<HeaderMatch> {
    for region in &vocab.regions {
        if let Some(rest) = line.strip_prefix(region.as_str()) {
            let total = match rest.rfind("USD") {
                Some(pos) => rest[pos..].trim().to_string(),
                None => String::new(),
            };
            return Some(HeaderMatch {
                name: region.clone(),
                total,
            });
        }
    }
    None
}

/// Test a line for a sub-service header: a known literal prefix (or the
/// load-balancer marker anywhere in the line) plus a trailing amount.
///
/// The split uses the *last* "USD" in the line; sub-service labels can
/// legitimately contain the letters, the amount always trails.
pub fn match_sub_service_header(line: &str) -> Option<HeaderMatch> {
    let qualifies = SUB_SERVICE_PREFIXES
        .iter()
        .any(|p| line.starts_with(p))
        || line.contains(ELB_MARKER);
    if !qualifies {
        return None;
    }

    let pos = line.rfind("USD")?;
    Some(HeaderMatch {
        name: line[..pos].trim().to_string(),
        total: line[pos..].trim().to_string(),
    })
}
