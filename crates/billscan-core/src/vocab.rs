use serde::{Deserialize, Serialize};

/// The fixed service/region name tables the header classifiers match
/// against. One value, injected into the parser; never global state.
///
/// Matching is first-entry-wins prefix matching, so order is precedence.
/// The constructor sorts each table by descending length: a name that is a
/// textual prefix of another ("Elastic Compute" vs "Elastic Compute Cloud")
/// can then never shadow the longer one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub services: Vec<String>,
    pub regions: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, establishing prefix-safe precedence order.
    pub fn new(services: Vec<String>, regions: Vec<String>) -> Self {
        let mut vocab = Vocabulary { services, regions };
        vocab.services.sort_by_key(|s| std::cmp::Reverse(s.len()));
        vocab.regions.sort_by_key(|r| std::cmp::Reverse(r.len()));
        vocab
    }

    /// The builtin AWS display-name tables.
    pub fn builtin() -> Self {
        Vocabulary::new(
            SERVICE_NAMES.iter().map(|s| s.to_string()).collect(),
            REGION_NAMES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::builtin()
    }
}

/// AWS service display names as they appear on billing statements.
const SERVICE_NAMES: &[&str] = &[
    "Elastic Container Service",
    "Simple Storage Service",
    "Elastic Compute Cloud",
    "Relational Database Service",
    "Glue",
    "DynamoDB",
    "Virtual Private Cloud",
    "Data Transfer",
    "Athena",
    "Lambda",
    "Elastic Load Balancing",
    "Kinesis",
    "CloudWatch",
    "EC2 Container Registry",
    "Key Management Service",
    "Elastic File System",
    "S3 Glacier Deep Archive",
    "Secrets Manager",
    "Route 53",
    "Cost Explorer",
    "Simple Email Service",
    "Simple Queue Service",
    "Certificate Manager",
    "Simple Notification Service",
    "CloudFront",
    "Savings Plans",
    "Tax",
    "Support",
];

/// Region display labels, including the pseudo-regions "Any" and "Global".
const REGION_NAMES: &[&str] = &[
    "Asia Pacific (Seoul)",
    "Asia Pacific (Tokyo)",
    "Asia Pacific (Singapore)",
    "Asia Pacific (Mumbai)",
    "Asia Pacific (Hong Kong)",
    "Asia Pacific (Osaka)",
    "Asia Pacific (Sydney)",
    "Asia Pacific (Jakarta)",
    "US East (N. Virginia)",
    "US East (Ohio)",
    "US West (Oregon)",
    "US West (N. California)",
    "EU (Ireland)",
    "EU (Frankfurt)",
    "EU (London)",
    "EU (Paris)",
    "EU (Stockholm)",
    "EU (Milan)",
    "South America (Sao Paulo)",
    "Canada (Central)",
    "Middle East (Bahrain)",
    "Africa (Cape Town)",
    "Any",
    "Global",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_non_empty() {
        let v = Vocabulary::builtin();
        assert!(v.services.contains(&"Lambda".to_string()));
        assert!(v.regions.contains(&"Global".to_string()));
    }

    #[test]
    fn test_longer_names_sort_first() {
        let v = Vocabulary::new(
            vec!["Compute".into(), "Compute Cloud".into()],
            vec!["EU".into(), "EU (West)".into()],
        );
        assert_eq!(v.services[0], "Compute Cloud");
        assert_eq!(v.regions[0], "EU (West)");
    }
}
