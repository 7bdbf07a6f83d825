/// Marker for the boilerplate separator printed before the per-service
/// hierarchy on AWS statements. Lines carrying it are dropped.
const BOILERPLATE_MARKER: &str = "Charges by service";

/// Normalize raw extracted lines: trim each line, drop lines that become
/// empty, drop boilerplate separator lines. Order is preserved; empty
/// input yields empty output.
pub fn normalize_lines<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(BOILERPLATE_MARKER))
        .collect()
}
