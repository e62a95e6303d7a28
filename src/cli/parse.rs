use psicat_core::filter::Combine;
use psicat_core::format::OutputFormat;
use psicat_core::list::SortColumn;

/// A `facet=value` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue {
    pub facet: String,
    pub value: String,
}

/// A `facet=and|or` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCombine {
    pub facet: String,
    pub combine: Combine,
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse sort column from string
pub fn parse_sort_column(s: &str) -> std::result::Result<SortColumn, String> {
    s.parse::<SortColumn>().map_err(|e| e.to_string())
}

/// Parse `facet=value` (e.g. `source=PSA`, `order=Wu Jen`)
pub fn parse_facet_value(s: &str) -> std::result::Result<FacetValue, String> {
    let (facet, value) = split_assignment(s)?;
    Ok(FacetValue {
        facet: facet.to_string(),
        value: value.to_string(),
    })
}

/// Parse `facet=and|or`
pub fn parse_combine(s: &str) -> std::result::Result<FacetCombine, String> {
    let (facet, mode) = split_assignment(s)?;
    let combine = mode.parse::<Combine>().map_err(|e| e.to_string())?;
    Ok(FacetCombine {
        facet: facet.to_string(),
        combine,
    })
}

fn split_assignment(s: &str) -> std::result::Result<(&str, &str), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
            Ok((key.trim(), value.trim()))
        }
        _ => Err(format!("expected facet=value, got '{}'", s)),
    }
}
