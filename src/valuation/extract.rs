// extract.rs
use scraper::{Html, Selector};

/// The two figures pulled out of a valuation listing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValuationFields {
    pub rent_zestimate: Option<i64>,
    pub finished_sq_ft: Option<i64>,
}

/// Extracts the rent estimate and finished square footage from a listing
/// body.
///
/// A structured parse of the markup runs first. The historical landmark
/// scan is kept as a fallback so documents too mangled for the tag model
/// still yield whatever the old scan can find. Either way a missing or
/// non-numeric value comes back as `None`, never as an error.
pub fn extract_fields(body: &str) -> ValuationFields {
    let document = Html::parse_document(body);

    let rent_zestimate =
        select_integer(&document, "rentzestimate amount").or_else(|| scan_rent_zestimate(body));
    let finished_sq_ft =
        select_integer(&document, "finishedsqft").or_else(|| scan_finished_sq_ft(body));

    ValuationFields {
        rent_zestimate,
        finished_sq_ft,
    }
}

// Tag names are lowercased by the HTML parser, so the selectors are all
// lowercase even though the wire document mixes case.
fn select_integer(document: &Html, selector: &str) -> Option<i64> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let text = element.text().next()?;
    text.trim().parse::<i64>().ok()
}

/// Landmark scan for the rent figure: anchor on the literal `rentzestimate`
/// token, then `USD`, then take whatever sits between the next `>` and `<`.
fn scan_rent_zestimate(body: &str) -> Option<i64> {
    let from_token = &body[body.find("rentzestimate")?..];
    let from_currency = &from_token[from_token.find("USD")?..];
    scan_between_brackets(from_currency)
}

/// Same technique anchored on the square-footage tag, which keeps its wire
/// casing here because the scan runs against the raw text.
fn scan_finished_sq_ft(body: &str) -> Option<i64> {
    let from_token = &body[body.find("<finishedSqFt>")?..];
    scan_between_brackets(from_token)
}

fn scan_between_brackets(text: &str) -> Option<i64> {
    let open = text.find('>')?;
    let rest = &text[open + 1..];
    let close = rest.find('<')?;
    rest[..close].trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<SearchResults:searchresults xmlns:SearchResults="http://www.zillow.com/static/xsd/SearchResults.xsd">
  <response><results><result>
    <zpid>48749425</zpid>
    <finishedSqFt>1350</finishedSqFt>
    <zestimate><amount currency="USD">215000</amount></zestimate>
    <rentzestimate><amount currency="USD">1650</amount></rentzestimate>
  </result></results></response>
</SearchResults:searchresults>"#;

    #[test]
    fn pulls_both_figures_from_a_listing() {
        let fields = extract_fields(LISTING);
        assert_eq!(fields.rent_zestimate, Some(1650));
        assert_eq!(fields.finished_sq_ft, Some(1350));
    }

    #[test]
    fn quote_escaped_bodies_parse_the_same() {
        // The fetch layer escapes embedded quotes before handing the body
        // over; extraction has to cope with both shapes.
        let escaped = LISTING.replace('"', "\\\"");
        let fields = extract_fields(&escaped);
        assert_eq!(fields.rent_zestimate, Some(1650));
        assert_eq!(fields.finished_sq_ft, Some(1350));
    }

    #[test]
    fn rent_anchor_skips_the_plain_zestimate() {
        // The plain zestimate amount also carries a USD marker; the rent
        // figure must come from the rentzestimate element, not the first
        // USD in the document.
        let fields = extract_fields(LISTING);
        assert_ne!(fields.rent_zestimate, Some(215000));
    }

    #[test]
    fn missing_tokens_yield_none_not_errors() {
        let fields = extract_fields("<response>nothing useful here</response>");
        assert_eq!(fields.rent_zestimate, None);
        assert_eq!(fields.finished_sq_ft, None);

        let fields = extract_fields("");
        assert_eq!(fields, ValuationFields::default());
    }

    #[test]
    fn non_numeric_values_never_escape() {
        let body = r#"<result>
            <finishedSqFt>unknown</finishedSqFt>
            <rentzestimate><amount currency="USD">N/A</amount></rentzestimate>
        </result>"#;

        let fields = extract_fields(body);
        assert_eq!(fields.rent_zestimate, None);
        assert_eq!(fields.finished_sq_ft, None);
    }

    #[test]
    fn landmark_scan_rescues_tagless_bodies() {
        // No element structure the tag model can use, but the landmarks are
        // intact, so the fallback scan still finds the figures.
        let body = "noise rentzestimate noise USD\\\">900<!-- --> <finishedSqFt>810</x>";
        let fields = extract_fields(body);
        assert_eq!(fields.rent_zestimate, Some(900));
        assert_eq!(fields.finished_sq_ft, Some(810));
    }

    #[test]
    fn structured_parse_works_without_the_usd_landmark() {
        // The scan needs the USD marker; the tag model does not.
        let body = "<result><rentzestimate><amount>1800</amount></rentzestimate></result>";
        let fields = extract_fields(body);
        assert_eq!(fields.rent_zestimate, Some(1800));
    }
}
