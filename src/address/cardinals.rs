// src/address/cardinals.rs

/// The eight tokens counted when deciding which cardinal branch applies.
/// The single letters carry surrounding spaces so "N" the initial in a name
/// does not count; the full words match anywhere, including inside compounds
/// like NORTHEAST (which therefore counts twice).
const CARDINAL_TOKENS: [&str; 8] = [
    " N ", " S ", " E ", " W ", "NORTH", "SOUTH", "EAST", "WEST",
];

/// With more than one direction word in the address, only the first word of
/// an adjacent pair gets shortened. A direction word with no direction word
/// next to it is left alone in this branch.
const JUNCTION_REWRITES: [(&str, &str); 16] = [
    ("NORTH EAST", "N EAST"),
    ("SOUTH EAST", "S EAST"),
    ("NORTH WEST", "N WEST"),
    ("SOUTH WEST", "S WEST"),
    ("EAST NORTH", "E NORTH"),
    ("EAST SOUTH", "E SOUTH"),
    ("WEST NORTH", "W NORTH"),
    ("WEST SOUTH", "W SOUTH"),
    // Odd pairings that still show up in entered addresses
    ("NORTH NORTH", "N NORTH"),
    ("NORTH SOUTH", "N SOUTH"),
    ("SOUTH NORTH", "S NORTH"),
    ("SOUTH SOUTH", "S SOUTH"),
    ("EAST EAST", "E EAST"),
    ("EAST WEST", "E WEST"),
    ("WEST WEST", "W WEST"),
    ("WEST EAST", "W EAST"),
];

/// Single-direction folding. The bare words run before the compounds, so a
/// compound like NORTHEAST never survives long enough to hit its own rule.
/// That ordering is deliberate: it matches how the ledger keys were built,
/// and the ledger is the source of truth here.
const BARE_CARDINAL_REWRITES: [(&str, &str); 8] = [
    ("EAST", "E"),
    ("WEST", "W"),
    ("NORTH", "N"),
    ("SOUTH", "S"),
    ("NORTHEAST", "NE"),
    ("SOUTHEAST", "SE"),
    ("NORTHWEST", "NW"),
    ("SOUTHWEST", "SW"),
];

const SUFFIX_REWRITES: [(&str, &str); 9] = [
    ("STREET", "ST"),
    ("AVENUE", "AVE"),
    ("BUILDING", "BLDG"),
    ("APARTMENT", "APT"),
    ("FLOOR", "FL"),
    ("BOULEVARD", "BLVD"),
    ("NUMBER", "#"),
    ("UPPER", "UPPR"),
    ("LOWER", "LOWR"),
];

/// Cooks a raw street address into the token form the utility ledger keys
/// on: uppercase, abbreviation periods stripped, runs of spaces collapsed,
/// direction words folded, street suffixes abbreviated.
///
/// Pure and total; the worst case is a partially rewritten string that just
/// fails to match anything. Ordinal words are NOT folded here; that only
/// happens as the resolver's second lookup attempt (see
/// [`super::fold_ordinals`]).
pub fn normalize(raw: &str) -> String {
    let address = raw.to_uppercase().replace('.', "");

    // Collapse repeated spaces and trim in one pass.
    let address = address.split_whitespace().collect::<Vec<_>>().join(" ");

    let address = fold_cardinals(address);
    apply_rewrites(address, &SUFFIX_REWRITES)
}

fn fold_cardinals(address: String) -> String {
    let cardinal_count = CARDINAL_TOKENS
        .iter()
        .filter(|token| address.contains(**token))
        .count();

    if cardinal_count > 1 {
        // Multi-direction addresses only abbreviate where two direction
        // words touch; anything standing alone keeps its full spelling.
        apply_rewrites(address, &JUNCTION_REWRITES)
    } else {
        apply_rewrites(address, &BARE_CARDINAL_REWRITES)
    }
}

fn apply_rewrites(mut address: String, rewrites: &[(&str, &str)]) -> String {
    for (pattern, replacement) in rewrites {
        address = address.replace(pattern, replacement);
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooks_periods_case_and_spacing() {
        assert_eq!(normalize("123 N. Monroe   St. "), "123 N MONROE ST");
    }

    #[test]
    fn folds_a_single_cardinal_globally() {
        assert_eq!(normalize("300 West Boulevard"), "300 W BLVD");
        assert_eq!(normalize("501 east sprague avenue"), "501 E SPRAGUE AVE");
    }

    #[test]
    fn multiple_cardinals_only_abbreviate_at_the_junction() {
        // NORTH and EAST are adjacent, WEST stands alone: only the first
        // word of the adjacent pair gets shortened.
        assert_eq!(
            normalize("100 North East 5th Ave West"),
            "100 N EAST 5TH AVE WEST"
        );
    }

    #[test]
    fn mirrored_and_degenerate_pairings_fold_too() {
        assert_eq!(normalize("10 East North Court South"), "10 E NORTH COURT SOUTH");
        assert_eq!(normalize("10 South South Hill West"), "10 S SOUTH HILL WEST");
    }

    #[test]
    fn compound_direction_words_survive_unfolded() {
        // NORTHEAST contains both NORTH and EAST, so the counter lands in
        // the junction branch, where no spaced pairing matches it. The
        // ledger keys were built the same way.
        assert_eq!(normalize("Northeast Monroe Street"), "NORTHEAST MONROE ST");
    }

    #[test]
    fn abbreviates_units_and_suffixes_in_both_branches() {
        assert_eq!(
            normalize("12 Hill Building Apartment Number 4 Lower Floor"),
            "12 HILL BLDG APT # 4 LOWR FL"
        );
    }

    #[test]
    fn empty_input_is_legal() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
