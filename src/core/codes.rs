//! Code lists mapping hosting-system reference data to EDI codes.
//!
//! Only the codes the supplier's order intake understands are listed.
//! Anything else maps to `None` and is left out of the message.

use super::types::ContactMechanismType;

/// Map a unit-of-measure symbol to its UN/ECE Rec 20 code.
pub fn edi_unit_code(symbol: &str) -> Option<&'static str> {
    UNIT_CODES
        .binary_search_by(|(s, _)| (*s).cmp(symbol))
        .ok()
        .map(|i| UNIT_CODES[i].1)
}

/// Map a contact mechanism type to its EANCOM communication qualifier.
pub fn edi_contact_code(kind: ContactMechanismType) -> Option<&'static str> {
    match kind {
        ContactMechanismType::Phone | ContactMechanismType::Mobile => Some("TE"),
        ContactMechanismType::Fax => Some("FX"),
        ContactMechanismType::Email => Some("EM"),
        _ => None,
    }
}

/// Unit symbol to Rec 20 code. Sorted by symbol for binary search.
static UNIT_CODES: &[(&str, &str)] = &[
    ("kg", "KGM"), // Kilogram
    ("l", "LTR"),  // Litre
    ("u", "PCE"),  // Piece
];
