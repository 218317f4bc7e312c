//! ORDERS D.96A segment generation.

use rust_decimal::Decimal;

use super::format::{
    DATE_FORMAT, field, format_amount, format_percent, format_quantity, strip_newlines,
    transliterate, truncate,
};
use crate::core::{
    Address, EdiError, OrderLine, PurchaseOrder, TradingParty, edi_contact_code, edi_unit_code,
};

/// Message header: EANCOM ORDERS, directory D.96A, subset version EAN008.
pub const HEADER: &str = "ORDERS_D_96A_UN_EAN008";

/// Segment separator of the order file.
pub const SEGMENT_SEPARATOR: &str = "\r\n";

/// Render the full order file: segments joined by CRLF, CRLF-terminated,
/// transliterated to ASCII.
pub fn render(order: &PurchaseOrder) -> Result<String, EdiError> {
    let segments = segments(order)?;
    let mut out = segments.join(SEGMENT_SEPARATOR);
    out.push_str(SEGMENT_SEPARATOR);
    Ok(transliterate(&out))
}

/// Build the segments of an order, in message order.
///
/// Fails before producing anything when a party lacks its operational point
/// or the delivery address lacks its warehouse EAN.
pub fn segments(order: &PurchaseOrder) -> Result<Vec<String>, EdiError> {
    let customer = &order.company;
    let supplier = &order.supplier;
    let customer_op = operational_point(customer)?;
    let supplier_op = operational_point(supplier)?;

    let invoice_address = order.company_invoice_address()?;
    let supplier_address = order.supplier_invoice_address()?;
    let delivery = order.delivery_point()?;
    let delivery_ean = delivery
        .address
        .ean()
        .ok_or_else(|| EdiError::MissingWarehouseEan {
            address: delivery.address.display_name(),
        })?;

    let mut w = SegmentWriter::default();
    let currency = order.currency_code.as_str();

    w.push(HEADER.to_string());
    w.push(format!(
        "ORD|{}|{}|{}",
        field(&order.reference, 17),
        order.order_type.code(),
        order.message_function.code(),
    ));
    w.push(format!("DTM|{}", order.purchase_date.format(DATE_FORMAT)));

    if let Some(condition) = order.special_condition {
        w.push(format!("ALI|{}", condition.code()));
    }
    if let Some(comment) = non_empty(&order.comment) {
        w.push(format!("FTX|AAI||{}", field(comment, 280)));
    }

    // Parties
    w.push(format!(
        "NADMS|{customer_op}|{}",
        party_fields(customer, invoice_address)
    ));
    w.push(format!("NADMR|{supplier_op}"));
    w.push(format!(
        "NADSU|{supplier_op}|{}",
        party_fields(supplier, supplier_address)
    ));
    w.push(format!(
        "NADBY|{customer_op}||||{}",
        party_fields(customer, invoice_address)
    ));
    if let Some(name) = non_empty(&invoice_address.name) {
        w.push(format!("CTABY|OC|{}", field(name, 35)));
    }

    w.push(format!(
        "NADDP|{delivery_ean}||{}|{}",
        field(&delivery.party.name, 70),
        address_fields(delivery.address),
    ));
    if let Some(name) = non_empty(&delivery.address.name) {
        w.push(format!("CTADP|OC|{}", field(name, 35)));
    }
    for mechanism in &delivery.party.contact_mechanisms {
        match edi_contact_code(mechanism.kind) {
            Some(code) => w.push(format!("COMDP|{code}|{}", field(&mechanism.value, 35))),
            None => tracing::trace!(
                order_id = order.id,
                kind = mechanism.kind.as_str(),
                "skipping contact mechanism without EDI code"
            ),
        }
    }

    w.push(format!(
        "NADIV|{customer_op}||{}",
        party_fields(customer, invoice_address)
    ));
    w.push(format!("CUX|{currency}"));

    for (index, line) in order.lines.iter().enumerate() {
        write_line(&mut w, order, line, index + 1)?;
    }

    w.push(format!(
        "MOARES|{}",
        truncate(&order.total_amount.to_string(), 18)
    ));

    tracing::debug!(
        order_id = order.id,
        segments = w.segments.len(),
        lines = order.lines.len(),
        "rendered EDI order"
    );
    Ok(w.segments)
}

fn write_line(
    w: &mut SegmentWriter,
    order: &PurchaseOrder,
    line: &OrderLine,
    index: usize,
) -> Result<(), EdiError> {
    let product = &line.product;
    let unit_code = edi_unit_code(&line.unit).unwrap_or_else(|| {
        tracing::trace!(
            order_id = order.id,
            unit = %line.unit,
            "unit symbol has no EDI code"
        );
        ""
    });

    w.push(format!(
        "LIN|{}|EN|{index}",
        product.ean13.as_deref().unwrap_or("")
    ));
    w.push(format!("PIALIN|IN|{}", field(&product.code, 35)));
    if let Some(code) = non_empty(&product.supplier_code) {
        w.push(format!("PIALIN|SA|{}", field(code, 35)));
    }
    w.push(format!("IMDLIN|F|||{}", field(&product.name, 70)));
    w.push(format!(
        "QTYLIN|21|{}|{unit_code}",
        format_quantity(line.quantity)
    ));
    if let Some(date) = line.delivery_date {
        w.push(format!("DTMLIN||||{}||", date.format(DATE_FORMAT)));
    }
    w.push(format!("MOALIN|{}", format_amount(line.amount, 18)));
    if let Some(note) = non_empty(&line.note) {
        w.push(format!("FTXLIN|{}|AAI", field(note, 350)));
    }
    w.push(format!("PRILIN|AAA|{}", format_amount(line.unit_price, 18)));
    w.push(format!(
        "PRILIN|AAB|{}",
        format_amount(line.gross_unit_price, 18)
    ));
    if let Some(tax) = line.taxes.first() {
        w.push(format!("TAXLIN|VAT|{}", format_percent(tax.rate)?));
    }
    if let Some(discount) = line.discount.filter(|d| !d.is_zero()) {
        let percent = format_percent(discount)?;
        let value = discount_value(line)?.to_string();
        w.push(format!(
            "ALCLIN|A|1|TD|{}|{}",
            truncate(&percent, 8),
            truncate(&value, 18)
        ));
    }
    Ok(())
}

/// Per-unit discount: gross minus net price, without trailing zeros.
fn discount_value(line: &OrderLine) -> Result<Decimal, EdiError> {
    line.gross_unit_price
        .checked_sub(line.unit_price)
        .map(|value| value.normalize())
        .ok_or_else(|| {
            EdiError::Arithmetic(format!(
                "discount {} - {} overflows",
                line.gross_unit_price, line.unit_price
            ))
        })
}

fn operational_point(party: &TradingParty) -> Result<&str, EdiError> {
    party
        .operational_point()
        .ok_or_else(|| EdiError::MissingOperationalPoint {
            party: party.name.clone(),
        })
}

/// `name|street|city|postal|vat` of NADMS, NADSU, NADBY and NADIV.
fn party_fields(party: &TradingParty, address: &Address) -> String {
    format!(
        "{}|{}|{}",
        field(&party.name, 70),
        address_fields(address),
        field(party.vat_code.as_deref().unwrap_or(""), 10),
    )
}

/// `street|city|postal`.
fn address_fields(address: &Address) -> String {
    format!(
        "{}|{}|{}",
        field(&address.street, 70),
        field(&address.city, 70),
        field(&address.postal_code, 10),
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Collects segments, dropping line breaks embedded in field values.
#[derive(Default)]
struct SegmentWriter {
    segments: Vec<String>,
}

impl SegmentWriter {
    fn push(&mut self, segment: String) {
        self.segments.push(strip_newlines(&segment));
    }
}
