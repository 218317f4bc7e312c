#![no_main]

use chrono::NaiveDate;
use edi_orders::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

/// Decimal from 13 bytes: 96-bit mantissa, sign and scale.
fn decimal(bytes: &[u8]) -> Decimal {
    let mut buf = [0u8; 13];
    let n = bytes.len().min(13);
    buf[..n].copy_from_slice(&bytes[..n]);
    let word = |i: usize| u32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]);
    Decimal::from_parts(
        word(0),
        word(4),
        word(8),
        buf[12] & 0x80 != 0,
        u32::from(buf[12] & 0x7f) % 29,
    )
}

fuzz_target!(|data: &[u8]| {
    let (numbers, rest) = data.split_at(data.len().min(39));
    let quantity = decimal(numbers.get(..13).unwrap_or_default());
    let price = decimal(numbers.get(13..26).unwrap_or_default());
    let gross = decimal(numbers.get(26..).unwrap_or_default());

    let text = String::from_utf8_lossy(rest);
    let mut parts = text.splitn(4, '\u{0}');
    let name = parts.next().unwrap_or_default();
    let street = parts.next().unwrap_or_default();
    let comment = parts.next().unwrap_or_default();
    let note = parts.next().unwrap_or_default();

    let company = PartyBuilder::new(name)
        .operational_point("8400000000017")
        .address(
            AddressBuilder::new(street, name, street)
                .name(comment)
                .delivery()
                .edi_ean("8400000000031")
                .build(),
        )
        .build();
    let supplier = PartyBuilder::new(street)
        .operational_point("8400000000024")
        .address(AddressBuilder::new(note, note, note).build())
        .build();

    let Some(date) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return;
    };
    let Ok(line) = OrderLineBuilder::new(Product::new(note, name), quantity, street, price)
        .gross_unit_price(gross)
        .discount(Decimal::new(data.len() as i64, 2))
        .note(note)
        .build()
    else {
        return;
    };
    let Ok(order) = PurchaseOrderBuilder::new(data.len() as u64, comment, date)
        .comment(comment)
        .company(company)
        .supplier(supplier)
        .add_line(line)
        .build()
    else {
        return;
    };

    // Rendering must not panic, and whatever comes out is ASCII.
    if let Ok(rendered) = edi_orders::orders::render(&order) {
        assert!(rendered.is_ascii());
    }
});
