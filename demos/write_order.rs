use chrono::NaiveDate;
use edi_orders::core::*;
use edi_orders::orders::{self, EdiConfigBuilder};
use rust_decimal_macros::dec;

fn main() {
    let company = PartyBuilder::new("Bodegas Norte SL")
        .operational_point("8400000000017")
        .vat_code("B48123456")
        .address(
            AddressBuilder::new("Calle Mayor 1", "Bilbao", "48001")
                .name("Administración")
                .invoice()
                .build(),
        )
        .address(
            AddressBuilder::new("Polígono Ugaldeguren 3", "Zamudio", "48170")
                .delivery()
                .edi_ean("8400000000031")
                .build(),
        )
        .contact(ContactMechanismType::Phone, "944000000")
        .build();

    let supplier = PartyBuilder::new("Harinas del Sur SA")
        .operational_point("8400000000024")
        .vat_code("A41987654")
        .allow_edi(true)
        .address(AddressBuilder::new("Av. Andalucía 9", "Sevilla", "41001").build())
        .build();

    let order = PurchaseOrderBuilder::new(
        2024,
        "PO-2024-0001",
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .special_condition(SpecialCondition::DeliverEntireOrder)
    .comment("Entrega en muelle 3, horario de mañana")
    .company(company)
    .supplier(supplier)
    .add_line(
        OrderLineBuilder::new(
            Product::new("HAR-01", "Harina de trigo T55")
                .ean13("8412345678905")
                .supplier_code("HS-T55-25"),
            dec!(40),
            "kg",
            dec!(0.81),
        )
        .gross_unit_price(dec!(0.90))
        .discount(dec!(0.10))
        .delivery_date(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap())
        .tax(Tax::new("IVA 4%", dec!(0.04)))
        .build()
        .expect("line amount should fit"),
    )
    .add_line(
        OrderLineBuilder::new(Product::new("SAL-01", "Sal marina"), dec!(12), "u", dec!(1.35))
            .tax(Tax::new("IVA 10%", dec!(0.10)))
            .build()
            .expect("line amount should fit"),
    )
    .build()
    .expect("order should be valid");

    println!("Order:    {} ({})", order.reference, order.id);
    println!("Supplier: {}", order.supplier.name);
    println!("EDI:      {}", order.use_edi);
    println!("Total:    {} {}", order.total_amount, order.currency_code);
    println!("---");

    match orders::render(&order) {
        Ok(text) => print!("{}", text.replace("\r\n", "\n")),
        Err(e) => println!("Render failed: {}", e),
    }

    // Files land in the system temp directory unless a directory is configured.
    let config = EdiConfigBuilder::new()
        .output_dir(std::env::temp_dir())
        .build();
    match orders::proceed(std::slice::from_ref(&order), &config) {
        Ok(paths) => {
            for path in paths {
                println!("---\nWritten: {}", path.display());
            }
        }
        Err(e) => println!("Write failed: {}", e),
    }
}
