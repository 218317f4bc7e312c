use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::EdiError;
use super::types::*;

/// Builder for purchase orders.
///
/// ```
/// use edi_orders::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let company = PartyBuilder::new("Bodegas Norte SL")
///     .operational_point("8400000000017")
///     .address(AddressBuilder::new("Calle Mayor 1", "Bilbao", "48001").invoice().build())
///     .build();
/// let supplier = PartyBuilder::new("Harinas del Sur SA")
///     .operational_point("8400000000024")
///     .allow_edi(true)
///     .build();
///
/// let order = PurchaseOrderBuilder::new(42, "PO-0042", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .company(company)
///     .supplier(supplier)
///     .add_line(
///         OrderLineBuilder::new(Product::new("HAR-01", "Harina"), dec!(10), "kg", dec!(1.20))
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// assert!(order.use_edi);
/// assert_eq!(order.total_amount, dec!(12.00));
/// ```
pub struct PurchaseOrderBuilder {
    id: u64,
    reference: String,
    purchase_date: NaiveDate,
    use_edi: Option<bool>,
    order_type: OrderType,
    message_function: MessageFunction,
    special_condition: Option<SpecialCondition>,
    comment: Option<String>,
    currency_code: String,
    company: Option<TradingParty>,
    supplier: Option<TradingParty>,
    invoice_address: Option<Address>,
    warehouse: Option<Warehouse>,
    lines: Vec<OrderLine>,
    total_amount: Option<Decimal>,
}

impl PurchaseOrderBuilder {
    pub fn new(id: u64, reference: impl Into<String>, purchase_date: NaiveDate) -> Self {
        Self {
            id,
            reference: reference.into(),
            purchase_date,
            use_edi: None,
            order_type: OrderType::default(),
            message_function: MessageFunction::default(),
            special_condition: None,
            comment: None,
            currency_code: "EUR".to_string(),
            company: None,
            supplier: None,
            invoice_address: None,
            warehouse: None,
            lines: Vec::new(),
            total_amount: None,
        }
    }

    /// Force the EDI flag. Defaults to whether the supplier allows EDI.
    pub fn use_edi(mut self, use_edi: bool) -> Self {
        self.use_edi = Some(use_edi);
        self
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn message_function(mut self, function: MessageFunction) -> Self {
        self.message_function = function;
        self
    }

    pub fn special_condition(mut self, condition: SpecialCondition) -> Self {
        self.special_condition = Some(condition);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn company(mut self, party: TradingParty) -> Self {
        self.company = Some(party);
        self
    }

    pub fn supplier(mut self, party: TradingParty) -> Self {
        self.supplier = Some(party);
        self
    }

    pub fn invoice_address(mut self, address: Address) -> Self {
        self.invoice_address = Some(address);
        self
    }

    pub fn warehouse(mut self, warehouse: Warehouse) -> Self {
        self.warehouse = Some(warehouse);
        self
    }

    pub fn add_line(mut self, line: OrderLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Override the computed order total.
    pub fn total_amount(mut self, amount: Decimal) -> Self {
        self.total_amount = Some(amount);
        self
    }

    /// Build the order, computing the total from the lines unless one was given.
    pub fn build(self) -> Result<PurchaseOrder, EdiError> {
        let company = self
            .company
            .ok_or_else(|| EdiError::Builder("company is required".into()))?;
        let supplier = self
            .supplier
            .ok_or_else(|| EdiError::Builder("supplier is required".into()))?;

        let use_edi = self
            .use_edi
            .unwrap_or_else(|| PurchaseOrder::suggested_use_edi(&supplier));
        let total_amount = match self.total_amount {
            Some(total) => total,
            None => calculate_total(&self.lines)?,
        };

        Ok(PurchaseOrder {
            id: self.id,
            reference: self.reference,
            purchase_date: self.purchase_date,
            use_edi,
            order_type: self.order_type,
            message_function: self.message_function,
            special_condition: self.special_condition,
            comment: self.comment,
            currency_code: self.currency_code,
            company,
            supplier,
            invoice_address: self.invoice_address,
            warehouse: self.warehouse,
            lines: self.lines,
            total_amount,
        })
    }
}

/// Order total: line amounts plus each line's taxes, rounded per tax to cents.
pub fn calculate_total(lines: &[OrderLine]) -> Result<Decimal, EdiError> {
    let mut total = Decimal::ZERO;
    for line in lines {
        total = checked_add(total, line.amount)?;
        for tax in &line.taxes {
            let amount = line.amount.checked_mul(tax.rate).ok_or_else(|| {
                EdiError::Arithmetic(format!(
                    "tax {} on {} overflows",
                    tax.name, line.amount
                ))
            })?;
            total = checked_add(total, amount.round_dp(2))?;
        }
    }
    Ok(total)
}

fn checked_add(total: Decimal, amount: Decimal) -> Result<Decimal, EdiError> {
    total
        .checked_add(amount)
        .ok_or_else(|| EdiError::Arithmetic(format!("order total overflows adding {amount}")))
}

/// Builder for trading parties.
pub struct PartyBuilder {
    name: String,
    edi_operational_point: Option<String>,
    vat_code: Option<String>,
    allow_edi: bool,
    addresses: Vec<Address>,
    contact_mechanisms: Vec<ContactMechanism>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edi_operational_point: None,
            vat_code: None,
            allow_edi: false,
            addresses: Vec::new(),
            contact_mechanisms: Vec::new(),
        }
    }

    pub fn operational_point(mut self, code: impl Into<String>) -> Self {
        self.edi_operational_point = Some(code.into());
        self
    }

    pub fn vat_code(mut self, code: impl Into<String>) -> Self {
        self.vat_code = Some(code.into());
        self
    }

    pub fn allow_edi(mut self, allow: bool) -> Self {
        self.allow_edi = allow;
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn contact(mut self, kind: ContactMechanismType, value: impl Into<String>) -> Self {
        self.contact_mechanisms.push(ContactMechanism {
            kind,
            value: value.into(),
        });
        self
    }

    pub fn build(self) -> TradingParty {
        TradingParty {
            name: self.name,
            edi_operational_point: self.edi_operational_point,
            vat_code: self.vat_code,
            allow_edi: self.allow_edi,
            addresses: self.addresses,
            contact_mechanisms: self.contact_mechanisms,
        }
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            address: Address {
                street: street.into(),
                city: city.into(),
                postal_code: postal_code.into(),
                ..Default::default()
            },
        }
    }

    /// Contact name at this address.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.address.name = Some(name.into());
        self
    }

    /// Flag as invoice address.
    pub fn invoice(mut self) -> Self {
        self.address.invoice = true;
        self
    }

    /// Flag as delivery address.
    pub fn delivery(mut self) -> Self {
        self.address.delivery = true;
        self
    }

    pub fn edi_ean(mut self, ean: impl Into<String>) -> Self {
        self.address.edi_ean = Some(ean.into());
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

/// Builder for warehouses.
pub struct WarehouseBuilder {
    name: String,
    address: Option<Address>,
    owner: Option<TradingParty>,
}

impl WarehouseBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            owner: None,
        }
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn owner(mut self, party: TradingParty) -> Self {
        self.owner = Some(party);
        self
    }

    pub fn build(self) -> Warehouse {
        Warehouse {
            name: self.name,
            address: self.address,
            owner: self.owner,
        }
    }
}

/// Builder for OrderLine.
pub struct OrderLineBuilder {
    product: Product,
    quantity: Option<Decimal>,
    unit: String,
    unit_price: Decimal,
    gross_unit_price: Option<Decimal>,
    discount: Option<Decimal>,
    delivery_date: Option<NaiveDate>,
    note: Option<String>,
    taxes: Vec<Tax>,
    amount: Option<Decimal>,
}

impl OrderLineBuilder {
    pub fn new(
        product: Product,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            product,
            quantity: Some(quantity),
            unit: unit.into(),
            unit_price,
            gross_unit_price: None,
            discount: None,
            delivery_date: None,
            note: None,
            taxes: Vec::new(),
            amount: None,
        }
    }

    /// Leave the quantity unset.
    pub fn without_quantity(mut self) -> Self {
        self.quantity = None;
        self
    }

    /// Price before discount. Defaults to the unit price.
    pub fn gross_unit_price(mut self, price: Decimal) -> Self {
        self.gross_unit_price = Some(price);
        self
    }

    /// Discount as a fraction (0.10 = 10 %).
    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn tax(mut self, tax: Tax) -> Self {
        self.taxes.push(tax);
        self
    }

    /// Override the computed line amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Build the line, computing `quantity × unit_price` unless an amount was given.
    pub fn build(self) -> Result<OrderLine, EdiError> {
        let amount = match self.amount {
            Some(amount) => amount,
            None => {
                let quantity = self.quantity.unwrap_or(Decimal::ZERO);
                quantity
                    .checked_mul(self.unit_price)
                    .ok_or_else(|| {
                        EdiError::Arithmetic(format!(
                            "line amount {quantity} x {} overflows",
                            self.unit_price
                        ))
                    })?
                    .round_dp(2)
            }
        };
        Ok(OrderLine {
            product: self.product,
            quantity: self.quantity,
            unit: self.unit,
            unit_price: self.unit_price,
            gross_unit_price: self.gross_unit_price.unwrap_or(self.unit_price),
            discount: self.discount,
            delivery_date: self.delivery_date,
            note: self.note,
            taxes: self.taxes,
            amount,
        })
    }
}
