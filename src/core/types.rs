use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchase order as handed over by the hosting system at confirmation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Internal identifier, used to name the order file.
    pub id: u64,
    /// Order number (purchase reference).
    pub reference: String,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Whether an EDI order file is produced when the order is confirmed.
    pub use_edi: bool,
    /// Document type (EDIFACT 1001 subset).
    pub order_type: OrderType,
    /// Message function (EDIFACT 1225 subset).
    pub message_function: MessageFunction,
    /// Special conditions, codified.
    pub special_condition: Option<SpecialCondition>,
    /// Free-text comment.
    pub comment: Option<String>,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// The buying company's own party (customer side of the message).
    pub company: TradingParty,
    /// The supplier party.
    pub supplier: TradingParty,
    /// Supplier invoice address chosen on the order.
    pub invoice_address: Option<Address>,
    /// Receiving warehouse.
    pub warehouse: Option<Warehouse>,
    /// Order lines, in sequence.
    pub lines: Vec<OrderLine>,
    /// Total order amount, taxes included.
    pub total_amount: Decimal,
}

impl PurchaseOrder {
    /// EDI is switched on by default for suppliers that accept it.
    pub fn suggested_use_edi(supplier: &TradingParty) -> bool {
        supplier.allow_edi
    }
}

/// A trading partner: the company itself or the supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingParty {
    /// Display name.
    pub name: String,
    /// EDI operational point (trading-partner code in the EDI network).
    pub edi_operational_point: Option<String>,
    /// Tax / VAT code.
    pub vat_code: Option<String>,
    /// Whether this party accepts EDI orders.
    pub allow_edi: bool,
    /// Addresses, in stored order.
    pub addresses: Vec<Address>,
    /// Contact mechanisms, in stored order.
    pub contact_mechanisms: Vec<ContactMechanism>,
}

impl TradingParty {
    /// The operational point, if set and not blank.
    pub fn operational_point(&self) -> Option<&str> {
        self.edi_operational_point
            .as_deref()
            .filter(|op| !op.trim().is_empty())
    }
}

/// Postal address of a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    /// Contact name attached to the address.
    pub name: Option<String>,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    /// Usable as invoice address.
    pub invoice: bool,
    /// Usable as delivery address.
    pub delivery: bool,
    /// EAN location code identifying the warehouse behind this address.
    pub edi_ean: Option<String>,
}

impl Address {
    /// The EDI EAN code, if set and not blank.
    pub fn ean(&self) -> Option<&str> {
        self.edi_ean.as_deref().filter(|ean| !ean.trim().is_empty())
    }

    /// Human-readable label used in error messages.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let locality = [self.postal_code.as_str(), self.city.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        [self.street.as_str(), locality.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Receiving warehouse of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: String,
    /// Delivery address of the warehouse.
    pub address: Option<Address>,
    /// Party owning the warehouse address. The company when unset.
    pub owner: Option<TradingParty>,
}

/// Phone number, e-mail and the like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMechanism {
    pub kind: ContactMechanismType,
    pub value: String,
}

/// Kind of a contact mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMechanismType {
    Phone,
    Mobile,
    Fax,
    Email,
    Website,
    Skype,
    Sip,
    Irc,
    Jabber,
    Other,
}

impl ContactMechanismType {
    /// Lowercase name as stored by the hosting system.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Mobile => "mobile",
            Self::Fax => "fax",
            Self::Email => "email",
            Self::Website => "website",
            Self::Skype => "skype",
            Self::Sip => "sip",
            Self::Irc => "irc",
            Self::Jabber => "jabber",
            Self::Other => "other",
        }
    }
}

/// One purchase order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: Product,
    /// Ordered quantity. A missing quantity is written as zero.
    pub quantity: Option<Decimal>,
    /// Unit of measure symbol (e.g. "kg", "u", "l").
    pub unit: String,
    /// Net unit price (after discount).
    pub unit_price: Decimal,
    /// Unit price before discount.
    pub gross_unit_price: Decimal,
    /// Discount as a fraction (0.10 = 10 %).
    pub discount: Option<Decimal>,
    pub delivery_date: Option<NaiveDate>,
    /// Free-text line note.
    pub note: Option<String>,
    pub taxes: Vec<Tax>,
    /// Line amount without taxes.
    pub amount: Decimal,
}

/// A tax applied to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    pub name: String,
    /// Rate as a fraction (0.21 = 21 %).
    pub rate: Decimal,
}

impl Tax {
    pub fn new(name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// Product reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Internal product code.
    pub code: String,
    pub name: String,
    /// EAN-13 barcode.
    pub ean13: Option<String>,
    /// The supplier's own article number.
    pub supplier_code: Option<String>,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ean13: None,
            supplier_code: None,
        }
    }

    pub fn ean13(mut self, ean: impl Into<String>) -> Self {
        self.ean13 = Some(ean.into());
        self
    }

    pub fn supplier_code(mut self, code: impl Into<String>) -> Self {
        self.supplier_code = Some(code.into());
        self
    }
}

/// EDIFACT 1001 — document name codes accepted by the order intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderType {
    /// 220 — Normal order.
    #[default]
    #[serde(rename = "220")]
    Normal,
    /// 226 — Partial order that cancels an open order.
    #[serde(rename = "226")]
    PartialCancelling,
}

impl OrderType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Normal => "220",
            Self::PartialCancelling => "226",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "220" => Some(Self::Normal),
            "226" => Some(Self::PartialCancelling),
            _ => None,
        }
    }
}

/// EDIFACT 1225 — message function codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageFunction {
    /// 9 — Original.
    #[default]
    #[serde(rename = "9")]
    Original,
    /// 1 — Cancellation.
    #[serde(rename = "1")]
    Cancellation,
    /// 4 — Modification.
    #[serde(rename = "4")]
    Modification,
    /// 5 — Replacement.
    #[serde(rename = "5")]
    Replacement,
    /// 31 — Copy.
    #[serde(rename = "31")]
    Copy,
}

impl MessageFunction {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Original => "9",
            Self::Cancellation => "1",
            Self::Modification => "4",
            Self::Replacement => "5",
            Self::Copy => "31",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "9" => Some(Self::Original),
            "1" => Some(Self::Cancellation),
            "4" => Some(Self::Modification),
            "5" => Some(Self::Replacement),
            "31" => Some(Self::Copy),
            _ => None,
        }
    }
}

/// EDIFACT 4183 — special condition codes (EAN extensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialCondition {
    /// 81E — Bill but not re-supply.
    #[serde(rename = "81E")]
    BillNotResupply,
    /// 82E — Send but not invoice.
    #[serde(rename = "82E")]
    SendNotInvoice,
    /// 83E — Deliver the entire order.
    #[serde(rename = "83E")]
    DeliverEntireOrder,
}

impl SpecialCondition {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BillNotResupply => "81E",
            Self::SendNotInvoice => "82E",
            Self::DeliverEntireOrder => "83E",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "81E" => Some(Self::BillNotResupply),
            "82E" => Some(Self::SendNotInvoice),
            "83E" => Some(Self::DeliverEntireOrder),
            _ => None,
        }
    }
}
