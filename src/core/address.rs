//! Address selection by role.
//!
//! A party's addresses are scanned in stored order and the first one
//! flagged for the requested role wins. When none is flagged the first
//! address is used whatever its flags, so an order may be sent with an
//! address of the wrong role. This matches what trading partners already
//! receive and is kept as is.

use super::error::EdiError;
use super::types::{Address, PurchaseOrder, TradingParty, Warehouse};

/// The role an address plays in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRole {
    Invoice,
    Delivery,
}

impl AddressRole {
    /// Whether `address` is flagged for this role.
    pub fn matches(&self, address: &Address) -> bool {
        match self {
            Self::Invoice => address.invoice,
            Self::Delivery => address.delivery,
        }
    }
}

/// First item matching `predicate`, else the first item, else `None`.
pub fn select_or_first<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| predicate(item)).or_else(|| items.first())
}

/// Pick the address of a party for `role`, falling back to the first address.
pub fn select_address(addresses: &[Address], role: AddressRole) -> Option<&Address> {
    select_or_first(addresses, |a| role.matches(a))
}

/// Where the goods go: the address and the party that owns it.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryPoint<'a> {
    pub party: &'a TradingParty,
    pub address: &'a Address,
}

fn party_address(party: &TradingParty, role: AddressRole) -> Result<&Address, EdiError> {
    select_address(&party.addresses, role).ok_or_else(|| EdiError::MissingAddress {
        party: party.name.clone(),
    })
}

impl PurchaseOrder {
    /// Invoice address of the buying company.
    pub fn company_invoice_address(&self) -> Result<&Address, EdiError> {
        party_address(&self.company, AddressRole::Invoice)
    }

    /// Invoice address of the supplier: the one chosen on the order, else
    /// the supplier's invoice address.
    pub fn supplier_invoice_address(&self) -> Result<&Address, EdiError> {
        match &self.invoice_address {
            Some(address) => Ok(address),
            None => party_address(&self.supplier, AddressRole::Invoice),
        }
    }

    /// Delivery point of the order.
    ///
    /// The warehouse address wins when the order has one; its owner (or the
    /// company) is the delivery party. Otherwise the company's delivery
    /// address is used.
    pub fn delivery_point(&self) -> Result<DeliveryPoint<'_>, EdiError> {
        if let Some(Warehouse {
            address: Some(address),
            owner,
            ..
        }) = &self.warehouse
        {
            return Ok(DeliveryPoint {
                party: owner.as_ref().unwrap_or(&self.company),
                address,
            });
        }
        Ok(DeliveryPoint {
            party: &self.company,
            address: party_address(&self.company, AddressRole::Delivery)?,
        })
    }
}
