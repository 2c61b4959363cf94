//! Message hashes of the StarkEx perpetual protocol.
//!
//! Each message is a chain of [Pedersen hashes] over asset identifiers and
//! packed words. A packed word concatenates fixed-width fields, most
//! significant first, and is always below `2^251`.
//!
//! ## Usage
//!
//! ```
//! use stark_curve::{U256, messages::{Transfer, transfer_msg_hash}};
//!
//! let transfer = Transfer {
//!     asset_id: U256::from_be_hex("035596841893e0d17079c27b2d72db1694f26a1932a7429144b439ba0807d29c"),
//!     receiver_public_key: U256::from_be_hex("04e8f8d6d2dde51fdfc1717582318a437f1d81de4657a93d74c33c9793d12be3"),
//!     sender_position_id: 4,
//!     receiver_position_id: 3,
//!     nonce: 1,
//!     amount: 1_000_000,
//!     expiration_timestamp: 1_712_135_815,
//! };
//!
//! let msg_hash = transfer_msg_hash(&transfer)?;
//! # Ok::<(), stark_curve::Error>(())
//! ```
//!
//! [Pedersen hashes]: crate::pedersen

use crate::{Error, FieldElement, Result, U256, pedersen::pedersen_hash_elements};

/// Operation type of a limit order with fees.
pub const OP_LIMIT_ORDER_WITH_FEES: u64 = 3;

/// Operation type of a transfer.
pub const OP_TRANSFER: u64 = 4;

/// Operation type of a conditional transfer.
pub const OP_CONDITIONAL_TRANSFER: u64 = 5;

/// Operation type of a withdrawal to an address.
pub const OP_WITHDRAWAL_TO_ADDRESS: u64 = 7;

/// Padding appended to the second packed word of a limit order.
const LIMIT_ORDER_PADDING_BITS: usize = 17;

/// Padding appended to the second packed word of a transfer.
const TRANSFER_PADDING_BITS: usize = 81;

/// Limit order of a synthetic asset against collateral, with a fee cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LimitOrder {
    /// Synthetic asset identifier.
    pub asset_id_synthetic: U256,

    /// Collateral asset identifier.
    pub asset_id_collateral: U256,

    /// Fee asset identifier.
    pub asset_id_fee: U256,

    /// Whether the order buys the synthetic asset (and sells collateral).
    pub is_buying_synthetic: bool,

    /// Amount of the synthetic asset.
    pub amount_synthetic: u64,

    /// Amount of collateral.
    pub amount_collateral: u64,

    /// Maximum fee the order pays.
    pub max_amount_fee: u64,

    /// Order nonce.
    pub nonce: u32,

    /// Position placing the order.
    pub position_id: u64,

    /// Expiration, in hours since the Unix epoch.
    pub expiration_timestamp: u32,
}

/// Transfer of an asset between two positions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transfer {
    /// Transferred asset identifier.
    pub asset_id: U256,

    /// Public key owning the receiving position.
    pub receiver_public_key: U256,

    /// Sending position.
    pub sender_position_id: u64,

    /// Receiving position.
    pub receiver_position_id: u64,

    /// Transfer nonce.
    pub nonce: u32,

    /// Transferred amount.
    pub amount: u64,

    /// Expiration, in hours since the Unix epoch.
    pub expiration_timestamp: u32,
}

/// Hash of a limit order, as signed by the position owner.
///
/// Returns [`Error::FieldOverflow`] if an asset identifier is `≥ p`.
pub fn limit_order_msg_hash(order: &LimitOrder) -> Result<FieldElement> {
    let (asset_id_sell, asset_id_buy, amount_sell, amount_buy) = if order.is_buying_synthetic {
        (
            &order.asset_id_collateral,
            &order.asset_id_synthetic,
            order.amount_collateral,
            order.amount_synthetic,
        )
    } else {
        (
            &order.asset_id_synthetic,
            &order.asset_id_collateral,
            order.amount_synthetic,
            order.amount_collateral,
        )
    };

    let a = pedersen_hash_elements(&field_element(asset_id_sell)?, &field_element(asset_id_buy)?);
    let b = pedersen_hash_elements(&a, &field_element(&order.asset_id_fee)?);

    let w4 = PackedWord::default()
        .push(amount_sell, 64)
        .push(amount_buy, 64)
        .push(order.max_amount_fee, 64)
        .push(order.nonce.into(), 32)
        .finish()?;
    let c = pedersen_hash_elements(&b, &w4);

    let w5 = PackedWord::default()
        .push(OP_LIMIT_ORDER_WITH_FEES, 64)
        .push(order.position_id, 64)
        .push(order.position_id, 64)
        .push(order.position_id, 64)
        .push(order.expiration_timestamp.into(), 32)
        .pad(LIMIT_ORDER_PADDING_BITS)
        .finish()?;

    Ok(pedersen_hash_elements(&c, &w5))
}

/// Hash of a transfer, as signed by the sender.
///
/// Returns [`Error::FieldOverflow`] if the asset identifier or the receiver's
/// public key is `≥ p`.
pub fn transfer_msg_hash(transfer: &Transfer) -> Result<FieldElement> {
    let m0 = PackedWord::default()
        .push(transfer.sender_position_id, 64)
        .push(transfer.receiver_position_id, 64)
        .push(transfer.sender_position_id, 64)
        .push(transfer.nonce.into(), 32)
        .finish()?;

    let m1 = PackedWord::default()
        .push(OP_TRANSFER, 64)
        .push(transfer.amount, 64)
        .push(0, 64)
        .push(transfer.expiration_timestamp.into(), 32)
        .pad(TRANSFER_PADDING_BITS)
        .finish()?;

    let a = pedersen_hash_elements(&field_element(&transfer.asset_id)?, &FieldElement::ZERO);
    let b = pedersen_hash_elements(&a, &field_element(&transfer.receiver_public_key)?);
    let c = pedersen_hash_elements(&b, &m0);
    Ok(pedersen_hash_elements(&c, &m1))
}

fn field_element(w: &U256) -> Result<FieldElement> {
    Option::from(FieldElement::from_uint(w)).ok_or(Error::FieldOverflow)
}

/// Fixed-width fields concatenated into one integer, most significant first.
#[derive(Default)]
struct PackedWord(U256);

impl PackedWord {
    /// Appends `value` as a `bits`-wide field.
    fn push(self, value: u64, bits: usize) -> Self {
        Self(self.0.shl_vartime(bits).wrapping_add(&U256::from_u64(value)))
    }

    /// Appends `bits` zero bits.
    fn pad(self, bits: usize) -> Self {
        Self(self.0.shl_vartime(bits))
    }

    fn finish(self) -> Result<FieldElement> {
        field_element(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LimitOrder, PackedWord, Transfer, limit_order_msg_hash, transfer_msg_hash};
    use crate::{Error, StarkCurve, U256};

    fn buy_order() -> LimitOrder {
        LimitOrder {
            asset_id_synthetic: U256::from_u64(0xd78f244),
            asset_id_collateral: U256::from_u64(0xa1545ed8),
            asset_id_fee: U256::from_u64(0xa1545ed8),
            is_buying_synthetic: true,
            amount_synthetic: 1143395141,
            amount_collateral: 2485778700,
            max_amount_fee: 1328036591,
            nonce: 237283943,
            position_id: 711957234,
            expiration_timestamp: 1,
        }
    }

    fn transfer() -> Transfer {
        Transfer {
            asset_id: U256::from_be_hex(
                "035596841893e0d17079c27b2d72db1694f26a1932a7429144b439ba0807d29c",
            ),
            receiver_public_key: U256::from_be_hex(
                "04e8f8d6d2dde51fdfc1717582318a437f1d81de4657a93d74c33c9793d12be3",
            ),
            sender_position_id: 4,
            receiver_position_id: 3,
            nonce: 1,
            amount: 1000000,
            expiration_timestamp: 1712135815,
        }
    }

    #[test]
    fn limit_order_buy() {
        assert_eq!(
            limit_order_msg_hash(&buy_order()).unwrap().to_uint(),
            U256::from_be_hex("063375cebdc56aad66f9df01c375cbaf6552c237bdd4a22f9c8eeb0cb151f38d")
        );
    }

    #[test]
    fn limit_order_sell() {
        let order = LimitOrder {
            asset_id_synthetic: U256::from_u64(0xf5fc50c3),
            asset_id_collateral: U256::from_u64(0xc50a1245),
            asset_id_fee: U256::from_u64(0xc50a1245),
            is_buying_synthetic: false,
            amount_synthetic: 918775584,
            amount_collateral: 1779339390,
            max_amount_fee: 2423504933,
            nonce: 2908915741,
            position_id: 1643977314,
            expiration_timestamp: 1,
        };
        assert_eq!(
            limit_order_msg_hash(&order).unwrap().to_uint(),
            U256::from_be_hex("04bd1a1c31b8248c8368af2f0bc0cca455b1a003fa051f84af297cff2e2bc411")
        );
    }

    #[test]
    fn transfer_vector() {
        assert_eq!(
            transfer_msg_hash(&transfer()).unwrap().to_uint(),
            U256::from_be_hex("04f7f3014abc11ddcd5406932441b220640906921faaf566e728a6a75aa7ab06")
        );
    }

    #[test]
    fn rejects_overflowing_asset() {
        let order = LimitOrder {
            asset_id_fee: StarkCurve::MODULUS,
            ..buy_order()
        };
        assert_eq!(limit_order_msg_hash(&order), Err(Error::FieldOverflow));

        let transfer = Transfer {
            receiver_public_key: StarkCurve::MODULUS,
            ..transfer()
        };
        assert_eq!(transfer_msg_hash(&transfer), Err(Error::FieldOverflow));
    }

    #[test]
    fn packed_word_layout() {
        let word = PackedWord::default().push(1, 64).push(2, 32).pad(4).0;
        assert_eq!(word, U256::from_u64(((1 << 32) + 2) << 4));
    }
}
