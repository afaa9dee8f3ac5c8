//! Transaction building helpers.

use coinpay_types::{AssetType, ObjectId, SuiAddress};
use serde::{Deserialize, Serialize};

use crate::coin_selector::SelectionPlan;
use crate::error::WalletError;

/// Spend every input coin; the executor sends the balance net of gas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayAllTransaction {
    pub input_coins: Vec<ObjectId>,
    pub recipient: SuiAddress,
    pub gas_budget: u64,
}

/// Send exactly `amount` of `asset_type`, drawn from `input_coins`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayExactTransaction {
    pub input_coins: Vec<ObjectId>,
    pub asset_type: AssetType,
    pub amount: u64,
    pub recipient: SuiAddress,
    pub gas_budget: u64,
}

/// A transfer ready for the remote signer/executor. Consumed on dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionPayload {
    PayAll(PayAllTransaction),
    PayExact(PayExactTransaction),
}

impl TransactionPayload {
    pub fn recipient(&self) -> &SuiAddress {
        match self {
            TransactionPayload::PayAll(tx) => &tx.recipient,
            TransactionPayload::PayExact(tx) => &tx.recipient,
        }
    }

    pub fn input_coins(&self) -> &[ObjectId] {
        match self {
            TransactionPayload::PayAll(tx) => &tx.input_coins,
            TransactionPayload::PayExact(tx) => &tx.input_coins,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TransactionPayload::PayAll(_) => "pay_all",
            TransactionPayload::PayExact(_) => "pay_exact",
        }
    }
}

/// Build the payload for a selection plan.
///
/// Fails with [`WalletError::InvalidRequest`] on a zero gas budget or a
/// malformed recipient, whatever the plan.
pub fn build_transfer_tx(
    plan: SelectionPlan,
    recipient: &str,
    gas_budget: u64,
) -> Result<TransactionPayload, WalletError> {
    if gas_budget == 0 {
        return Err(WalletError::InvalidRequest(
            "gas budget must be greater than zero".into(),
        ));
    }
    let recipient = SuiAddress::parse(recipient)
        .map_err(|e| WalletError::InvalidRequest(format!("recipient: {e}")))?;

    Ok(match plan {
        SelectionPlan::PayAll { input_coins } => TransactionPayload::PayAll(PayAllTransaction {
            input_coins,
            recipient,
            gas_budget,
        }),
        SelectionPlan::PayExact {
            input_coins,
            asset_type,
            amount,
        } => TransactionPayload::PayExact(PayExactTransaction {
            input_coins,
            asset_type,
            amount,
            recipient,
            gas_budget,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay_all_plan() -> SelectionPlan {
        SelectionPlan::PayAll {
            input_coins: vec![ObjectId::new("c1")],
        }
    }

    fn pay_exact_plan() -> SelectionPlan {
        SelectionPlan::PayExact {
            input_coins: vec![ObjectId::new("c1")],
            asset_type: AssetType::new("SUI"),
            amount: 40,
        }
    }

    #[test]
    fn pay_all_plan_builds_pay_all_payload() {
        let payload = build_transfer_tx(pay_all_plan(), "0xB2", 10).unwrap();
        assert_eq!(
            payload,
            TransactionPayload::PayAll(PayAllTransaction {
                input_coins: vec![ObjectId::new("c1")],
                recipient: SuiAddress::parse("0xB2").unwrap(),
                gas_budget: 10,
            })
        );
        assert_eq!(payload.kind(), "pay_all");
    }

    #[test]
    fn pay_exact_plan_builds_pay_exact_payload() {
        let payload = build_transfer_tx(pay_exact_plan(), "0xB2", 10).unwrap();
        assert_eq!(
            payload,
            TransactionPayload::PayExact(PayExactTransaction {
                input_coins: vec![ObjectId::new("c1")],
                asset_type: AssetType::new("SUI"),
                amount: 40,
                recipient: SuiAddress::parse("0xB2").unwrap(),
                gas_budget: 10,
            })
        );
    }

    #[test]
    fn zero_gas_budget_is_rejected_for_any_plan() {
        for plan in [pay_all_plan(), pay_exact_plan()] {
            let err = build_transfer_tx(plan, "0xB2", 0).unwrap_err();
            assert!(matches!(err, WalletError::InvalidRequest(_)));
        }
    }

    #[test]
    fn malformed_recipient_is_rejected() {
        let err = build_transfer_tx(pay_exact_plan(), "bob", 10).unwrap_err();
        assert!(matches!(err, WalletError::InvalidRequest(ref m) if m.contains("bob")));
    }

    #[test]
    fn payload_serializes_camel_case() {
        let TransactionPayload::PayExact(tx) = build_transfer_tx(pay_exact_plan(), "0xB2", 10).unwrap()
        else {
            panic!("expected pay-exact payload");
        };
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            serde_json::json!({
                "inputCoins": ["c1"],
                "assetType": "SUI",
                "amount": 40,
                "recipient": "0xB2",
                "gasBudget": 10,
            })
        );
    }
}
