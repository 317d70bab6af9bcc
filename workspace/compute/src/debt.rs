use model::Debt;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::trace;

use crate::error::{ComputeError, Result};

/// Amortization view of a debt, derived from the denormalized fields the
/// store actually holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtSummary {
    pub current_balance: Decimal,
    pub amount_paid: Decimal,
    pub total_installments: u32,
    pub remaining_installments: u32,
}

/// Balance at or under this value classifies a debt as settled; the margin
/// absorbs floating rounding residue from divided installments.
pub fn settlement_epsilon() -> Decimal {
    Decimal::new(1, 1) // 0.1 currency units
}

/// Whether a balance counts as fully paid off.
pub fn is_settled(balance: Decimal) -> bool {
    balance <= settlement_epsilon()
}

/// Derives balance, amount paid, and remaining installment count.
///
/// When `total_installments` is absent it is derived as
/// `ceil(total_amount / minimum_payment)` — a partial final installment
/// still counts as one whole installment. All outputs clamp to
/// non-negative; negative inputs and a paid count exceeding the plan are
/// validation errors, never silent negative balances.
pub fn amortize(
    total_amount: Decimal,
    minimum_payment: Decimal,
    installments_paid: u32,
    total_installments: Option<u32>,
) -> Result<DebtSummary> {
    if total_amount < Decimal::ZERO {
        return Err(ComputeError::NegativeAmount { field: "total_amount", value: total_amount });
    }
    if minimum_payment < Decimal::ZERO {
        return Err(ComputeError::NegativeAmount {
            field: "minimum_payment",
            value: minimum_payment,
        });
    }

    let total_installments = match total_installments {
        Some(n) => n,
        None if total_amount > Decimal::ZERO && minimum_payment > Decimal::ZERO => {
            let derived = (total_amount / minimum_payment).ceil();
            derived.to_u32().ok_or(ComputeError::ImplausiblePlan(derived))?
        }
        None => 0,
    };

    if total_installments > 0 && installments_paid > total_installments {
        return Err(ComputeError::InstallmentsExceedPlan {
            paid: installments_paid,
            total: total_installments,
        });
    }

    let amount_paid = minimum_payment * Decimal::from(installments_paid);
    let current_balance = (total_amount - amount_paid).max(Decimal::ZERO);
    let remaining_installments = total_installments.saturating_sub(installments_paid);

    trace!(
        %total_amount,
        %amount_paid,
        %current_balance,
        total_installments,
        remaining_installments,
        "amortized debt"
    );
    Ok(DebtSummary { current_balance, amount_paid, total_installments, remaining_installments })
}

/// Summary for a stored debt record.
pub fn summarize_debt(debt: &Debt) -> Result<DebtSummary> {
    amortize(
        debt.total_amount,
        debt.minimum_payment,
        debt.installments_paid,
        debt.total_installments,
    )
}

/// Orders debts for display: active debts by next payment date, settled
/// debts last.
pub fn order_for_display(debts: &mut [Debt]) {
    debts.sort_by_key(|debt| (is_settled(debt.current_balance), debt.next_payment_date));
}
