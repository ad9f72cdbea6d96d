//! Request Withdrawal Use Case
//!
//! Validates the payout request and reserves the funds. The balance is
//! debited the moment the request is filed; the member sees the amount
//! leave immediately and only gets it back through an admin rejection.

use std::sync::Arc;

use kernel::coins::Coins;
use kernel::id::WithdrawalId;

use accounts::CurrentUser;

use crate::application::config::WalletConfig;
use crate::domain::entity::withdrawal_request::WithdrawalRequest;
use crate::domain::repository::WithdrawalRepository;
use crate::domain::value_object::{account_details::AccountDetails, payment_method::PaymentMethod};
use crate::error::{WalletError, WalletResult};

/// Request withdrawal input
pub struct RequestWithdrawalInput {
    /// Requested amount in coins (JSON number from the client)
    pub amount_coins: f64,
    /// Payout channel code ("easypaisa", "jazzcash", "binance")
    pub method: String,
    /// Payout destination (phone number, pay ID)
    pub account_details: String,
}

/// Request withdrawal output
#[derive(Debug)]
pub struct RequestWithdrawalOutput {
    /// Identifier of the filed request
    pub withdrawal_id: WithdrawalId,
    /// Balance after the reservation
    pub new_balance: Coins,
}

/// Request withdrawal use case
pub struct RequestWithdrawalUseCase<W>
where
    W: WithdrawalRepository,
{
    withdrawal_repo: Arc<W>,
    config: Arc<WalletConfig>,
}

impl<W> RequestWithdrawalUseCase<W>
where
    W: WithdrawalRepository,
{
    pub fn new(withdrawal_repo: Arc<W>, config: Arc<WalletConfig>) -> Self {
        Self {
            withdrawal_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        current: &CurrentUser,
        input: RequestWithdrawalInput,
    ) -> WalletResult<RequestWithdrawalOutput> {
        if !current.can_transact() {
            return Err(WalletError::AccountBlocked);
        }

        let amount = Coins::from_coins_f64(input.amount_coins)
            .map_err(|e| WalletError::InvalidDetails(e.message().to_string()))?;

        if amount.milli() < self.config.min_withdrawal.milli() {
            return Err(WalletError::BelowMinimum {
                minimum: self.config.min_withdrawal_coins(),
            });
        }

        let method = PaymentMethod::from_code(&input.method)
            .ok_or_else(|| WalletError::InvalidDetails("Unknown payment method".to_string()))?;

        let details = AccountDetails::new(&input.account_details)
            .map_err(|e| WalletError::InvalidDetails(e.to_string()))?;

        let request = WithdrawalRequest::new(current.user_id, amount, method, details);
        let new_balance = self.withdrawal_repo.create_request(&request).await?;

        tracing::info!(
            withdrawal_id = %request.withdrawal_id,
            public_id = %current.public_id,
            amount = %amount,
            method = %method,
            "Withdrawal requested, funds reserved"
        );

        Ok(RequestWithdrawalOutput {
            withdrawal_id: request.withdrawal_id,
            new_balance,
        })
    }
}
