use async_trait::async_trait;
use rust_decimal::Decimal;

use walletwise_core::bank::{Bank, BankAccountPort};
use walletwise_core::Result;

use crate::client::ApiClient;
use crate::dto::{BalanceChangeRequest, CurrencyRequest, WireBank};

/// `BankAccountPort` over the `/banks` endpoints.
///
/// Every mutation returns the full snapshot computed by the backend.
pub struct BankApi {
    client: ApiClient,
}

impl BankApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn change_balance(&self, path: &str, amount: Decimal, description: &str) -> Result<Bank> {
        let request = BalanceChangeRequest {
            amount,
            description,
        };
        let bank: WireBank = self.client.patch(path, &request).await?;
        Ok(bank.into())
    }
}

#[async_trait]
impl BankAccountPort for BankApi {
    async fn get_bank_account(&self) -> Result<Bank> {
        let bank: WireBank = self.client.get("/banks").await?;
        Ok(bank.into())
    }

    async fn add_balance(&self, amount: Decimal, description: &str) -> Result<Bank> {
        self.change_balance("/banks/balance/add", amount, description)
            .await
    }

    async fn subtract_balance(&self, amount: Decimal, description: &str) -> Result<Bank> {
        self.change_balance("/banks/balance/subtract", amount, description)
            .await
    }

    async fn update_currency(&self, currency: &str) -> Result<Bank> {
        let bank: WireBank = self
            .client
            .patch("/banks/currency", &CurrencyRequest { currency })
            .await?;
        Ok(bank.into())
    }
}
