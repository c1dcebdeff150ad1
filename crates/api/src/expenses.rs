use async_trait::async_trait;

use walletwise_core::expenses::{Expense, ExpensePort, NewExpense};
use walletwise_core::Result;

use crate::client::ApiClient;
use crate::dto::{CreateExpenseRequest, WireExpense};

/// `ExpensePort` over the `/expenses` endpoints.
pub struct ExpenseApi {
    client: ApiClient,
}

impl ExpenseApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExpensePort for ExpenseApi {
    async fn get_expenses(&self) -> Result<Vec<Expense>> {
        let expenses: Vec<WireExpense> = self.client.get("/expenses").await?;
        Ok(expenses.into_iter().map(Expense::from).collect())
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        let request = CreateExpenseRequest::from(new_expense);
        let expense: WireExpense = self.client.post("/expenses", &request).await?;
        Ok(expense.into())
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        self.client.delete(&format!("/expenses/{}", expense_id)).await
    }
}
