use async_trait::async_trait;

use walletwise_core::incomes::{Income, IncomePort, NewIncome};
use walletwise_core::Result;

use crate::client::ApiClient;
use crate::dto::{CreateIncomeRequest, WireIncome};

/// `IncomePort` over the `/incomes` endpoints.
pub struct IncomeApi {
    client: ApiClient,
}

impl IncomeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IncomePort for IncomeApi {
    async fn get_incomes(&self) -> Result<Vec<Income>> {
        let incomes: Vec<WireIncome> = self.client.get("/incomes").await?;
        Ok(incomes.into_iter().map(Income::from).collect())
    }

    async fn create_income(&self, new_income: NewIncome) -> Result<Income> {
        let request = CreateIncomeRequest::from(new_income);
        let income: WireIncome = self.client.post("/incomes", &request).await?;
        Ok(income.into())
    }

    async fn delete_income(&self, income_id: &str) -> Result<()> {
        self.client.delete(&format!("/incomes/{}", income_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use walletwise_core::incomes::IncomeType;
    use walletwise_core::recurrence::Frequency;

    fn income_body(id: &str, body: &Value) -> Value {
        json!({
            "id": id,
            "userId": "u-1",
            "name": body["name"],
            "type": body["type"],
            "amount": body["amount"].to_string(),
            "frequency": body["frequency"],
            "nextPaymentDate": body.get("nextPaymentDate").cloned().unwrap_or(Value::Null),
            "isRecurring": body["isRecurring"],
            "isActive": true,
            "isArchived": false,
            "description": body["description"],
            "createdAt": "2026-03-15T10:00:00Z",
            "updatedAt": "2026-03-15T10:00:00Z",
            "archivedAt": null
        })
    }

    #[tokio::test]
    async fn lists_incomes() {
        let router = Router::new().route(
            "/incomes",
            get(|| async {
                Json(json!([
                    {
                        "id": "inc-1",
                        "userId": "u-1",
                        "name": "Salary",
                        "type": "salary",
                        "amount": "2500.00",
                        "frequency": "monthly",
                        "nextPaymentDate": "2026-04-01T00:00:00Z",
                        "isRecurring": true,
                        "isActive": true,
                        "isArchived": false,
                        "description": "",
                        "createdAt": "2026-03-01T08:00:00Z",
                        "updatedAt": "2026-03-01T08:00:00Z",
                        "archivedAt": null
                    }
                ]))
            }),
        );
        let api = IncomeApi::new(serve(router).await);

        let incomes = api.get_incomes().await.unwrap();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].amount, dec!(2500.00));
        assert_eq!(incomes[0].income_type, IncomeType::Salary);
        assert!(incomes[0].is_recurring);
    }

    #[tokio::test]
    async fn creates_income_with_wire_body() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let log = received.clone();
        let router = Router::new().route(
            "/incomes",
            axum::routing::post(move |Json(body): Json<Value>| async move {
                let response = income_body("inc-9", &body);
                *log.lock().unwrap() = Some(body);
                (StatusCode::CREATED, Json(response))
            }),
        );
        let api = IncomeApi::new(serve(router).await);

        let income = api
            .create_income(NewIncome {
                name: "Freelance gig".to_string(),
                income_type: IncomeType::Freelance,
                amount: dec!(800),
                frequency: Frequency::Monthly,
                is_recurring: true,
                next_payment_date: Some(Utc.with_ymd_and_hms(2026, 4, 15, 0, 0, 0).unwrap()),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(income.id, "inc-9");
        assert_eq!(income.amount, dec!(800));
        assert_eq!(income.income_type, IncomeType::Freelance);

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["type"], "freelance");
        assert_eq!(body["frequency"], "monthly");
        assert_eq!(body["isRecurring"], true);
        assert_eq!(body["description"], "");
        assert_eq!(body["nextPaymentDate"], "2026-04-15T00:00:00Z");
    }

    #[tokio::test]
    async fn deletes_by_id() {
        let deleted: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let log = deleted.clone();
        let router = Router::new().route(
            "/incomes/{id}",
            delete(move |Path(id): Path<String>| async move {
                log.lock().unwrap().push(id);
                StatusCode::NO_CONTENT
            }),
        );
        let api = IncomeApi::new(serve(router).await);

        api.delete_income("inc-1").await.unwrap();
        assert_eq!(*deleted.lock().unwrap(), vec!["inc-1".to_string()]);
    }

    #[tokio::test]
    async fn delete_of_unknown_income_fails() {
        let router = Router::new().route(
            "/incomes/{id}",
            delete(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Income not found" })),
                )
            }),
        );
        let api = IncomeApi::new(serve(router).await);

        let err = api.delete_income("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Income not found");
    }
}
