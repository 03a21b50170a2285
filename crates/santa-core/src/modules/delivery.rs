//! Hand a generated table to a remote HTTP endpoint.

use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Content type sent with delivered tables.
pub const DELIVERY_CONTENT_TYPE: &str = "application/csv";

/// What the remote endpoint answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

/// POST `csv` to `url`. Non-2xx answers are returned as [`AppError::Delivery`].
pub async fn deliver_csv(
    client: &reqwest::Client,
    url: &str,
    csv: Vec<u8>,
) -> AppResult<DeliveryReceipt> {
    let size = csv.len();
    let response = client
        .post(url)
        .header(reqwest::header::CONTENT_TYPE, DELIVERY_CONTENT_TYPE)
        .body(csv)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    if !(200..300).contains(&status) {
        warn!(status, "Delivery endpoint rejected the table");
        return Err(AppError::Delivery { status, body });
    }

    info!(status, bytes = size, "Delivered assignments table");
    Ok(DeliveryReceipt { status, body })
}
