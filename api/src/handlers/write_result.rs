//! Response body shared by the write operations

use serde::Serialize;

use crate::domain::entities::WriteResult;

/// `{"affectedRows": n, "insertId": id|null}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResultResponse {
    pub affected_rows: u64,
    pub insert_id: Option<i32>,
}

impl From<WriteResult> for WriteResultResponse {
    fn from(result: WriteResult) -> Self {
        Self {
            affected_rows: result.affected_rows,
            insert_id: result.insert_id,
        }
    }
}
