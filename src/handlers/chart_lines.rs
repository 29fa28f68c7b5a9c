use crate::{ApiResponse, ChartLineStatus, ChartLineStore, ChartLines};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLinesAdded {
    pub code: String,
    pub period: String,

    #[serde(rename = "addedCount")]
    pub added_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLinesRemaining {
    #[serde(rename = "remainingCount")]
    pub remaining_count: usize,
}

pub fn query(store: &ChartLineStore, code: &str, period: &str) -> ApiResponse<ChartLines> {
    match store.query(code, period) {
        Ok((lines, status)) => {
            let message = match status {
                ChartLineStatus::Found => "画线数据查询成功",
                ChartLineStatus::Missing => "未找到匹配的画线数据",
                ChartLineStatus::Malformed => "画线数据格式异常，已返回空数据",
            };
            ApiResponse::ok(lines).with_message(message)
        }
        Err(err) => err.into(),
    }
}

/// `lines` is the raw request value; anything but a JSON array is rejected.
pub fn add(
    store: &ChartLineStore,
    code: &str,
    period: &str,
    lines: &Value,
    width: i64,
    height: i64,
) -> ApiResponse<ChartLinesAdded> {
    let Some(lines) = lines.as_array() else {
        return ApiResponse::failure(400, "lines必须是数组格式");
    };

    match store.add(code, period, lines, width, height) {
        Ok(added_count) => ApiResponse::ok(ChartLinesAdded {
            code: code.trim().to_uppercase(),
            period: period.trim().to_string(),
            added_count,
        })
        .with_message("画线数据添加成功"),
        Err(err) => err.into(),
    }
}

pub fn remove(
    store: &ChartLineStore,
    code: &str,
    period: &str,
    line_id: &Value,
) -> ApiResponse<ChartLinesRemaining> {
    match store.remove(code, period, line_id) {
        Ok(remaining_count) => {
            let message = match line_id {
                Value::String(id) => format!("成功删除id={}的画线数据", id),
                other => format!("成功删除id={}的画线数据", other),
            };
            ApiResponse::ok(ChartLinesRemaining { remaining_count }).with_message(message)
        }
        Err(err) => err.into(),
    }
}
