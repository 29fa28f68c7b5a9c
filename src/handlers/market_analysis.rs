use crate::{ApiResponse, MarketAnalysis, MarketAnalysisStore, MarketAnalysisUpdate};
use std::collections::BTreeMap;

pub fn latest(
    store: &MarketAnalysisStore,
    codes: &str,
) -> ApiResponse<BTreeMap<String, Option<MarketAnalysis>>> {
    match store.latest(codes) {
        Ok(latest) => ApiResponse::ok(latest).with_message("获取分析信息成功"),
        Err(err) => err.into(),
    }
}

pub fn upsert(
    store: &MarketAnalysisStore,
    code: &str,
    analysis: &str,
) -> ApiResponse<MarketAnalysisUpdate> {
    match store.upsert(code, analysis) {
        Ok(update) => {
            let message = format!(
                "{}股票{}的分析信息成功",
                if update.replaced { "更新" } else { "新增" },
                update.code
            );
            ApiResponse::ok(update).with_message(message)
        }
        Err(err) => err.into(),
    }
}
