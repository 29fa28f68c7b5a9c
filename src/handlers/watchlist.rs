use crate::{
    ApiResponse, WatchlistItem, WatchlistItems, WatchlistOrder, WatchlistStore, WatchlistUpdate,
};

pub fn list(store: &WatchlistStore) -> ApiResponse<WatchlistItems> {
    match store.list() {
        Ok(items) => {
            let count = items.len();
            ApiResponse::ok(items)
                .with_count(count)
                .with_message("自选列表获取成功")
        }
        Err(err) => err.into(),
    }
}

pub fn get(store: &WatchlistStore, code: &str) -> ApiResponse<WatchlistItem> {
    match store.get(code) {
        Ok(item) => {
            let message = format!("获取{}备注成功", code.trim().to_uppercase());
            ApiResponse::ok(item).with_message(message)
        }
        Err(err) => err.into(),
    }
}

pub fn contains(store: &WatchlistStore, code: &str) -> ApiResponse<bool> {
    store.contains(code).into()
}

pub fn upsert(
    store: &WatchlistStore,
    code: &str,
    update: &WatchlistUpdate,
) -> ApiResponse<WatchlistItem> {
    match store.upsert(code, update) {
        Ok(item) => ApiResponse::ok(item).with_message("自选项目添加/更新成功"),
        Err(err) => err.into(),
    }
}

pub fn reorder(store: &WatchlistStore, codes: &[String]) -> ApiResponse<WatchlistOrder> {
    match store.reorder(codes) {
        Ok(order) => ApiResponse::ok(order).with_message("排序更新成功"),
        Err(err) => err.into(),
    }
}

pub fn remove(store: &WatchlistStore, code: &str) -> ApiResponse<bool> {
    match store.remove(code) {
        Ok(()) => {
            let message = format!("成功删除代码为 {} 的自选项目", code.trim().to_uppercase());
            ApiResponse::ok(true).with_message(message)
        }
        Err(err) => err.into(),
    }
}
