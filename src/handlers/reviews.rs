use crate::{ApiResponse, NewReview, Review, ReviewKind, ReviewStore, Reviews};

/// Success messages differ between stock reviews, which name their type,
/// and position reviews, which do not.
fn success_message(
    store: &ReviewStore,
    stock: impl FnOnce(&str) -> String,
    position: &str,
) -> String {
    match store.kind() {
        ReviewKind::Stock(review_type) => stock(review_type),
        ReviewKind::Position => position.to_string(),
    }
}

pub fn list(store: &ReviewStore, keyword: Option<&str>) -> ApiResponse<Reviews> {
    match store.list(keyword) {
        Ok(reviews) => {
            let count = reviews.len();
            let keyword = keyword.map(str::trim).filter(|keyword| !keyword.is_empty());
            let message = success_message(
                store,
                |review_type| {
                    format!(
                        "获取{}类型评论成功（搜索关键字：{}）",
                        review_type,
                        keyword.unwrap_or("无")
                    )
                },
                "获取成功",
            );
            ApiResponse::ok(reviews).with_count(count).with_message(message)
        }
        Err(err) => err.into(),
    }
}

pub fn add(store: &ReviewStore, new_review: &NewReview) -> ApiResponse<Review> {
    match store.add(new_review) {
        Ok(review) => {
            let message =
                success_message(store, |t| format!("添加{}类型评论成功", t), "添加成功");
            ApiResponse::ok(review).with_message(message)
        }
        Err(err) => err.into(),
    }
}

pub fn get(store: &ReviewStore, id: &str) -> ApiResponse<Review> {
    match store.get(id) {
        Ok(review) => {
            let message =
                success_message(store, |t| format!("获取{}类型评论成功", t), "获取成功");
            ApiResponse::ok(review).with_message(message)
        }
        Err(err) => err.into(),
    }
}

pub fn remove(store: &ReviewStore, id: &str) -> ApiResponse<bool> {
    match store.remove(id) {
        Ok(()) => {
            let message =
                success_message(store, |t| format!("删除{}类型评论成功", t), "成功删除");
            ApiResponse::ok(true).with_message(message)
        }
        Err(err) => err.into(),
    }
}
