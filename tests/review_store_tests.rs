use stock_search::{Error, NewReview, ReviewKind, ReviewStore};
use test_utils::temp_data_dir;

fn new_review(code: &str, title: &str) -> NewReview {
    NewReview {
        code: code.to_string(),
        title: title.to_string(),
        date: "2024-05-06".to_string(),
        description: "breakout above the 20-day line".to_string(),
    }
}

#[cfg(test)]
mod stock_review_tests {
    use super::*;

    #[test]
    fn test_file_is_named_after_lowercase_type() {
        let dir = temp_data_dir();
        let store = ReviewStore::stock_reviews(dir.path(), " Daily ").unwrap();

        assert_eq!(store.path(), dir.path().join("stock_review_daily.csv"));
        assert_eq!(store.kind(), &ReviewKind::Stock("Daily".to_string()));

        store.init().unwrap();
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), "id,title,code,date,description");
    }

    #[test]
    fn test_invalid_types_are_rejected() {
        let dir = temp_data_dir();

        for review_type in ["", "   ", "../daily", "a/b"] {
            assert!(
                matches!(
                    ReviewStore::stock_reviews(dir.path(), review_type),
                    Err(Error::InvalidInput(_))
                ),
                "{:?} was accepted",
                review_type
            );
        }
    }

    #[test]
    fn test_add_assigns_id_and_normalizes_fields() {
        let dir = temp_data_dir();
        let store = ReviewStore::stock_reviews(dir.path(), "daily").unwrap();

        let review = store
            .add(&NewReview {
                code: " sh600036 ".to_string(),
                title: " 放量突破 ".to_string(),
                ..new_review("", "")
            })
            .unwrap();

        assert_eq!(review.id.len(), 36);
        assert_eq!(review.code, "SH600036");
        assert_eq!(review.title, "放量突破");
        assert_eq!(store.list(None).unwrap(), vec![review]);
    }

    #[test]
    fn test_list_filters_titles_ignoring_case() {
        let dir = temp_data_dir();
        let store = ReviewStore::stock_reviews(dir.path(), "daily").unwrap();
        store.add(&new_review("600036", "MACD golden cross")).unwrap();
        store.add(&new_review("600000", "volume dries up")).unwrap();
        store.add(&new_review("000001", "weekly macd divergence")).unwrap();

        let titles = |keyword: Option<&str>| -> Vec<String> {
            store
                .list(keyword)
                .unwrap()
                .into_iter()
                .map(|review| review.title)
                .collect()
        };

        assert_eq!(
            titles(Some(" Macd ")),
            vec!["MACD golden cross", "weekly macd divergence"]
        );
        assert_eq!(titles(Some("  ")).len(), 3);
        assert_eq!(titles(None).len(), 3);
        assert!(titles(Some("rsi")).is_empty());
    }

    #[test]
    fn test_types_are_stored_separately() {
        let dir = temp_data_dir();
        let daily = ReviewStore::stock_reviews(dir.path(), "daily").unwrap();
        let weekly = ReviewStore::stock_reviews(dir.path(), "WEEKLY").unwrap();

        daily.add(&new_review("600036", "daily note")).unwrap();

        assert_eq!(daily.list(None).unwrap().len(), 1);
        assert!(weekly.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_get_and_remove_by_id() {
        let dir = temp_data_dir();
        let store = ReviewStore::stock_reviews(dir.path(), "daily").unwrap();
        let first = store.add(&new_review("600036", "first")).unwrap();
        let second = store.add(&new_review("600000", "second")).unwrap();

        assert_eq!(store.get(&format!(" {} ", second.id)).unwrap(), second);

        store.remove(&first.id).unwrap();

        assert_eq!(store.list(None).unwrap(), vec![second]);
        assert!(matches!(store.get(&first.id), Err(Error::NotFound(_))));
        assert!(matches!(store.remove(&first.id), Err(Error::NotFound(_))));
    }
}

#[cfg(test)]
mod position_review_tests {
    use super::*;

    #[test]
    fn test_position_reviews_use_their_own_file() {
        let dir = temp_data_dir();
        let store = ReviewStore::position_reviews(dir.path());

        assert_eq!(store.path(), dir.path().join("position_review.csv"));
        assert_eq!(store.kind(), &ReviewKind::Position);
        assert!(store.list(None).unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_add_get_remove() {
        let dir = temp_data_dir();
        let store = ReviewStore::position_reviews(dir.path());

        let review = store.add(&new_review("sz000001", "trimmed half")).unwrap();

        assert_eq!(store.get(&review.id).unwrap(), review);
        assert_eq!(store.list(Some("HALF")).unwrap(), vec![review.clone()]);

        store.remove(&review.id).unwrap();

        assert!(store.list(None).unwrap().is_empty());
        assert!(matches!(store.get(&review.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_description_with_commas_and_newlines() {
        let dir = temp_data_dir();
        let store = ReviewStore::position_reviews(dir.path());
        let description = "entry 10.5, stop 9.8\nadd on pullback";

        let review = store
            .add(&NewReview {
                description: description.to_string(),
                ..new_review("600519", "plan")
            })
            .unwrap();

        assert_eq!(store.get(&review.id).unwrap().description, description);
    }
}
