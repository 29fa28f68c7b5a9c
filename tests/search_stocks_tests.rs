use stock_search::{
    clamp_limit, search_stocks, search_stocks_from_loader, ApiResponse, Candidate,
    CandidateTableLoader, Error,
};
use test_utils::constants::TEST_LISTING_FILE_PATH;
use test_utils::{codes, sample_candidate_table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_trimmed() {
        let table = sample_candidate_table();

        let response = search_stocks(&table, "  600036 \n", 10);

        assert!(response.is_success());
        assert_eq!(response.status, 200);
        assert_eq!(response.count, Some(1));
        assert_eq!(
            response.data,
            Some(vec![Candidate::new("600036", "招商银行")])
        );
    }

    #[test]
    fn test_blank_keyword_is_a_bad_request() {
        let table = sample_candidate_table();

        let response = search_stocks(&table, "   ", 10);

        assert!(!response.is_success());
        assert_eq!(response.status, 400);
        assert_eq!(response.data, None);
        assert_eq!(response.message.as_deref(), Some("缺少查询关键词"));
    }

    #[test]
    fn test_no_matches_is_still_a_success() {
        let table = sample_candidate_table();

        let response = search_stocks(&table, "999999", 10);

        assert!(response.is_success());
        assert_eq!(response.count, Some(0));
        assert_eq!(response.data, Some(vec![]));
    }

    #[test]
    fn test_loader_failure_is_a_server_error() {
        let response = search_stocks_from_loader(
            || Err(Error::Other("listing unavailable".to_string())),
            "600",
            10,
        );

        assert_eq!(response.status, 500);
        assert_eq!(
            response.message.as_deref(),
            Some("Other Error: listing unavailable")
        );
    }

    #[test]
    fn test_blank_keyword_skips_loading() {
        let response = search_stocks_from_loader(
            || panic!("loader must not run for a blank keyword"),
            "",
            10,
        );

        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_search_from_listing_file() {
        let response = search_stocks_from_loader(
            || CandidateTableLoader::read_candidate_table(&*TEST_LISTING_FILE_PATH),
            "中国",
            10,
        );

        let data = response.data.expect("Expected search results");
        assert_eq!(codes(&data), vec!["sh601988", "sh601318"]);
    }

    #[test]
    fn test_json_shape() {
        let table = sample_candidate_table();

        let json = search_stocks(&table, "600036", 10).to_json().unwrap();

        assert_eq!(
            json,
            r#"{"success":true,"data":[{"代码":"600036","名称":"招商银行"}],"count":1}"#
        );
    }

    #[test]
    fn test_failure_json_omits_data() {
        let response: ApiResponse<Vec<Candidate>> = ApiResponse::failure(404, "missing");

        assert_eq!(
            response.to_json().unwrap(),
            r#"{"success":false,"message":"missing"}"#
        );
    }

    #[test]
    fn test_store_errors_map_to_status_codes() {
        let not_found: ApiResponse<bool> = Error::NotFound("x".to_string()).into();
        let invalid: ApiResponse<bool> =
            Err::<bool, Error>(Error::InvalidInput("x".to_string())).into();
        let ok: ApiResponse<bool> = Ok::<bool, Error>(true).into();

        assert_eq!(not_found.status, 404);
        assert_eq!(invalid.status, 400);
        assert_eq!(ok.status, 200);
        assert_eq!(ok.data, Some(true));
    }

    #[test]
    fn test_negative_limit_requests_nothing() {
        let table = sample_candidate_table();

        let response = search_stocks(&table, "银行", clamp_limit(-5));

        assert_eq!(response.count, Some(0));
        assert_eq!(clamp_limit(3), 3);
    }

    #[test]
    fn test_large_limit_saturates() {
        let table = sample_candidate_table();

        assert_eq!(
            clamp_limit(i64::MAX) as u128,
            (i64::MAX as u128).min(usize::MAX as u128)
        );
        assert_eq!(clamp_limit(i64::MIN), 0);

        let response = search_stocks(&table, "银行", clamp_limit(i64::MAX));
        assert_eq!(response.count, Some(3));
    }
}
