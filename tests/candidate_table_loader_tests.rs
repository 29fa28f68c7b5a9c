use stock_search::{
    Candidate, CandidateRanker, CandidateTableLoader, Error, DEFAULT_CANDIDATE_RANKER_CONFIG,
};
use test_utils::constants::{TEST_FILES_DIRECTORY, TEST_LISTING_FILE_PATH};
use test_utils::{codes, gzip_bytes, load_candidates_from_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_listing_file_with_bom() {
        let table = CandidateTableLoader::read_candidate_table_from_path(&*TEST_LISTING_FILE_PATH)
            .expect("Failed to load listing");

        assert_eq!(table[0], Candidate::new("sh600000", "浦发银行"));
        assert_eq!(table.last(), Some(&Candidate::new("sz002594", "比亚迪")));
    }

    #[test]
    fn test_duplicate_codes_keep_first_row() {
        let table = CandidateTableLoader::read_candidate_table_from_path(&*TEST_LISTING_FILE_PATH)
            .expect("Failed to load listing");
        let reference =
            load_candidates_from_file(&*TEST_LISTING_FILE_PATH).expect("Failed to read listing");

        // The fixture repeats sh600036 on its last row
        assert_eq!(reference.len(), table.len() + 1);
        assert_eq!(table[..], reference[..reference.len() - 1]);
        assert_eq!(
            codes(&table)
                .iter()
                .filter(|code| **code == "sh600036")
                .count(),
            1
        );
    }

    #[test]
    fn test_english_headers() {
        let csv = "symbol,name,price\n600000,浦发银行,7.5\n000001,平安银行,10.1\n";

        let table = CandidateTableLoader::read_candidate_table_from_string(csv).unwrap();

        assert_eq!(
            table,
            vec![
                Candidate::new("600000", "浦发银行"),
                Candidate::new("000001", "平安银行"),
            ]
        );
    }

    #[test]
    fn test_leading_zeros_are_preserved() {
        let csv = "code,name\n000001,平安银行\n";

        let table = CandidateTableLoader::read_candidate_table_from_string(csv).unwrap();

        assert_eq!(table[0].code, "000001");
    }

    #[test]
    fn test_fallback_header_matching() {
        let csv = "股票代码,股票名称\n600519,贵州茅台\n";

        let table = CandidateTableLoader::read_candidate_table_from_string(csv).unwrap();

        assert_eq!(table, vec![Candidate::new("600519", "贵州茅台")]);
    }

    #[test]
    fn test_missing_name_column() {
        let csv = "Symbol\n600519\n";

        let table = CandidateTableLoader::read_candidate_table_from_string(csv).unwrap();

        assert_eq!(table, vec![Candidate::without_name("600519")]);
    }

    #[test]
    fn test_blank_fields_degrade() {
        let csv = "代码,名称\n600519,\n,平安银行\n";

        let table = CandidateTableLoader::read_candidate_table_from_string(csv).unwrap();

        assert_eq!(
            table,
            vec![
                Candidate::without_name("600519"),
                Candidate::new("", "平安银行"),
            ]
        );
    }

    #[test]
    fn test_fields_are_kept_verbatim() {
        let csv = "代码,名称\n 600519 ,  贵州茅台  \n";

        let table = CandidateTableLoader::read_candidate_table_from_string(csv).unwrap();

        assert_eq!(table, vec![Candidate::new(" 600519 ", "  贵州茅台  ")]);

        // Surrounding spaces count toward position and length when scoring
        let ranker = CandidateRanker::new(DEFAULT_CANDIDATE_RANKER_CONFIG);
        assert_eq!(ranker.score(&table[0], "贵州"), 6);
        assert_eq!(ranker.score(&table[0], "600519"), (8 - 1) * 2);
    }

    #[test]
    fn test_missing_code_column_is_an_error() {
        let csv = "price,volume\n1,2\n";

        let result = CandidateTableLoader::read_candidate_table_from_string(csv);

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_gzip_bytes() {
        let bytes = gzip_bytes("\u{feff}代码,名称\nsz300750,宁德时代\n");

        let table = CandidateTableLoader::read_candidate_table_from_gzip_bytes(&bytes).unwrap();

        assert_eq!(table, vec![Candidate::new("sz300750", "宁德时代")]);
    }

    #[test]
    fn test_read_candidate_table_picks_loader_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let gz_path = dir.path().join("listing.csv.gz");
        std::fs::write(&gz_path, gzip_bytes("代码,名称\nsz002594,比亚迪\n")).unwrap();

        let table = CandidateTableLoader::read_candidate_table(&gz_path).unwrap();

        assert_eq!(table, vec![Candidate::new("sz002594", "比亚迪")]);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = TEST_FILES_DIRECTORY.join("does_not_exist.csv");

        let result = CandidateTableLoader::read_candidate_table(path);

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
