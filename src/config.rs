use crate::models::CandidateRankerConfig;

pub const DEFAULT_CANDIDATE_RANKER_CONFIG: &CandidateRankerConfig = &CandidateRankerConfig {
    code_match_weight: 2,
    name_match_weight: 1,
};
