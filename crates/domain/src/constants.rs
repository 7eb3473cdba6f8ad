//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use crate::types::pnl::{PnlFormat, PnlRowSpec};

// Fiscal years compared by the state-path view
pub const YEAR_FROM: &str = "2024";
pub const YEAR_TO: &str = "2025";
pub const STATEPATH_YEARS: [&str; 2] = [YEAR_FROM, YEAR_TO];

// Display scaling
pub const EOK_UNIT: f64 = 100_000_000.0;

// Organization size buckets
pub const SIZE_ALL: &str = "전체";
pub const DEFAULT_SIZE: &str = "대기업";

// Placeholder used by the backend for blank upper-org labels
pub const UPPER_ORG_MISSING: &str = "미입력";

// Team/part classification
pub const UNKNOWN_TEAM_PART: &str = "미확인";
pub const WHOLE_TEAM_PART: &str = "전체";
pub const TEAM_PART_SEPARATOR: &str = " / ";

// Empty-state hints
pub const HINT_SELECT_ORG: &str = "회사를 선택하세요.";
pub const HINT_LOADING: &str = "불러오는 중...";
pub const HINT_SELECT_UPPER_ORG: &str = "상위 조직을 선택하세요.";
pub const HINT_LOAD_FAILED: &str = "불러오지 못했습니다.";

// API base resolution
pub const API_PATH_SUFFIX: &str = "/api";
pub const LOCAL_FALLBACK_HOST: &str = "localhost";
pub const LOCAL_FALLBACK_PORT: u16 = 8000;
pub const LOCAL_FALLBACK_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// Backend endpoints (relative to the resolved API base)
pub const ENDPOINT_ORGS: &str = "/orgs";
pub const ENDPOINT_PEOPLE: &str = "/people";
pub const ENDPOINT_DEALS: &str = "/deals";
pub const ENDPOINT_STATEPATH_PORTFOLIO: &str = "/statepath/portfolio-2425";

// State-path export
pub const STATEPATH_TABLE_EXPORT_TYPE: &str = "statepath_portfolio_2425";
pub const STATEPATH_DETAIL_EXPORT_TYPE: &str = "statepath_detail_2425";
pub const REV_OPS_KEYS: [&str; 2] = ["ops_reco", "revops_reco"];
pub const DEFAULT_PORTFOLIO_LIMIT: u32 = 500;

// Won-groups aggregation
pub const ONLINE_COURSE_FORMATS: [&str; 3] = ["구독제(온라인)", "선택구매(온라인)", "포팅"];
pub const HRD_KEYWORDS: [&str; 26] = [
    "HRD", "HR", "인사", "피플", "경영지원", "CHO", "PEOPLE", "TALENT", "인재", "교육", "육성",
    "러닝", "LEARNING", "L&D", "아카데미", "연수", "인력개발", "인력지원", "기업문화", "경영관리",
    "경력개발", "사업지원", "Human", "성장지원", "인재개발", "조직문화",
];
pub const QA_NO_WON_AMOUNT: &str = "no_won_amount";
pub const QA_ORG_SUMMARY_MISMATCH: &str = "org_summary_mismatch_2025";
pub const QA_MISMATCH_REL_TOL: f64 = 0.05;

// P&L table
pub const PNL_VARIANT_E_SUFFIX: &str = "_E";
pub const PNL_VARIANT_T_SUFFIX: &str = "_T";
pub const PNL_ACTUAL_VALUE_KEY: &str = "A";

pub const ROW_REV_TOTAL: &str = "REV_TOTAL";
pub const ROW_OP: &str = "OP";
pub const ROW_OP_MARGIN: &str = "OP_MARGIN";

/// Row catalogue of the projected P&L table, in display order.
pub const PNL_ROW_CATALOGUE: &[PnlRowSpec] = &[
    PnlRowSpec::new("REV_TOTAL", "총매출", 0, PnlFormat::Eok),
    PnlRowSpec::new("REV_ONLINE", "└ 온라인 매출", 1, PnlFormat::Eok),
    PnlRowSpec::new("REV_OFFLINE", "└ 출강 매출", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_CONTRIB_TOTAL", "공헌비용 합계", 0, PnlFormat::Eok),
    PnlRowSpec::new("COST_CONTRIB_ONLINE", "└ 온라인 공헌비용", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_CONTRIB_OFFLINE", "└ 출강 공헌비용", 1, PnlFormat::Eok),
    PnlRowSpec::new("PROFIT_CONTRIB_TOTAL", "공헌이익 합계", 0, PnlFormat::Eok),
    PnlRowSpec::new("PROFIT_CONTRIB_ONLINE", "└ 온라인 공헌이익", 1, PnlFormat::Eok),
    PnlRowSpec::new("PROFIT_CONTRIB_OFFLINE", "└ 출강 공헌이익", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_FIXED_TOTAL", "고정비 합계", 0, PnlFormat::Eok),
    PnlRowSpec::new("COST_FIXED_PROD", "└ 제작비", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_FIXED_MKT", "└ 마케팅비", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_FIXED_LABOR", "└ 인건비", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_FIXED_RENT", "└ 임대료", 1, PnlFormat::Eok),
    PnlRowSpec::new("COST_FIXED_OTHER", "└ 기타비용", 1, PnlFormat::Eok),
    PnlRowSpec::new("OP", "OP", 0, PnlFormat::Eok),
    PnlRowSpec::new("OP_MARGIN", "영업이익률(%)", 0, PnlFormat::Percent),
];
