//! 段落与字段目录

use serde::{Deserialize, Serialize};

/// 字段填充方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// 需要LLM生成的段落
    #[serde(rename = "llm")]
    Llm,
    /// 调用方录入的字段
    #[serde(rename = "input")]
    Input,
    /// 引擎自动推导的字段
    #[serde(rename = "auto")]
    Auto,
}

pub const INTRODUCTION: &str = "Introduction";
pub const SCOPE_OF_WORK: &str = "Scope_of_Work";
pub const GENERAL_CONDITIONS: &str = "General_Conditions";
pub const SPECIAL_CONDITIONS: &str = "Special_Conditions";
pub const TECHNICAL_PROPOSAL_DOCUMENTS: &str = "Technical_Proposal_Documents";
pub const FINANCIAL_PROPOSAL_DOCUMENTS: &str = "Financial_Proposal_Documents";
pub const PENALTIES_AND_VIOLATIONS: &str = "Penalties_and_Violations";
pub const BID_EVALUATION_CRITERIA: &str = "Bid_Evaluation_Criteria";

pub const PROJECT_NAME: &str = "Project_Name";
pub const AWARD_METHOD: &str = "Award_Method";
pub const ISSUE_DATE: &str = "Issue_Date";

/// 惩罚类字段，缺省时必须补空串，模板可无条件引用
pub const PENALTY_FIELDS: &[&str] = &[
    "Penalty_Deduction",
    "Penalty_Execute_On_Vendor",
    "Penalty_Suspend",
    "Penalty_Termination",
];

/// 字段目录：字段名 -> 填充方式
///
/// 顺序即段落选择顺序与输出文档的段落顺序。
pub const FIELD_MAP: &[(&str, FieldKind)] = &[
    (INTRODUCTION, FieldKind::Llm),
    (SCOPE_OF_WORK, FieldKind::Llm),
    (GENERAL_CONDITIONS, FieldKind::Llm),
    (SPECIAL_CONDITIONS, FieldKind::Llm),
    (TECHNICAL_PROPOSAL_DOCUMENTS, FieldKind::Llm),
    (FINANCIAL_PROPOSAL_DOCUMENTS, FieldKind::Llm),
    (PENALTIES_AND_VIOLATIONS, FieldKind::Llm),
    (BID_EVALUATION_CRITERIA, FieldKind::Llm),
    (PROJECT_NAME, FieldKind::Input),
    ("Scope_Details", FieldKind::Input),
    (AWARD_METHOD, FieldKind::Input),
    ("Penalty_Deduction", FieldKind::Input),
    ("Penalty_Execute_On_Vendor", FieldKind::Input),
    ("Penalty_Suspend", FieldKind::Input),
    ("Penalty_Termination", FieldKind::Input),
    (ISSUE_DATE, FieldKind::Auto),
    ("Participation_Confirmation_Letter", FieldKind::Auto),
    ("Submission_of_Questions_and_Inquiries", FieldKind::Auto),
    ("Submission_of_Proposals", FieldKind::Auto),
    ("Opening_of_Proposals", FieldKind::Auto),
    ("Award_Decision_Date", FieldKind::Auto),
    ("Commencement_of_Work", FieldKind::Auto),
];

/// 依赖段落声明：先决段落全部合并完成后才会派发
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentSpec {
    pub section: &'static str,
    pub prerequisites: &'static [&'static str],
}

/// 当前唯一的依赖段落：评标标准消费技术与财务两个段落的生成结果
pub const DEPENDENT_SECTIONS: &[DependentSpec] = &[DependentSpec {
    section: BID_EVALUATION_CRITERIA,
    prerequisites: &[TECHNICAL_PROPOSAL_DOCUMENTS, FINANCIAL_PROPOSAL_DOCUMENTS],
}];
