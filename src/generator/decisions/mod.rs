//! 决策构建 - 合并原始录入、补全缺省字段并选择需要生成的段落

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::generator::sections::{self, FieldKind};

/// 原始录入解析失败时写入上下文的警示字段
pub const INPUT_PARSE_WARNING: &str = "Input_Parse_Warning";

/// 日期推导表：字段名 -> 相对发布日期的偏移天数
const AUTO_DATE_OFFSETS: &[(&str, i64)] = &[
    ("Participation_Confirmation_Letter", 2),
    ("Submission_of_Questions_and_Inquiries", 5),
    ("Submission_of_Proposals", 10),
    ("Opening_of_Proposals", 11),
    ("Award_Decision_Date", 17),
    ("Commencement_of_Work", 30),
];

/// 一次生成运行的共享决策上下文：字段名 -> 值
///
/// 仅在单次运行内存在且可变，运行结束随结果移交后销毁。
/// 底层使用BTreeMap，合并与序列化顺序恒定。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decisions {
    fields: BTreeMap<String, Value>,
}

impl Decisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入字段，已存在则覆盖。字段只增不删。
    pub fn insert(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    pub fn insert_text(&mut self, key: &str, text: impl Into<String>) {
        self.insert(key, Value::String(text.into()));
    }

    /// 缺省补值：仅当字段缺失时写入
    pub fn setdefault_text(&mut self, key: &str, text: &str) {
        if !self.fields.contains_key(key) {
            self.insert_text(key, text);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// 字段的文本视图：字符串原样返回，缺失或null返回空串，其余类型序列化
    pub fn get_text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(value) => value.to_string(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// 按对象整体合并，入参覆盖已有字段
    pub fn merge_object(&mut self, object: &Map<String, Value>) {
        for (key, value) in object {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 日期推导：发布日期（显式或当天）推导六个后续日期
///
/// 纯函数，同一发布日期必得同一组结果。无法解析的发布日期按当天处理。
pub fn generate_auto_dates(issue_date: Option<&str>) -> Vec<(String, String)> {
    let base = issue_date
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive());

    let mut dates = vec![(
        sections::ISSUE_DATE.to_string(),
        base.format("%Y-%m-%d").to_string(),
    )];
    for (key, days) in AUTO_DATE_OFFSETS {
        let date = base + Duration::days(*days);
        dates.push((key.to_string(), date.format("%Y-%m-%d").to_string()));
    }
    dates
}

/// 决策构建结果：完成的上下文 + 按目录顺序排列的待生成段落
pub struct BuildOutput {
    pub decisions: Decisions,
    pub sections: Vec<String>,
}

/// 决策构建器
///
/// 不产生任何错误：解析失败静默降级，仅留下警示字段。
#[derive(Debug, Default)]
pub struct DecisionBuilder;

impl DecisionBuilder {
    /// 合并原始录入与既有决策，推导缺省字段，并选择需要生成的段落
    ///
    /// 合并优先级：原始录入覆盖既有决策。
    pub fn build(
        &self,
        raw_input: &Value,
        include_sections: &HashMap<String, bool>,
        prior: Decisions,
    ) -> BuildOutput {
        let mut decisions = prior;

        match raw_input {
            Value::Object(object) => decisions.merge_object(object),
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(object)) => decisions.merge_object(&object),
                _ => {
                    println!("⚠️ 原始录入无法解析为JSON对象，按既有决策继续");
                    decisions.insert_text(
                        INPUT_PARSE_WARNING,
                        "raw input could not be parsed as a JSON object; continued with accumulated decisions",
                    );
                }
            },
            _ => {}
        }

        // 惩罚类字段缺省补空串
        for key in sections::PENALTY_FIELDS {
            decisions.setdefault_text(key, "");
        }

        // 日期推导，发布日期及衍生日期总是重新计算
        let issue_date = decisions.get_text(sections::ISSUE_DATE);
        let issue_date = (!issue_date.is_empty()).then_some(issue_date);
        for (key, value) in generate_auto_dates(issue_date.as_deref()) {
            decisions.insert_text(&key, value);
        }

        // 段落选择：目录中kind为llm且未被显式排除的段落，缺省即包含
        let mut section_list = Vec::new();
        for (name, kind) in sections::FIELD_MAP {
            if *kind != FieldKind::Llm {
                continue;
            }
            if include_sections.get(*name) == Some(&false) {
                continue;
            }
            section_list.push((*name).to_string());
        }

        // 回写原始录入，便于结果追溯
        decisions.insert("raw_input", raw_input.clone());

        BuildOutput {
            decisions,
            sections: section_list,
        }
    }
}
