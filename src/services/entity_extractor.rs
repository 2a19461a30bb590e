//! 实体抽取 - 处理阶段 4
//!
//! 基于词典和关键词的子串扫描，不使用任何模型。任何输入都不会失败，
//! 没有命中时对应类别为空列表。

use crate::models::{EntitySet, Vocabulary};

/// 人物窗口：关键词前取的字符数
pub const PERSON_WINDOW_BEFORE: usize = 10;
/// 人物窗口：关键词后取的字符数
pub const PERSON_WINDOW_AFTER: usize = 5;
/// 组织窗口：关键词前取的字符数
pub const ORG_WINDOW_BEFORE: usize = 5;
/// 组织窗口：关键词后取的字符数
pub const ORG_WINDOW_AFTER: usize = 10;

/// 实体抽取器
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    locations: Vec<String>,
    person_titles: Vec<String>,
    organization_keywords: Vec<String>,
}

impl EntityExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            locations: vocabulary.locations.clone(),
            person_titles: vocabulary.person_titles.clone(),
            organization_keywords: vocabulary.organization_keywords.clone(),
        }
    }

    pub fn extract(&self, text: &str) -> EntitySet {
        EntitySet {
            locations: self.extract_locations(text),
            persons: self.extract_persons(text),
            organizations: self.extract_organizations(text),
        }
    }

    /// 地名：每个命中的地名只记一次
    ///
    /// 输出顺序是词典顺序而不是在文中出现的顺序，"上海与北京" 得到 `["北京", "上海"]`。
    pub fn extract_locations(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for loc in &self.locations {
            if !loc.is_empty() && text.contains(loc.as_str()) && !found.contains(loc) {
                found.push(loc.clone());
            }
        }
        found
    }

    /// 人物：每个命中的职务取首次出现位置附近的固定窗口，不去重
    pub fn extract_persons(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        self.person_titles
            .iter()
            .filter_map(|title| {
                keyword_window(text, &chars, title, PERSON_WINDOW_BEFORE, PERSON_WINDOW_AFTER)
            })
            .collect()
    }

    /// 组织：每个命中的关键词取首次出现位置附近的固定窗口，按原文去重
    pub fn extract_organizations(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut found: Vec<String> = Vec::new();
        for keyword in &self.organization_keywords {
            if let Some(mention) =
                keyword_window(text, &chars, keyword, ORG_WINDOW_BEFORE, ORG_WINDOW_AFTER)
            {
                if !found.contains(&mention) {
                    found.push(mention);
                }
            }
        }
        found
    }
}

/// 截取关键词首次出现处的窗口：前 `before` 个字符到关键词后 `after` 个字符
///
/// 以字符（Unicode 标量）计数，超出文本边界时截断
fn keyword_window(
    text: &str,
    chars: &[char],
    keyword: &str,
    before: usize,
    after: usize,
) -> Option<String> {
    if keyword.is_empty() {
        return None;
    }

    let byte_pos = text.find(keyword)?;
    let char_pos = text[..byte_pos].chars().count();
    let keyword_len = keyword.chars().count();

    let start = char_pos.saturating_sub(before);
    let end = (char_pos + keyword_len + after).min(chars.len());

    Some(chars[start..end].iter().collect())
}
