use phf::phf_map;
use serde::{Deserialize, Serialize};

/// 新闻类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 国内
    Domestic,
    /// 国际
    International,
}

/// 类别标签别名（LLM 可能返回中文标签）
static CATEGORY_ALIASES: phf::Map<&'static str, Category> = phf_map! {
    "domestic" => Category::Domestic,
    "international" => Category::International,
    "国内" => Category::Domestic,
    "国际" => Category::International,
};

impl Category {
    /// 获取标准名称
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Domestic => "domestic",
            Category::International => "international",
        }
    }

    /// 从标签解析类别（忽略大小写和首尾空白）
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        CATEGORY_ALIASES.get(label.as_str()).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 摘要生成方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    /// 启发式规则
    Heuristic,
    /// 大模型
    Llm,
}

/// 实体集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    /// 地点（去重）
    pub locations: Vec<String>,
    /// 人物提及（按职务关键词截取的上下文窗口，不去重）
    pub persons: Vec<String>,
    /// 组织提及（按原文去重）
    pub organizations: Vec<String>,
}

impl EntitySet {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.persons.is_empty() && self.organizations.is_empty()
    }
}

/// 单条新闻摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub category: Category,
}

/// 处理完成的单条新闻
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub text: String,
    pub entities: EntitySet,
    pub summary: Summary,
    pub summary_method: SummaryMethod,
}

/// 单日处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDigest {
    /// YYYYMMDD
    pub date: String,
    pub domestic: Vec<NewsItem>,
    pub international: Vec<NewsItem>,
}

impl DailyDigest {
    /// 创建空结果（输入为空或未切出任何新闻时使用）
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            domestic: Vec::new(),
            international: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domestic.is_empty() && self.international.is_empty()
    }

    pub fn total(&self) -> usize {
        self.domestic.len() + self.international.len()
    }

    /// 统计摘要方式：(大模型, 启发式)
    pub fn method_counts(&self) -> (usize, usize) {
        self.domestic
            .iter()
            .chain(self.international.iter())
            .fold((0, 0), |(llm, heuristic), item| match item.summary_method {
                SummaryMethod::Llm => (llm + 1, heuristic),
                SummaryMethod::Heuristic => (llm, heuristic + 1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(method: SummaryMethod) -> NewsItem {
        NewsItem {
            text: "国务院召开常务会议。".to_string(),
            entities: EntitySet::default(),
            summary: Summary {
                title: "国务院召开常务会议".to_string(),
                summary: "国务院召开常务会议".to_string(),
                keywords: vec!["会议".to_string()],
                category: Category::Domestic,
            },
            summary_method: method,
        }
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("domestic"), Some(Category::Domestic));
        assert_eq!(Category::from_label(" International "), Some(Category::International));
        assert_eq!(Category::from_label("国际"), Some(Category::International));
        assert_eq!(Category::from_label("sports"), None);
    }

    #[test]
    fn test_news_item_json_shape() {
        let value = serde_json::to_value(item(SummaryMethod::Heuristic)).unwrap();
        assert_eq!(value["summary_method"], "heuristic");
        assert_eq!(value["summary"]["category"], "domestic");
        assert!(value["entities"]["locations"].is_array());
        assert!(value["entities"]["persons"].is_array());
        assert!(value["entities"]["organizations"].is_array());
    }

    #[test]
    fn test_method_counts() {
        let digest = DailyDigest {
            date: "20251023".to_string(),
            domestic: vec![item(SummaryMethod::Llm), item(SummaryMethod::Heuristic)],
            international: vec![item(SummaryMethod::Heuristic)],
        };
        assert_eq!(digest.method_counts(), (1, 2));
        assert_eq!(digest.total(), 3);
        assert!(DailyDigest::empty("20251023").is_empty());
    }
}
