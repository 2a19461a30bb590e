//! 国内/国际分类 - 处理阶段 3
//!
//! 优先按"下面…国际"导语一刀切；没有导语时逐段打分判断。

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::{Category, Vocabulary};

/// 分类结果，每个段恰好落在其中一组，组内保持输入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub domestic: Vec<String>,
    pub international: Vec<String>,
}

impl Classified {
    pub fn len(&self) -> usize {
        self.domestic.len() + self.international.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 国内/国际分类器
#[derive(Debug, Clone)]
pub struct Classifier {
    international_start: Regex,
    domestic_keywords: Vec<String>,
    domestic_person_keywords: Vec<String>,
    international_keywords: Vec<String>,
    international_person_keywords: Vec<String>,
    international_indicators: Vec<String>,
    foreign_locations: Vec<String>,
}

impl Classifier {
    /// 构造时检查词表，任何关键词表为空都视为配置错误
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ConfigError> {
        vocabulary.validate()?;

        let international_start = Regex::new(&vocabulary.international_start_pattern)
            .map_err(|e| {
                ConfigError::invalid_pattern(
                    "international_start_pattern",
                    &vocabulary.international_start_pattern,
                    e,
                )
            })?;

        Ok(Self {
            international_start,
            domestic_keywords: vocabulary.domestic_keywords.clone(),
            domestic_person_keywords: vocabulary.domestic_person_keywords.clone(),
            international_keywords: vocabulary.international_keywords.clone(),
            international_person_keywords: vocabulary.international_person_keywords.clone(),
            international_indicators: vocabulary.international_indicators.clone(),
            foreign_locations: vocabulary.foreign_locations.clone(),
        })
    }

    /// 对整批段落分类
    pub fn classify(&self, segments: &[String]) -> Classified {
        if let Some(k) = self.find_international_start(segments) {
            debug!("在第 {} 段找到国际新闻导语", k + 1);
            return Classified {
                domestic: segments[..k].to_vec(),
                international: segments[k..].to_vec(),
            };
        }

        debug!("未找到国际新闻导语，逐段判断");

        let mut classified = Classified::default();
        for segment in segments {
            match self.classify_segment(segment) {
                Category::Domestic => classified.domestic.push(segment.clone()),
                Category::International => classified.international.push(segment.clone()),
            }
        }
        classified
    }

    /// 第一个匹配国际新闻导语的段落下标
    pub fn find_international_start(&self, segments: &[String]) -> Option<usize> {
        segments
            .iter()
            .position(|segment| self.international_start.is_match(segment))
    }

    /// 单段判断（无导语时使用）
    ///
    /// 两边都命中时，含国外地名则判国际，否则判国内；都未命中默认国内。
    pub fn classify_segment(&self, segment: &str) -> Category {
        match (self.is_international(segment), self.is_domestic(segment)) {
            (true, false) => Category::International,
            (false, true) => Category::Domestic,
            (true, true) if self.has_foreign_location(segment) => Category::International,
            _ => Category::Domestic,
        }
    }

    pub fn is_international(&self, text: &str) -> bool {
        contains_any(text, &self.international_keywords)
            || contains_any(text, &self.international_person_keywords)
            || contains_any(text, &self.international_indicators)
            || self.foreign_location_count(text) >= 2
    }

    pub fn is_domestic(&self, text: &str) -> bool {
        contains_any(text, &self.domestic_keywords)
            || contains_any(text, &self.domestic_person_keywords)
    }

    pub fn has_foreign_location(&self, text: &str) -> bool {
        contains_any(text, &self.foreign_locations)
    }

    /// 文中出现的不同国外地名数量
    pub fn foreign_location_count(&self, text: &str) -> usize {
        self.foreign_locations
            .iter()
            .filter(|loc| text.contains(loc.as_str()))
            .count()
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&Vocabulary::default()).unwrap()
    }

    fn segments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hard_cut_at_international_lead_in() {
        let input = segments(&[
            "国务院召开常务会议。",
            "美国宣布新一轮关税措施。",
            "下面来看国际方面的消息。俄罗斯举行阅兵。",
            "北京举行科技成果发布会。",
        ]);

        let result = classifier().classify(&input);
        assert_eq!(result.domestic, input[..2].to_vec());
        assert_eq!(result.international, input[2..].to_vec());
    }

    #[test]
    fn test_lead_in_must_start_segment() {
        let input = segments(&["会议强调，下面的国际合作要加强。"]);
        assert_eq!(classifier().find_international_start(&input), None);
    }

    #[test]
    fn test_tie_break_single_foreign_location_stays_domestic() {
        let c = classifier();
        let text = "国务院部署稳外贸工作，对美国出口保持稳定。";
        assert!(c.is_domestic(text));
        assert!(!c.is_international(text));
        assert_eq!(c.classify_segment(text), Category::Domestic);
    }

    #[test]
    fn test_tie_break_foreign_location_wins_when_both() {
        let c = classifier();
        let text = "国务院部署外交工作，对美国出口保持稳定。";
        assert!(c.is_domestic(text));
        assert!(c.is_international(text));
        assert_eq!(c.classify_segment(text), Category::International);
    }

    #[test]
    fn test_both_without_foreign_location_is_domestic() {
        let c = classifier();
        let text = "国务院召开会议，部署外交工作。";
        assert!(c.is_domestic(text) && c.is_international(text));
        assert_eq!(c.classify_segment(text), Category::Domestic);
    }

    #[test]
    fn test_two_foreign_locations_flip_to_international() {
        let c = classifier();
        let text = "日本和韩国举行贸易谈判。";
        assert_eq!(c.foreign_location_count(text), 2);
        assert_eq!(c.classify_segment(text), Category::International);
    }

    #[test]
    fn test_indicator_substring() {
        assert_eq!(
            classifier().classify_segment("当地时间23日，巴黎举行游行。"),
            Category::International
        );
    }

    #[test]
    fn test_neither_defaults_to_domestic() {
        assert_eq!(
            classifier().classify_segment("秋收进度过半，粮食生产形势良好。"),
            Category::Domestic
        );
    }

    #[test]
    fn test_every_segment_lands_in_exactly_one_group() {
        let input = segments(&[
            "国务院召开常务会议。",
            "日本和韩国举行贸易谈判。",
            "秋收进度过半。",
            "当地时间23日，联合国安理会召开会议。",
        ]);

        let result = classifier().classify(&input);
        assert_eq!(result.len(), input.len());
        for segment in &input {
            let in_domestic = result.domestic.contains(segment);
            let in_international = result.international.contains(segment);
            assert!(in_domestic ^ in_international);
        }
    }

    #[test]
    fn test_overridden_vocabulary() {
        let vocabulary = Vocabulary {
            international_keywords: vec!["奥运".to_string()],
            ..Vocabulary::default()
        };
        let c = Classifier::new(&vocabulary).unwrap();
        assert_eq!(c.classify_segment("奥运圣火传递开始。"), Category::International);
        assert_eq!(classifier().classify_segment("奥运圣火传递开始。"), Category::Domestic);
    }

    #[test]
    fn test_empty_keyword_tables_are_rejected() {
        let vocabulary = Vocabulary {
            domestic_keywords: Vec::new(),
            international_keywords: Vec::new(),
            ..Vocabulary::default()
        };
        assert!(matches!(
            Classifier::new(&vocabulary),
            Err(ConfigError::EmptyTable { .. })
        ));

        let vocabulary = Vocabulary {
            foreign_locations: vec![String::new()],
            ..Vocabulary::default()
        };
        assert!(matches!(
            Classifier::new(&vocabulary),
            Err(ConfigError::EmptyTable { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(classifier().classify(&[]).is_empty());
    }
}
