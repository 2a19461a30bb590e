//! 词表配置
//!
//! 所有正则和关键词表都集中在 `Vocabulary` 中，构造各处理阶段时传入，
//! 不存在进程级可变状态。测试可以构造覆盖了部分词表的独立实例。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const BOILERPLATE_PATTERNS: &[&str] = &[
    r"^今天是\d{4}年\d{1,2}月\d{1,2}日.*?$",
    r"^各位观众.*?$",
    r"^(广告之后|天气预报|稍后回来|下面请看|感谢收看).*?$",
    r"^现在播送.+?简历.*$",
    r"^现在为您播送.+?公报.*$",
    r"^以下是我们刚刚收到的消息.*$",
    r"^接下来关注.+?$",
    r"^下面来看.+?$",
    r"^现在是.+?新闻.*$",
    r"^\d+时\d+分.*$",
    r"^现在时间是.*$",
    r"^央视网消息.*$",
    r"^据新华社消息.*$",
];

const BOUNDARY_PATTERNS: &[&str] = &[
    // 过渡语
    r"(?:接下来|下面|稍后|之后).*?(?:关注|来看|连线|播出)",
    // 中文序号
    r"^\s*[一二三四五六七八九十]、",
    // 出版预告、新闻来源
    r"^(?:明天|今天|据新华社|央视网).*?出版",
    // 高层活动
    r"^(?:国务院总理|国家副主席|中共中央政治局常委|全国人大常委会).*?出席",
    // 国际新闻时间标识
    r"^(?:当地时间|北京时间).*?，",
    // 数字序号
    r"^\s*[\d\.]+、",
    // 数字标识，如 "1: 2:"
    r"^\s*\d+[:：]\s*\d*\s*",
    // 国际地名和组织开头
    r"^(?:以色列|美国|俄罗斯|日本|韩国|英国|法国|德国|意大利|加拿大|澳大利亚|巴西|印度|埃及|南非|墨西哥|马来西亚|加沙|联合国|东盟|欧盟)",
];

const INTERNATIONAL_START_PATTERN: &str = r"^下面.*?国际";

const NUMERIC_MARKER_PATTERN: &str = r"(?:[一二三四五六七八九十]+|[1-9]\d*)[:：]\s*";

const LOCATIONS: &[&str] = &[
    "北京", "上海", "天津", "重庆", "河北", "山西", "辽宁", "吉林", "黑龙江", "江苏",
    "浙江", "安徽", "福建", "江西", "山东", "河南", "湖北", "湖南", "广东", "海南",
    "四川", "贵州", "云南", "陕西", "甘肃", "青海", "台湾", "内蒙古", "广西", "西藏",
    "宁夏", "新疆", "香港", "澳门", "美国", "俄罗斯", "日本", "韩国", "英国", "法国",
    "德国", "意大利", "加拿大", "澳大利亚", "巴西", "印度", "埃及", "南非", "墨西哥",
    "马来西亚", "芬兰", "加沙", "以色列",
];

const FOREIGN_LOCATIONS: &[&str] = &[
    "美国", "俄罗斯", "日本", "韩国", "英国", "法国", "德国", "意大利", "加拿大",
    "澳大利亚", "巴西", "印度", "埃及", "南非", "墨西哥", "马来西亚", "以色列", "加沙",
    "联合国", "东盟", "欧盟", "芬兰",
];

const ORGANIZATION_KEYWORDS: &[&str] = &[
    "政府", "党委", "委员会", "公司", "协会", "大学", "研究所", "银行", "集团", "组织",
    "中央委员会", "中央政治局", "国务院", "全国人大", "全国政协", "国防部", "外交部",
    "发改委", "教育部", "科技部", "工信部", "财政部", "人社部", "商务部", "农业农村部",
    "卫健委", "人民银行", "国资委", "税务总局", "市场监管总局", "证监会", "银保监会",
    "联合国", "东盟", "欧盟", "非盟", "北约", "世贸组织", "世卫组织",
];

const PERSON_TITLES: &[&str] = &[
    "总书记", "主席", "总理", "委员长", "部长", "省长", "市长", "书记", "代表", "委员",
    "总统", "首相",
];

const DOMESTIC_KEYWORDS: &[&str] = &[
    "中共中央", "国务院", "全国人大", "全国政协", "总书记", "主席", "总理", "十四五",
    "十五五", "规划", "建议", "党中央", "中央政治局", "思想", "全国人大常委会",
    "中央书记处", "中央军委", "人大常委", "政协", "中央纪委",
];

const DOMESTIC_PERSON_KEYWORDS: &[&str] = &[
    "总书记", "主席", "总理", "委员长", "部长", "省长", "市长", "书记", "代表", "委员",
    "中央政治局", "国务院", "全国人大", "全国政协",
];

const INTERNATIONAL_KEYWORDS: &[&str] = &[
    "国际", "外交", "合作", "联合国", "峰会", "领导人会议", "大使馆", "领事馆",
    "外交部发言人", "外长", "大使", "领事", "国外", "海外", "境外", "外国", "东盟",
    "欧盟", "非盟", "北约", "世贸组织", "世卫组织", "国际货币基金组织", "世界银行",
    "联合国安理会", "G20", "G7", "APEC", "金砖国家", "会见",
];

const INTERNATIONAL_PERSON_KEYWORDS: &[&str] = &[
    "总统", "首相", "总理", "外长", "大使", "联合国秘书长", "欧盟", "北约", "世卫组织",
];

const INTERNATIONAL_INDICATORS: &[&str] = &["当地时间", " foreign ", " international "];

const SUMMARY_KEYWORDS: &[&str] = &[
    "经济", "政治", "国际", "国内", "发展", "建设", "会议", "政策", "合作", "科技",
];

const SUMMARY_INTERNATIONAL_KEYWORDS: &[&str] = &[
    "国际", "外交", "合作", "美国", "俄罗斯", "日本", "韩国", "欧盟", "联合国",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 处理流程使用的全部词表
///
/// TOML 覆盖文件中缺省的字段沿用默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// 固定串词（以 `^` 锚定，命中即丢弃）
    pub boilerplate_patterns: Vec<String>,
    /// 新闻分割点（行内任意位置命中）
    pub boundary_patterns: Vec<String>,
    /// 国际新闻板块起始标识
    pub international_start_pattern: String,
    /// 段内数字标识
    pub numeric_marker_pattern: String,
    /// 地名词典
    pub locations: Vec<String>,
    /// 国外地名（含国际组织）
    pub foreign_locations: Vec<String>,
    pub organization_keywords: Vec<String>,
    /// 职务称谓，用于截取人物提及
    pub person_titles: Vec<String>,
    pub domestic_keywords: Vec<String>,
    pub domestic_person_keywords: Vec<String>,
    pub international_keywords: Vec<String>,
    pub international_person_keywords: Vec<String>,
    pub international_indicators: Vec<String>,
    /// 启发式摘要的关键词候选
    pub summary_keywords: Vec<String>,
    /// 启发式摘要判定国际类别的关键词
    pub summary_international_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            boilerplate_patterns: owned(BOILERPLATE_PATTERNS),
            boundary_patterns: owned(BOUNDARY_PATTERNS),
            international_start_pattern: INTERNATIONAL_START_PATTERN.to_string(),
            numeric_marker_pattern: NUMERIC_MARKER_PATTERN.to_string(),
            locations: owned(LOCATIONS),
            foreign_locations: owned(FOREIGN_LOCATIONS),
            organization_keywords: owned(ORGANIZATION_KEYWORDS),
            person_titles: owned(PERSON_TITLES),
            domestic_keywords: owned(DOMESTIC_KEYWORDS),
            domestic_person_keywords: owned(DOMESTIC_PERSON_KEYWORDS),
            international_keywords: owned(INTERNATIONAL_KEYWORDS),
            international_person_keywords: owned(INTERNATIONAL_PERSON_KEYWORDS),
            international_indicators: owned(INTERNATIONAL_INDICATORS),
            summary_keywords: owned(SUMMARY_KEYWORDS),
            summary_international_keywords: owned(SUMMARY_INTERNATIONAL_KEYWORDS),
        }
    }
}

impl Vocabulary {
    /// 检查所有词表非空
    ///
    /// 正则的合法性由各处理阶段在构造时检查
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables: [(&str, &[String]); 14] = [
            ("boilerplate_patterns", self.boilerplate_patterns.as_slice()),
            ("boundary_patterns", self.boundary_patterns.as_slice()),
            ("locations", self.locations.as_slice()),
            ("foreign_locations", self.foreign_locations.as_slice()),
            ("organization_keywords", self.organization_keywords.as_slice()),
            ("person_titles", self.person_titles.as_slice()),
            ("domestic_keywords", self.domestic_keywords.as_slice()),
            ("domestic_person_keywords", self.domestic_person_keywords.as_slice()),
            ("international_keywords", self.international_keywords.as_slice()),
            ("international_person_keywords", self.international_person_keywords.as_slice()),
            ("international_indicators", self.international_indicators.as_slice()),
            ("summary_keywords", self.summary_keywords.as_slice()),
            ("summary_international_keywords", self.summary_international_keywords.as_slice()),
            (
                "international_start_pattern",
                std::slice::from_ref(&self.international_start_pattern),
            ),
        ];

        for (name, table) in tables {
            if table.iter().all(|entry| entry.is_empty()) {
                return Err(ConfigError::empty_table(name));
            }
        }

        if self.numeric_marker_pattern.is_empty() {
            return Err(ConfigError::empty_table("numeric_marker_pattern"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_valid() {
        assert!(Vocabulary::default().validate().is_ok());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let vocabulary = Vocabulary {
            locations: Vec::new(),
            ..Vocabulary::default()
        };
        let err = vocabulary.validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTable { ref table } if table == "locations"));
    }

    #[test]
    fn test_blank_pattern_is_rejected() {
        let vocabulary = Vocabulary {
            international_start_pattern: String::new(),
            ..Vocabulary::default()
        };
        assert!(vocabulary.validate().is_err());
    }

    #[test]
    fn test_foreign_locations_are_in_gazetteer_or_orgs() {
        let vocabulary = Vocabulary::default();
        for loc in &vocabulary.foreign_locations {
            assert!(
                vocabulary.locations.contains(loc) || vocabulary.organization_keywords.contains(loc),
                "{} 不在地名或组织词表中",
                loc
            );
        }
    }
}
