use std::collections::HashSet;

use super::profile::ProfessionalProfile;
use crate::shared::UserId;

/// 信息流查询条件
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    /// 只显示收藏的档案
    pub favorites_only: bool,
    /// AI 分诊建议的职业；匹配的档案排在前面
    pub suggested_profession: Option<String>,
}

impl FeedQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn favorites() -> Self {
        Self {
            favorites_only: true,
            ..Self::default()
        }
    }

    pub fn with_suggested_profession(mut self, profession: impl Into<String>) -> Self {
        self.suggested_profession = Some(profession.into());
        self
    }

    /// 过滤并排序
    ///
    /// 排序是稳定的：匹配组与非匹配组内部都保持原有顺序
    pub fn apply(
        &self,
        profiles: Vec<ProfessionalProfile>,
        favorites: &HashSet<UserId>,
    ) -> Vec<ProfessionalProfile> {
        let mut feed: Vec<ProfessionalProfile> = if self.favorites_only {
            profiles
                .into_iter()
                .filter(|p| favorites.contains(&p.id))
                .collect()
        } else {
            profiles
        };

        if let Some(profession) = &self.suggested_profession {
            feed.sort_by_key(|p| !p.matches_profession(profession));
        }

        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> Vec<ProfessionalProfile> {
        vec![
            ProfessionalProfile::new("1", "A", "Médico"),
            ProfessionalProfile::new("2", "B", "Encanador"),
            ProfessionalProfile::new("3", "C", "Eletricista"),
            ProfessionalProfile::new("4", "D", "Encanador Industrial"),
        ]
    }

    fn ids(feed: &[ProfessionalProfile]) -> Vec<&str> {
        feed.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_suggested_profession_first_stable() {
        let feed = FeedQuery::all()
            .with_suggested_profession("encanador")
            .apply(profiles(), &HashSet::new());

        assert_eq!(ids(&feed), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_favorites_only() {
        let favorites: HashSet<UserId> = ["3", "1"].into_iter().map(UserId::from).collect();
        let feed = FeedQuery::favorites().apply(profiles(), &favorites);

        assert_eq!(ids(&feed), vec!["1", "3"]);
    }

    #[test]
    fn test_empty_suggestion_keeps_order() {
        // 空字符串被所有职业包含
        let feed = FeedQuery::all()
            .with_suggested_profession("")
            .apply(profiles(), &HashSet::new());

        assert_eq!(ids(&feed), vec!["1", "2", "3", "4"]);
    }
}
