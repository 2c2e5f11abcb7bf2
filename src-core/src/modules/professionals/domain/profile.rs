use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// 可预约状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Imediata,
    Agendamento,
    #[serde(rename = "Indisponível", alias = "Indisponivel")]
    Indisponivel,
}

/// 职业档案
///
/// id 通常与发布者的身份 ID 相同
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalProfile {
    pub id: UserId,
    pub name: String,
    pub profession: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// 计价单位，如 "hora"、"consulta"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl ProfessionalProfile {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        profession: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profession: profession.into(),
            description: String::new(),
            location: String::new(),
            avatar: String::new(),
            verified: false,
            whatsapp: None,
            video_url: None,
            min_price: None,
            price_rate: None,
            experience: None,
            availability: None,
            lat: None,
            lng: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    pub fn with_whatsapp(mut self, whatsapp: impl Into<String>) -> Self {
        self.whatsapp = Some(whatsapp.into());
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_price(mut self, min_price: f64, rate: impl Into<String>) -> Self {
        self.min_price = Some(min_price);
        self.price_rate = Some(rate.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// 职业与给定职业互相包含（忽略大小写）
    pub fn matches_profession(&self, profession: &str) -> bool {
        let own = self.profession.to_lowercase();
        let target = profession.to_lowercase();
        own.contains(&target) || target.contains(&own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_profession_either_way() {
        let profile = ProfessionalProfile::new("1", "Ana", "Psicóloga");

        assert!(profile.matches_profession("psicóloga"));
        assert!(profile.matches_profession("Psicóloga clínica"));
        assert!(!profile.matches_profession("Encanador"));
        assert!(!profile.matches_profession("Psicólogo"));
    }

    #[test]
    fn test_serde_layout() {
        let profile = ProfessionalProfile::new("106", "Marcos", "Encanador")
            .with_price(120.0, "hora")
            .with_availability(Availability::Indisponivel);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], "106");
        assert_eq!(json["minPrice"], 120.0);
        assert_eq!(json["priceRate"], "hora");
        assert_eq!(json["availability"], "Indisponível");
        assert!(json.get("videoUrl").is_none());

        let back: ProfessionalProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_deserialize_minimal() {
        let profile: ProfessionalProfile =
            serde_json::from_str(r#"{"id":"9","name":"Zé","profession":"Pedreiro"}"#).unwrap();
        assert!(!profile.verified);
        assert!(profile.availability.is_none());
    }
}
